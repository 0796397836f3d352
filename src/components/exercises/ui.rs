use std::collections::HashSet;

pub struct Exercise {
    pub title: &'static str,
    pub description: &'static str,
    pub icon: &'static str,
}

pub const EXERCISES: &[Exercise] = &[
    Exercise {
        title: "Full Body Strength",
        description: "Compound lifts, 3 sets x 8-10. Focus: strength & hypertrophy.",
        icon: "🏋",
    },
    Exercise {
        title: "Cardio Blast",
        description: "20-30 min HIIT or steady-state cardio for endurance and burn.",
        icon: "🏃",
    },
    Exercise {
        title: "Core & Mobility",
        description: "Planks, leg raises, dynamic stretches. Mobility focus.",
        icon: "🤸",
    },
    Exercise {
        title: "Upper Body Push",
        description: "Push-ups, presses, shoulder work. Progressive overload.",
        icon: "💪",
    },
    Exercise {
        title: "Lower Body Power",
        description: "Squats, lunges, deadlifts. Build leg strength.",
        icon: "🦵",
    },
];

#[derive(Default)]
pub struct ExerciseCards {
    expanded: HashSet<usize>,
}

impl ExerciseCards {
    pub fn toggle(&mut self, idx: usize) {
        if !self.expanded.remove(&idx) {
            self.expanded.insert(idx);
        }
    }

    pub fn is_expanded(&self, idx: usize) -> bool {
        self.expanded.contains(&idx)
    }

    pub fn show(&mut self, ui: &mut egui::Ui) {
        ui.heading("Recommended Exercises");

        ui.horizontal_wrapped(|ui| {
            for (i, exercise) in EXERCISES.iter().enumerate() {
                let response = egui::Frame::group(ui.style())
                    .show(ui, |ui| {
                        ui.set_width(180.0);
                        ui.label(egui::RichText::new(exercise.icon).size(24.0));
                        ui.strong(exercise.title);
                        if self.is_expanded(i) {
                            ui.label(exercise.description);
                        }
                    })
                    .response
                    .interact(egui::Sense::click());
                if response.clicked() {
                    self.toggle(i);
                }
            }
        });
    }
}
