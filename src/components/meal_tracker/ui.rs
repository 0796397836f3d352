use super::state::MealTracker;
use crate::storage::KeyValueStore;

impl MealTracker {
    pub fn show(&mut self, ui: &mut egui::Ui, store: &mut dyn KeyValueStore) {
        self.sync_day(store, chrono::Utc::now().date_naive());

        ui.heading("Daily Calories");

        ui.horizontal(|ui| {
            ui.label("Meal:");
            ui.add(egui::TextEdit::singleline(&mut self.name).desired_width(140.0));
            ui.label("kcal:");
            ui.add(egui::TextEdit::singleline(&mut self.cals).desired_width(60.0));
            if ui.button("Add Meal").clicked() {
                let time = chrono::Local::now().format("%H:%M:%S").to_string();
                self.submit(store, time);
            }
        });

        if let Some(message) = &self.message {
            ui.colored_label(ui.visuals().warn_fg_color, message);
        }

        ui.horizontal(|ui| {
            ui.label(format!("Consumed: {} kcal of", self.total()));
            match &mut self.goal_edit {
                Some(raw) => {
                    let response = ui.add(egui::TextEdit::singleline(raw).desired_width(70.0));
                    if ui.input(|i| i.key_pressed(egui::Key::Escape)) {
                        self.goal_edit = None;
                    } else if response.lost_focus() && ui.input(|i| i.key_pressed(egui::Key::Enter)) {
                        self.commit_goal(store);
                    }
                }
                None => {
                    if ui.link(format!("{} kcal", self.goal)).clicked() {
                        self.goal_edit = Some(self.goal.to_string());
                    }
                }
            }
        });

        ui.add(egui::ProgressBar::new(self.progress() as f32 / 100.0).show_percentage());

        let mut to_remove = None;
        for (i, meal) in self.meals.iter().enumerate() {
            ui.horizontal(|ui| {
                ui.vertical(|ui| {
                    ui.strong(&meal.name);
                    ui.small(&meal.time);
                });
                ui.label(format!("{} kcal", meal.cals));
                if ui.small_button("❌").on_hover_text("Remove meal").clicked() {
                    to_remove = Some(i);
                }
            });
        }

        if let Some(idx) = to_remove {
            self.remove(store, idx);
        }
    }
}
