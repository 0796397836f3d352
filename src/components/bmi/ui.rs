use super::state::BmiCalculator;

impl BmiCalculator {
    pub fn show(&mut self, ui: &mut egui::Ui) {
        ui.heading("BMI Calculator");

        let mut submitted = false;
        egui::Grid::new("bmi_inputs").num_columns(2).show(ui, |ui| {
            ui.label("Weight (kg):");
            let response = ui.text_edit_singleline(&mut self.weight);
            submitted |= response.lost_focus() && ui.input(|i| i.key_pressed(egui::Key::Enter));
            ui.end_row();

            ui.label("Height (cm):");
            let response = ui.text_edit_singleline(&mut self.height);
            submitted |= response.lost_focus() && ui.input(|i| i.key_pressed(egui::Key::Enter));
            ui.end_row();
        });

        if ui.button("Calculate").clicked() || submitted {
            self.calculate();
        }

        match &self.result {
            Some(Ok(bmi)) => {
                ui.horizontal(|ui| {
                    ui.label(egui::RichText::new(format!("{:.1}", bmi.value)).size(28.0).strong());
                    ui.label(bmi.category.label());
                });
            }
            Some(Err(_)) => {
                ui.horizontal(|ui| {
                    ui.label(egui::RichText::new("—").size(28.0));
                    ui.label("Please enter valid values");
                });
            }
            None => {}
        }
    }
}
