use super::state::QuoteRotator;

impl QuoteRotator {
    pub fn show_panel(&mut self, ui: &mut egui::Ui) {
        ui.heading("Motivation");

        let quote = self.current();
        ui.label(egui::RichText::new(format!("\"{}\"", quote.text)).italics().size(18.0));
        ui.label(format!("— {}", quote.author));

        ui.horizontal(|ui| {
            if ui.button("◀").clicked() {
                self.prev();
            }
            if ui.button("New Quote").clicked() {
                self.random();
            }
            if ui.button("▶").clicked() {
                self.next();
            }
        });
    }
}
