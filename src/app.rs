use std::time::Duration;

use crate::components::bmi::BmiCalculator;
use crate::components::exercises::ExerciseCards;
use crate::components::meal_tracker::MealTracker;
use crate::components::quotes::QuoteRotator;
use crate::components::settings::{show_settings_window, Settings};
use crate::components::weight_chart::WeightChart;
use crate::storage::{self, KeyValueStore};

pub const APP_NAME: &str = "FitPlanner";

pub struct FitPlannerApp {
    store: Box<dyn KeyValueStore>,
    settings: Settings,
    bmi: BmiCalculator,
    meals: MealTracker,
    weight_chart: WeightChart,
    exercises: ExerciseCards,
    quotes: QuoteRotator,
}

impl FitPlannerApp {
    /// Called once before the first frame.
    pub fn new(cc: &eframe::CreationContext<'_>) -> Self {
        // Settings come from eframe's own storage; widget data lives in our store.
        let settings = cc
            .storage
            .and_then(|storage| eframe::get_value(storage, eframe::APP_KEY))
            .unwrap_or_default();

        Self::with_store(storage::open_default(APP_NAME), settings)
    }

    pub fn with_store(store: Box<dyn KeyValueStore>, settings: Settings) -> Self {
        Self {
            weight_chart: WeightChart::new(settings.resize_debounce()),
            store,
            settings,
            bmi: BmiCalculator::default(),
            meals: MealTracker::default(),
            exercises: ExerciseCards::default(),
            quotes: QuoteRotator::default(),
        }
    }
}

impl eframe::App for FitPlannerApp {
    /// Called by the frame work to save state before shutdown.
    fn save(&mut self, storage: &mut dyn eframe::Storage) {
        eframe::set_value(storage, eframe::APP_KEY, &self.settings);
    }

    /// Called each time the UI needs repainting, which may be many times per second.
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        self.settings.apply(ctx);
        let now = Duration::from_secs_f64(ctx.input(|i| i.time));

        self.weight_chart.set_resize_quiet(self.settings.resize_debounce());
        self.weight_chart
            .poll_store(self.store.as_mut(), now, self.settings.store_poll_interval());
        self.quotes.tick(now);

        egui::TopBottomPanel::top("top_panel").show(ctx, |ui| {
            egui::menu::bar(ui, |ui| {
                let is_web = cfg!(target_arch = "wasm32");
                if !is_web {
                    ui.menu_button("File", |ui| {
                        if ui.button("Quit").clicked() {
                            ctx.send_viewport_cmd(egui::ViewportCommand::Close);
                        }
                    });
                    ui.add_space(16.0);
                }

                egui::widgets::global_theme_preference_buttons(ui);

                ui.add_space(16.0);
                if ui.button("⚙").clicked() {
                    self.settings.show();
                }
            });
        });

        show_settings_window(ctx, &mut self.settings);

        egui::CentralPanel::default().show(ctx, |ui| {
            egui::ScrollArea::vertical().show(ui, |ui| {
                ui.columns(2, |cols| {
                    cols[0].group(|ui| self.bmi.show(ui));
                    cols[1].group(|ui| self.meals.show(ui, self.store.as_mut()));
                });
                ui.add_space(8.0);

                ui.group(|ui| self.weight_chart.show(ui, self.store.as_mut(), now));
                ui.add_space(8.0);

                ui.group(|ui| self.exercises.show(ui));
                ui.add_space(8.0);

                ui.group(|ui| self.quotes.show_panel(ui));
            });
        });

        let wake = [
            Some(self.settings.store_poll_interval()),
            self.weight_chart.repaint_after(now),
            self.quotes.repaint_after(now),
        ]
        .into_iter()
        .flatten()
        .min();
        if let Some(after) = wake {
            ctx.request_repaint_after(after);
        }
    }
}
