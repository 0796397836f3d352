pub mod bmi;
pub mod exercises;
pub mod meal_tracker;
pub mod quotes;
pub mod settings;
pub mod weight_chart;
