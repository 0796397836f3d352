mod state;
mod ui;

pub use state::{calculate_bmi, Bmi, BmiCalculator, BmiCategory, BmiError};
