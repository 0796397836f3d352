mod state;
mod ui;

pub use state::{Quote, QuoteRotator, QUOTES};
