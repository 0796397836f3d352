#![warn(clippy::all, rust_2018_idioms)]

pub mod app;
pub mod chart;
pub mod components;
pub mod debounce;
pub mod storage;
pub mod weights;
pub use app::{FitPlannerApp, APP_NAME};
