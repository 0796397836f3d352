mod state;
mod ui;

pub use state::WeightChart;
pub use ui::paint_frame;
