//! Weight history chart: turns a [`SampleSeries`](crate::weights::SampleSeries)
//! and surface geometry into a list of drawing commands.

mod command;
mod render;

pub use command::{ChartFrame, DrawCommand, LinearGradient};
pub use render::{render, render_with_style, ChartStyle, PlotArea, ValueRange, MARGIN};
