mod circular_buffer;
mod sample;
mod store;

pub use circular_buffer::CircularBuffer;
pub use sample::{SampleSeries, WeightSample, MAX_SAMPLES};
pub use store::{append, append_at, clear, load, parse_weight, WeightError, WEIGHTS_KEY};
