mod ui;

pub use ui::{Exercise, ExerciseCards, EXERCISES};
