mod exercise_handler;

pub use exercise_handler::*;
