mod timestamp_handler;

pub use timestamp_handler::*;
