mod timestamp_service;

pub use timestamp_service::{current, resolve};
