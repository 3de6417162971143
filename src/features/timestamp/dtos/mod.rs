mod timestamp_dto;

pub use timestamp_dto::{GreetingDto, InvalidDateDto, TimestampDto, TimestampResult};
