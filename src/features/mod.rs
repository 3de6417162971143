pub mod exercises;
pub mod filemeta;
pub mod timestamp;
pub mod users;
