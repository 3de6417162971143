mod filemeta_handler;

pub use filemeta_handler::*;
