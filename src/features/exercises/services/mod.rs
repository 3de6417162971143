mod exercise_service;

pub use exercise_service::ExerciseService;
