mod exercise_dto;

pub use exercise_dto::{
    CreateExerciseDto, ExerciseLogDto, ExerciseLogQuery, ExerciseResponseDto, LogEntryDto,
};
