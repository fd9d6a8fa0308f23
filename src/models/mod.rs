//! Core data types for the ten-day symptom window.

pub mod enums;
pub mod symptom;

pub use enums::{BannerKind, RecoveryTier, SeverityLevel, Symptom};
pub use symptom::{SymptomRecord, SymptomTable, SYMPTOM_COUNT, TRACKED_DAYS};

use thiserror::Error;

#[derive(Error, Debug, Clone, PartialEq)]
pub enum ModelError {
    #[error("Invalid enum value for {field}: {value}")]
    InvalidEnum { field: String, value: String },

    #[error("Expected {expected} daily records, got {actual}")]
    WrongDayCount { expected: usize, actual: usize },

    #[error("Record at position {position} has day {day}, expected {expected}")]
    DayOutOfOrder {
        position: usize,
        day: u8,
        expected: u8,
    },

    #[error("Score {score} for {symptom} on day {day} is outside 0..=3")]
    ScoreOutOfRange { day: u8, symptom: String, score: u8 },
}
