//! Error types for week-engine operations.

use thiserror::Error;

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum WeekError {
    #[error("Invalid week convention: {0} (expected 1=Monday ..= 7=Sunday)")]
    InvalidConvention(u8),

    #[error("Invalid weekday: {0}")]
    InvalidWeekday(String),

    #[error("Invalid date: {0}")]
    InvalidDate(String),

    #[error("Invalid week key: {0}")]
    InvalidWeekKey(String),

    #[error("Invalid year: {0} is outside the supported calendar range")]
    InvalidYear(i32),
}

pub type Result<T> = std::result::Result<T, WeekError>;
