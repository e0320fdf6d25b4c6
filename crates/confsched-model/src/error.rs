//! Error types for confsched-model operations.

use thiserror::Error;

/// Errors from the fallible entry points: feed parsing and argument parsing.
///
/// Formatting itself never fails; see [`crate::display`].
#[derive(Error, Debug)]
pub enum ConfschedError {
    /// The timetable feed was not valid JSON or did not match the item schema.
    #[error("Invalid timetable feed: {0}")]
    Json(#[from] serde_json::Error),

    #[error("Invalid timezone: {0}")]
    InvalidTimezone(String),

    #[error("Unknown conference day: {0}")]
    UnknownDay(String),
}

/// Convenience alias used throughout confsched-model.
pub type Result<T> = std::result::Result<T, ConfschedError>;
