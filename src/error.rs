//! Error types for habitr

use std::path::PathBuf;
use thiserror::Error;

/// Main error type for the habitr application
#[derive(Debug, Error)]
pub enum HabitrError {
    #[error("Not a habitr directory: {0}")]
    NotHabitrDirectory(PathBuf),

    #[error("Invalid periodicity: '{0}'")]
    InvalidPeriodicity(String),

    #[error("Invalid timestamp: '{0}'")]
    InvalidTimestamp(String),

    #[error("Habit not found: {0}")]
    HabitNotFound(String),

    #[error("Missing required field: {0}")]
    MissingField(&'static str),

    #[error("Invalid date format: '{0}'")]
    InvalidDateFormat(String),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Database error: {0}")]
    Database(#[from] rusqlite::Error),

    #[error("Configuration error: {0}")]
    Config(String),

    #[error("TOML deserialization error: {0}")]
    TomlDeserialize(#[from] toml::de::Error),

    #[error("TOML serialization error: {0}")]
    TomlSerialize(#[from] toml::ser::Error),
}

impl HabitrError {
    /// Get the exit code for this error
    pub fn exit_code(&self) -> i32 {
        match self {
            HabitrError::NotHabitrDirectory(_) => 2,
            HabitrError::InvalidTimestamp(_) => 3,
            HabitrError::HabitNotFound(_) => 4,
            _ => 1,
        }
    }

    /// Get a user-friendly error message with suggestions
    pub fn display_with_suggestions(&self) -> String {
        match self {
            HabitrError::NotHabitrDirectory(path) => {
                format!(
                    "Not a habitr directory: {}\n\n\
                    Suggestions:\n\
                    • Run 'habitr init' in this directory to start tracking habits\n\
                    • Navigate to an existing habitr directory\n\
                    • Set HABITR_ROOT environment variable to your tracker path",
                    path.display()
                )
            }
            HabitrError::InvalidPeriodicity(value) => {
                format!(
                    "Invalid periodicity: '{}'\n\n\
                    Valid periodicities: daily, weekly\n\
                    Example: habitr add exercise --periodicity weekly",
                    value
                )
            }
            HabitrError::InvalidTimestamp(value) => {
                format!(
                    "Invalid timestamp: '{}'\n\n\
                    Expected an ISO-8601 date or date-time:\n\
                    • 2025-01-17\n\
                    • 2025-01-17T08:30:00\n\n\
                    Examples:\n\
                    habitr done exercise --at 2025-01-17\n\
                    habitr broken --as-of 2025-01-17T23:59:00",
                    value
                )
            }
            HabitrError::HabitNotFound(name) => {
                format!(
                    "Habit not found: '{}'\n\n\
                    Suggestions:\n\
                    • Check the habit name spelling\n\
                    • Use 'habitr list' to see tracked habits\n\
                    • Create it first: habitr add '{}'",
                    name, name
                )
            }
            _ => self.to_string(),
        }
    }
}

/// Result type using HabitrError
pub type Result<T> = std::result::Result<T, HabitrError>;
