//! Error types for eden

use thiserror::Error;

/// Main error type for eden
#[derive(Debug, Error)]
pub enum EdenError {
    #[error("record already exists")]
    DuplicateRecord,

    #[error("row does not exist")]
    NotExists,

    #[error("update failed")]
    UpdateFailed,

    #[error("delete failed")]
    DeleteFailed,

    #[error("Invalid argument: {0}")]
    InvalidArgument(String),

    #[error("Invalid timestamp: {0}")]
    InvalidTimestamp(String),

    #[error("Storage error: {0}")]
    Storage(#[from] rusqlite::Error),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Could not determine the user configuration directory")]
    ConfigDirUnavailable,

    #[error("Configuration error: {0}")]
    Config(String),

    #[error("TOML deserialization error: {0}")]
    TomlDeserialize(#[from] toml::de::Error),

    #[error("TOML serialization error: {0}")]
    TomlSerialize(#[from] toml::ser::Error),
}

impl EdenError {
    /// Get the exit code for this error
    pub fn exit_code(&self) -> i32 {
        match self {
            EdenError::NotExists => 2,
            EdenError::InvalidArgument(_) | EdenError::InvalidTimestamp(_) => 3,
            EdenError::DuplicateRecord => 4,
            _ => 1,
        }
    }

    /// Get a user-friendly error message with suggestions
    pub fn display_with_suggestions(&self) -> String {
        match self {
            EdenError::NotExists => "No entry with that id.\n\n\
                Suggestions:\n\
                • Run 'eden list' to see existing entries and their ids"
                .to_string(),
            EdenError::DuplicateRecord => "A record with that name already exists.\n\n\
                Suggestions:\n\
                • Run 'eden journal list' to see existing journals\n\
                • Pick a different journal name"
                .to_string(),
            EdenError::InvalidTimestamp(value) => {
                format!(
                    "Invalid timestamp: '{}'\n\n\
                    Expected an RFC3339 timestamp\n\
                    Example: eden add --at 2021-04-10T15:00:00Z 'Smash!'",
                    value
                )
            }
            EdenError::ConfigDirUnavailable => format!(
                "{}\n\n\
                Suggestions:\n\
                • Pass a directory explicitly: eden --config-dir <PATH> ...",
                self
            ),
            _ => self.to_string(),
        }
    }
}

/// Result type using EdenError
pub type Result<T> = std::result::Result<T, EdenError>;
