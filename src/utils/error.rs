use thiserror::Error;

#[derive(Error, Debug)]
pub enum EngineError {
    #[error("Storage error: {message}")]
    StorageError { message: String },

    #[error("Date parse error: cannot read {value:?} as a calendar date")]
    DateParseError { value: String },

    #[error("Validation error: {message}")]
    ValidationError { message: String },

    #[error("Configuration error: {message}")]
    ConfigError { message: String },

    #[error("Serialization error: {0}")]
    SerializationError(#[from] serde_json::Error),
}

// File-level failures all surface as the storage bucket; callers never retry.
impl From<std::io::Error> for EngineError {
    fn from(e: std::io::Error) -> Self {
        EngineError::StorageError {
            message: e.to_string(),
        }
    }
}

impl From<csv::Error> for EngineError {
    fn from(e: csv::Error) -> Self {
        EngineError::StorageError {
            message: e.to_string(),
        }
    }
}

pub type Result<T> = std::result::Result<T, EngineError>;
