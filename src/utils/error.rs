use thiserror::Error;

#[derive(Error, Debug)]
pub enum SequenceError {
    #[error("Failed to write '{path}': {source}")]
    WriteError {
        path: String,
        #[source]
        source: std::io::Error,
    },

    #[error("Failed to read '{path}': {source}")]
    ReadError {
        path: String,
        #[source]
        source: std::io::Error,
    },

    #[error("IO error: {0}")]
    IoError(#[from] std::io::Error),

    #[error("Serialization error: {0}")]
    SerializationError(#[from] serde_json::Error),

    #[error("Configuration error: {message}")]
    ConfigError { message: String },

    #[error("Invalid value '{value}' for '{field}': {reason}")]
    InvalidConfigValueError {
        field: String,
        value: String,
        reason: String,
    },
}

impl SequenceError {
    pub fn recovery_suggestion(&self) -> &'static str {
        match self {
            SequenceError::WriteError { .. } => {
                "Check that the output directory exists and is writable"
            }
            SequenceError::ReadError { .. } => "Check that the file exists and is readable",
            SequenceError::IoError(_) => "Check the terminal or pipe the output is written to",
            SequenceError::SerializationError(_) => {
                "Make sure the file contains a JSON array of numbers"
            }
            SequenceError::ConfigError { .. } | SequenceError::InvalidConfigValueError { .. } => {
                "Fix the configuration file or command line flags"
            }
        }
    }
}

pub type Result<T> = std::result::Result<T, SequenceError>;
