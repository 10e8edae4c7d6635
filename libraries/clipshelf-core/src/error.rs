/// Core error types for Clipshelf
use crate::types::VideoId;
use thiserror::Error;

/// Result type alias using `CoreError`
pub type Result<T> = std::result::Result<T, CoreError>;

/// Core error type for Clipshelf
#[derive(Error, Debug)]
pub enum CoreError {
    /// Two videos share the same identifier
    #[error("Duplicate video id: {0}")]
    DuplicateVideo(VideoId),

    /// A video record failed validation
    #[error("Invalid video: {0}")]
    InvalidVideo(String),

    /// A catalog file line could not be parsed
    #[error("Parse error on line {line}: {message}")]
    Parse {
        /// 1-based line (or record) number
        line: usize,
        /// What was wrong with it
        message: String,
    },

    /// I/O errors
    #[error(transparent)]
    Io(#[from] std::io::Error),

    /// Serialization errors
    #[error(transparent)]
    Serialization(#[from] serde_json::Error),
}

impl CoreError {
    /// Create a parse error
    pub fn parse(line: usize, message: impl Into<String>) -> Self {
        Self::Parse {
            line,
            message: message.into(),
        }
    }

    /// Create an invalid video error
    pub fn invalid_video(msg: impl Into<String>) -> Self {
        Self::InvalidVideo(msg.into())
    }
}
