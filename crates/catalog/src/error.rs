use thiserror::Error;

#[derive(Debug, Error)]
pub enum Error {
    /// The backend could not be reached, timed out, or answered with a
    /// non-success status.
    #[error("catalog unavailable: {message}")]
    Unavailable { message: String },

    /// The backend answered but the body is not a list of course records.
    #[error("malformed catalog response: {0}")]
    Decode(#[from] serde_json::Error),

    #[error("invalid catalog configuration: {message}")]
    InvalidConfig { message: String },
}

impl Error {
    #[must_use]
    pub fn unavailable(message: impl std::fmt::Display) -> Self {
        Self::Unavailable {
            message: message.to_string(),
        }
    }

    #[must_use]
    pub fn invalid_config(message: impl std::fmt::Display) -> Self {
        Self::InvalidConfig {
            message: message.to_string(),
        }
    }
}

impl From<reqwest::Error> for Error {
    fn from(e: reqwest::Error) -> Self {
        Self::unavailable(e)
    }
}

pub type Result<T> = std::result::Result<T, Error>;
