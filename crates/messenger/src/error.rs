use thiserror::Error;

#[derive(Debug, Error)]
pub enum Error {
    /// The platform answered with a non-success status.
    #[error("send rejected ({status}): {body}")]
    Rejected { status: u16, body: String },

    /// The request never got an answer (connect failure, timeout, ...).
    #[error(transparent)]
    Transport(#[from] reqwest::Error),

    #[error("invalid messenger input: {message}")]
    InvalidInput { message: String },
}

impl Error {
    #[must_use]
    pub fn invalid_input(message: impl std::fmt::Display) -> Self {
        Self::InvalidInput {
            message: message.to_string(),
        }
    }
}

pub type Result<T> = std::result::Result<T, Error>;
