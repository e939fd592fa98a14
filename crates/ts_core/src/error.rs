use thiserror::Error;

#[derive(Error, Debug)]
pub enum Error {
    #[error("Please enter some text to summarize")]
    EmptyInput,

    #[error("Invalid summary lengths: min_length {min} must be positive and not exceed max_length {max}")]
    InvalidLengths { min: u32, max: u32 },

    #[error("Model unavailable: {0}")]
    ModelUnavailable(String),

    #[error("Inference error: {0}")]
    Inference(String),

    #[error("Configuration error: {0}")]
    Config(String),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),

    #[error("HTTP error: {0}")]
    Http(#[from] reqwest::Error),

    #[error("External error: {0}")]
    External(#[from] anyhow::Error),
}

impl Error {
    /// Errors that originate from the caller rather than the model service.
    pub fn is_user_error(&self) -> bool {
        matches!(self, Error::EmptyInput | Error::InvalidLengths { .. })
    }
}

pub type Result<T> = std::result::Result<T, Error>;
