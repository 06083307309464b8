use thiserror::Error;

#[derive(Error, Debug)]
pub enum QuoteError {
    #[error("{0}")]
    Validation(String),

    #[error("Clipboard error: {0}")]
    Clipboard(String),

    #[error("Corpus error: {0}")]
    Corpus(String),

    #[error("Config error: {0}")]
    Config(String),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),
}

pub type Result<T> = std::result::Result<T, QuoteError>;
