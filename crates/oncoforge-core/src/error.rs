use thiserror::Error;

#[derive(Error, Debug)]
pub enum OncoForgeError {
    #[error("IO Error: {0}")]
    Io(#[from] std::io::Error),

    #[error("CSV Error: {0}")]
    Csv(#[from] csv::Error),

    #[error("JSON Parsing Error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("Invalid nucleotide '{found}' at position {position}")]
    InvalidSequence { position: usize, found: char },

    #[error("Configuration Error: {0}")]
    Config(String),

    #[error("Data Validation Error: {0}")]
    Validation(String),
}

pub type OfResult<T> = Result<T, OncoForgeError>;
