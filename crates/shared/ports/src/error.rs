use thiserror::Error;

/// Errors raised by a lead source while fetching pipeline records
#[derive(Error, Debug)]
pub enum SourceError {
    #[error("Lead source unavailable: {0}")]
    Unavailable(String),

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Failed to decode records: {0}")]
    Decode(String),
}

pub type SourceResult<T> = std::result::Result<T, SourceError>;
