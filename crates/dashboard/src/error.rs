//! Dashboard errors

use revenueos_ports::SourceError;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum Error {
    #[error("Invalid configuration: {0}")]
    Config(String),

    #[error("Lead source error: {0}")]
    Source(#[from] SourceError),
}

pub type Result<T> = std::result::Result<T, Error>;
