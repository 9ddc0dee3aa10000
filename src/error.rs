use crate::parsing::error::ParsingError;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum RailosError {
    #[error("File {file}. Parsing error: {error}")]
    Parsing { error: ParsingError, file: String },
    #[error("Io error: {0}")]
    Io(#[from] std::io::Error),
    #[error("Cannot parse railway file '{0}', file does not exist.")]
    FileNotFound(String),
    #[error("No file has been parsed yet")]
    NothingParsed,
}

pub type RResult<T> = Result<T, RailosError>;
