use thiserror::Error;

#[derive(Debug, Error)]
pub enum IngestError {
    #[error("registration file contains no non-blank lines")]
    EmptyFile,
}

pub type Result<T> = std::result::Result<T, IngestError>;
