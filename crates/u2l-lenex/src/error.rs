use thiserror::Error;

#[derive(Debug, Error)]
pub enum LenexError {
    #[error("document is not well-formed XML: {0}")]
    Xml(#[from] quick_xml::Error),
    #[error("no MEET element found in document")]
    MissingMeet,
    #[error("output is not valid UTF-8: {0}")]
    Utf8(#[from] std::string::FromUtf8Error),
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}

pub type Result<T> = std::result::Result<T, LenexError>;
