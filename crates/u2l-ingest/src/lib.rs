//! UNI_p registration file ingestion: byte decoding and row parsing.

mod decode;
mod error;
mod parser;

pub use decode::{TextEncoding, decode_registration};
pub use error::{IngestError, Result};
pub use parser::{parse_registration, parse_row};
