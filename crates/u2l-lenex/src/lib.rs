//! Lenex meet document handling: decoding, catalog reading and entry
//! merging.

mod decode;
mod error;
mod merge;
mod reader;

pub use decode::decode_lenex;
pub use error::{LenexError, Result};
pub use merge::merge_entries;
pub use reader::read_meet;
