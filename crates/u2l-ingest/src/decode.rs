//! Byte decoding for uploaded registration files.
//!
//! UNI_p files predate UTF-8 club software; the two encodings seen in the
//! wild are UTF-8 and Windows-1250. The choice is caller-selected, never
//! auto-detected, so a wrong pick can be corrected by re-decoding the same
//! bytes.

use encoding_rs::{UTF_8, WINDOWS_1250};

/// Supported registration-file encodings.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum TextEncoding {
    #[default]
    Utf8,
    Win1250,
}

/// Decode registration bytes with the selected encoding. Undecodable bytes
/// become replacement characters; the parser reports the damage per field
/// rather than failing the file.
pub fn decode_registration(bytes: &[u8], encoding: TextEncoding) -> String {
    let encoding = match encoding {
        TextEncoding::Utf8 => UTF_8,
        TextEncoding::Win1250 => WINDOWS_1250,
    };
    let (text, _, _) = encoding.decode(bytes);
    text.into_owned()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn utf8_passthrough() {
        let text = decode_registration("1,100,FR,Kovács,Ádám,M,1998".as_bytes(), TextEncoding::Utf8);
        assert!(text.contains("Kovács"));
    }

    #[test]
    fn win1250_accents() {
        // "Kovács" in Windows-1250
        let bytes = [b'K', b'o', b'v', 0xE1, b'c', b's'];
        assert_eq!(decode_registration(&bytes, TextEncoding::Win1250), "Kovács");
    }
}
