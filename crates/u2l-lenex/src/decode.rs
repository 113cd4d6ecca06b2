//! Byte decoding for uploaded Lenex documents.

use encoding_rs::{UTF_8, WINDOWS_1250};

/// Decode meet-document bytes. The encoding is auto-detected from the XML
/// declaration: a `windows-1250` declaration selects that code page,
/// anything else decodes as UTF-8.
pub fn decode_lenex(bytes: &[u8]) -> String {
    let head = String::from_utf8_lossy(&bytes[..bytes.len().min(200)]).to_lowercase();
    let encoding = if head.contains("windows-1250") {
        WINDOWS_1250
    } else {
        UTF_8
    };
    let (text, _, _) = encoding.decode(bytes);
    text.into_owned()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_to_utf8() {
        let xml = "<?xml version=\"1.0\" encoding=\"UTF-8\"?><LENEX/>";
        assert_eq!(decode_lenex(xml.as_bytes()), xml);
    }

    #[test]
    fn honours_windows_1250_declaration() {
        let mut bytes =
            b"<?xml version=\"1.0\" encoding=\"windows-1250\"?><LENEX name=\"".to_vec();
        bytes.push(0xE1); // a-acute in Windows-1250
        bytes.extend_from_slice(b"\"/>");
        let text = decode_lenex(&bytes);
        assert!(text.contains('á'));
    }
}
