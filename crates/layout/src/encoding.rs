//! WinAnsi encoding for the PDF standard Type1 fonts.

use lopdf::Document;

const WIN_ANSI: &str = "WinAnsiEncoding";

/// Encodes `text` as WinAnsi (Windows-1252) bytes using lopdf's table.
///
/// Characters the encoding cannot represent become `?`. Tabs and line breaks
/// become spaces; callers split lines before encoding.
pub fn encode_win_ansi(text: &str) -> Vec<u8> {
    let mut out = Vec::with_capacity(text.len());
    let mut buf = [0u8; 4];
    for ch in text.chars() {
        let ch = match ch {
            '\t' | '\n' | '\r' => ' ',
            other => other,
        };
        // lopdf skips unmapped characters, so an empty result means unmapped.
        let encoded = Document::encode_text(Some(WIN_ANSI), ch.encode_utf8(&mut buf));
        if encoded.is_empty() {
            out.push(b'?');
        } else {
            out.extend_from_slice(&encoded);
        }
    }
    out
}
