//! Recovers the signature block from a composed poem.
//!
//! Structure is inferred from a textual convention: the signature line starts
//! with `"— "`, and an optional sender line follows it. Lines are inspected in
//! trimmed form, but the body is returned exactly as it appeared.

use composer::SIGNATURE_PREFIX;
use serde::{Deserialize, Serialize};
use tracing::trace;

/// A poem split into its body and signature block.
///
/// `signature_line` and `sender_line` are empty when not recognized.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ParsedPoem {
    pub body_text: String,
    pub signature_line: String,
    pub sender_line: String,
}

impl ParsedPoem {
    fn body_only(poem: &str) -> Self {
        Self {
            body_text: poem.to_string(),
            ..Default::default()
        }
    }

    pub fn has_signature(&self) -> bool {
        !self.signature_line.is_empty()
    }
}

/// Splits `poem` into body, signature line and sender line. Never fails.
///
/// - Fewer than two lines: everything is body.
/// - Second-to-last line is a signature line: it becomes the signature. The
///   last line is the sender unless it is blank or itself a signature line,
///   in which case only the last line is dropped from the body.
/// - Otherwise, if the last line is a signature line, it is the signature
///   and there is no sender.
/// - Otherwise nothing is recognized and the input is returned as body.
pub fn parse_poem(poem: &str) -> ParsedPoem {
    let lines: Vec<&str> = poem.split('\n').collect();
    if lines.len() < 2 {
        return ParsedPoem::body_only(poem);
    }

    let last = lines[lines.len() - 1].trim();
    let second_last = lines[lines.len() - 2].trim();

    if is_signature(second_last) {
        if !last.is_empty() && !is_signature(last) {
            return ParsedPoem {
                body_text: lines[..lines.len() - 2].join("\n"),
                signature_line: second_last.to_string(),
                sender_line: last.to_string(),
            };
        }
        return ParsedPoem {
            body_text: lines[..lines.len() - 1].join("\n"),
            signature_line: second_last.to_string(),
            sender_line: String::new(),
        };
    }

    if is_signature(last) {
        return ParsedPoem {
            body_text: lines[..lines.len() - 1].join("\n"),
            signature_line: last.to_string(),
            sender_line: String::new(),
        };
    }

    trace!(line_count = lines.len(), "no signature block recognized");
    ParsedPoem::body_only(poem)
}

fn is_signature(line: &str) -> bool {
    line.starts_with(SIGNATURE_PREFIX)
}
