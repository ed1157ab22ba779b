//! Field normalization applied before composition.
//!
//! Order matters: trim, substitute the fallback when blank, then cap. The cap
//! never re-trims, so text cut mid-sentence can keep a trailing space.

use crate::config::ComposerConfig;
use crate::types::{GenerationRequest, Occasion, Signature, Tone};

pub const RECIPIENT_FALLBACK: &str = "Friend";
pub const RELATIONSHIP_FALLBACK: &str = "someone special";
pub const MESSAGE_INTENT_FALLBACK: &str = "I’m thinking of you.";

/// Request fields after trimming, fallbacks and caps.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NormalizedRequest {
    pub recipient: String,
    pub relationship: String,
    pub occasion: Occasion,
    pub tone: Tone,
    pub message_intent: String,
    /// Empty when no meaning text was supplied.
    pub meaning: String,
    /// Empty when no sender was supplied.
    pub sender: String,
    pub signature: String,
}

impl NormalizedRequest {
    pub fn from_request(request: &GenerationRequest, cfg: &ComposerConfig) -> Self {
        let recipient = single_line(&request.recipient_name);
        let relationship = single_line(&request.relationship);
        let sender = strip_signature_prefix(&single_line(
            request.sender_name.as_deref().unwrap_or_default(),
        ));
        let signature = request.signature.unwrap_or_default();

        Self {
            recipient: capped_or(&recipient, RECIPIENT_FALLBACK, cfg.max_recipient_chars),
            relationship: capped_or(
                &relationship,
                RELATIONSHIP_FALLBACK,
                cfg.max_relationship_chars,
            ),
            occasion: request.occasion,
            tone: request.tone,
            message_intent: capped_or(
                &request.message_intent,
                MESSAGE_INTENT_FALLBACK,
                cfg.max_message_intent_chars,
            ),
            meaning: clamp(
                request.meaning.as_deref().unwrap_or_default(),
                cfg.max_meaning_chars,
            ),
            sender: clamp(&sender, cfg.max_sender_chars),
            signature: capped_or(
                signature.text(),
                Signature::default().text(),
                cfg.max_signature_chars,
            ),
        }
    }
}

/// Trims `text` and keeps at most `max_chars` characters.
pub fn clamp(text: &str, max_chars: usize) -> String {
    text.trim().chars().take(max_chars).collect()
}

fn capped_or(text: &str, fallback: &str, max_chars: usize) -> String {
    if text.trim().is_empty() {
        fallback.chars().take(max_chars).collect()
    } else {
        clamp(text, max_chars)
    }
}

/// Appends a period unless `text` already ends with one.
///
/// Deliberately a plain suffix check: `"Wow!"` becomes `"Wow!."`.
pub fn ensure_period(text: &str) -> String {
    if text.ends_with('.') {
        text.to_string()
    } else {
        format!("{text}.")
    }
}

/// Joins the lines of `text` with single spaces and trims the edges, so a
/// single-line field stays on one line. Spacing inside a line is kept.
pub fn single_line(text: &str) -> String {
    text.split(['\n', '\r'])
        .map(str::trim)
        .filter(|segment| !segment.is_empty())
        .collect::<Vec<_>>()
        .join(" ")
}

/// Drops any leading run of dashes and spaces, so the sender line can never
/// start with the signature prefix.
fn strip_signature_prefix(text: &str) -> String {
    text.trim_start_matches(|c: char| matches!(c, '—' | '–' | '-') || c.is_whitespace())
        .to_string()
}
