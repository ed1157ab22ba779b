//! Configuration for poem composition.
//!
//! [`ComposerConfig`] holds the per-field length caps applied during
//! normalization. Caps count Unicode scalar values, not bytes, so a name made
//! of multi-byte characters is never cut in the middle of a character.
//!
//! # Examples
//!
//! ```rust
//! use composer::ComposerConfig;
//!
//! let config = ComposerConfig::default();
//! assert_eq!(config.max_message_intent_chars, 280);
//! config.validate().expect("defaults are valid");
//! ```
//!
//! The config deserializes from any serde format, so the server can nest it
//! in its own configuration file:
//!
//! ```json
//! {
//!   "max_recipient_chars": 40,
//!   "max_message_intent_chars": 280
//! }
//! ```

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Length caps applied to free-text fields before composition.
///
/// Missing fields in serialized form take their default value.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ComposerConfig {
    pub max_recipient_chars: usize,
    pub max_relationship_chars: usize,
    pub max_message_intent_chars: usize,
    pub max_meaning_chars: usize,
    pub max_sender_chars: usize,
    pub max_signature_chars: usize,
}

impl Default for ComposerConfig {
    fn default() -> Self {
        Self {
            max_recipient_chars: 40,
            max_relationship_chars: 60,
            max_message_intent_chars: 280,
            max_meaning_chars: 260,
            max_sender_chars: 40,
            max_signature_chars: 40,
        }
    }
}

/// Errors raised by [`ComposerConfig::validate`].
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum ConfigError {
    #[error("length cap for `{0}` must be greater than zero")]
    ZeroLimit(&'static str),
}

impl ComposerConfig {
    /// Rejects caps of zero. Call once at startup.
    pub fn validate(&self) -> Result<(), ConfigError> {
        let caps = [
            ("max_recipient_chars", self.max_recipient_chars),
            ("max_relationship_chars", self.max_relationship_chars),
            ("max_message_intent_chars", self.max_message_intent_chars),
            ("max_meaning_chars", self.max_meaning_chars),
            ("max_sender_chars", self.max_sender_chars),
            ("max_signature_chars", self.max_signature_chars),
        ];
        for (name, cap) in caps {
            if cap == 0 {
                return Err(ConfigError::ZeroLimit(name));
            }
        }
        Ok(())
    }
}
