//! Care Cards poem composer.
//!
//! Turns a recipient/occasion/tone request into a short, formatted poem using
//! fixed phrase tables. There is no model behind it: every line comes from a
//! template, and the only choice made at runtime is which opener and closer
//! to use from the tone's pool.
//!
//! ## What we do
//!
//! - Validate raw requests at the boundary ([`RawGenerationRequest::validate`])
//! - Trim, fall back and cap every free-text field
//! - Pick an opener and a closer through an injectable [`IndexPicker`]
//! - Assemble the poem in a fixed line order, ending with the signature block
//!
//! ## Pure function guarantee
//!
//! [`compose`] performs no I/O and holds no state between calls. Give it the
//! same request and a picker that answers the same way, and you get the same
//! poem back.
//!
//! ## Example
//!
//! ```
//! use composer::{compose, GenerationRequest, Occasion, Signature, Tone};
//!
//! let request = GenerationRequest {
//!     recipient_name: "Maya".into(),
//!     relationship: "my best friend".into(),
//!     occasion: Occasion::Birthday,
//!     tone: Tone::Warm,
//!     message_intent: "I hope this year is gentle with you".into(),
//!     meaning: None,
//!     sender_name: Some("Jordan".into()),
//!     signature: Some(Signature::Kindly),
//! };
//!
//! let poem = compose(&request, &mut |_pool_size: usize| 0);
//! assert!(poem.as_str().starts_with("Dear Maya,"));
//! assert!(poem.as_str().ends_with("— Kindly\nJordan"));
//! ```

mod compose;
mod config;
mod error;
mod normalize;
mod picker;
mod tables;
mod types;
mod validate;

pub use crate::compose::{compose, compose_with_config, SIGNATURE_PREFIX};
pub use crate::config::{ComposerConfig, ConfigError};
pub use crate::error::{RequiredField, ValidationError};
pub use crate::normalize::{
    clamp, ensure_period, single_line, NormalizedRequest, MESSAGE_INTENT_FALLBACK,
    RECIPIENT_FALLBACK, RELATIONSHIP_FALLBACK,
};
pub use crate::picker::{IndexPicker, RandomPicker, SeededPicker};
pub use crate::tables::{occasion_lead_in, tone_pool, TonePool};
pub use crate::types::{GenerationRequest, Occasion, PoemDocument, Signature, Tone};
pub use crate::validate::RawGenerationRequest;

/// Composes a poem using a fresh [`RandomPicker`].
pub fn compose_random(request: &GenerationRequest) -> PoemDocument {
    compose(request, &mut RandomPicker::new())
}
