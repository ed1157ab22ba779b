//! Caller-side request validation.
//!
//! The composer itself never fails. Rejecting incomplete requests is the
//! boundary's job, and [`RawGenerationRequest::validate`] is the one place
//! that decides what "incomplete" means.

use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::error::{RequiredField, ValidationError};
use crate::types::{GenerationRequest, Occasion, Signature, Tone};

/// A generation request as it arrives off the wire, before validation.
///
/// Every required field is optional here so a missing key and a blank value
/// are reported the same way.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct RawGenerationRequest {
    pub recipient_name: Option<String>,
    pub relationship: Option<String>,
    pub occasion: Option<Occasion>,
    pub tone: Option<Tone>,
    pub message_intent: Option<String>,
    pub meaning: Option<String>,
    pub sender_name: Option<String>,
    pub signature: Option<Signature>,
}

impl RawGenerationRequest {
    /// Checks the required fields and produces a [`GenerationRequest`].
    ///
    /// All missing or whitespace-only required fields are reported together,
    /// in declaration order. Field values are forwarded untouched; trimming
    /// and capping happen during composition.
    pub fn validate(self) -> Result<GenerationRequest, ValidationError> {
        let mut missing = Vec::new();
        check(&self.recipient_name, RequiredField::RecipientName, &mut missing);
        check(&self.relationship, RequiredField::Relationship, &mut missing);
        check(&self.message_intent, RequiredField::MessageIntent, &mut missing);

        if !missing.is_empty() {
            debug!(missing = ?missing, "generation request rejected");
            return Err(ValidationError::MissingFields(missing));
        }

        Ok(GenerationRequest {
            recipient_name: self.recipient_name.unwrap_or_default(),
            relationship: self.relationship.unwrap_or_default(),
            occasion: self.occasion.unwrap_or_default(),
            tone: self.tone.unwrap_or_default(),
            message_intent: self.message_intent.unwrap_or_default(),
            meaning: self.meaning,
            sender_name: self.sender_name,
            signature: self.signature,
        })
    }
}

fn check(value: &Option<String>, field: RequiredField, missing: &mut Vec<RequiredField>) {
    let present = value.as_deref().is_some_and(|v| !v.trim().is_empty());
    if !present {
        missing.push(field);
    }
}
