use std::fmt;

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Request fields that must be present and non-blank before composing.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum RequiredField {
    RecipientName,
    Relationship,
    MessageIntent,
}

impl RequiredField {
    /// Wire name of the field.
    pub fn as_str(self) -> &'static str {
        match self {
            RequiredField::RecipientName => "recipientName",
            RequiredField::Relationship => "relationship",
            RequiredField::MessageIntent => "messageIntent",
        }
    }
}

impl fmt::Display for RequiredField {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Errors raised when a raw request fails the caller-side contract.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum ValidationError {
    #[error("missing required fields: {}", join_fields(.0))]
    MissingFields(Vec<RequiredField>),
}

fn join_fields(fields: &[RequiredField]) -> String {
    fields
        .iter()
        .map(|f| f.as_str())
        .collect::<Vec<_>>()
        .join(", ")
}
