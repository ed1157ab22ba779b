//! Input and output types for poem composition.
//!
//! Enum variants serialize with the display strings the card form posts
//! (`"Thinking of You"`, `"With Care"`, ...), so a JSON body produced by the
//! web client deserializes directly into a [`GenerationRequest`].

use serde::{Deserialize, Serialize};
use std::fmt;

/// Emotional register of a card. Selects the opener and closer pools.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Tone {
    #[default]
    Warm,
    Uplifting,
    Comforting,
    Grateful,
    Celebratory,
}

impl Tone {
    pub const ALL: [Tone; 5] = [
        Tone::Warm,
        Tone::Uplifting,
        Tone::Comforting,
        Tone::Grateful,
        Tone::Celebratory,
    ];

    pub fn as_str(self) -> &'static str {
        match self {
            Tone::Warm => "Warm",
            Tone::Uplifting => "Uplifting",
            Tone::Comforting => "Comforting",
            Tone::Grateful => "Grateful",
            Tone::Celebratory => "Celebratory",
        }
    }
}

impl fmt::Display for Tone {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Event category of a card. Selects the fixed lead-in sentence.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Occasion {
    Birthday,
    #[default]
    #[serde(rename = "Thinking of You")]
    ThinkingOfYou,
    #[serde(rename = "Just Because")]
    JustBecause,
    Sympathy,
    Congratulations,
    #[serde(rename = "Get Well")]
    GetWell,
    Anniversary,
}

impl Occasion {
    pub const ALL: [Occasion; 7] = [
        Occasion::Birthday,
        Occasion::ThinkingOfYou,
        Occasion::JustBecause,
        Occasion::Sympathy,
        Occasion::Congratulations,
        Occasion::GetWell,
        Occasion::Anniversary,
    ];

    pub fn as_str(self) -> &'static str {
        match self {
            Occasion::Birthday => "Birthday",
            Occasion::ThinkingOfYou => "Thinking of You",
            Occasion::JustBecause => "Just Because",
            Occasion::Sympathy => "Sympathy",
            Occasion::Congratulations => "Congratulations",
            Occasion::GetWell => "Get Well",
            Occasion::Anniversary => "Anniversary",
        }
    }
}

impl fmt::Display for Occasion {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Sign-off phrase placed after the em-dash in the signature block.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Signature {
    #[default]
    #[serde(rename = "With Care")]
    WithCare,
    #[serde(rename = "With Love")]
    WithLove,
    Love,
    Sincerely,
    Respectfully,
    Kindly,
}

impl Signature {
    pub const ALL: [Signature; 6] = [
        Signature::WithCare,
        Signature::WithLove,
        Signature::Love,
        Signature::Sincerely,
        Signature::Respectfully,
        Signature::Kindly,
    ];

    /// Text rendered after `"— "` in the signature line.
    pub fn text(self) -> &'static str {
        match self {
            Signature::WithCare => "With Care",
            Signature::WithLove => "With Love",
            Signature::Love => "Love",
            Signature::Sincerely => "Sincerely",
            Signature::Respectfully => "Respectfully",
            Signature::Kindly => "Kindly",
        }
    }
}

impl fmt::Display for Signature {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.text())
    }
}

/// A validated request for one poem.
///
/// Required fields are guaranteed non-blank when the request comes out of
/// [`RawGenerationRequest::validate`](crate::RawGenerationRequest::validate),
/// but [`compose`](crate::compose) still falls back gracefully if they are not.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct GenerationRequest {
    pub recipient_name: String,
    pub relationship: String,
    pub occasion: Occasion,
    pub tone: Tone,
    pub message_intent: String,
    #[serde(default)]
    pub meaning: Option<String>,
    #[serde(default)]
    pub sender_name: Option<String>,
    #[serde(default)]
    pub signature: Option<Signature>,
}

/// A composed poem. Immutable once produced.
///
/// The final one or two lines always form the signature block: a `"— "`
/// prefixed signature line, optionally followed by the sender name.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct PoemDocument(String);

impl PoemDocument {
    pub(crate) fn new(text: String) -> Self {
        Self(text)
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    pub fn into_string(self) -> String {
        self.0
    }

    pub fn lines(&self) -> std::str::Split<'_, char> {
        self.0.split('\n')
    }
}

impl AsRef<str> for PoemDocument {
    fn as_ref(&self) -> &str {
        self.as_str()
    }
}

impl fmt::Display for PoemDocument {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl From<PoemDocument> for String {
    fn from(value: PoemDocument) -> Self {
        value.0
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn enums_use_form_labels_on_the_wire() {
        let occasion: Occasion = serde_json::from_str("\"Thinking of You\"").unwrap();
        assert_eq!(occasion, Occasion::ThinkingOfYou);
        let signature: Signature = serde_json::from_str("\"With Love\"").unwrap();
        assert_eq!(signature, Signature::WithLove);
        assert_eq!(
            serde_json::to_string(&Occasion::GetWell).unwrap(),
            "\"Get Well\""
        );
    }

    #[test]
    fn labels_match_serde_names() {
        for occasion in Occasion::ALL {
            let json = serde_json::to_string(&occasion).unwrap();
            assert_eq!(json, format!("\"{}\"", occasion.as_str()));
        }
        for signature in Signature::ALL {
            let json = serde_json::to_string(&signature).unwrap();
            assert_eq!(json, format!("\"{}\"", signature.text()));
        }
        for tone in Tone::ALL {
            let json = serde_json::to_string(&tone).unwrap();
            assert_eq!(json, format!("\"{}\"", tone.as_str()));
        }
    }

    #[test]
    fn request_uses_camel_case_fields() {
        let request: GenerationRequest = serde_json::from_str(
            r#"{
                "recipientName": "Sam",
                "relationship": "my brother",
                "occasion": "Birthday",
                "tone": "Celebratory",
                "messageIntent": "Have a great day"
            }"#,
        )
        .unwrap();
        assert_eq!(request.recipient_name, "Sam");
        assert_eq!(request.tone, Tone::Celebratory);
        assert!(request.meaning.is_none());
        assert!(request.signature.is_none());
    }

    #[test]
    fn poem_document_serializes_as_plain_string() {
        let poem = PoemDocument::new("a\nb".to_string());
        assert_eq!(serde_json::to_string(&poem).unwrap(), "\"a\\nb\"");
        assert_eq!(poem.lines().count(), 2);
    }
}
