//! Umbrella crate for Care Cards.
//!
//! This crate stitches the poem composer and the card layout layer together
//! so callers can go from a raw form submission to a printable card with a
//! single API entry point.

pub use composer::{
    compose, compose_random, compose_with_config, ComposerConfig, ConfigError,
    GenerationRequest, IndexPicker, Occasion, PoemDocument, RandomPicker, RawGenerationRequest,
    RequiredField, SeededPicker, Signature, Tone, ValidationError, SIGNATURE_PREFIX,
};
pub use layout::{
    download_file_name, parse_poem, render_pdf, CardLayout, CardMode, CardRequest, ParsedPoem,
    RenderError,
};

use chrono::NaiveDate;
use std::time::Instant;
use thiserror::Error;
use tracing::{info, warn};

/// Errors that can occur while turning a submission into a card.
#[derive(Debug, Error)]
pub enum CardError {
    #[error("invalid request: {0}")]
    Validation(#[from] ValidationError),
    #[error("card rendering failed: {0}")]
    Render(#[from] RenderError),
    #[error("cannot render a card without a poem")]
    EmptyPoem,
}

/// A rendered card ready for download.
#[derive(Debug, Clone)]
pub struct RenderedCard {
    pub file_name: String,
    pub layout: CardLayout,
    pub pdf: Vec<u8>,
}

/// Validates a raw submission and composes its poem.
pub fn generate_poem<P>(
    raw: RawGenerationRequest,
    cfg: &ComposerConfig,
    picker: &mut P,
) -> Result<PoemDocument, CardError>
where
    P: IndexPicker + ?Sized,
{
    let request = raw.validate()?;
    let poem = compose_with_config(&request, cfg, picker);
    info!(
        occasion = %request.occasion,
        tone = %request.tone,
        has_sender_name = request.sender_name.as_deref().is_some_and(|s| !s.trim().is_empty()),
        has_meaning = request.meaning.as_deref().is_some_and(|s| !s.trim().is_empty()),
        "poem_generated"
    );
    Ok(poem)
}

/// Lays out and renders a card for an already composed poem.
///
/// A blank poem is rejected: there is nothing to print.
pub fn render_card(request: &CardRequest, date: NaiveDate) -> Result<RenderedCard, CardError> {
    if request.poem.trim().is_empty() {
        return Err(CardError::EmptyPoem);
    }

    let start = Instant::now();
    let layout = CardLayout::build(request, date);
    if !layout.poem_page.poem.has_signature() {
        warn!("poem has no recognizable signature block");
    }
    let pdf = render_pdf(&layout)?;
    info!(
        mode = ?request.mode,
        size_bytes = pdf.len(),
        elapsed_micros = start.elapsed().as_micros(),
        "card_rendered"
    );

    Ok(RenderedCard {
        file_name: download_file_name(&request.recipient_name),
        layout,
        pdf,
    })
}

/// Runs the whole flow: validate, compose, lay out and render.
pub fn create_card<P>(
    raw: RawGenerationRequest,
    mode: CardMode,
    date: NaiveDate,
    picker: &mut P,
) -> Result<(PoemDocument, RenderedCard), CardError>
where
    P: IndexPicker + ?Sized,
{
    let recipient_name = raw.recipient_name.clone().unwrap_or_default();
    let relationship = raw.relationship.clone().unwrap_or_default();
    let occasion = raw.occasion.unwrap_or_default();
    let poem = generate_poem(raw, &ComposerConfig::default(), picker)?;
    let request = CardRequest {
        poem: poem.as_str().to_string(),
        recipient_name,
        occasion: Some(occasion.as_str().to_string()),
        relationship,
        mode,
    };
    let card = render_card(&request, date)?;
    Ok((poem, card))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn date() -> NaiveDate {
        NaiveDate::from_ymd_opt(2026, 2, 14).unwrap()
    }

    fn raw() -> RawGenerationRequest {
        RawGenerationRequest {
            recipient_name: Some("Noor".into()),
            relationship: Some("my partner".into()),
            occasion: Some(Occasion::Anniversary),
            tone: Some(Tone::Celebratory),
            message_intent: Some("Ten years and counting".into()),
            sender_name: Some("Eli".into()),
            signature: Some(Signature::Love),
            ..Default::default()
        }
    }

    #[test]
    fn generate_poem_rejects_missing_fields() {
        let mut picker = |_: usize| 0;
        let result = generate_poem(
            RawGenerationRequest::default(),
            &ComposerConfig::default(),
            &mut picker,
        );
        assert!(matches!(
            result,
            Err(CardError::Validation(ValidationError::MissingFields(ref fields))) if fields.len() == 3
        ));
    }

    #[test]
    fn create_card_round_trips_signature() {
        let mut picker = |_: usize| 0;
        let (poem, card) = create_card(raw(), CardMode::Demo, date(), &mut picker).expect("card");
        assert!(poem.as_str().starts_with("Hey Noor!"));
        assert_eq!(card.layout.poem_page.poem.signature_line, "— Love");
        assert_eq!(card.layout.poem_page.poem.sender_line, "Eli");
        assert_eq!(card.file_name, "care-card-noor.pdf");
        assert!(card.pdf.starts_with(b"%PDF"));
    }

    #[test]
    fn render_card_rejects_blank_poem() {
        let request = CardRequest {
            poem: " \n ".into(),
            ..Default::default()
        };
        assert!(matches!(
            render_card(&request, date()),
            Err(CardError::EmptyPoem)
        ));
    }
}
