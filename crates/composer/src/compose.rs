use tracing::debug;

use crate::config::ComposerConfig;
use crate::normalize::{ensure_period, NormalizedRequest};
use crate::picker::IndexPicker;
use crate::tables::{
    occasion_lead_in, tone_pool, BRIGHT_LINE, HEAVY_LINE, MEANING_FALLBACK_LINE,
};
use crate::types::{GenerationRequest, PoemDocument};

/// Prefix that marks the signature line. The parser keys on it.
pub const SIGNATURE_PREFIX: &str = "— ";

/// Composes a poem with the default [`ComposerConfig`].
pub fn compose<P>(request: &GenerationRequest, picker: &mut P) -> PoemDocument
where
    P: IndexPicker + ?Sized,
{
    compose_with_config(request, &ComposerConfig::default(), picker)
}

/// Composes a poem from `request`.
///
/// Total for every input: blank fields fall back to generic phrasing instead
/// of failing. The picker is asked for the opener index first, then the
/// closer index.
pub fn compose_with_config<P>(
    request: &GenerationRequest,
    cfg: &ComposerConfig,
    picker: &mut P,
) -> PoemDocument
where
    P: IndexPicker + ?Sized,
{
    let fields = NormalizedRequest::from_request(request, cfg);
    let pool = tone_pool(fields.tone);

    let opener_index = pick(picker, pool.openers.len());
    let closer_index = pick(picker, pool.closers.len());
    debug!(
        tone = %fields.tone,
        occasion = %fields.occasion,
        opener_index,
        closer_index,
        has_meaning = !fields.meaning.is_empty(),
        has_sender = !fields.sender.is_empty(),
        "composing poem"
    );

    let opener = pool.opener(opener_index, &fields.recipient);
    let intent = ensure_period(&fields.message_intent);
    let (stanza_head, stanza_tail) = if fields.meaning.is_empty() {
        (
            format!("You are {} to me,", fields.relationship),
            MEANING_FALLBACK_LINE.to_string(),
        )
    } else {
        (
            format!("You are {} to me—", fields.relationship),
            ensure_period(&fields.meaning),
        )
    };
    let signature_line = format!("{SIGNATURE_PREFIX}{}", fields.signature);

    let mut lines: Vec<&str> = vec![
        opener.as_str(),
        "",
        occasion_lead_in(fields.occasion),
        "",
        intent.as_str(),
        "",
        stanza_head.as_str(),
        stanza_tail.as_str(),
        HEAVY_LINE,
        BRIGHT_LINE,
        "",
        pool.closer(closer_index),
        "",
        signature_line.as_str(),
    ];
    if !fields.sender.is_empty() {
        lines.push(fields.sender.as_str());
    }

    PoemDocument::new(lines.join("\n"))
}

fn pick<P>(picker: &mut P, pool_size: usize) -> usize
where
    P: IndexPicker + ?Sized,
{
    picker.pick_index(pool_size) % pool_size
}
