//! Randomized round-trip properties between the composer and the parser.
//!
//! Each property runs over a few thousand requests drawn from a seeded
//! generator, so failures are reproducible from the seed alone.

use carecards::{
    GenerationRequest, Occasion, SIGNATURE_PREFIX, Signature, Tone, compose, parse_poem,
};
use rand::rngs::StdRng;
use rand::seq::SliceRandom;
use rand::{Rng, SeedableRng};

const CASES: usize = 2_000;

const FRAGMENTS: &[&str] = &[
    "a", "Jordan", " ", "  ", "\n", "\r\n", "\t", "—", "— ", "-", ".", "!", "?", "é", "日本",
    "😀", "Kindly", "with care", "’", "   — Love", "x\n— y",
];

fn random_text(rng: &mut StdRng, max_fragments: usize) -> String {
    let count = rng.gen_range(0..=max_fragments);
    (0..count)
        .map(|_| *FRAGMENTS.choose(rng).expect("non-empty fragments"))
        .collect()
}

fn random_optional(rng: &mut StdRng, max_fragments: usize) -> Option<String> {
    if rng.gen_bool(0.2) {
        None
    } else {
        Some(random_text(rng, max_fragments))
    }
}

fn random_request(rng: &mut StdRng) -> GenerationRequest {
    GenerationRequest {
        recipient_name: random_text(rng, 6),
        relationship: random_text(rng, 6),
        occasion: *Occasion::ALL.choose(rng).expect("occasions"),
        tone: *Tone::ALL.choose(rng).expect("tones"),
        message_intent: random_text(rng, 40),
        meaning: random_optional(rng, 40),
        sender_name: random_optional(rng, 8),
        signature: if rng.gen_bool(0.2) {
            None
        } else {
            Signature::ALL.choose(rng).copied()
        },
    }
}

/// Sender name as the composer is expected to render it, or empty.
fn expected_sender(request: &GenerationRequest) -> String {
    let collapsed = carecards_single_line(request.sender_name.as_deref().unwrap_or_default());
    let stripped =
        collapsed.trim_start_matches(|c: char| matches!(c, '—' | '–' | '-') || c.is_whitespace());
    stripped.chars().take(40).collect::<String>().trim().to_string()
}

fn carecards_single_line(text: &str) -> String {
    text.split(['\n', '\r'])
        .map(str::trim)
        .filter(|line| !line.is_empty())
        .collect::<Vec<_>>()
        .join(" ")
}

#[test]
fn signature_block_always_recovered() {
    let mut rng = StdRng::seed_from_u64(0x5eed_ca7d);
    for case in 0..CASES {
        let request = random_request(&mut rng);
        let pick = rng.gen_range(0..3usize);
        let poem = compose(&request, &mut |_: usize| pick);
        let parsed = parse_poem(poem.as_str());

        let signature = request.signature.unwrap_or_default();
        assert_eq!(
            parsed.signature_line,
            format!("{SIGNATURE_PREFIX}{}", signature.text()),
            "case {case}: {request:?}"
        );
        assert_eq!(
            parsed.sender_line,
            expected_sender(&request),
            "case {case}: {request:?}"
        );
    }
}

#[test]
fn body_is_poem_minus_signature_block() {
    let mut rng = StdRng::seed_from_u64(42);
    for case in 0..CASES {
        let request = random_request(&mut rng);
        let poem = compose(&request, &mut |_: usize| 0);
        let parsed = parse_poem(poem.as_str());

        let lines: Vec<&str> = poem.lines().collect();
        let block_len = if parsed.sender_line.is_empty() { 1 } else { 2 };
        assert_eq!(
            parsed.body_text,
            lines[..lines.len() - block_len].join("\n"),
            "case {case}"
        );
        assert!(!parsed.body_text.ends_with(&parsed.signature_line), "case {case}");
    }
}

#[test]
fn kindly_from_jordan() {
    let mut rng = StdRng::seed_from_u64(7);
    for _ in 0..200 {
        let request = GenerationRequest {
            sender_name: Some("Jordan".into()),
            signature: Some(Signature::Kindly),
            ..random_request(&mut rng)
        };
        let parsed = parse_poem(compose(&request, &mut |_: usize| 2).as_str());
        assert_eq!(parsed.signature_line, "— Kindly");
        assert_eq!(parsed.sender_line, "Jordan");
    }
}

#[test]
fn kindly_without_sender_drops_one_line() {
    let mut rng = StdRng::seed_from_u64(8);
    for _ in 0..200 {
        let request = GenerationRequest {
            sender_name: Some(String::new()),
            signature: Some(Signature::Kindly),
            ..random_request(&mut rng)
        };
        let poem = compose(&request, &mut |_: usize| 1);
        let parsed = parse_poem(poem.as_str());
        assert_eq!(parsed.signature_line, "— Kindly");
        assert_eq!(parsed.sender_line, "");

        let lines: Vec<&str> = poem.lines().collect();
        assert_eq!(parsed.body_text, lines[..lines.len() - 1].join("\n"));
    }
}
