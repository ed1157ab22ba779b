//! Two-page card layout model.
//!
//! [`CardLayout`] holds every string that ends up on the printed card, already
//! resolved from the request and the parsed poem. Rendering only has to place
//! them; all content decisions live here where they can be tested without
//! producing a PDF.

use chrono::{Datelike, NaiveDate};
use serde::{Deserialize, Serialize};

use crate::parse::{parse_poem, ParsedPoem};

pub const BRAND_LINE: &str = "CARE CARDS COLLECTIVE";
pub const WATERMARK_TEXT: &str = "Care Cards";
pub const PREMIUM_LINE: &str = "HUMAN TOUCH • Poet-refined";
pub const DEMO_FOOTER: &str = "Care Cards Collective • A moment of care, delivered";
pub const PREMIUM_FOOTER: &str = "Care Cards Collective • Human Touch Edition";

const BLANK_NAME: &str = "____";
const DEFAULT_TITLE: &str = "A Care Card";

/// Rendering mode: a watermarked demo preview or a clean final card.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum CardMode {
    #[default]
    Demo,
    HumanTouch,
}

impl CardMode {
    pub fn is_premium(self) -> bool {
        matches!(self, CardMode::HumanTouch)
    }
}

/// Everything needed to lay out a card.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct CardRequest {
    pub poem: String,
    pub recipient_name: String,
    pub occasion: Option<String>,
    pub relationship: String,
    pub mode: CardMode,
}

/// Front cover content.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct CoverPage {
    pub brand: &'static str,
    pub title: String,
    pub subtitle: String,
    pub meta_lines: Vec<String>,
    pub premium_line: Option<&'static str>,
}

/// Inside page content.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct PoemPage {
    pub heading: String,
    pub poem: ParsedPoem,
    pub watermark: Option<&'static str>,
    pub footer: &'static str,
}

/// Resolved content of a two-page card.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct CardLayout {
    pub title: String,
    pub mode: CardMode,
    pub cover: CoverPage,
    pub poem_page: PoemPage,
}

impl CardLayout {
    /// Lays out `request`, stamping the cover with `date`.
    pub fn build(request: &CardRequest, date: NaiveDate) -> Self {
        let recipient = request.recipient_name.trim();
        let relationship = request.relationship.trim();
        let occasion = request
            .occasion
            .as_deref()
            .map(str::trim)
            .filter(|o| !o.is_empty())
            .unwrap_or(DEFAULT_TITLE);
        let premium = request.mode.is_premium();

        let cover = CoverPage {
            brand: BRAND_LINE,
            title: occasion.to_string(),
            subtitle: format!("Created with care for {}", or_blank(recipient)),
            meta_lines: vec![
                or_blank(relationship).to_string(),
                format!("Date: {}", format_date(date)),
            ],
            premium_line: premium.then_some(PREMIUM_LINE),
        };

        let poem_page = PoemPage {
            heading: format!("For {}", or_blank(recipient)),
            poem: parse_poem(&request.poem),
            watermark: (!premium).then_some(WATERMARK_TEXT),
            footer: if premium { PREMIUM_FOOTER } else { DEMO_FOOTER },
        };

        let title_name = if recipient.is_empty() {
            "Recipient"
        } else {
            recipient
        };

        Self {
            title: format!("Care Card - {title_name}"),
            mode: request.mode,
            cover,
            poem_page,
        }
    }
}

/// File name offered for download: `care-card-<recipient-slug>.pdf`.
pub fn download_file_name(recipient_name: &str) -> String {
    let name = if recipient_name.is_empty() {
        "recipient"
    } else {
        recipient_name
    };
    let mut slug = String::with_capacity(name.len());
    let mut in_space = false;
    for ch in name.to_lowercase().chars() {
        if ch.is_whitespace() {
            if !in_space {
                slug.push('-');
            }
            in_space = true;
        } else {
            slug.push(ch);
            in_space = false;
        }
    }
    format!("care-card-{slug}.pdf")
}

fn or_blank(value: &str) -> &str {
    if value.is_empty() {
        BLANK_NAME
    } else {
        value
    }
}

/// US-style numeric date, e.g. `3/7/2026`.
fn format_date(date: NaiveDate) -> String {
    format!("{}/{}/{}", date.month(), date.day(), date.year())
}
