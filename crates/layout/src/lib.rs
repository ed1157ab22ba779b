//! Care Cards layout layer.
//!
//! Takes a composed poem and turns it into a printable card.
//!
//! ## What we do
//!
//! - Recover the signature block from the poem text ([`parse_poem`])
//! - Resolve cover and inside-page content for a demo or final card
//!   ([`CardLayout::build`])
//! - Render the layout as a two-page US-Letter PDF ([`render_pdf`])
//!
//! Parsing and layout are pure. Rendering touches no files; it returns the
//! PDF bytes and leaves delivery to the caller.
//!
//! ## Example
//!
//! ```
//! use chrono::NaiveDate;
//! use layout::{parse_poem, render_pdf, CardLayout, CardMode, CardRequest};
//!
//! let poem = "Dear Ava,\n\nRest up.\n\n— With Love\nSam";
//! let parsed = parse_poem(poem);
//! assert_eq!(parsed.signature_line, "— With Love");
//! assert_eq!(parsed.sender_line, "Sam");
//!
//! let request = CardRequest {
//!     poem: poem.to_string(),
//!     recipient_name: "Ava".into(),
//!     occasion: Some("Get Well".into()),
//!     relationship: "my sister".into(),
//!     mode: CardMode::Demo,
//! };
//! let date = NaiveDate::from_ymd_opt(2026, 1, 2).unwrap();
//! let pdf = render_pdf(&CardLayout::build(&request, date)).unwrap();
//! assert!(pdf.starts_with(b"%PDF"));
//! ```

mod card;
mod encoding;
mod error;
mod parse;
mod pdf;

pub use crate::card::{
    download_file_name, CardLayout, CardMode, CardRequest, CoverPage, PoemPage, BRAND_LINE,
    DEMO_FOOTER, PREMIUM_FOOTER, PREMIUM_LINE, WATERMARK_TEXT,
};
pub use crate::encoding::encode_win_ansi;
pub use crate::error::RenderError;
pub use crate::parse::{parse_poem, ParsedPoem};
pub use crate::pdf::{render_pdf, wrap_text, PAGE_HEIGHT, PAGE_WIDTH, SAFE_MARGIN};
