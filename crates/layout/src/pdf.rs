//! PDF rendering of a [`CardLayout`] with `lopdf`.
//!
//! Produces a US-Letter document (a cover plus one inside page, with
//! continuation pages for long poems) using only the standard Type1
//! fonts, so no font files are embedded. Text widths are estimated from an
//! average glyph width per font; that is close enough for centring short
//! lines and wrapping body text inside the poem box.

use lopdf::content::{Content, Operation};
use lopdf::{dictionary, Document, Object, ObjectId, Stream, StringFormat};
use tracing::debug;

use crate::card::{CardLayout, CoverPage, PoemPage};
use crate::encoding::encode_win_ansi;
use crate::error::RenderError;

pub const PAGE_WIDTH: f32 = 612.0;
pub const PAGE_HEIGHT: f32 = 792.0;
/// Safe-area margin keeping text away from the trim (0.75in).
pub const SAFE_MARGIN: f32 = 54.0;

const POEM_BOX_PADDING: f32 = 34.0;
const BODY_SIZE: f32 = 13.0;
const BODY_LEADING: f32 = BODY_SIZE * 1.8;
const FOOTER_Y: f32 = 32.0;

const PAPER: [f32; 3] = [0.984, 0.984, 0.969];
const INK: [f32; 3] = [0.059, 0.090, 0.165];
const SOFT_INK: [f32; 3] = [0.42, 0.45, 0.52];
const SIGNATURE_INK: [f32; 3] = [0.067, 0.094, 0.153];
const RULE: [f32; 3] = [0.82, 0.84, 0.86];
const BOX_BORDER: [f32; 3] = [0.898, 0.906, 0.922];

#[derive(Debug, Clone, Copy)]
enum Font {
    Sans,
    Serif,
    SerifItalic,
}

impl Font {
    fn resource_name(self) -> &'static str {
        match self {
            Font::Sans => "F1",
            Font::Serif => "F2",
            Font::SerifItalic => "F3",
        }
    }

    fn average_width(self) -> f32 {
        match self {
            Font::Sans => 0.52,
            Font::Serif | Font::SerifItalic => 0.46,
        }
    }

    fn text_width(self, text: &str, size: f32) -> f32 {
        text.chars().count() as f32 * size * self.average_width()
    }
}

/// Accumulates content-stream operations for one page.
struct Canvas {
    ops: Vec<Operation>,
}

impl Canvas {
    fn new() -> Self {
        Self { ops: Vec::new() }
    }

    fn op(&mut self, operator: &str, operands: Vec<Object>) {
        self.ops.push(Operation::new(operator, operands));
    }

    fn fill_color(&mut self, [r, g, b]: [f32; 3]) {
        self.op("rg", vec![real(r), real(g), real(b)]);
    }

    fn stroke_color(&mut self, [r, g, b]: [f32; 3]) {
        self.op("RG", vec![real(r), real(g), real(b)]);
    }

    fn paper(&mut self) {
        self.fill_color(PAPER);
        self.op(
            "re",
            vec![real(0.0), real(0.0), real(PAGE_WIDTH), real(PAGE_HEIGHT)],
        );
        self.op("f", vec![]);
    }

    fn text(&mut self, font: Font, size: f32, x: f32, y: f32, text: &str) {
        self.op("BT", vec![]);
        self.op("Tf", vec![font.resource_name().into(), real(size)]);
        self.op("Td", vec![real(x), real(y)]);
        self.op("Tj", vec![literal(text)]);
        self.op("ET", vec![]);
    }

    fn centered(&mut self, font: Font, size: f32, y: f32, text: &str) {
        let x = ((PAGE_WIDTH - font.text_width(text, size)) / 2.0).max(SAFE_MARGIN);
        self.text(font, size, x, y, text);
    }

    fn watermark(&mut self, text: &str) {
        let size = 96.0;
        let angle = (-20.0_f32).to_radians();
        let (sin, cos) = angle.sin_cos();
        let width = Font::Sans.text_width(text, size);
        let x = (PAGE_WIDTH - width * cos) / 2.0;
        let y = PAGE_HEIGHT * 0.55 - width * sin / 2.0;

        self.op("q", vec![]);
        self.op("gs", vec!["GS1".into()]);
        self.fill_color(INK);
        self.op("BT", vec![]);
        self.op("Tf", vec![Font::Sans.resource_name().into(), real(size)]);
        self.op(
            "Tm",
            vec![real(cos), real(sin), real(-sin), real(cos), real(x), real(y)],
        );
        self.op("Tj", vec![literal(text)]);
        self.op("ET", vec![]);
        self.op("Q", vec![]);
    }

    fn finish(self) -> Result<Vec<u8>, RenderError> {
        Ok(Content {
            operations: self.ops,
        }
        .encode()?)
    }
}

/// Renders `layout` as a PDF and returns the file bytes.
pub fn render_pdf(layout: &CardLayout) -> Result<Vec<u8>, RenderError> {
    let mut doc = Document::with_version("1.5");
    let pages_id = doc.new_object_id();

    let font = |doc: &mut Document, base: &str| {
        doc.add_object(dictionary! {
            "Type" => "Font",
            "Subtype" => "Type1",
            "BaseFont" => base,
            "Encoding" => "WinAnsiEncoding",
        })
    };
    let sans = font(&mut doc, "Helvetica");
    let serif = font(&mut doc, "Times-Roman");
    let serif_italic = font(&mut doc, "Times-Italic");
    let watermark_state = doc.add_object(dictionary! {
        "Type" => "ExtGState",
        "ca" => real(0.035),
        "CA" => real(0.035),
    });
    let resources_id = doc.add_object(dictionary! {
        "Font" => dictionary! {
            "F1" => sans,
            "F2" => serif,
            "F3" => serif_italic,
        },
        "ExtGState" => dictionary! {
            "GS1" => watermark_state,
        },
    });

    let mut contents = vec![cover_page(&layout.cover)?];
    for canvas in poem_pages(&layout.poem_page) {
        contents.push(canvas.finish()?);
    }
    let page_count = contents.len() as i64;
    let kids: Vec<Object> = contents
        .into_iter()
        .map(|content| add_page(&mut doc, pages_id, content).into())
        .collect();

    doc.objects.insert(
        pages_id,
        Object::Dictionary(dictionary! {
            "Type" => "Pages",
            "Kids" => kids,
            "Count" => page_count,
            "Resources" => resources_id,
            "MediaBox" => vec![real(0.0), real(0.0), real(PAGE_WIDTH), real(PAGE_HEIGHT)],
        }),
    );
    let catalog_id = doc.add_object(dictionary! {
        "Type" => "Catalog",
        "Pages" => pages_id,
    });
    let info_id = doc.add_object(dictionary! {
        "Title" => literal(&layout.title),
        "Producer" => literal("Care Cards"),
    });
    doc.trailer.set("Root", catalog_id);
    doc.trailer.set("Info", info_id);
    doc.compress();

    let mut bytes = Vec::new();
    doc.save_to(&mut bytes)?;
    debug!(
        mode = ?layout.mode,
        size_bytes = bytes.len(),
        "card pdf rendered"
    );
    Ok(bytes)
}

fn add_page(doc: &mut Document, pages_id: ObjectId, content: Vec<u8>) -> ObjectId {
    let content_id = doc.add_object(Stream::new(dictionary! {}, content));
    doc.add_object(dictionary! {
        "Type" => "Page",
        "Parent" => pages_id,
        "Contents" => content_id,
    })
}

fn cover_page(cover: &CoverPage) -> Result<Vec<u8>, RenderError> {
    let mut canvas = Canvas::new();
    canvas.paper();

    let mut y = PAGE_HEIGHT / 2.0 + 90.0;
    canvas.fill_color(SOFT_INK);
    canvas.centered(Font::Sans, 11.0, y, cover.brand);

    y -= 52.0;
    canvas.fill_color(INK);
    canvas.centered(Font::Serif, 34.0, y, &cover.title);

    y -= 34.0;
    canvas.fill_color(SOFT_INK);
    canvas.centered(Font::Sans, 12.0, y, &cover.subtitle);

    y -= 16.0;
    for line in &cover.meta_lines {
        y -= 15.0;
        canvas.centered(Font::Sans, 10.0, y, line);
    }

    if let Some(premium) = cover.premium_line {
        y -= 28.0;
        canvas.fill_color(INK);
        canvas.centered(Font::Sans, 10.0, y, premium);
    }

    canvas.finish()
}

/// Lays out the inside of the card.
///
/// Body lines that do not fit flow onto continuation pages. The signature
/// block always follows the last body line on the same page, so at least one
/// body line moves over with it when the block would not fit.
fn poem_pages(page: &PoemPage) -> Vec<Canvas> {
    let text_width = PAGE_WIDTH - 2.0 * SAFE_MARGIN - 2.0 * POEM_BOX_PADDING;
    let max_chars = (text_width / (BODY_SIZE * Font::Serif.average_width())) as usize;
    let body = wrap_text(page.poem.body_text.trim_end(), max_chars);
    let signature_height = signature_block_height(page);

    let mut pages = Vec::new();
    let mut rest: &[String] = &body;
    loop {
        let first = pages.is_empty();
        let box_top = box_top(first);
        let fits_plain = line_capacity(box_top, 0.0);
        let fits_signed = line_capacity(box_top, signature_height);

        let take = if rest.len() <= fits_signed {
            rest.len()
        } else if rest.len() <= fits_plain {
            rest.len() - 1
        } else {
            fits_plain
        };
        let (lines, remaining) = rest.split_at(take);
        let last = remaining.is_empty();
        pages.push(poem_canvas(page, first, lines, last.then_some(signature_height)));
        rest = remaining;
        if last {
            break;
        }
    }

    if pages.len() > 1 {
        debug!(
            lines = body.len(),
            pages = pages.len(),
            "poem body continued on extra pages"
        );
    }
    pages
}

fn signature_block_height(page: &PoemPage) -> f32 {
    match (
        page.poem.signature_line.is_empty(),
        page.poem.sender_line.is_empty(),
    ) {
        (true, _) => 0.0,
        (false, true) => 22.0 + 16.0 * 1.4,
        (false, false) => 22.0 + 16.0 * 1.4 + 6.0 + 20.0 * 1.2,
    }
}

/// Top edge of the poem box. Only the first inside page carries the heading.
fn box_top(first: bool) -> f32 {
    let top = PAGE_HEIGHT - SAFE_MARGIN;
    if first {
        top - 24.0 - 22.0 - 28.0
    } else {
        top - 24.0
    }
}

fn line_capacity(box_top: f32, reserved: f32) -> usize {
    let available = box_top - 2.0 * POEM_BOX_PADDING - reserved - FOOTER_Y - 40.0;
    (available / BODY_LEADING).max(1.0) as usize
}

fn poem_canvas(
    page: &PoemPage,
    first: bool,
    body: &[String],
    signature_height: Option<f32>,
) -> Canvas {
    let mut canvas = Canvas::new();
    canvas.paper();

    if let Some(text) = page.watermark {
        canvas.watermark(text);
    }

    let top = PAGE_HEIGHT - SAFE_MARGIN;
    canvas.stroke_color(RULE);
    canvas.op("w", vec![real(0.75)]);
    canvas.op("m", vec![real(SAFE_MARGIN), real(top)]);
    canvas.op("l", vec![real(PAGE_WIDTH - SAFE_MARGIN), real(top)]);
    canvas.op("S", vec![]);

    if first {
        canvas.fill_color(INK);
        canvas.text(Font::Serif, 22.0, SAFE_MARGIN, top - 24.0 - 22.0, &page.heading);
    }

    let box_top = box_top(first);
    let box_width = PAGE_WIDTH - 2.0 * SAFE_MARGIN;
    let box_height = 2.0 * POEM_BOX_PADDING
        + body.len() as f32 * BODY_LEADING
        + signature_height.unwrap_or(0.0);
    canvas.fill_color([1.0, 1.0, 1.0]);
    canvas.stroke_color(BOX_BORDER);
    canvas.op("w", vec![real(1.0)]);
    canvas.op(
        "re",
        vec![
            real(SAFE_MARGIN),
            real(box_top - box_height),
            real(box_width),
            real(box_height),
        ],
    );
    canvas.op("B", vec![]);

    let text_x = SAFE_MARGIN + POEM_BOX_PADDING;
    let mut y = box_top - POEM_BOX_PADDING - BODY_SIZE;
    canvas.fill_color(INK);
    for line in body {
        canvas.text(Font::Serif, BODY_SIZE, text_x, y, line);
        y -= BODY_LEADING;
    }

    if signature_height.is_some() && !page.poem.signature_line.is_empty() {
        y -= 22.0 - BODY_LEADING + 16.0;
        canvas.fill_color(SIGNATURE_INK);
        canvas.text(
            Font::SerifItalic,
            16.0,
            text_x,
            y,
            &page.poem.signature_line,
        );
        if !page.poem.sender_line.is_empty() {
            y -= 16.0 * 1.4 + 6.0;
            canvas.text(Font::SerifItalic, 20.0, text_x, y, &page.poem.sender_line);
        }
    }

    canvas.fill_color(SOFT_INK);
    canvas.centered(Font::Sans, 9.0, FOOTER_Y, page.footer);

    canvas
}

/// Greedy word wrap at `max_chars` characters per line.
///
/// Existing line breaks are kept, blank lines included. Words longer than a
/// full line are split.
pub fn wrap_text(text: &str, max_chars: usize) -> Vec<String> {
    let max_chars = max_chars.max(1);
    let mut out = Vec::new();
    for source_line in text.split('\n') {
        let source_line = source_line.trim_end_matches('\r');
        if source_line.trim().is_empty() {
            out.push(String::new());
            continue;
        }
        let mut current = String::new();
        let mut current_len = 0;
        for word in source_line.split_whitespace() {
            let mut word: Vec<char> = word.chars().collect();
            while word.len() > max_chars {
                if current_len > 0 {
                    out.push(std::mem::take(&mut current));
                    current_len = 0;
                }
                let rest = word.split_off(max_chars);
                out.push(word.into_iter().collect());
                word = rest;
            }
            let needed = if current_len == 0 {
                word.len()
            } else {
                current_len + 1 + word.len()
            };
            if needed > max_chars && current_len > 0 {
                out.push(std::mem::take(&mut current));
                current_len = 0;
            }
            if current_len > 0 {
                current.push(' ');
                current_len += 1;
            }
            current_len += word.len();
            current.extend(word);
        }
        if current_len > 0 {
            out.push(current);
        }
    }
    out
}

fn real(value: f32) -> Object {
    Object::Real(value)
}

fn literal(text: &str) -> Object {
    Object::String(encode_win_ansi(text), StringFormat::Literal)
}
