use crate::error::ServerResult;
use axum::extract::rejection::JsonRejection;
use axum::http::header::{CONTENT_DISPOSITION, CONTENT_TYPE};
use axum::http::HeaderValue;
use axum::response::{IntoResponse, Response};
use axum::Json;
use carecards::{render_card, CardRequest};
use chrono::Local;
use percent_encoding::{utf8_percent_encode, AsciiSet, NON_ALPHANUMERIC};

/// Render a card and return it as a PDF download (POST /api/card)
pub async fn create_card(
    payload: Result<Json<CardRequest>, JsonRejection>,
) -> ServerResult<Response> {
    let Json(request) = payload?;

    let card = render_card(&request, Local::now().date_naive())?;
    tracing::info!(
        mode = ?request.mode,
        has_signature = card.layout.poem_page.poem.has_signature(),
        "card_downloaded"
    );

    let headers = [
        (CONTENT_TYPE, HeaderValue::from_static("application/pdf")),
        (CONTENT_DISPOSITION, content_disposition(&card.file_name)),
    ];
    Ok((headers, card.pdf).into_response())
}

// Everything except RFC 3986 unreserved characters is escaped.
const RFC5987_ATTR: &AsciiSet = &NON_ALPHANUMERIC
    .remove(b'-')
    .remove(b'.')
    .remove(b'_')
    .remove(b'~');

/// `attachment` disposition for `file_name`.
///
/// Names that are not plain printable ASCII get an ASCII fallback plus an
/// RFC 5987 `filename*` parameter carrying the UTF-8 name.
pub fn content_disposition(file_name: &str) -> HeaderValue {
    let plain = file_name
        .bytes()
        .all(|b| b.is_ascii_graphic() && b != b'"' && b != b'\\');
    let value = if plain {
        format!("attachment; filename=\"{file_name}\"")
    } else {
        format!(
            "attachment; filename=\"care-card.pdf\"; filename*=UTF-8''{}",
            utf8_percent_encode(file_name, RFC5987_ATTR)
        )
    };
    HeaderValue::from_str(&value)
        .unwrap_or_else(|_| HeaderValue::from_static("attachment; filename=\"care-card.pdf\""))
}
