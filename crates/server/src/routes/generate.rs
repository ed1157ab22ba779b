use crate::error::ServerResult;
use crate::state::ServerState;
use axum::extract::rejection::JsonRejection;
use axum::extract::State;
use axum::Json;
use carecards::{generate_poem, RandomPicker, RawGenerationRequest};
use serde::{Deserialize, Serialize};
use std::sync::Arc;

/// Generated poem, returned verbatim
#[derive(Debug, Serialize, Deserialize)]
pub struct GenerateResponse {
    pub poem: String,
}

/// Generate a poem for the demo form (POST /api/demo-generate)
///
/// Malformed JSON and unknown occasion/tone/signature values are rejected as
/// `BAD_REQUEST`; blank required fields as `MISSING_FIELDS`.
pub async fn demo_generate(
    State(state): State<Arc<ServerState>>,
    payload: Result<Json<RawGenerationRequest>, JsonRejection>,
) -> ServerResult<Json<GenerateResponse>> {
    let Json(raw) = payload?;

    // Fresh randomness per request; no generator is shared across requests.
    let mut picker = RandomPicker::new();
    let poem = generate_poem(raw, &state.config.composer, &mut picker)?;

    Ok(Json(GenerateResponse {
        poem: poem.into_string(),
    }))
}
