// POST /check_text — the moderation endpoint.
//
// Returns 200 with the verdict object on success.
// Returns 400 if the text is missing or whitespace-only.
// Returns 500 if the model call fails or its reply can't be used.

use axum::extract::State;
use axum::Json;
use serde::Deserialize;
use serde_json::Value;

use crate::moderation::pipeline::{self, ModerationError};
use crate::web::AppState;

#[derive(Deserialize)]
pub struct CheckTextRequest {
    /// Text to classify. A missing field is treated as empty and rejected
    /// by validation.
    #[serde(default)]
    pub text: String,
}

/// POST /check_text — run one piece of text through the pipeline.
pub async fn check_text(
    State(state): State<AppState>,
    Json(body): Json<CheckTextRequest>,
) -> Result<Json<Value>, ModerationError> {
    let verdict = pipeline::moderate(state.model.as_ref(), &body.text).await?;
    Ok(Json(verdict))
}
