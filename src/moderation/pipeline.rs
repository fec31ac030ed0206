// The moderation pipeline: validate -> prompt -> call -> normalize.
//
// Failures are values. Each request ends in exactly one outcome and the
// web layer maps that outcome to an HTTP response; nothing in here knows
// about status codes.

use serde_json::Value;
use thiserror::Error;
use tracing::{debug, error};

use crate::model::traits::TextModel;
use crate::moderation::prompt;

/// Message returned to clients when the model's reply can't be used.
pub const PARSE_FAILURE_MESSAGE: &str = "Failed to parse Gemini response. Please try again.";

/// Failure taxonomy for one moderation request.
#[derive(Debug, Error)]
pub enum ModerationError {
    /// Submitted text was missing or whitespace-only.
    #[error("text is required")]
    EmptyText,

    /// The model replied with something other than the JSON verdict it
    /// was instructed to return.
    #[error("model reply was not a JSON verdict")]
    MalformedReply,

    /// The model call itself failed (transport, credentials, quota, timeout,
    /// or a reply with no usable candidates).
    #[error(transparent)]
    Provider(#[from] anyhow::Error),
}

/// Trim the submitted text, rejecting it when nothing remains.
pub fn validate_text(text: &str) -> Result<&str, ModerationError> {
    let trimmed = text.trim();
    if trimmed.is_empty() {
        return Err(ModerationError::EmptyText);
    }
    Ok(trimmed)
}

/// Normalize a raw model reply into a verdict object.
///
/// The reply must parse as a JSON object carrying a boolean `is_clean`.
/// The object passes through verbatim: `message` and any extra keys are
/// not validated. Any other shape means the model ignored its instructions
/// and the reply is unusable.
pub fn normalize_reply(raw: &str) -> Result<Value, ModerationError> {
    let trimmed = raw.trim();

    let value: Value = match serde_json::from_str(trimmed) {
        Ok(v) => v,
        Err(e) => {
            error!(error = %e, "Gemini reply is not valid JSON");
            return Err(ModerationError::MalformedReply);
        }
    };

    match value.get("is_clean") {
        Some(Value::Bool(_)) => Ok(value),
        _ => {
            error!("Gemini reply has no boolean is_clean field");
            Err(ModerationError::MalformedReply)
        }
    }
}

/// Run one piece of text through the full pipeline.
///
/// Stages run strictly in order with no retries. The model is never
/// called for text that fails validation.
pub async fn moderate(model: &dyn TextModel, text: &str) -> Result<Value, ModerationError> {
    let text = validate_text(text)?;
    let prompt = prompt::build_prompt(text);

    let reply = model.generate(&prompt).await?;
    debug!(reply = %reply, "Gemini raw reply");

    normalize_reply(&reply)
}
