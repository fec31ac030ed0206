// Text model trait — the swap-ready abstraction.
//
// This trait defines the interface for prompt completion. The default
// implementation calls Google's Gemini generateContent API.

use anyhow::Result;
use async_trait::async_trait;

/// Trait for generating a completion from a prompt. Implementations must
/// be async because providers are HTTP APIs.
#[async_trait]
pub trait TextModel: Send + Sync {
    /// Send one prompt and return the model's raw text reply.
    async fn generate(&self, prompt: &str) -> Result<String>;
}

/// Stand-in model installed when no API key is configured. The server
/// starts normally; every call fails with a message naming the missing
/// credential instead of silently producing fake verdicts.
pub struct UnconfiguredModel;

#[async_trait]
impl TextModel for UnconfiguredModel {
    async fn generate(&self, _prompt: &str) -> Result<String> {
        anyhow::bail!("GEMINI_API_KEY is not configured. Add it to your .env file.")
    }
}
