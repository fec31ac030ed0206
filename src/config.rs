use std::env;
use std::time::Duration;

use anyhow::Result;

/// Central configuration loaded from environment variables.
///
/// All secrets come from env vars (never hardcoded). The .env file
/// is loaded automatically at startup via dotenvy.
pub struct Config {
    /// Gemini API key. Empty when unset; the server still starts, but
    /// every moderation request fails until a key is provided.
    pub gemini_api_key: String,
    /// Model name used in the generateContent request path.
    pub gemini_model: String,
    /// Generative Language API base URL (overridable for tests and proxies).
    pub gemini_api_url: String,
    /// Upper bound on a single model call.
    pub request_timeout: Duration,
    /// HTTP listen port (the --port flag takes precedence).
    pub port: u16,
}

impl Config {
    /// Load configuration from environment variables.
    ///
    /// Everything has a default except the API key, which is allowed to be
    /// missing here; startup decides how to degrade without it.
    pub fn load() -> Result<Self> {
        let request_timeout = env::var("GEMINI_TIMEOUT_SECS")
            .ok()
            .and_then(|v| v.parse().ok())
            .map(Duration::from_secs)
            .unwrap_or_else(|| Duration::from_secs(30));

        let port = env::var("PORT")
            .ok()
            .and_then(|v| v.parse().ok())
            .unwrap_or(5000);

        Ok(Self {
            gemini_api_key: env::var("GEMINI_API_KEY").unwrap_or_default(),
            gemini_model: env::var("GEMINI_MODEL")
                .unwrap_or_else(|_| "gemini-2.0-flash".to_string()),
            gemini_api_url: env::var("GEMINI_API_URL")
                .unwrap_or_else(|_| crate::model::gemini::DEFAULT_API_URL.to_string()),
            request_timeout,
            port,
        })
    }
}
