use std::sync::Arc;

use anyhow::Result;
use clap::Parser;
use tracing::{error, info};

use soot::config::Config;
use soot::model::gemini::GeminiModel;
use soot::model::traits::{TextModel, UnconfiguredModel};

/// Soot: moderation gateway for user-submitted text.
///
/// Relays each submission to Gemini with a fixed moderation prompt and
/// returns the normalized verdict.
#[derive(Parser)]
#[command(name = "soot", version, about)]
struct Args {
    /// Port to listen on (overrides the PORT env var)
    #[arg(long)]
    port: Option<u16>,

    /// Address to bind
    #[arg(long, default_value = "0.0.0.0")]
    bind: String,
}

#[tokio::main]
async fn main() -> Result<()> {
    // Load .env file if present (silently ignore if missing)
    let _ = dotenvy::dotenv();

    // Set up structured logging
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("soot=info")),
        )
        .init();

    let args = Args::parse();
    let config = Config::load()?;

    // A missing key is not fatal: the server starts and every moderation
    // request fails until the key is provided.
    let model: Arc<dyn TextModel> = if config.gemini_api_key.is_empty() {
        error!("GEMINI_API_KEY not found in environment variables.");
        Arc::new(UnconfiguredModel)
    } else {
        let model = GeminiModel::new(
            config.gemini_api_key.clone(),
            config.gemini_model.clone(),
            &config.gemini_api_url,
            config.request_timeout,
        )?;
        info!(model = %config.gemini_model, "Gemini API configured successfully.");
        Arc::new(model)
    };

    let port = args.port.unwrap_or(config.port);
    soot::web::run_server(model, &args.bind, port).await
}
