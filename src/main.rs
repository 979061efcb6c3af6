//! Heliconia Bot — entry point.
//!
//! Startup sequence:
//!   1. Load .env (if present)
//!   2. Load config (`ENV` decides the twitter provider)
//!   3. Init logger at the configured level
//!   4. Build the selected twitter provider
//!   5. Print status and exit

use heliconia_bot::{config, error::AppError, logger, twitter::providers};
use tracing::info;

#[tokio::main]
async fn main() {
    if let Err(e) = run().await {
        eprintln!("error: {e}");
        std::process::exit(1);
    }
}

async fn run() -> Result<(), AppError> {
    // Load .env if present — ignore errors (file is optional).
    let _ = dotenvy::dotenv();

    let config = config::load()?;

    // Strict level validation up front; init itself accepts any EnvFilter
    // directive via RUST_LOG.
    logger::parse_level(&config.log_level)?;
    logger::init(&config.log_level)?;

    info!(
        bot_name = %config.bot_name,
        env = %config.twitter.env,
        log_level = %config.log_level,
        "config loaded"
    );

    let provider = providers::build(&config.twitter, config.bearer_token)
        .map_err(|e| AppError::Config(e.to_string()))?;

    info!(kind = provider.kind(), "twitter provider ready");
    println!("✓ Bot initialized: provider={}", provider.kind());

    Ok(())
}
