use std::sync::Arc;

use anyhow::{Context, Result};
use tripbud::{RecommendationService, TripBudConfig, logging, web};

#[tokio::main]
async fn main() -> Result<()> {
    let config = TripBudConfig::load().context("Failed to load configuration")?;
    logging::init(&config.logging);

    let service = RecommendationService::from_config(&config)?;
    tracing::info!(
        version = tripbud::VERSION,
        provider_configured = service.provider_configured(),
        "Starting TripBud backend"
    );

    if let Err(e) = web::run(&config.server, Arc::new(service)).await {
        tracing::error!("{}", e.user_message());
        return Err(e).context("HTTP server failed");
    }

    Ok(())
}
