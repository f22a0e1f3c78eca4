// src/main.rs

use std::str::FromStr;

use tracing::{info, warn, Level};
use tracing_subscriber::FmtSubscriber;

use elara::config::ElaraConfig;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let config = ElaraConfig::from_env();

    // Initialize tracing
    let level = Level::from_str(&config.log_level).unwrap_or(Level::INFO);
    let subscriber = FmtSubscriber::builder().with_max_level(level).finish();
    tracing::subscriber::set_global_default(subscriber)?;

    info!("Starting Elara relay");
    info!("Model: {}", config.model);
    if config.api_key.is_some() {
        info!("Gateway credential: configured");
    } else {
        warn!("Gateway credential: MISSING, chat turns will fail until ELARA_API_KEY is set");
    }

    elara::relay::run(config).await
}
