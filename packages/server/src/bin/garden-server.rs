//! Vault Garden server binary
//!
//! # Usage
//!
//! ```bash
//! GARDEN_VAULT_PATH=~/notes GARDEN_INDEX_PATH=~/.garden/index.json cargo run --bin garden-server
//! ```
//!
//! # Environment Variables
//!
//! - `GARDEN_*`: see `garden_core::config`
//! - `RUST_LOG`: Logging level (e.g., "info", "debug", "garden_core=trace")
//!
//! The vault is scanned once at startup so new files show up in the admin
//! listing without a manual scan.

use garden_core::{GardenConfig, PublishingService};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("info")),
        )
        .init();

    let config = GardenConfig::from_env()?;
    tracing::info!("Vault: {}", config.vault_path.display());
    match &config.index_path {
        Some(path) => tracing::info!("Index snapshot: {}", path.display()),
        None => tracing::warn!("GARDEN_INDEX_PATH not set, publish state will not survive restarts"),
    }

    let service = PublishingService::from_config(&config).await?;
    match service.scan().await {
        Ok(report) => tracing::info!(
            "Startup scan: {} files, {} new",
            report.scanned_files,
            report.new_files
        ),
        Err(e) => tracing::warn!("Startup scan failed: {}", e),
    }

    garden_server::start_server(service, config.port).await
}
