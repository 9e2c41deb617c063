//! Artskart Export - main entry point

use anyhow::Result;
use artskart_common::logging::{init_logging, LogConfig, LogLevel};
use artskart_export::{export, ExportConfig};
use tracing::info;

#[tokio::main]
async fn main() -> Result<()> {
    let log_config = LogConfig::builder().level(LogLevel::Info).build();
    init_logging(&log_config)?;

    let config = ExportConfig::default();
    info!(base_url = %config.base_url, "Starting Artskart export");

    export::run(&config).await?;

    info!("Export finished");
    Ok(())
}
