//! # BizTime
//!
//! Application entry point that initializes:
//! - Tracing/logging subsystem
//! - Configuration loading
//! - Storage backend (PostgreSQL pool or in-memory store)
//! - HTTP server

use anyhow::Result;
use tracing::info;

use biztime::config::Settings;
use biztime::startup::Application;

#[tokio::main]
async fn main() -> Result<()> {
    biztime::telemetry::init_tracing();

    info!("Starting BizTime...");

    let settings = Settings::load()?;
    info!(
        host = %settings.server.host,
        port = %settings.server.port,
        backend = ?settings.database.backend,
        environment = %settings.environment,
        "Configuration loaded"
    );

    let application = Application::build(settings).await?;

    info!("Server ready to accept connections");
    application.run_until_stopped().await?;

    Ok(())
}
