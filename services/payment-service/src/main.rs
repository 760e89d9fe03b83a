use std::net::SocketAddr;

use anyhow::Result;
use dotenvy::dotenv;
use payment_service::{create_app, Config};
use shared::telemetry::{self, TelemetryConfig};
use tracing::info;

#[tokio::main]
async fn main() -> Result<()> {
    dotenv().ok();

    let telemetry_config = TelemetryConfig::from_env("payment-service");
    telemetry::init_telemetry(telemetry_config)?;

    let config = Config::from_env();
    info!("Starting payment-service on {}:{}", config.host, config.port);

    let app = create_app();

    let addr: SocketAddr = format!("{}:{}", config.host, config.port).parse()?;
    let listener = tokio::net::TcpListener::bind(addr).await?;
    info!("HTTP server listening on {}", addr);

    axum::serve(listener, app).await?;

    Ok(())
}
