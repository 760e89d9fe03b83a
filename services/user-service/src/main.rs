use std::net::SocketAddr;

use anyhow::Result;
use dotenvy::dotenv;
use shared::telemetry::{self, TelemetryConfig};
use tracing::info;
use user_service::{create_app, Config};

#[tokio::main]
async fn main() -> Result<()> {
    dotenv().ok();

    let telemetry_config = TelemetryConfig::from_env("user-service");
    telemetry::init_telemetry(telemetry_config)?;

    let config = Config::from_env();
    info!("Starting user-service on {}:{}", config.host, config.port);

    let app = create_app();

    let addr: SocketAddr = format!("{}:{}", config.host, config.port).parse()?;
    let listener = tokio::net::TcpListener::bind(addr).await?;
    info!("HTTP server listening on {}", addr);

    axum::serve(listener, app).await?;

    Ok(())
}
