use thiserror::Error;
use tracing_subscriber::{fmt, EnvFilter};

/// Logging setup shared by every service binary.
///
/// `RUST_LOG` selects the filter (defaults to `info`), `LOG_FORMAT=json`
/// switches to newline-delimited JSON for log shippers.
#[derive(Debug, Clone)]
pub struct TelemetryConfig {
    pub service_name: String,
    pub log_filter: String,
    pub json_output: bool,
}

impl TelemetryConfig {
    pub fn from_env(service_name: &str) -> Self {
        Self {
            service_name: service_name.to_string(),
            log_filter: std::env::var("RUST_LOG").unwrap_or_else(|_| "info".to_string()),
            json_output: std::env::var("LOG_FORMAT")
                .map(|format| format.eq_ignore_ascii_case("json"))
                .unwrap_or(false),
        }
    }
}

#[derive(Debug, Error)]
pub enum TelemetryError {
    #[error("invalid log filter directive: {0}")]
    Filter(#[from] tracing_subscriber::filter::ParseError),
    #[error("failed to install global subscriber: {0}")]
    SetGlobal(#[from] tracing::subscriber::SetGlobalDefaultError),
}

/// Installs the global tracing subscriber. Call once, before any spans or
/// events are emitted.
pub fn init_telemetry(config: TelemetryConfig) -> Result<(), TelemetryError> {
    let filter = EnvFilter::try_new(&config.log_filter)?;

    if config.json_output {
        let subscriber = fmt::Subscriber::builder()
            .with_env_filter(filter)
            .json()
            .finish();
        tracing::subscriber::set_global_default(subscriber)?;
    } else {
        let subscriber = fmt::Subscriber::builder().with_env_filter(filter).finish();
        tracing::subscriber::set_global_default(subscriber)?;
    }

    tracing::info!(service = %config.service_name, "telemetry initialized");
    Ok(())
}
