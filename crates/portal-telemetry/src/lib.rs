//! Process-wide logging setup.

use thiserror::Error;
use tracing_subscriber::layer::SubscriberExt;
use tracing_subscriber::util::SubscriberInitExt;
use tracing_subscriber::{fmt, EnvFilter};
use typed_builder::TypedBuilder;

pub const DEFAULT_DIRECTIVE: &str = "info";

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum LogFormat {
    #[default]
    Text,
    Json,
}

#[derive(Debug, Clone, TypedBuilder)]
pub struct TelemetryConfig {
    #[builder(default)]
    pub format: LogFormat,
    /// Filter used when `RUST_LOG` is unset or empty.
    #[builder(default = DEFAULT_DIRECTIVE.to_string(), setter(into))]
    pub default_directive: String,
}

#[derive(Debug, Error)]
pub enum TelemetryError {
    #[error("invalid log filter: {0}")]
    Filter(#[from] tracing_subscriber::filter::ParseError),
    #[error("failed to install log bridge: {0}")]
    LogBridge(#[from] tracing_log::log::SetLoggerError),
    #[error("failed to install subscriber: {0}")]
    Subscriber(#[from] tracing_subscriber::util::TryInitError),
}

/// Installs the global subscriber and routes `log` records into it.
///
/// Fails if called more than once per process.
pub fn init(config: &TelemetryConfig) -> Result<(), TelemetryError> {
    let filter = env_filter(&config.default_directive)?;
    tracing_log::LogTracer::init()?;

    let registry = tracing_subscriber::registry().with(filter);
    match config.format {
        LogFormat::Text => registry.with(fmt::layer()).try_init()?,
        LogFormat::Json => registry.with(fmt::layer().json()).try_init()?,
    }

    tracing::debug!(format = ?config.format, "telemetry initialized");
    Ok(())
}

fn env_filter(default_directive: &str) -> Result<EnvFilter, TelemetryError> {
    match std::env::var(EnvFilter::DEFAULT_ENV) {
        Ok(directives) if !directives.trim().is_empty() => Ok(EnvFilter::try_new(directives)?),
        _ => Ok(EnvFilter::try_new(default_directive)?),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn builder_defaults() {
        let config = TelemetryConfig::builder().build();
        assert_eq!(config.format, LogFormat::Text);
        assert_eq!(config.default_directive, "info");
    }

    #[test]
    fn default_directive_is_parsed() {
        assert!(EnvFilter::try_new("portal_gateway=debug,tower_http=info").is_ok());
        assert!(matches!(
            EnvFilter::try_new("portal=notalevel").map_err(TelemetryError::from),
            Err(TelemetryError::Filter(_))
        ));
    }
}
