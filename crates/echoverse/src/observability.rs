//! Logging setup for the EchoVerse binary.
//!
//! Logs go through `tracing-subscriber` with an `EnvFilter` (honouring
//! `RUST_LOG`) and either human-readable or JSON formatting. With the
//! `observability` feature, spans are additionally bridged to OpenTelemetry and
//! exported to stdout.

use std::env;
use tracing_subscriber::{EnvFilter, Layer, layer::SubscriberExt, util::SubscriberInitExt};

/// Configuration for logging and optional span export.
#[derive(Debug, Clone)]
pub struct ObservabilityConfig {
    /// Service name for telemetry attribution
    pub service_name: String,
    /// Service version
    pub service_version: String,
    /// Log level filter (e.g., "info", "debug")
    pub log_level: String,
    /// Enable JSON-formatted logs for structured logging
    pub json_logs: bool,
    /// Use `log_level` even when `RUST_LOG` is set
    pub force_log_level: bool,
}

impl ObservabilityConfig {
    /// Create a new configuration with the given service name.
    pub fn new(service_name: impl Into<String>) -> Self {
        Self {
            service_name: service_name.into(),
            service_version: env!("CARGO_PKG_VERSION").to_string(),
            log_level: env::var("RUST_LOG").unwrap_or_else(|_| "info".to_string()),
            json_logs: false,
            force_log_level: false,
        }
    }

    /// Set the service version.
    pub fn with_version(mut self, version: impl Into<String>) -> Self {
        self.service_version = version.into();
        self
    }

    /// Set the log level.
    pub fn with_log_level(mut self, level: impl Into<String>) -> Self {
        self.log_level = level.into();
        self
    }

    /// Set the log level, ignoring `RUST_LOG`.
    pub fn with_forced_log_level(mut self, level: impl Into<String>) -> Self {
        self.log_level = level.into();
        self.force_log_level = true;
        self
    }

    /// Enable JSON-formatted logs.
    pub fn with_json_logs(mut self, enabled: bool) -> Self {
        self.json_logs = enabled;
        self
    }

    /// Build the level filter. An explicit `RUST_LOG` wins over `log_level`
    /// unless the level was forced.
    fn env_filter(&self) -> Result<EnvFilter, Box<dyn std::error::Error>> {
        if self.force_log_level {
            return Ok(EnvFilter::try_new(&self.log_level)?);
        }
        Ok(EnvFilter::try_from_default_env().or_else(|_| EnvFilter::try_new(&self.log_level))?)
    }
}

impl Default for ObservabilityConfig {
    fn default() -> Self {
        Self::new(env!("CARGO_PKG_NAME"))
    }
}

/// Initialize logging with the default configuration.
///
/// For more control, use [`init_observability_with_config`].
pub fn init_observability() -> Result<(), Box<dyn std::error::Error>> {
    init_observability_with_config(ObservabilityConfig::default())
}

/// Initialize logging with a custom configuration.
///
/// Logs are written to stderr so that command output on stdout stays clean.
///
/// # Errors
///
/// Fails if the filter is invalid or a global subscriber is already installed.
pub fn init_observability_with_config(
    config: ObservabilityConfig,
) -> Result<(), Box<dyn std::error::Error>> {
    let env_filter = config.env_filter()?;

    let fmt_layer = if config.json_logs {
        tracing_subscriber::fmt::layer()
            .json()
            .with_writer(std::io::stderr)
            .with_target(true)
            .with_level(true)
            .boxed()
    } else {
        tracing_subscriber::fmt::layer()
            .with_writer(std::io::stderr)
            .with_target(false)
            .with_level(true)
            .boxed()
    };

    let registry = tracing_subscriber::registry().with(env_filter).with(fmt_layer);

    #[cfg(feature = "observability")]
    registry.with(otel::layer(&config)).try_init()?;

    #[cfg(not(feature = "observability"))]
    registry.try_init()?;

    Ok(())
}

/// Flush telemetry before exit.
///
/// OpenTelemetry SDK providers flush on drop, so this only exists to give the
/// binary a single shutdown call regardless of features.
pub fn shutdown_observability() {}

#[cfg(feature = "observability")]
mod otel {
    use super::ObservabilityConfig;
    use opentelemetry::{KeyValue, global, trace::TracerProvider};
    use opentelemetry_sdk::{Resource, trace::SdkTracerProvider};
    use opentelemetry_stdout::SpanExporter;
    use tracing_subscriber::registry::LookupSpan;

    /// OpenTelemetry layer exporting spans to stdout.
    pub(super) fn layer<S>(config: &ObservabilityConfig) -> impl tracing_subscriber::Layer<S>
    where
        S: tracing::Subscriber + for<'span> LookupSpan<'span>,
    {
        let resource = Resource::builder()
            .with_service_name(config.service_name.clone())
            .with_attributes(vec![KeyValue::new(
                "service.version",
                config.service_version.clone(),
            )])
            .build();

        let provider = SdkTracerProvider::builder()
            .with_simple_exporter(SpanExporter::default())
            .with_resource(resource)
            .build();

        global::set_tracer_provider(provider.clone());

        let tracer = provider.tracer(config.service_name.clone());
        tracing_opentelemetry::layer().with_tracer(tracer)
    }
}
