//! Tracing bootstrap.
//!
//! Builds the span export pipeline once at startup, in a fixed order:
//! resource → tracer provider → OTLP exporter → simple span processor →
//! `tracing` bridge layer → subscriber installed as the process default.
//!
//! The provider is owned by [`Telemetry`] rather than registered as the
//! OpenTelemetry global. Request code never touches it directly.

use opentelemetry::trace::TracerProvider as _;
use opentelemetry::KeyValue;
use opentelemetry_otlp::{Protocol, SpanExporter, WithExportConfig};
use opentelemetry_sdk::trace::SdkTracerProvider;
use opentelemetry_sdk::Resource;
use opentelemetry_semantic_conventions::resource::SERVICE_VERSION;
use tracing_subscriber::layer::SubscriberExt;
use tracing_subscriber::util::{SubscriberInitExt, TryInitError};

use crate::config::{ObservabilityConfig, OtlpProtocol, TracingConfig};
use crate::observability::logging;

/// Instrumentation scope name for spans produced by this service.
pub const TRACER_NAME: &str = "city-digest";

/// Error type for telemetry bootstrap.
#[derive(Debug, thiserror::Error)]
pub enum TelemetryError {
    #[error("failed to build OTLP span exporter: {0}")]
    Exporter(#[from] opentelemetry_otlp::ExporterBuildError),

    #[error("failed to install tracing subscriber: {0}")]
    Subscriber(#[from] TryInitError),
}

/// Owner of the trace export pipeline.
///
/// Keep it alive for the lifetime of the process; dropping it flushes and
/// shuts down the tracer provider.
pub struct Telemetry {
    provider: Option<SdkTracerProvider>,
}

impl Telemetry {
    /// Install logging and, when enabled, the OTLP span export pipeline.
    pub fn init(
        tracing_config: &TracingConfig,
        observability: &ObservabilityConfig,
    ) -> Result<Self, TelemetryError> {
        let provider = if tracing_config.enabled {
            Some(build_provider(tracing_config)?)
        } else {
            None
        };

        let telemetry = Self::with_provider(provider, observability)?;

        if telemetry.is_exporting() {
            tracing::info!(
                service.name = %tracing_config.service_name,
                otel.protocol = ?tracing_config.protocol,
                otel.endpoint = %tracing_config.endpoint,
                "Telemetry initialized with OTLP span exporter"
            );
        } else {
            tracing::info!(otel.enabled = false, "Telemetry initialized (logging only)");
        }

        Ok(telemetry)
    }

    /// Install the subscriber around an already built provider, bridging
    /// `tracing` spans into it. `None` installs logging only.
    pub fn with_provider(
        provider: Option<SdkTracerProvider>,
        observability: &ObservabilityConfig,
    ) -> Result<Self, TelemetryError> {
        let otel_layer = provider
            .as_ref()
            .map(|p| tracing_opentelemetry::layer().with_tracer(p.tracer(TRACER_NAME)));

        tracing_subscriber::registry()
            .with(logging::env_filter(observability))
            .with(otel_layer)
            .with(logging::fmt_layer(observability.log_format))
            .try_init()?;

        Ok(Self { provider })
    }

    /// Whether spans are exported to a collector.
    pub fn is_exporting(&self) -> bool {
        self.provider.is_some()
    }
}

impl Drop for Telemetry {
    fn drop(&mut self) {
        if let Some(provider) = self.provider.take() {
            if let Err(e) = provider.shutdown() {
                eprintln!("Failed to shutdown tracer provider: {:?}", e);
            }
        }
    }
}

/// Provider tagged with the service name, exporting through one
/// synchronous (non-batching) span processor.
pub fn build_provider(config: &TracingConfig) -> Result<SdkTracerProvider, TelemetryError> {
    let resource = Resource::builder()
        .with_service_name(config.service_name.clone())
        .with_attribute(KeyValue::new(SERVICE_VERSION, env!("CARGO_PKG_VERSION")))
        .build();

    let exporter = build_exporter(config)?;

    let provider = SdkTracerProvider::builder()
        .with_resource(resource)
        .with_simple_exporter(exporter)
        .build();

    Ok(provider)
}

fn build_exporter(config: &TracingConfig) -> Result<SpanExporter, TelemetryError> {
    let exporter = match config.protocol {
        OtlpProtocol::Grpc => SpanExporter::builder()
            .with_tonic()
            .with_endpoint(config.endpoint.clone())
            .build()?,
        OtlpProtocol::Http => SpanExporter::builder()
            .with_http()
            .with_protocol(Protocol::HttpBinary)
            .with_endpoint(config.endpoint.clone())
            .build()?,
    };

    Ok(exporter)
}
