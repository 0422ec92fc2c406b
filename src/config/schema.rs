//! Configuration schema definitions.
//!
//! This module defines the complete configuration structure for the digest
//! service. All types derive Serde traits for deserialization from config files.

use serde::{Deserialize, Serialize};

/// Root configuration for the digest service.
#[derive(Debug, Clone, Deserialize, Serialize, Default)]
#[serde(default)]
pub struct DigestConfig {
    /// Listener configuration (bind address, loopback base URL).
    pub listener: ListenerConfig,

    /// Upstream service base URLs.
    pub upstream: UpstreamConfig,

    /// Trace export pipeline.
    pub tracing: TracingConfig,

    /// Logging settings.
    pub observability: ObservabilityConfig,
}

/// Listener configuration.
#[derive(Debug, Clone, Deserialize, Serialize)]
#[serde(default)]
pub struct ListenerConfig {
    /// Bind address (e.g., "0.0.0.0:3000").
    pub bind_address: String,

    /// Base URL the proxy handler uses to reach this process's own
    /// digest endpoint. Derived from the bound address when unset.
    pub self_base_url: Option<String>,
}

impl Default for ListenerConfig {
    fn default() -> Self {
        Self {
            bind_address: "0.0.0.0:3000".to_string(),
            self_base_url: None,
        }
    }
}

/// Base URLs of the three upstream services.
///
/// The request path is appended as `/<segment>` by plain concatenation.
#[derive(Debug, Clone, Deserialize, Serialize)]
#[serde(default)]
pub struct UpstreamConfig {
    pub weather_url: String,
    pub news_url: String,
    pub facts_url: String,
}

impl Default for UpstreamConfig {
    fn default() -> Self {
        Self {
            weather_url: "https://weather.workshop.epsagon.com/weather".to_string(),
            news_url: "https://news.workshop.epsagon.com/news".to_string(),
            facts_url: "https://facts.workshop.epsagon.com/facts".to_string(),
        }
    }
}

/// Wire transport used by the OTLP span exporter.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize, Serialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum OtlpProtocol {
    /// OTLP over gRPC (collector port 4317).
    #[default]
    Grpc,
    /// OTLP protobuf over HTTP (collector port 4318, `/v1/traces`).
    Http,
}

/// Trace export configuration.
#[derive(Debug, Clone, Deserialize, Serialize)]
#[serde(default)]
pub struct TracingConfig {
    /// Export spans to the collector. When false only logging is set up.
    pub enabled: bool,

    /// `service.name` resource attribute.
    pub service_name: String,

    /// Exporter transport.
    pub protocol: OtlpProtocol,

    /// Collector endpoint URL.
    pub endpoint: String,
}

impl Default for TracingConfig {
    fn default() -> Self {
        Self {
            enabled: true,
            service_name: "city-digest".to_string(),
            protocol: OtlpProtocol::Grpc,
            endpoint: "http://127.0.0.1:4317".to_string(),
        }
    }
}

/// Log output format.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize, Serialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum LogFormat {
    /// Human-readable single-line output.
    #[default]
    Text,
    /// One JSON object per event.
    Json,
}

/// Logging configuration.
#[derive(Debug, Clone, Deserialize, Serialize)]
#[serde(default)]
pub struct ObservabilityConfig {
    /// `EnvFilter` directives used when `RUST_LOG` is not set.
    pub log_filter: String,

    /// Output format for the fmt layer.
    pub log_format: LogFormat,
}

impl Default for ObservabilityConfig {
    fn default() -> Self {
        Self {
            log_filter: "city_digest=debug,tower_http=debug,opentelemetry=debug".to_string(),
            log_format: LogFormat::Text,
        }
    }
}
