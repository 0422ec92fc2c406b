//! Observability subsystem.
//!
//! # Data Flow
//! ```text
//! All subsystems produce:
//!     → logging.rs (structured log events)
//!     → instrumentation.rs (one server span per request)
//!     → propagation.rs (W3C trace context in / out)
//!
//! telemetry.rs wires them together at startup:
//!     → tracing-opentelemetry layer → simple span processor → OTLP exporter
//!     → collector (gRPC or HTTP)
//! ```
//!
//! # Design Decisions
//! - Structured logging for machine parsing
//! - Request ID flows into every server span
//! - Exactly one exporter and one processor
//! - Export is optional; logging always runs

pub mod instrumentation;
pub mod logging;
pub mod propagation;
pub mod telemetry;

pub use telemetry::{Telemetry, TelemetryError};
