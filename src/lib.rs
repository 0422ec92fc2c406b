//! City digest service library.
//!
//! # Architecture Overview
//!
//! ```text
//!     GET /digest/{city}
//!     ─────────────────▶ http ──▶ digest ──┬──▶ upstream: weather/{city}
//!                                          ├──▶ upstream: news/{city}
//!                                          └──▶ upstream: facts/{month}/{day}
//!
//!     GET /proxy/{city}
//!     ─────────────────▶ http ──▶ upstream: loopback /digest/{city}
//!
//!     Cross-cutting: config, observability (logs + OTLP spans), lifecycle
//! ```

pub mod config;
pub mod digest;
pub mod http;
pub mod lifecycle;
pub mod observability;
pub mod upstream;

pub use config::DigestConfig;
pub use digest::Digest;
pub use http::HttpServer;
pub use lifecycle::Shutdown;
pub use observability::Telemetry;
