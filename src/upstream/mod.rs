//! Upstream services subsystem.
//!
//! # Data Flow
//! ```text
//! digest handler
//!     → client.rs (weather / news / fact, one GET each)
//!     → error.rs (UpstreamError: transport, status, decode)
//!     → collapsed to Option before it reaches the response
//!
//! fact lookup
//!     → fact_key.rs (server-local month/day → "/<month>/<day>")
//! ```
//!
//! # Design Decisions
//! - Partial failure never fails the digest
//! - No timeout, retry or circuit breaking; transport defaults apply

pub mod client;
pub mod error;
pub mod fact_key;

pub use client::UpstreamClient;
pub use error::UpstreamError;
pub use fact_key::FactKey;
