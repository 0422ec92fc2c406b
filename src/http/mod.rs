//! HTTP protocol handling subsystem.
//!
//! # Data Flow
//! ```text
//! TCP connection
//!     → server.rs (Axum setup, request ID, server span)
//!     → handlers.rs
//!         /digest/{city} → upstream fan-out → Digest
//!         /proxy/{city}  → loopback GET /digest/{city}
//!         /, /error, fallback → static responses
//!     → Send to client
//! ```

pub mod handlers;
pub mod server;

pub use server::{AppState, HttpServer};
