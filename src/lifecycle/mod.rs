//! Lifecycle management subsystem.
//!
//! # Data Flow
//! ```text
//! Startup (main.rs):
//!     Load config → Validate → Telemetry → Bind listener → Serve
//!
//! Shutdown (shutdown.rs, signals.rs):
//!     SIGTERM/SIGINT or Shutdown::trigger → Shutdown::signal resolves
//!         → Stop accepting → Drain → Exit
//! ```
//!
//! # Design Decisions
//! - Fail fast: any startup error is fatal
//! - Telemetry is dropped last so in-flight spans are flushed

pub mod shutdown;
pub mod signals;

pub use shutdown::Shutdown;
pub use signals::os_signal;
