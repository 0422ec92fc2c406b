//! Upstream call failures.

use reqwest::StatusCode;

/// Why a single upstream call produced no value.
///
/// Callers on the digest path collapse this to `None`; the variants only
/// exist so the reason is visible in logs and to code that wants it.
#[derive(Debug, thiserror::Error)]
pub enum UpstreamError {
    /// Connection, DNS, IO or URL construction failure.
    #[error("request to {url} failed: {source}")]
    Transport {
        url: String,
        #[source]
        source: reqwest::Error,
    },

    /// The upstream answered with a non-2xx status.
    #[error("{url} returned {status}")]
    Status { url: String, status: StatusCode },

    /// The body could not be read or parsed.
    #[error("failed to decode body from {url}: {source}")]
    Decode {
        url: String,
        #[source]
        source: reqwest::Error,
    },
}

impl UpstreamError {
    /// The URL of the failed request.
    pub fn url(&self) -> &str {
        match self {
            UpstreamError::Transport { url, .. }
            | UpstreamError::Status { url, .. }
            | UpstreamError::Decode { url, .. } => url,
        }
    }
}
