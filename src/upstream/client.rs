//! HTTP client for the weather, news and facts services.
//!
//! # Responsibilities
//! - Build upstream URLs by appending one path segment to a base URL
//! - Issue exactly one GET per lookup (no timeout, no retry)
//! - Propagate trace context on every outbound request
//! - Collapse every failure mode to absence for the digest

use reqwest::header::HeaderMap;
use reqwest::{Client, Response};
use serde_json::Value;

use crate::config::UpstreamConfig;
use crate::observability::propagation;
use crate::upstream::{FactKey, UpstreamError};

/// Client for the three upstream services plus the loopback digest call.
#[derive(Debug, Clone)]
pub struct UpstreamClient {
    http: Client,
    config: UpstreamConfig,
}

impl UpstreamClient {
    /// Client that ignores `HTTP_PROXY`/`HTTPS_PROXY`; the loopback digest
    /// call must reach this process directly.
    pub fn new(config: UpstreamConfig) -> Result<Self, reqwest::Error> {
        let http = Client::builder().no_proxy().build()?;
        Ok(Self { http, config })
    }

    /// Weather for `city`, or `None` on any failure.
    pub async fn weather(&self, city: &str) -> Option<Value> {
        collapse("weather", self.fetch_weather(city).await)
    }

    /// News for `city`, or `None` on any failure.
    pub async fn news(&self, city: &str) -> Option<Value> {
        collapse("news", self.fetch_news(city).await)
    }

    /// Fact of the day for today's local date, or `None` on any failure.
    pub async fn fact_for_today(&self) -> Option<String> {
        collapse("fact", self.fetch_fact(FactKey::today()).await)
    }

    pub async fn fetch_weather(&self, city: &str) -> Result<Value, UpstreamError> {
        self.get_json("weather", join_url(&self.config.weather_url, city))
            .await
    }

    pub async fn fetch_news(&self, city: &str) -> Result<Value, UpstreamError> {
        self.get_json("news", join_url(&self.config.news_url, city))
            .await
    }

    pub async fn fetch_fact(&self, key: FactKey) -> Result<String, UpstreamError> {
        self.get_text("fact", join_url(&self.config.facts_url, &key.path()))
            .await
    }

    /// Fetch this service's own digest for `city` through `self_base_url`.
    pub async fn fetch_digest(
        &self,
        self_base_url: &str,
        city: &str,
    ) -> Result<Value, UpstreamError> {
        let base = format!("{}/digest", self_base_url);
        self.get_json("digest", join_url(&base, city)).await
    }

    #[tracing::instrument(
        name = "upstream.request",
        skip(self),
        fields(otel.kind = "client", http.response.status_code = tracing::field::Empty)
    )]
    async fn get_json(&self, upstream: &'static str, url: String) -> Result<Value, UpstreamError> {
        let response = self.send(&url).await?;
        response
            .json::<Value>()
            .await
            .map_err(|source| UpstreamError::Decode { url, source })
    }

    #[tracing::instrument(
        name = "upstream.request",
        skip(self),
        fields(otel.kind = "client", http.response.status_code = tracing::field::Empty)
    )]
    async fn get_text(&self, upstream: &'static str, url: String) -> Result<String, UpstreamError> {
        let response = self.send(&url).await?;
        response
            .text()
            .await
            .map_err(|source| UpstreamError::Decode { url, source })
    }

    async fn send(&self, url: &str) -> Result<Response, UpstreamError> {
        let mut headers = HeaderMap::new();
        propagation::inject_context(&mut headers);

        let response = self
            .http
            .get(url)
            .headers(headers)
            .send()
            .await
            .map_err(|source| UpstreamError::Transport {
                url: url.to_string(),
                source,
            })?;

        let status = response.status();
        tracing::Span::current().record("http.response.status_code", status.as_u16());

        if !status.is_success() {
            return Err(UpstreamError::Status {
                url: url.to_string(),
                status,
            });
        }

        Ok(response)
    }
}

/// Append `segment` to `base` as a single path segment, verbatim.
pub fn join_url(base: &str, segment: &str) -> String {
    format!("{}/{}", base, segment)
}

/// Drop the failure reason, keeping a debug trace of it.
pub fn collapse<T>(upstream: &'static str, result: Result<T, UpstreamError>) -> Option<T> {
    match result {
        Ok(value) => Some(value),
        Err(e) => {
            tracing::debug!(upstream, url = %e.url(), error = %e, "Upstream call failed, substituting null");
            None
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn unreachable_config() -> UpstreamConfig {
        // Port 9 (discard) on loopback is not expected to accept connections.
        UpstreamConfig {
            weather_url: "http://127.0.0.1:9/weather".into(),
            news_url: "http://127.0.0.1:9/news".into(),
            facts_url: "http://127.0.0.1:9/facts".into(),
        }
    }

    #[test]
    fn join_url_is_plain_concatenation() {
        assert_eq!(join_url("http://h/weather", "Paris"), "http://h/weather/Paris");
        assert_eq!(join_url("http://h/weather", ""), "http://h/weather/");
        assert_eq!(join_url("http://h/facts", "3/7"), "http://h/facts/3/7");
    }

    #[test]
    fn collapse_keeps_success_and_drops_error() {
        let ok: Result<u8, UpstreamError> = Ok(7);
        assert_eq!(collapse("weather", ok), Some(7));

        let err: Result<u8, UpstreamError> = Err(UpstreamError::Status {
            url: "http://h/news/x".into(),
            status: reqwest::StatusCode::BAD_GATEWAY,
        });
        assert_eq!(collapse("news", err), None);
    }

    #[tokio::test]
    async fn unreachable_upstream_is_transport_error() {
        let client = UpstreamClient::new(unreachable_config()).unwrap();

        let err = client.fetch_weather("Paris").await.unwrap_err();
        assert!(matches!(err, UpstreamError::Transport { .. }));
        assert_eq!(err.url(), "http://127.0.0.1:9/weather/Paris");
    }

    #[tokio::test]
    async fn unreachable_upstreams_collapse_to_none() {
        let client = UpstreamClient::new(unreachable_config()).unwrap();

        assert!(client.weather("Paris").await.is_none());
        assert!(client.news("Paris").await.is_none());
        assert!(client.fact_for_today().await.is_none());
    }

    #[tokio::test]
    async fn invalid_url_is_transport_error() {
        let client = UpstreamClient::new(UpstreamConfig {
            weather_url: "not a url".into(),
            ..unreachable_config()
        })
        .unwrap();

        let err = client.fetch_weather("Paris").await.unwrap_err();
        assert!(matches!(err, UpstreamError::Transport { .. }));
    }
}
