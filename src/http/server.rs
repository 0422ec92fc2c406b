//! HTTP server setup and configuration.
//!
//! # Responsibilities
//! - Create Axum Router with all handlers
//! - Wire up middleware (request ID, server spans)
//! - Resolve the loopback base URL the proxy handler calls
//! - Serve until a shutdown signal arrives

use std::future::Future;
use std::net::{IpAddr, Ipv4Addr, Ipv6Addr, SocketAddr};
use std::sync::Arc;

use axum::{routing::get, Router};
use tokio::net::TcpListener;
use tower::ServiceBuilder;
use tower_http::{
    request_id::{MakeRequestUuid, PropagateRequestIdLayer, SetRequestIdLayer},
    trace::TraceLayer,
};

use crate::config::DigestConfig;
use crate::http::handlers;
use crate::observability::instrumentation;
use crate::upstream::UpstreamClient;

/// Application state injected into handlers.
#[derive(Clone)]
pub struct AppState {
    pub upstream: UpstreamClient,
    /// Where this process can reach its own routes, e.g. `http://127.0.0.1:3000`.
    pub self_base_url: Arc<str>,
}

/// HTTP server for the digest service.
pub struct HttpServer {
    config: DigestConfig,
    upstream: UpstreamClient,
}

impl HttpServer {
    /// Create a new HTTP server with the given configuration.
    pub fn new(config: DigestConfig) -> Result<Self, reqwest::Error> {
        let upstream = UpstreamClient::new(config.upstream.clone())?;
        Ok(Self { config, upstream })
    }

    /// Build the Axum router with all middleware layers.
    pub fn build_router(state: AppState) -> Router {
        Router::new()
            .route("/", get(handlers::root))
            .route("/digest/{city}", get(handlers::digest))
            .route("/proxy/{city}", get(handlers::proxy))
            .route("/error", get(handlers::error))
            .fallback(handlers::not_found)
            .method_not_allowed_fallback(handlers::not_found)
            .with_state(state)
            .layer(
                ServiceBuilder::new()
                    .layer(SetRequestIdLayer::x_request_id(MakeRequestUuid))
                    .layer(
                        TraceLayer::new_for_http()
                            .make_span_with(instrumentation::make_server_span)
                            .on_response(instrumentation::record_response),
                    )
                    .layer(PropagateRequestIdLayer::x_request_id()),
            )
    }

    /// Run the server, accepting connections on the given listener until
    /// `shutdown` resolves.
    pub async fn run<F>(self, listener: TcpListener, shutdown: F) -> Result<(), std::io::Error>
    where
        F: Future<Output = ()> + Send + 'static,
    {
        let addr = listener.local_addr()?;
        let self_base_url = self
            .config
            .listener
            .self_base_url
            .clone()
            .unwrap_or_else(|| loopback_base_url(addr));

        tracing::info!(
            address = %addr,
            self_base_url = %self_base_url,
            "HTTP server starting"
        );

        let state = AppState {
            upstream: self.upstream,
            self_base_url: self_base_url.into(),
        };
        let app = Self::build_router(state);

        axum::serve(listener, app)
            .with_graceful_shutdown(shutdown)
            .await?;

        tracing::info!("HTTP server stopped");
        Ok(())
    }
}

/// Base URL reaching `addr` from the same host. Wildcard binds are reached
/// through the loopback address of the same family.
pub fn loopback_base_url(addr: SocketAddr) -> String {
    let ip = match addr.ip() {
        IpAddr::V4(ip) if ip.is_unspecified() => IpAddr::V4(Ipv4Addr::LOCALHOST),
        IpAddr::V6(ip) if ip.is_unspecified() => IpAddr::V6(Ipv6Addr::LOCALHOST),
        ip => ip,
    };
    format!("http://{}", SocketAddr::new(ip, addr.port()))
}
