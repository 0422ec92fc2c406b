//! HTTP server instrumentation.
//!
//! One `server` span per inbound request, parented on the caller's W3C trace
//! context when present, with the response status recorded on completion.
//! Plugged into `tower_http::trace::TraceLayer`.

use std::time::Duration;

use axum::body::Body;
use axum::http::{Request, Response};
use tracing::Span;
use tracing_opentelemetry::OpenTelemetrySpanExt;

use crate::observability::propagation;

/// `MakeSpan` for the server's `TraceLayer`.
pub fn make_server_span(request: &Request<Body>) -> Span {
    let request_id = request
        .headers()
        .get("x-request-id")
        .and_then(|v| v.to_str().ok())
        .unwrap_or("unknown");

    let span = tracing::info_span!(
        "http.request",
        otel.name = %format!("{} {}", request.method(), request.uri().path()),
        otel.kind = "server",
        http.request.method = %request.method(),
        url.path = %request.uri().path(),
        request_id = %request_id,
        http.response.status_code = tracing::field::Empty,
    );

    let parent = propagation::extract_context(request.headers());
    let _ = span.set_parent(parent);

    span
}

/// `OnResponse` for the server's `TraceLayer`.
pub fn record_response(response: &Response<Body>, latency: Duration, span: &Span) {
    let status = response.status().as_u16();
    span.record("http.response.status_code", status);

    tracing::debug!(
        status,
        latency_ms = latency.as_millis() as u64,
        "Request completed"
    );
}
