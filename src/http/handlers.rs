//! Route handlers.

use axum::{
    extract::{Path, State},
    http::StatusCode,
    response::IntoResponse,
    Json,
};
use serde_json::Value;
use tracing::Instrument;

use crate::digest::Digest;
use crate::http::server::AppState;
use crate::upstream::client::collapse;

/// Body of `GET /error`.
pub const ERROR_BODY: &str = "404 Not Found :(";

/// Body of every unmatched route.
pub const NOT_FOUND_BODY: &str = "Not Found";

/// `GET /digest/{city}`: weather, news and fact, each possibly null.
///
/// The `digest` span covers the whole handler and closes on every exit
/// path, including a dropped request future.
pub async fn digest(State(state): State<AppState>, Path(city): Path<String>) -> Json<Digest> {
    let span = tracing::info_span!("digest", city = %city);

    async move {
        let digest = Digest::gather(&state.upstream, &city).await;
        tracing::debug!(
            weather = digest.weather.is_some(),
            news = digest.news.is_some(),
            fact = digest.fact.is_some(),
            "Digest assembled"
        );
        Json(digest)
    }
    .instrument(span)
    .await
}

/// `GET /proxy/{city}`: relay of this process's own digest, or `null`.
pub async fn proxy(
    State(state): State<AppState>,
    Path(city): Path<String>,
) -> Json<Option<Value>> {
    let result = state
        .upstream
        .fetch_digest(&state.self_base_url, &city)
        .await;
    Json(collapse("digest", result))
}

/// `GET /`: usage text.
pub async fn root(State(state): State<AppState>) -> String {
    format!(
        "choose a city, and go to {}/proxy/:city to get information about it",
        state.self_base_url
    )
}

/// `GET /error`: always 404.
pub async fn error() -> impl IntoResponse {
    (StatusCode::NOT_FOUND, ERROR_BODY)
}

/// Fallback for unmatched paths and methods.
pub async fn not_found() -> impl IntoResponse {
    (StatusCode::NOT_FOUND, NOT_FOUND_BODY)
}
