// HTTP surface - a single live-lookup route plus a liveness probe
//
// Errors are in-band: the lookup endpoint always answers 200 with a
// LiveLookupResponse body, and configuration or input problems are
// reported through the `reason` field.

use axum::extract::{Query, State};
use axum::http::header::{self, HeaderValue};
use axum::response::{IntoResponse, Response};
use axum::routing::get;
use axum::{Json, Router};
use serde::Deserialize;
use std::sync::Arc;

use crate::resolver::{LiveLookupResponse, LiveResolver};

#[derive(Clone)]
pub struct AppState {
    /// Present only when an API key is configured
    pub resolver: Option<Arc<LiveResolver>>,
}

#[derive(Debug, Deserialize)]
pub struct LiveQuery {
    #[serde(default)]
    pub input: String,
}

pub fn build_router(state: AppState) -> Router {
    Router::new()
        .route("/youtube/live", get(youtube_live))
        .route("/healthz", get(healthz))
        .with_state(state)
}

async fn healthz() -> &'static str {
    "ok"
}

async fn youtube_live(
    State(state): State<AppState>,
    Query(query): Query<LiveQuery>,
) -> Response {
    let body = match &state.resolver {
        Some(resolver) => resolver.resolve(&query.input).await,
        None => LiveLookupResponse::rejected("Missing YouTube API key"),
    };
    json_utf8(body)
}

/// Serialize with the explicit UTF-8 content type the frontend expects
fn json_utf8(body: LiveLookupResponse) -> Response {
    let mut response = Json(body).into_response();
    response.headers_mut().insert(
        header::CONTENT_TYPE,
        HeaderValue::from_static("application/json; charset=utf-8"),
    );
    response
}
