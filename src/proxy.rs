//! # Metadata Proxy
//!
//! `GET /api/tmdb?path=<tmdb path>&...` forwards to TMDB with the API key
//! injected, so the key never leaves the server. Every query parameter other
//! than `path` is passed through unchanged, repeated keys included.

use std::sync::Arc;

use anyhow::{Context, Result};
use axum::extract::{Extension, Query};
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::routing::get;
use axum::{Json, Router};
use serde_json::json;
use tokio::net::TcpListener;
use tower_http::cors::CorsLayer;

use crate::metadata::{FetchError, TmdbClient};

pub const ROUTE: &str = "/api/tmdb";

pub fn router(client: Arc<TmdbClient>) -> Router {
    Router::new()
        .route(ROUTE, get(passthrough))
        .layer(CorsLayer::permissive())
        .layer(Extension(client))
}

/// Bind `addr` and serve until Ctrl+C.
pub async fn serve(addr: &str, client: TmdbClient) -> Result<()> {
    let listener = TcpListener::bind(addr)
        .await
        .with_context(|| format!("Failed to bind proxy to {addr}"))?;
    serve_on(listener, client).await
}

/// Serve on an already bound listener.
pub async fn serve_on(listener: TcpListener, client: TmdbClient) -> Result<()> {
    let local = listener.local_addr()?;
    tracing::info!("Proxy listening on http://{}{} -> {}", local, ROUTE, client.base_url());

    axum::serve(listener, router(Arc::new(client)))
        .with_graceful_shutdown(async {
            if let Err(e) = tokio::signal::ctrl_c().await {
                tracing::error!("Failed to listen for shutdown signal: {}", e);
            }
        })
        .await
        .context("Proxy server failed")
}

async fn passthrough(
    Extension(client): Extension<Arc<TmdbClient>>,
    Query(params): Query<Vec<(String, String)>>,
) -> Response {
    let path = params
        .iter()
        .find(|(key, _)| key == "path")
        .map(|(_, value)| value.clone())
        .filter(|value| !value.is_empty());

    let Some(path) = path else {
        return error_response(StatusCode::BAD_REQUEST, "Path is required");
    };

    let forwarded: Vec<(String, String)> = params.into_iter().filter(|(key, _)| key != "path").collect();
    tracing::debug!("Proxying {} with {} params", path, forwarded.len());

    match client.fetch_raw(&path, &forwarded).await {
        Ok(body) => (StatusCode::OK, Json(body)).into_response(),
        Err(FetchError::Status { status, .. }) => {
            let status = StatusCode::from_u16(status).unwrap_or(StatusCode::BAD_GATEWAY);
            let reason = status.canonical_reason().unwrap_or("Unknown");
            tracing::warn!("Upstream returned {} for {}", status, path);
            error_response(status, &format!("TMDB API error: {reason}"))
        }
        Err(e) => {
            tracing::error!("Proxy request for {} failed: {}", path, e);
            error_response(StatusCode::INTERNAL_SERVER_ERROR, "Internal Server Error")
        }
    }
}

fn error_response(status: StatusCode, message: &str) -> Response {
    (status, Json(json!({ "error": message }))).into_response()
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::Value;
    use std::time::Duration;

    async fn spawn_proxy(upstream: &str) -> String {
        let client = TmdbClient::new(upstream, "k3y", Duration::from_secs(5)).unwrap();
        let listener = TcpListener::bind("127.0.0.1:0").await.unwrap();
        let addr = listener.local_addr().unwrap();
        tokio::spawn(serve_on(listener, client));
        format!("http://{addr}{ROUTE}")
    }

    #[tokio::test]
    async fn missing_path_should_be_bad_request() {
        // Upstream is never contacted, so an unroutable base is fine.
        let url = spawn_proxy("http://127.0.0.1:9").await;

        for query in ["", "?path=", "?language=tr-TR"] {
            let response = reqwest::get(format!("{url}{query}")).await.unwrap();
            assert_eq!(response.status(), 400);
            let body: Value = response.json().await.unwrap();
            assert_eq!(body, json!({"error": "Path is required"}));
        }
    }

    #[tokio::test]
    async fn unreachable_upstream_should_be_internal_error() {
        let url = spawn_proxy("http://127.0.0.1:9").await;

        let response = reqwest::get(format!("{url}?path=movie/550")).await.unwrap();
        assert_eq!(response.status(), 500);
        let body: Value = response.json().await.unwrap();
        assert_eq!(body, json!({"error": "Internal Server Error"}));
    }
}
