//! # Metadata Boundary
//!
//! The single I/O seam of the interpreter. A [`MetadataSource`] takes a
//! relative TMDB path plus query parameters and answers with the upstream
//! JSON body. Two implementations exist:
//!
//! ```text
//! ProxyClient ──▶ <proxy>/api/tmdb?path=..  (key stays on the server)
//! TmdbClient  ──▶ api.themoviedb.org/3/..   (key injected locally)
//! ```
//!
//! Any non-success status, undecodable body, transport failure or timeout
//! is reported as a [`FetchError`].

use std::future::Future;

use reqwest::Response;
use serde_json::Value;
use thiserror::Error;

pub mod proxy_client;
pub mod tmdb;

#[cfg(test)]
pub mod testing;

pub use proxy_client::ProxyClient;
pub use tmdb::TmdbClient;

/// Why a metadata request produced no usable body
#[derive(Debug, Error)]
pub enum FetchError {
    #[error("request for {path} failed: {source}")]
    Transport {
        path: String,
        #[source]
        source: reqwest::Error,
    },

    #[error("request for {path} timed out")]
    Timeout { path: String },

    #[error("request for {path} returned HTTP {status}")]
    Status {
        path: String,
        status: u16,
        /// `error` field of the response body, when there was one
        message: Option<String>,
    },

    #[error("response for {path} was not valid JSON: {source}")]
    Decode {
        path: String,
        #[source]
        source: reqwest::Error,
    },

    #[error("invalid metadata URL: {0}")]
    InvalidUrl(String),
}

impl FetchError {
    /// Sort a reqwest failure into the matching variant
    pub(crate) fn from_reqwest(path: &str, source: reqwest::Error) -> Self {
        let path = path.to_string();
        if source.is_timeout() {
            Self::Timeout { path }
        } else if source.is_decode() {
            Self::Decode { path, source }
        } else {
            Self::Transport { path, source }
        }
    }
}

/// Source of TMDB metadata
pub trait MetadataSource: Send + Sync {
    /// GET a relative metadata path (e.g. `movie/upcoming`) with extra query
    /// parameters and return the JSON body.
    fn get(
        &self,
        path: &str,
        query: &[(&str, &str)],
    ) -> impl Future<Output = Result<Value, FetchError>> + Send;
}

/// Check the status and decode the body of a metadata response.
pub(crate) async fn read_json(response: Response, path: &str) -> Result<Value, FetchError> {
    let status = response.status();
    if !status.is_success() {
        let message = response
            .json::<Value>()
            .await
            .ok()
            .and_then(|body| body.get("error").and_then(Value::as_str).map(str::to_string));
        tracing::warn!(
            "Metadata request for {} failed with status {}: {:?}",
            path,
            status.as_u16(),
            message
        );
        return Err(FetchError::Status {
            path: path.to_string(),
            status: status.as_u16(),
            message,
        });
    }

    response
        .json::<Value>()
        .await
        .map_err(|e| FetchError::from_reqwest(path, e))
}

/// Take the `results` array out of a list response. A body without one is
/// treated as an empty list.
pub fn results_of(body: Value) -> Vec<Value> {
    match body {
        Value::Object(mut map) => match map.remove("results") {
            Some(Value::Array(items)) => items,
            _ => Vec::new(),
        },
        _ => Vec::new(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn results_of_should_extract_results_array() {
        let body = json!({"page": 1, "results": [{"id": 1}, {"id": 2}]});
        let items = results_of(body);
        assert_eq!(items.len(), 2);
        assert_eq!(items[1]["id"], 2);
    }

    #[test]
    fn results_of_should_treat_missing_or_malformed_results_as_empty() {
        assert!(results_of(json!({"page": 1})).is_empty());
        assert!(results_of(json!({"results": "nope"})).is_empty());
        assert!(results_of(json!([1, 2, 3])).is_empty());
    }

    #[test]
    fn status_error_should_mention_path_and_code() {
        let err = FetchError::Status {
            path: "movie/0".to_string(),
            status: 404,
            message: None,
        };
        assert_eq!(err.to_string(), "request for movie/0 returned HTTP 404");
    }
}
