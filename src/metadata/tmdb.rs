//! # TMDB Client
//!
//! Talks to the TMDB v3 API directly, injecting the API key into every
//! request. Used by the proxy server for its passthrough route and by the
//! terminal when it runs with `--direct`.

use std::time::Duration;

use anyhow::Result;
use reqwest::{Client, Response, Url};
use serde_json::Value;

use super::{read_json, FetchError, MetadataSource};

/// Authenticated TMDB client
#[derive(Clone)]
pub struct TmdbClient {
    http: Client,
    base_url: String,
    api_key: String,
    language: Option<String>,
}

// Debug must never print the API key.
impl std::fmt::Debug for TmdbClient {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("TmdbClient")
            .field("base_url", &self.base_url)
            .field("language", &self.language)
            .finish_non_exhaustive()
    }
}

impl TmdbClient {
    pub fn new(base_url: &str, api_key: impl Into<String>, timeout: Duration) -> Result<Self> {
        let http = Client::builder().timeout(timeout).build()?;
        Ok(Self {
            http,
            base_url: base_url.trim_end_matches('/').to_string(),
            api_key: api_key.into(),
            language: None,
        })
    }

    /// Send `language=<language>` with every metadata request made through
    /// [`MetadataSource::get`]. Proxied requests forward the caller's own
    /// language parameter instead.
    pub fn with_language(mut self, language: impl Into<String>) -> Self {
        self.language = Some(language.into());
        self
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    /// Upstream URL for `path`: API key first, then `params` in order.
    pub fn upstream_url(&self, path: &str, params: &[(String, String)]) -> Result<Url, FetchError> {
        let raw = format!("{}/{}", self.base_url, path.trim_start_matches('/'));
        let mut url = Url::parse(&raw).map_err(|e| FetchError::InvalidUrl(format!("{raw}: {e}")))?;
        {
            let mut pairs = url.query_pairs_mut();
            pairs.append_pair("api_key", &self.api_key);
            for (key, value) in params {
                pairs.append_pair(key, value);
            }
        }
        Ok(url)
    }

    /// GET `path` with `params` forwarded verbatim, decoding the JSON body.
    /// A non-2xx upstream status comes back as [`FetchError::Status`].
    pub async fn fetch_raw(&self, path: &str, params: &[(String, String)]) -> Result<Value, FetchError> {
        let response = self.send(path, params).await?;
        read_json(response, path).await
    }

    async fn send(&self, path: &str, params: &[(String, String)]) -> Result<Response, FetchError> {
        let url = self.upstream_url(path, params)?;
        tracing::debug!("GET {}/{} ({} params)", self.base_url, path, params.len());

        self.http
            .get(url)
            .send()
            .await
            .map_err(|e| FetchError::from_reqwest(path, e))
    }
}

impl MetadataSource for TmdbClient {
    async fn get(&self, path: &str, query: &[(&str, &str)]) -> Result<Value, FetchError> {
        let mut params: Vec<(String, String)> = Vec::with_capacity(query.len() + 1);
        if let Some(language) = &self.language {
            params.push(("language".to_string(), language.clone()));
        }
        params.extend(query.iter().map(|(k, v)| (k.to_string(), v.to_string())));

        self.fetch_raw(path, &params).await
    }
}
