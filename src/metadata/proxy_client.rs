//! # Proxy Client
//!
//! Fetches metadata through the cineterm proxy (`GET /api/tmdb`), so the
//! terminal never needs to know the TMDB API key.

use std::time::Duration;

use anyhow::Result;
use reqwest::{Client, Url};
use serde_json::Value;

use super::{read_json, FetchError, MetadataSource};

/// Client for the `/api/tmdb` passthrough route
#[derive(Debug, Clone)]
pub struct ProxyClient {
    http: Client,
    endpoint: Url,
    language: String,
}

impl ProxyClient {
    /// Create a client for the proxy at `proxy_url`. `language` is sent with
    /// every request; `timeout` bounds each request end to end.
    pub fn new(proxy_url: &str, language: impl Into<String>, timeout: Duration) -> Result<Self> {
        let mut endpoint = Url::parse(proxy_url)
            .map_err(|e| anyhow::anyhow!("Invalid proxy URL '{proxy_url}': {e}"))?;
        endpoint
            .path_segments_mut()
            .map_err(|_| anyhow::anyhow!("Proxy URL '{proxy_url}' cannot be a base URL"))?
            .pop_if_empty()
            .extend(["api", "tmdb"]);

        let http = Client::builder().timeout(timeout).build()?;
        tracing::debug!("ProxyClient created for {}", endpoint);

        Ok(Self {
            http,
            endpoint,
            language: language.into(),
        })
    }

    /// Full request URL for a metadata path
    pub fn request_url(&self, path: &str, query: &[(&str, &str)]) -> Url {
        let mut url = self.endpoint.clone();
        {
            let mut pairs = url.query_pairs_mut();
            pairs.append_pair("path", path);
            pairs.append_pair("language", &self.language);
            for (key, value) in query {
                pairs.append_pair(key, value);
            }
        }
        url
    }

    pub fn endpoint(&self) -> &Url {
        &self.endpoint
    }
}

impl MetadataSource for ProxyClient {
    async fn get(&self, path: &str, query: &[(&str, &str)]) -> Result<Value, FetchError> {
        let url = self.request_url(path, query);
        tracing::debug!("GET {}", url);

        let response = self
            .http
            .get(url)
            .send()
            .await
            .map_err(|e| FetchError::from_reqwest(path, e))?;

        read_json(response, path).await
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;
    use wiremock::matchers::{method, path, query_param};
    use wiremock::{Mock, MockServer, ResponseTemplate};

    fn client_for(server: &MockServer) -> ProxyClient {
        ProxyClient::new(&server.uri(), "tr-TR", Duration::from_secs(5)).unwrap()
    }

    #[test]
    fn proxy_client_should_append_api_route_to_base_url() {
        let client = ProxyClient::new("http://localhost:3000", "en-US", Duration::from_secs(1))
            .unwrap();
        assert_eq!(client.endpoint().as_str(), "http://localhost:3000/api/tmdb");

        let nested = ProxyClient::new("http://host/cinema/", "en-US", Duration::from_secs(1))
            .unwrap();
        assert_eq!(nested.endpoint().as_str(), "http://host/cinema/api/tmdb");
    }

    #[test]
    fn request_url_should_carry_path_language_and_encoded_query() {
        let client = ProxyClient::new("http://localhost:3000", "tr-TR", Duration::from_secs(1))
            .unwrap();
        let url = client.request_url("search/multi", &[("query", "the matrix")]);
        assert_eq!(
            url.as_str(),
            "http://localhost:3000/api/tmdb?path=search%2Fmulti&language=tr-TR&query=the+matrix"
        );
    }

    #[test]
    fn proxy_client_should_reject_invalid_url() {
        let result = ProxyClient::new("not a url", "tr-TR", Duration::from_secs(1));
        assert!(result.is_err());
    }

    #[tokio::test]
    async fn get_should_return_upstream_body_on_success() {
        let server = MockServer::start().await;
        Mock::given(method("GET"))
            .and(path("/api/tmdb"))
            .and(query_param("path", "movie/upcoming"))
            .and(query_param("language", "tr-TR"))
            .respond_with(ResponseTemplate::new(200).set_body_json(json!({
                "results": [{"id": 7, "title": "Upcoming"}]
            })))
            .mount(&server)
            .await;

        let body = client_for(&server).get("movie/upcoming", &[]).await.unwrap();
        assert_eq!(body["results"][0]["id"], 7);
    }

    #[tokio::test]
    async fn get_should_report_status_errors_with_proxy_message() {
        let server = MockServer::start().await;
        Mock::given(method("GET"))
            .and(path("/api/tmdb"))
            .respond_with(
                ResponseTemplate::new(404)
                    .set_body_json(json!({"error": "TMDB API error: Not Found"})),
            )
            .mount(&server)
            .await;

        let err = client_for(&server).get("movie/0", &[]).await.unwrap_err();
        match err {
            FetchError::Status {
                status, message, ..
            } => {
                assert_eq!(status, 404);
                assert_eq!(message.as_deref(), Some("TMDB API error: Not Found"));
            }
            other => panic!("expected status error, got {other:?}"),
        }
    }

    #[tokio::test]
    async fn get_should_report_malformed_json_as_decode_error() {
        let server = MockServer::start().await;
        Mock::given(method("GET"))
            .and(path("/api/tmdb"))
            .respond_with(ResponseTemplate::new(200).set_body_string("<html>oops</html>"))
            .mount(&server)
            .await;

        let err = client_for(&server).get("movie/now_playing", &[]).await.unwrap_err();
        assert!(matches!(err, FetchError::Decode { .. }), "got {err:?}");
    }

    #[tokio::test]
    async fn get_should_time_out_on_slow_proxy() {
        let server = MockServer::start().await;
        Mock::given(method("GET"))
            .respond_with(
                ResponseTemplate::new(200)
                    .set_body_json(json!({"results": []}))
                    .set_delay(Duration::from_secs(2)),
            )
            .mount(&server)
            .await;

        let client = ProxyClient::new(&server.uri(), "tr-TR", Duration::from_millis(200)).unwrap();
        let err = client.get("movie/upcoming", &[]).await.unwrap_err();
        assert!(matches!(err, FetchError::Timeout { .. }), "got {err:?}");
    }
}
