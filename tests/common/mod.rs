//! Shared fixtures: a wiremock server standing in for the cineterm proxy
//! or for TMDB itself.

#![allow(dead_code)]

use std::time::Duration;

use cineterm::metadata::{ProxyClient, TmdbClient};
use serde_json::{json, Value};
use wiremock::matchers::{method, path, query_param};
use wiremock::{Mock, MockServer, ResponseTemplate};

pub const LANGUAGE: &str = "tr-TR";
pub const API_KEY: &str = "test-key";

/// Proxy stub answering `path=<tmdb_path>` with `body`
pub async fn mount_proxy_route(server: &MockServer, tmdb_path: &str, body: Value) {
    Mock::given(method("GET"))
        .and(path("/api/tmdb"))
        .and(query_param("path", tmdb_path))
        .and(query_param("language", LANGUAGE))
        .respond_with(ResponseTemplate::new(200).set_body_json(body))
        .mount(server)
        .await;
}

pub fn proxy_client(server: &MockServer) -> ProxyClient {
    ProxyClient::new(&server.uri(), LANGUAGE, Duration::from_secs(5)).unwrap()
}

pub fn tmdb_client(server: &MockServer) -> TmdbClient {
    TmdbClient::new(&server.uri(), API_KEY, Duration::from_secs(5)).unwrap()
}

pub fn movie(id: u64, title: &str) -> Value {
    json!({
        "id": id,
        "title": title,
        "release_date": "1999-10-15",
        "overview": "An insomniac office worker crosses paths with a soap maker.",
        "vote_average": 8.4
    })
}

pub async fn request_count(server: &MockServer) -> usize {
    server.received_requests().await.map_or(0, |r| r.len())
}
