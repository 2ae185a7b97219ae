//! Configuration constants and utilities for cineterm
//!
//! Compile-time defaults plus the environment variables that override them.

/// Default settings file path
pub const DEFAULT_SETTINGS_PATH: &str = "~/.cineterm/settings";

/// Environment variable name for overriding the settings path
pub const SETTINGS_PATH_ENV_VAR: &str = "CINETERM_SETTINGS_PATH";

/// Environment variable holding the log filter (e.g. `debug`, `cineterm=trace`)
pub const LOG_LEVEL_ENV_VAR: &str = "CINETERM_LOG_LEVEL";

/// Environment variable holding the TMDB API key
pub const API_KEY_ENV_VAR: &str = "TMDB_API_KEY";

/// Environment variable for pointing at a different TMDB-compatible API
pub const TMDB_BASE_URL_ENV_VAR: &str = "TMDB_BASE_URL";

pub const DEFAULT_TMDB_BASE_URL: &str = "https://api.themoviedb.org/3";

/// Where the terminal looks for the proxy unless told otherwise
pub const DEFAULT_PROXY_URL: &str = "http://127.0.0.1:3000";

/// Bind address of `--serve`
pub const DEFAULT_LISTEN_ADDR: &str = "127.0.0.1:3000";

/// Language sent with every metadata request
pub const DEFAULT_LANGUAGE: &str = "tr-TR";

/// Upper bound for a single metadata request, in seconds
pub const DEFAULT_TIMEOUT_SECS: u64 = 10;

/// Embedded player used for `play`
pub const PLAYER_BASE_URL: &str = "https://player.videasy.net";

pub const APP_VERSION: &str = env!("CARGO_PKG_VERSION");

/// Get the settings file path, checking environment variable first, then falling back to default
pub fn get_settings_path() -> String {
    std::env::var_os(SETTINGS_PATH_ENV_VAR)
        .and_then(|val| val.into_string().ok())
        .unwrap_or_else(|| DEFAULT_SETTINGS_PATH.to_string())
}

/// TMDB API key from the environment, if set and non-empty
pub fn get_api_key() -> Option<String> {
    std::env::var(API_KEY_ENV_VAR)
        .ok()
        .map(|key| key.trim().to_string())
        .filter(|key| !key.is_empty())
}

/// TMDB base URL, overridable for testing against a fake upstream
pub fn get_tmdb_base_url() -> String {
    std::env::var_os(TMDB_BASE_URL_ENV_VAR)
        .and_then(|val| val.into_string().ok())
        .unwrap_or_else(|| DEFAULT_TMDB_BASE_URL.to_string())
}
