//! Tracing subscriber setup
//!
//! The terminal owns stdout/stderr while it runs, so in terminal mode logs
//! go to a file (`--log-file`) or nowhere. The proxy logs to stderr.

use std::fs::OpenOptions;
use std::path::PathBuf;
use std::sync::Mutex;

use anyhow::{Context, Result};
use tracing_subscriber::fmt::time::ChronoLocal;
use tracing_subscriber::fmt::writer::BoxMakeWriter;
use tracing_subscriber::EnvFilter;

use crate::config::LOG_LEVEL_ENV_VAR;

/// Crates whose chatter is capped at `warn` regardless of the requested level
const NOISY_CRATES: [&str; 6] = ["hyper", "hyper_util", "reqwest", "rustls", "tower", "tower_http"];

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum LogTarget {
    Stderr,
    File(PathBuf),
    Discard,
}

impl LogTarget {
    /// Where logs go for the chosen run mode
    pub fn for_mode(serve: bool, log_file: Option<&PathBuf>) -> Self {
        match (serve, log_file) {
            (_, Some(path)) => Self::File(path.clone()),
            (true, None) => Self::Stderr,
            (false, None) => Self::Discard,
        }
    }
}

/// Level filter: `-v` means debug, otherwise `CINETERM_LOG_LEVEL`, otherwise
/// `default_level`.
pub fn build_filter(verbose: bool, default_level: &str) -> Result<EnvFilter> {
    let mut filter = if verbose {
        EnvFilter::new("debug")
    } else {
        EnvFilter::try_from_env(LOG_LEVEL_ENV_VAR).unwrap_or_else(|_| EnvFilter::new(default_level))
    };

    for krate in NOISY_CRATES {
        filter = filter.add_directive(format!("{krate}=warn").parse()?);
    }
    Ok(filter)
}

/// Install the global subscriber. Fails if one is already installed.
pub fn init(target: &LogTarget, verbose: bool) -> Result<()> {
    let (writer, ansi) = match target {
        LogTarget::Stderr => (BoxMakeWriter::new(std::io::stderr), true),
        LogTarget::Discard => (BoxMakeWriter::new(std::io::sink), false),
        LogTarget::File(path) => {
            let file = OpenOptions::new()
                .create(true)
                .append(true)
                .open(path)
                .with_context(|| format!("Failed to open log file {}", path.display()))?;
            (BoxMakeWriter::new(Mutex::new(file)), false)
        }
    };

    let default_level = match target {
        LogTarget::Stderr => "info",
        _ => "warn",
    };

    tracing_subscriber::fmt()
        .with_env_filter(build_filter(verbose, default_level)?)
        .with_writer(writer)
        .with_ansi(ansi)
        .with_timer(ChronoLocal::rfc_3339())
        .try_init()
        .map_err(|e| anyhow::anyhow!("Failed to initialize logging: {e}"))
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn target_should_prefer_log_file_in_any_mode() {
        let path = PathBuf::from("/tmp/cineterm.log");
        assert_eq!(
            LogTarget::for_mode(false, Some(&path)),
            LogTarget::File(path.clone())
        );
        assert_eq!(LogTarget::for_mode(true, Some(&path)), LogTarget::File(path));
    }

    #[test]
    fn target_should_keep_terminal_mode_quiet_without_log_file() {
        assert_eq!(LogTarget::for_mode(false, None), LogTarget::Discard);
        assert_eq!(LogTarget::for_mode(true, None), LogTarget::Stderr);
    }

    #[test]
    fn verbose_filter_should_enable_debug() {
        let filter = build_filter(true, "warn").unwrap();
        let rendered = filter.to_string();
        assert!(rendered.contains("debug"));
        assert!(rendered.contains("reqwest=warn"));
    }

    #[test]
    fn init_should_write_to_log_file() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("cineterm.log");

        // Another test binary thread may already own the global subscriber.
        if init(&LogTarget::File(path.clone()), true).is_ok() {
            tracing::info!("log file smoke test");
            let text = std::fs::read_to_string(&path).unwrap();
            assert!(text.contains("log file smoke test"));
        }
        assert!(path.exists());
    }
}
