//! # Session Controller
//!
//! Owns everything that outlives a single command: the visible history,
//! command recall, the three settings and the playback overlay. Lines are
//! handed to the interpreter one at a time and the returned result is
//! applied here; the interpreter itself stays stateless.

use super::history::{CommandRecall, HistoryItem};
use super::settings::{Settings, SettingsStore};
use crate::config::APP_VERSION;
use crate::interpreter::{self, CommandResult, PlaybackRequest};
use crate::metadata::MetadataSource;

/// How a submission went, for the terminal's audio cue
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SubmitOutcome {
    /// Blank line, nothing recorded
    Ignored,
    Completed,
    /// The command produced an error result
    Failed,
}

pub struct SessionController<M: MetadataSource> {
    source: M,
    history: Vec<HistoryItem>,
    recall: CommandRecall,
    settings: Settings,
    store: Option<SettingsStore>,
    playback: Option<PlaybackRequest>,
}

impl<M: MetadataSource> SessionController<M> {
    /// Session with default settings and no persistence
    pub fn new(source: M) -> Self {
        Self {
            source,
            history: Vec::new(),
            recall: CommandRecall::new(),
            settings: Settings::default(),
            store: None,
            playback: None,
        }
    }

    /// Session whose settings are loaded from, and saved to, `store`.
    /// Unreadable settings fall back to the defaults.
    pub fn with_store(source: M, store: SettingsStore) -> Self {
        let settings = store.load().unwrap_or_else(|e| {
            tracing::warn!("Failed to load settings, using defaults: {}", e);
            Settings::default()
        });
        tracing::debug!("Session settings: {:?}", settings);

        Self {
            settings,
            store: Some(store),
            ..Self::new(source)
        }
    }

    /// Greeting shown once the boot sequence is over
    pub fn welcome(&mut self) {
        self.history.push(HistoryItem::Output(format!(
            "Terminal Sinemasına Hoşgeldiniz v{APP_VERSION} (Welcome to Terminal Cinema)\n\
             TMDB API Bağlantısı Hazır. (TMDB API ready.)\n\
             Komutları görmek için \"yardım\" yazın. (Type \"help\" for commands.)"
        )));
    }

    /// Run one submitted line through the interpreter and apply the result.
    pub async fn submit(&mut self, line: &str) -> SubmitOutcome {
        if line.trim().is_empty() {
            return SubmitOutcome::Ignored;
        }

        self.recall.push(line);
        self.history.push(HistoryItem::Input(line.to_string()));

        match interpreter::execute(line, &self.source).await {
            Some(result) => {
                tracing::debug!("'{}' produced a {} result", line, result.kind());
                self.apply(result)
            }
            None => SubmitOutcome::Ignored,
        }
    }

    fn apply(&mut self, result: CommandResult) -> SubmitOutcome {
        match result {
            CommandResult::Clear => self.history.clear(),
            CommandResult::Animation { data } => {
                self.settings.animation = data;
                self.persist_settings();
                self.say(format!("Animation set to {data}."));
            }
            CommandResult::Sound { data } => {
                self.settings.sound = data;
                self.persist_settings();
                let state = if data { "enabled" } else { "disabled" };
                self.say(format!("Sound effects {state}."));
            }
            CommandResult::Zoom { data } => {
                self.settings.zoom = data;
                self.persist_settings();
                self.say(format!("Zoom level set to {data}."));
            }
            CommandResult::Play { data } => {
                self.say(format!(
                    "Starting playback for {} ID: {}...",
                    data.kind, data.id
                ));
                self.playback = Some(data);
            }
            CommandResult::Output { content } => self.history.push(HistoryItem::Output(content)),
            CommandResult::Component { data } => self.history.push(HistoryItem::Component(data)),
            CommandResult::Error { content } => {
                self.history.push(HistoryItem::Error(content));
                return SubmitOutcome::Failed;
            }
        }
        SubmitOutcome::Completed
    }

    fn say(&mut self, text: String) {
        self.history.push(HistoryItem::Output(text));
    }

    fn persist_settings(&self) {
        if let Some(store) = &self.store {
            if let Err(e) = store.save(&self.settings) {
                tracing::warn!("Failed to save settings: {}", e);
            }
        }
    }

    pub fn history(&self) -> &[HistoryItem] {
        &self.history
    }

    pub fn settings(&self) -> &Settings {
        &self.settings
    }

    pub fn playback(&self) -> Option<&PlaybackRequest> {
        self.playback.as_ref()
    }

    /// Close the player overlay. Returns whether one was open.
    pub fn close_playback(&mut self) -> bool {
        self.playback.take().is_some()
    }

    pub fn recall_previous(&mut self) -> Option<String> {
        self.recall.previous().map(str::to_string)
    }

    pub fn recall_next(&mut self) -> Option<String> {
        self.recall.next().map(str::to_string)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::interpreter::{AnimationMode, ComponentPayload, MediaKind};
    use crate::metadata::testing::StubSource;
    use serde_json::json;
    use tempfile::TempDir;

    fn session() -> SessionController<StubSource> {
        SessionController::new(StubSource::answering(json!({"results": [{"id": 1}]})))
    }

    #[tokio::test]
    async fn blank_submission_should_record_nothing() {
        let mut session = session();
        assert_eq!(session.submit("   ").await, SubmitOutcome::Ignored);
        assert!(session.history().is_empty());
        assert_eq!(session.recall_previous(), None);
    }

    #[tokio::test]
    async fn submission_should_echo_input_then_result() {
        let mut session = session();
        assert_eq!(session.submit("top tv").await, SubmitOutcome::Completed);

        assert_eq!(session.history()[0], HistoryItem::Input("top tv".to_string()));
        assert_eq!(
            session.history()[1],
            HistoryItem::Component(ComponentPayload::List {
                items: vec![json!({"id": 1})]
            })
        );
    }

    #[tokio::test]
    async fn clear_should_empty_history_including_its_own_echo() {
        let mut session = session();
        session.welcome();
        session.submit("help").await;
        session.submit("temizle").await;
        assert!(session.history().is_empty());
    }

    #[tokio::test]
    async fn settings_results_should_update_session_state() {
        let mut session = session();

        session.submit("zoom 5").await;
        session.submit("ses kapat").await;
        session.submit("animation fallout").await;

        assert_eq!(session.settings().zoom, 5);
        assert!(!session.settings().sound);
        assert_eq!(session.settings().animation, AnimationMode::Fallout);

        let outputs: Vec<_> = session
            .history()
            .iter()
            .filter_map(|item| match item {
                HistoryItem::Output(text) => Some(text.as_str()),
                _ => None,
            })
            .collect();
        assert_eq!(
            outputs,
            vec![
                "Zoom level set to 5.",
                "Sound effects disabled.",
                "Animation set to fallout."
            ]
        );
    }

    #[tokio::test]
    async fn error_result_should_report_failure_and_keep_settings() {
        let mut session = session();
        assert_eq!(session.submit("zoom 9").await, SubmitOutcome::Failed);
        assert_eq!(session.settings().zoom, 3);
        assert!(matches!(session.history()[1], HistoryItem::Error(_)));
    }

    #[tokio::test]
    async fn play_should_open_and_close_the_overlay() {
        let mut session = session();
        session.submit("oynat tv 1399 2 5").await;

        let playback = session.playback().cloned().unwrap();
        assert_eq!(playback.kind, MediaKind::Tv);
        assert_eq!(playback.season, 2);
        assert_eq!(
            session.history().last(),
            Some(&HistoryItem::Output(
                "Starting playback for tv ID: 1399...".to_string()
            ))
        );

        assert!(session.close_playback());
        assert!(session.playback().is_none());
        assert!(!session.close_playback());
    }

    #[tokio::test]
    async fn recall_should_return_submitted_lines_newest_first() {
        let mut session = session();
        session.submit("help").await;
        session.submit("zoom 2").await;

        assert_eq!(session.recall_previous().as_deref(), Some("zoom 2"));
        assert_eq!(session.recall_previous().as_deref(), Some("help"));
        assert_eq!(session.recall_next().as_deref(), Some("zoom 2"));
        assert_eq!(session.recall_next().as_deref(), Some(""));
    }

    #[tokio::test]
    async fn settings_should_persist_across_sessions() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("settings");

        let mut first = SessionController::with_store(
            StubSource::answering(json!({})),
            SettingsStore::new(&path),
        );
        first.submit("matrix").await;
        first.submit("zoom 1").await;

        let second = SessionController::with_store(
            StubSource::answering(json!({})),
            SettingsStore::new(&path),
        );
        assert_eq!(second.settings().animation, AnimationMode::Matrix);
        assert_eq!(second.settings().zoom, 1);
        assert!(second.settings().sound);
    }
}
