//! The terminal loop driven by scripted keys, backed by a fake proxy.

mod common;

use cineterm::interpreter::AnimationMode;
use cineterm::repl::io::mock::ctrl;
use cineterm::repl::io::{MockEventStream, MockRenderStream};
use cineterm::repl::TerminalApp;
use cineterm::session::{HistoryItem, SessionController, SettingsStore};
use common::{mount_proxy_route, movie, proxy_client};
use serde_json::json;
use tempfile::TempDir;
use wiremock::MockServer;

fn keys(lines: &[&str]) -> MockEventStream {
    let mut events: Vec<_> = lines
        .iter()
        .flat_map(|line| MockEventStream::typed_line(line))
        .collect();
    events.push(ctrl('c'));
    MockEventStream::new(events)
}

#[tokio::test]
async fn upcoming_list_should_be_drawn_with_ids() {
    let server = MockServer::start().await;
    mount_proxy_route(&server, "movie/upcoming", json!({"results": [movie(550, "Fight Club")]})).await;

    let session = SessionController::new(proxy_client(&server));
    let mut app = TerminalApp::new(session, keys(&["yakinda"]), MockRenderStream::with_size((100, 30)))
        .with_boot(None);
    app.run().await.unwrap();

    let frame = app.render_stream().frame_text();
    assert!(frame.contains("$ yakinda"));
    assert!(frame.contains("Fight Club (1999)"));
    assert!(frame.contains("ID: 550"));
}

#[tokio::test]
async fn settings_changed_in_terminal_should_survive_restart() {
    let server = MockServer::start().await;
    let dir = TempDir::new().unwrap();
    let settings_path = dir.path().join("settings");

    let session = SessionController::with_store(proxy_client(&server), SettingsStore::new(&settings_path));
    let mut app = TerminalApp::new(
        session,
        keys(&["animasyon fallout", "ses kapat", "zoom 2"]),
        MockRenderStream::new(),
    )
    .with_boot(None);
    app.run().await.unwrap();

    let restored = SessionController::with_store(proxy_client(&server), SettingsStore::new(&settings_path));
    assert_eq!(restored.settings().animation, AnimationMode::Fallout);
    assert!(!restored.settings().sound);
    assert_eq!(restored.settings().zoom, 2);
}

#[tokio::test]
async fn clear_should_leave_only_the_prompt() {
    let server = MockServer::start().await;
    let session = SessionController::new(proxy_client(&server));
    let mut app = TerminalApp::new(session, keys(&["help", "temizle"]), MockRenderStream::new())
        .with_boot(None);
    app.run().await.unwrap();

    assert!(app.session().history().is_empty());
    assert_eq!(app.render_stream().frame_text(), "> _");
}

#[tokio::test]
async fn help_in_turkish_should_render_turkish_text() {
    let server = MockServer::start().await;
    let session = SessionController::new(proxy_client(&server));
    let mut app = TerminalApp::new(session, keys(&["yardım"]), MockRenderStream::with_size((100, 60)))
        .with_boot(None);
    app.run().await.unwrap();

    assert!(matches!(app.session().history()[1], HistoryItem::Input(_)));
    assert!(matches!(app.session().history()[2], HistoryItem::Output(_)));
    assert!(app.render_stream().frame_text().contains("animasyon"));
}
