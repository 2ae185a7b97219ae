//! Terminal session state
//!
//! - `controller`: applies interpreter results to the session
//! - `history`: visible history and command recall
//! - `settings`: animation, sound and zoom with INI persistence
//! - `render`: turns history items into styled lines
//! - `player`: embed URLs for playback

pub mod controller;
pub mod history;
pub mod player;
pub mod render;
pub mod settings;

pub use controller::{SessionController, SubmitOutcome};
pub use history::{CommandRecall, HistoryItem};
pub use render::{render_item, EnvironmentInfo, LineStyle, RenderContext, StyledLine};
pub use settings::{Settings, SettingsError, SettingsStore, Theme};
