//! # Command Results
//!
//! The typed outcome of a single interpreter invocation. Every result kind
//! carries exactly the payload that kind needs, so the renderer never has to
//! guess which fields are populated.
//!
//! Results serialize with a `type` tag:
//!
//! ```text
//! {"type":"zoom","data":3}
//! {"type":"error","content":"Usage: zoom [1-5]"}
//! {"type":"play","data":{"id":"550","type":"movie","season":1,"episode":1}}
//! ```

use std::fmt;

use serde::{Deserialize, Serialize};
use serde_json::Value;

/// Media category understood by the metadata service
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum MediaKind {
    Movie,
    Tv,
}

impl MediaKind {
    /// Parse a user token (case-insensitive). Anything other than
    /// `movie` or `tv` is rejected.
    pub fn parse(token: &str) -> Option<Self> {
        match token.to_lowercase().as_str() {
            "movie" => Some(Self::Movie),
            "tv" => Some(Self::Tv),
            _ => None,
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Movie => "movie",
            Self::Tv => "tv",
        }
    }
}

impl fmt::Display for MediaKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Background animation requested by `animation` / `animasyon` / `matrix`
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum AnimationMode {
    Matrix,
    Fallout,
    #[default]
    Off,
}

impl AnimationMode {
    /// Parse a mode token (case-insensitive). `kapat` is the Turkish
    /// spelling of `off`.
    pub fn parse(token: &str) -> Option<Self> {
        match token.to_lowercase().as_str() {
            "matrix" => Some(Self::Matrix),
            "fallout" => Some(Self::Fallout),
            "off" | "kapat" => Some(Self::Off),
            _ => None,
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Matrix => "matrix",
            Self::Fallout => "fallout",
            Self::Off => "off",
        }
    }
}

impl fmt::Display for AnimationMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Instruction to open the player for a title
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PlaybackRequest {
    pub id: String,
    #[serde(rename = "type")]
    pub kind: MediaKind,
    /// Always at least 1
    pub season: u32,
    /// Always at least 1
    pub episode: u32,
}

/// Structured payload rendered as a component rather than plain text
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "lowercase")]
pub enum ComponentPayload {
    /// Marker only; the renderer gathers live environment info itself.
    Neofetch,
    /// Raw list entries exactly as the metadata service returned them.
    List { items: Vec<Value> },
    /// Raw detail record plus the kind it was fetched as.
    Details {
        item: Value,
        #[serde(rename = "mediaType")]
        media_type: MediaKind,
    },
}

/// Everything the interpreter can hand back to the session
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "lowercase")]
pub enum CommandResult {
    Output { content: String },
    Component { data: ComponentPayload },
    Error { content: String },
    Clear,
    Play { data: PlaybackRequest },
    Animation { data: AnimationMode },
    Sound { data: bool },
    Zoom { data: u8 },
}

impl CommandResult {
    pub fn output(content: impl Into<String>) -> Self {
        Self::Output {
            content: content.into(),
        }
    }

    pub fn error(content: impl Into<String>) -> Self {
        Self::Error {
            content: content.into(),
        }
    }

    pub fn component(data: ComponentPayload) -> Self {
        Self::Component { data }
    }

    /// The wire tag of this result (`"output"`, `"zoom"`, ...)
    pub fn kind(&self) -> &'static str {
        match self {
            Self::Output { .. } => "output",
            Self::Component { .. } => "component",
            Self::Error { .. } => "error",
            Self::Clear => "clear",
            Self::Play { .. } => "play",
            Self::Animation { .. } => "animation",
            Self::Sound { .. } => "sound",
            Self::Zoom { .. } => "zoom",
        }
    }

    pub fn is_error(&self) -> bool {
        matches!(self, Self::Error { .. })
    }
}
