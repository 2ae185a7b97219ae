//! # History Rendering
//!
//! Turns history items into styled text lines. Pure formatting; colours
//! and scrolling belong to the terminal layer.

use std::time::Duration;

use serde_json::Value;

use super::history::HistoryItem;
use super::settings::Theme;
use crate::config::APP_VERSION;
use crate::interpreter::{help::NO_RESULTS, ComponentPayload, MediaKind};

/// At most this many entries of a list are shown
pub const LIST_LIMIT: usize = 10;

const NEOFETCH_LOGO: [&str; 5] = [
    "    .---.   ",
    "   /     \\  ",
    "   | (.) |  ",
    "   \\     /  ",
    "    `---`   ",
];

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LineStyle {
    /// Echo of a submitted line
    Input,
    Normal,
    /// Titles and labels
    Accent,
    Dim,
    Error,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StyledLine {
    pub style: LineStyle,
    pub text: String,
}

impl StyledLine {
    pub fn new(style: LineStyle, text: impl Into<String>) -> Self {
        Self {
            style,
            text: text.into(),
        }
    }
}

/// Live facts the neofetch panel needs
#[derive(Debug, Clone, Copy)]
pub struct EnvironmentInfo {
    pub terminal_size: (u16, u16),
    pub uptime: Duration,
    pub theme: Theme,
}

/// Inputs that shape rendering besides the item itself
#[derive(Debug, Clone, Copy)]
pub struct RenderContext {
    pub zoom: u8,
    pub environment: EnvironmentInfo,
}

impl RenderContext {
    /// Overview length budget. Larger zoom, less text per entry.
    pub fn overview_limit(&self) -> usize {
        match self.zoom {
            1 => 280,
            2 => 220,
            3 => 160,
            4 => 120,
            _ => 80,
        }
    }
}

pub fn render_item(item: &HistoryItem, ctx: &RenderContext) -> Vec<StyledLine> {
    match item {
        HistoryItem::Input(text) => vec![StyledLine::new(LineStyle::Input, format!("$ {text}"))],
        HistoryItem::Output(text) => text
            .lines()
            .map(|line| StyledLine::new(LineStyle::Normal, line))
            .collect(),
        HistoryItem::Error(text) => {
            let mut lines = text.lines();
            let first = lines.next().unwrap_or_default();
            std::iter::once(StyledLine::new(LineStyle::Error, format!("Error: {first}")))
                .chain(lines.map(|line| StyledLine::new(LineStyle::Error, line)))
                .collect()
        }
        HistoryItem::Component(payload) => render_component(payload, ctx),
    }
}

fn render_component(payload: &ComponentPayload, ctx: &RenderContext) -> Vec<StyledLine> {
    match payload {
        ComponentPayload::Neofetch => render_neofetch(&ctx.environment),
        ComponentPayload::List { items } => render_list(items, ctx),
        ComponentPayload::Details { item, media_type } => render_details(item, *media_type, ctx),
    }
}

fn render_list(items: &[Value], ctx: &RenderContext) -> Vec<StyledLine> {
    if items.is_empty() {
        return vec![StyledLine::new(LineStyle::Normal, NO_RESULTS)];
    }

    let mut lines = Vec::new();
    for item in items.iter().take(LIST_LIMIT) {
        lines.push(StyledLine::new(
            LineStyle::Accent,
            format!("{} ({})", title_of(item), year_of(item)),
        ));
        if let Some(overview) = str_field(item, "overview").filter(|o| !o.is_empty()) {
            lines.push(StyledLine::new(
                LineStyle::Dim,
                clamp(overview, ctx.overview_limit()),
            ));
        }
        lines.push(StyledLine::new(
            LineStyle::Dim,
            format!(
                "ID: {} | Type: {} | Rating: {}",
                display_field(item, "id"),
                media_type_of(item),
                display_field(item, "vote_average"),
            ),
        ));
        lines.push(StyledLine::new(LineStyle::Normal, ""));
    }
    lines
}

fn render_details(item: &Value, media_type: MediaKind, ctx: &RenderContext) -> Vec<StyledLine> {
    let release = str_field(item, "release_date")
        .or_else(|| str_field(item, "first_air_date"))
        .unwrap_or("N/A");
    let genres = item
        .get("genres")
        .and_then(Value::as_array)
        .map(|genres| {
            genres
                .iter()
                .filter_map(|genre| str_field(genre, "name"))
                .collect::<Vec<_>>()
                .join(", ")
        })
        .unwrap_or_default();

    let mut lines = vec![StyledLine::new(LineStyle::Accent, title_of(item).to_uppercase())];
    if let Some(overview) = str_field(item, "overview").filter(|o| !o.is_empty()) {
        lines.push(StyledLine::new(
            LineStyle::Normal,
            clamp(overview, ctx.overview_limit() * 3),
        ));
    }
    lines.extend([
        StyledLine::new(LineStyle::Dim, format!("Release date (Yayın Tarihi): {release}")),
        StyledLine::new(
            LineStyle::Dim,
            format!("Rating (Puan): {}/10", display_field(item, "vote_average")),
        ),
        StyledLine::new(
            LineStyle::Dim,
            format!("Status (Durum): {}", str_field(item, "status").unwrap_or("N/A")),
        ),
        StyledLine::new(LineStyle::Dim, format!("Genres (Türler): {genres}")),
        StyledLine::new(
            LineStyle::Accent,
            format!(
                "[ OYNAT ] play {media_type} {}",
                display_field(item, "id")
            ),
        ),
    ]);
    lines
}

fn render_neofetch(env: &EnvironmentInfo) -> Vec<StyledLine> {
    let (width, height) = env.terminal_size;
    let facts = [
        format!("OS: TerminalOS v{APP_VERSION}"),
        format!(
            "Host: {} ({})",
            std::env::consts::OS,
            std::env::consts::ARCH
        ),
        format!("Resolution: {width}x{height}"),
        "Shell: cineterm".to_string(),
        format!("Theme: {}", env.theme.name()),
        format!("Uptime: {}s", env.uptime.as_secs()),
    ];

    let rows = facts.len().max(NEOFETCH_LOGO.len());
    (0..rows)
        .map(|row| {
            let logo = NEOFETCH_LOGO.get(row).copied().unwrap_or("            ");
            let fact = facts.get(row).map(String::as_str).unwrap_or_default();
            StyledLine::new(LineStyle::Accent, format!("{logo} {fact}").trim_end().to_string())
        })
        .collect()
}

fn str_field<'a>(item: &'a Value, key: &str) -> Option<&'a str> {
    item.get(key).and_then(Value::as_str)
}

/// Numbers and strings as plain text, anything else as `N/A`
fn display_field(item: &Value, key: &str) -> String {
    match item.get(key) {
        Some(Value::String(s)) => s.clone(),
        Some(Value::Number(n)) => n.to_string(),
        _ => "N/A".to_string(),
    }
}

fn title_of(item: &Value) -> &str {
    str_field(item, "title")
        .or_else(|| str_field(item, "name"))
        .unwrap_or("Untitled")
}

fn year_of(item: &Value) -> String {
    str_field(item, "release_date")
        .or_else(|| str_field(item, "first_air_date"))
        .and_then(|date| date.get(..4))
        .filter(|year| year.chars().all(|c| c.is_ascii_digit()))
        .unwrap_or("N/A")
        .to_string()
}

/// Search results carry `media_type`; other lists only differ by having a
/// `title` (movies) or a `name` (shows).
fn media_type_of(item: &Value) -> &str {
    str_field(item, "media_type").unwrap_or(if item.get("title").is_some() {
        "movie"
    } else {
        "tv"
    })
}

fn clamp(text: &str, limit: usize) -> String {
    if text.chars().count() <= limit {
        return text.to_string();
    }
    let mut clamped: String = text.chars().take(limit.saturating_sub(3)).collect();
    clamped.push_str("...");
    clamped
}
