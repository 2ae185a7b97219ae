//! # Command Interpreter
//!
//! Turns one line of terminal input into a [`CommandResult`].
//!
//! ```text
//! "oynat tv 1399 2 5"
//!        │ parse: lower-cased command + positional args
//!        ▼
//! alias::resolve("oynat") ──▶ Action::Play
//!        │ dispatch (at most one MetadataSource::get)
//!        ▼
//! CommandResult::Play { id: "1399", type: tv, season: 2, episode: 5 }
//! ```
//!
//! The interpreter keeps no state between calls and never fails: usage
//! mistakes, fetch failures and unknown commands all come back as
//! `CommandResult::Error`.

pub mod alias;
pub mod error;
pub mod help;
pub mod result;

pub use alias::{Action, Alias, Vocabulary};
pub use error::CommandError;
pub use result::{AnimationMode, CommandResult, ComponentPayload, MediaKind, PlaybackRequest};

use crate::metadata::{results_of, MetadataSource};
use serde_json::Value;

/// A split input line
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ParsedInput {
    /// First token, lower-cased
    pub command: String,
    /// Remaining tokens in order
    pub args: Vec<String>,
}

impl ParsedInput {
    /// Split on whitespace runs. Returns `None` for blank input.
    pub fn parse(input: &str) -> Option<Self> {
        let mut tokens = input.split_whitespace();
        let command = tokens.next()?.to_lowercase();
        let args = tokens.map(str::to_string).collect();
        Some(Self { command, args })
    }
}

/// Interpret one line of input.
///
/// Returns `None` only when the line is blank; callers should not record
/// anything in that case.
pub async fn execute<M: MetadataSource>(input: &str, source: &M) -> Option<CommandResult> {
    let parsed = ParsedInput::parse(input)?;
    tracing::debug!("Executing '{}' with {} args", parsed.command, parsed.args.len());

    let result = match dispatch(&parsed, source).await {
        Ok(result) => result,
        Err(err) => {
            match &err {
                CommandError::Fetch(cause) | CommandError::Details(cause) => {
                    tracing::error!("Command '{}' failed: {}", parsed.command, cause)
                }
                _ => tracing::debug!("Command '{}' rejected: {}", parsed.command, err),
            }
            err.into()
        }
    };

    Some(result)
}

async fn dispatch<M: MetadataSource>(
    parsed: &ParsedInput,
    source: &M,
) -> Result<CommandResult, CommandError> {
    let alias = alias::resolve(&parsed.command)
        .ok_or_else(|| CommandError::UnknownCommand(parsed.command.clone()))?;
    let args = parsed.args.as_slice();

    match alias.action {
        Action::Help => Ok(CommandResult::output(help::help_text(alias.vocabulary))),
        Action::Clear => Ok(CommandResult::Clear),
        Action::SetAnimation => set_animation(alias, args),
        Action::SetSound => set_sound(args),
        Action::SetZoom => set_zoom(args),
        Action::SystemInfo => Ok(CommandResult::component(ComponentPayload::Neofetch)),
        Action::NowPlaying => list(source, "movie/now_playing").await,
        Action::Upcoming => list(source, "movie/upcoming").await,
        Action::TopRated => {
            let kind = args
                .first()
                .and_then(|token| MediaKind::parse(token))
                .unwrap_or(MediaKind::Movie);
            list(source, &format!("{kind}/top_rated")).await
        }
        Action::Search => search(source, args).await,
        Action::Detail => detail(source, args).await,
        Action::Play => play(args),
    }
}

fn set_animation(alias: &Alias, args: &[String]) -> Result<CommandResult, CommandError> {
    let requested = args.first().map(|token| token.to_lowercase());

    let mode = match (alias.legacy_toggle, requested.as_deref()) {
        (true, None | Some("on" | "ac")) => Some(AnimationMode::Matrix),
        (_, Some(token)) => AnimationMode::parse(token),
        (false, None) => None,
    };

    mode.map(|data| CommandResult::Animation { data })
        .ok_or(CommandError::Usage(help::ANIMATION_USAGE))
}

fn set_sound(args: &[String]) -> Result<CommandResult, CommandError> {
    let state = args.first().map(|token| token.to_lowercase());
    match state.as_deref() {
        Some("on" | "ac") => Ok(CommandResult::Sound { data: true }),
        Some("off" | "kapat") => Ok(CommandResult::Sound { data: false }),
        _ => Err(CommandError::Usage(help::SOUND_USAGE)),
    }
}

fn set_zoom(args: &[String]) -> Result<CommandResult, CommandError> {
    args.first()
        .and_then(|token| token.parse::<u8>().ok())
        .filter(|level| (1..=5).contains(level))
        .map(|data| CommandResult::Zoom { data })
        .ok_or(CommandError::Usage(help::ZOOM_USAGE))
}

async fn fetch_results<M: MetadataSource>(
    source: &M,
    path: &str,
    query: &[(&str, &str)],
) -> Result<Vec<Value>, CommandError> {
    let body = source.get(path, query).await.map_err(CommandError::Fetch)?;
    Ok(results_of(body))
}

async fn list<M: MetadataSource>(source: &M, path: &str) -> Result<CommandResult, CommandError> {
    let items = fetch_results(source, path, &[]).await?;
    Ok(CommandResult::component(ComponentPayload::List { items }))
}

async fn search<M: MetadataSource>(
    source: &M,
    args: &[String],
) -> Result<CommandResult, CommandError> {
    if args.is_empty() {
        return Err(CommandError::Usage(help::SEARCH_USAGE));
    }
    let query = args.join(" ");

    let items = fetch_results(source, "search/multi", &[("query", &query)]).await?;
    if items.is_empty() {
        return Ok(CommandResult::output(help::NO_RESULTS));
    }
    Ok(CommandResult::component(ComponentPayload::List { items }))
}

async fn detail<M: MetadataSource>(
    source: &M,
    args: &[String],
) -> Result<CommandResult, CommandError> {
    let [id, kind, ..] = args else {
        return Err(CommandError::Usage(help::DETAIL_USAGE));
    };
    let media_type = MediaKind::parse(kind).ok_or(CommandError::Usage(help::DETAIL_USAGE))?;

    let item = source
        .get(&format!("{media_type}/{id}"), &[])
        .await
        .map_err(CommandError::Details)?;

    Ok(CommandResult::component(ComponentPayload::Details { item, media_type }))
}

fn play(args: &[String]) -> Result<CommandResult, CommandError> {
    let [kind, id, rest @ ..] = args else {
        return Err(CommandError::Usage(help::PLAY_USAGE));
    };

    Ok(CommandResult::Play {
        data: PlaybackRequest {
            id: id.clone(),
            kind: MediaKind::parse(kind).unwrap_or(MediaKind::Movie),
            season: positive_or_one(rest.first()),
            episode: positive_or_one(rest.get(1)),
        },
    })
}

/// Season/episode numbers: anything missing, non-numeric or zero becomes 1.
fn positive_or_one(token: Option<&String>) -> u32 {
    token
        .and_then(|t| t.parse::<u32>().ok())
        .filter(|n| *n >= 1)
        .unwrap_or(1)
}
