//! # Command Aliases
//!
//! Every command can be typed in English or Turkish. Rather than keeping one
//! dispatch branch per language, each surface spelling is an entry in a
//! single table that resolves to a canonical [`Action`]. Dispatch only ever
//! sees the action.

/// Canonical command identity
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Action {
    Help,
    Clear,
    Search,
    TopRated,
    NowPlaying,
    Upcoming,
    Detail,
    Play,
    SetAnimation,
    SetSound,
    SetZoom,
    SystemInfo,
}

/// Which vocabulary a spelling belongs to. Only `help` output depends on it.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Vocabulary {
    English,
    Turkish,
}

/// One surface spelling of a command
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Alias {
    pub token: &'static str,
    pub action: Action,
    pub vocabulary: Vocabulary,
    /// Legacy `matrix` toggle: bare use switches the matrix animation on
    /// and `on`/`off` are accepted as arguments.
    pub legacy_toggle: bool,
}

impl Alias {
    const fn en(token: &'static str, action: Action) -> Self {
        Self {
            token,
            action,
            vocabulary: Vocabulary::English,
            legacy_toggle: false,
        }
    }

    const fn tr(token: &'static str, action: Action) -> Self {
        Self {
            token,
            action,
            vocabulary: Vocabulary::Turkish,
            legacy_toggle: false,
        }
    }
}

/// `top` and `zoom` are spelled the same in both languages and appear once.
const ALIASES: &[Alias] = &[
    Alias::en("help", Action::Help),
    Alias::tr("yardım", Action::Help),
    Alias::en("clear", Action::Clear),
    Alias::tr("temizle", Action::Clear),
    Alias::en("search", Action::Search),
    Alias::tr("ara", Action::Search),
    Alias::en("top", Action::TopRated),
    Alias::en("now_playing", Action::NowPlaying),
    Alias::tr("vizyondakiler", Action::NowPlaying),
    Alias::en("upcoming", Action::Upcoming),
    Alias::tr("yakinda", Action::Upcoming),
    Alias::en("info", Action::Detail),
    Alias::tr("bilgi", Action::Detail),
    Alias::en("play", Action::Play),
    Alias::tr("oynat", Action::Play),
    Alias::tr("izle", Action::Play),
    Alias::en("animation", Action::SetAnimation),
    Alias::tr("animasyon", Action::SetAnimation),
    Alias {
        token: "matrix",
        action: Action::SetAnimation,
        vocabulary: Vocabulary::English,
        legacy_toggle: true,
    },
    Alias::en("sound", Action::SetSound),
    Alias::tr("ses", Action::SetSound),
    Alias::en("zoom", Action::SetZoom),
    Alias::en("neofetch", Action::SystemInfo),
    Alias::tr("sistem", Action::SystemInfo),
];

/// Look up an already lower-cased command token.
pub fn resolve(command: &str) -> Option<&'static Alias> {
    ALIASES.iter().find(|alias| alias.token == command)
}

/// All spellings of an action, in table order
pub fn spellings(action: Action) -> impl Iterator<Item = &'static str> {
    ALIASES
        .iter()
        .filter(move |alias| alias.action == action)
        .map(|alias| alias.token)
}
