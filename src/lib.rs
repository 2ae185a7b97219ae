//! # cineterm - Terminal Cinema
//!
//! A bilingual (English/Turkish) command terminal for browsing TMDB movie
//! and TV metadata, plus the small proxy that keeps the TMDB key server-side.
//!
//! ## Architecture
//!
//! ```text
//! ┌──────────────┐  keys   ┌───────────────────┐  line   ┌─────────────┐
//! │ TerminalApp  │────────▶│ SessionController │────────▶│ interpreter │
//! │ (repl)       │◀────────│ (session)         │◀────────│             │
//! └──────────────┘  lines  └───────────────────┘ result  └──────┬──────┘
//!                                                               │ get(path, query)
//!                                                               ▼
//!                                 ┌──────────────────────────────────────┐
//!                                 │ MetadataSource (metadata)            │
//!                                 │  ProxyClient ──▶ /api/tmdb (proxy)   │
//!                                 │  TmdbClient  ──▶ api.themoviedb.org  │
//!                                 └──────────────────────────────────────┘
//! ```

pub mod cmd_args;
pub mod config;
pub mod interpreter;
pub mod logging;
pub mod metadata;
pub mod proxy;
pub mod repl;
pub mod session;

pub use interpreter::{execute, CommandResult};
pub use metadata::{MetadataSource, ProxyClient, TmdbClient};
pub use repl::TerminalApp;
pub use session::SessionController;
