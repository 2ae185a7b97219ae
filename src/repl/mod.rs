//! # Interactive Terminal
//!
//! - `app`: the event loop and screen drawing
//! - `boot`: start-up sequence
//! - `io`: crossterm seams with mock implementations

pub mod app;
pub mod boot;
pub mod io;

pub use app::TerminalApp;
pub use boot::{BootTiming, BOOT_SEQUENCE};
pub use io::{EventStream, RenderStream, TerminalEventStream, TerminalRenderStream};
