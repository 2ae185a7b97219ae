//! # I/O Abstraction Layer
//!
//! Trait seams between the terminal loop and crossterm, so the loop can be
//! driven by scripted events in tests.
//!
//! ```text
//! Production:  TerminalApp ──▶ TerminalEventStream ──▶ crossterm::event::read()
//!                          ──▶ TerminalRenderStream ──▶ crossterm::execute!()
//!
//! Testing:     TerminalApp ──▶ MockEventStream     ──▶ VecDeque<Event>
//!                          ──▶ MockRenderStream    ──▶ Vec<RenderCommand>
//! ```

use anyhow::Result;
use crossterm::event::Event;
use crossterm::style::Color;
use std::io::Write;
use std::time::Duration;

pub mod mock;
pub mod terminal;

pub use mock::{MockEventStream, MockRenderStream, RenderCommand};
pub use terminal::{TerminalEventStream, TerminalRenderStream};

/// Terminal size as (width, height)
pub type TerminalSize = (u16, u16);

/// Source of input events
pub trait EventStream: Send {
    /// Whether an event is ready within `timeout`
    fn poll(&mut self, timeout: Duration) -> Result<bool>;

    /// Next event. Only call after `poll` returned true.
    fn read(&mut self) -> Result<Event>;
}

/// Sink for terminal output
pub trait RenderStream: Write + Send {
    fn clear_screen(&mut self) -> Result<()>;

    /// Move cursor to (column, row)
    fn move_cursor(&mut self, x: u16, y: u16) -> Result<()>;

    fn hide_cursor(&mut self) -> Result<()>;

    fn show_cursor(&mut self) -> Result<()>;

    /// Colour for text written from now on
    fn set_foreground(&mut self, color: Color) -> Result<()>;

    fn reset_color(&mut self) -> Result<()>;

    fn get_size(&self) -> Result<TerminalSize>;

    fn enter_alternate_screen(&mut self) -> Result<()>;

    fn leave_alternate_screen(&mut self) -> Result<()>;

    fn enable_raw_mode(&mut self) -> Result<()>;

    fn disable_raw_mode(&mut self) -> Result<()>;
}
