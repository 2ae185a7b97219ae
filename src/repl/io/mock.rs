//! # Mock I/O for Testing
//!
//! Scripted events in, recorded drawing commands out.

use super::{EventStream, RenderStream, TerminalSize};
use anyhow::Result;
use crossterm::event::{Event, KeyCode, KeyEvent, KeyModifiers};
use crossterm::style::Color;
use std::collections::VecDeque;
use std::io::Write;
use std::time::Duration;

/// Replays a fixed list of events, then fails on `read`
pub struct MockEventStream {
    events: VecDeque<Event>,
}

impl MockEventStream {
    pub fn new(events: Vec<Event>) -> Self {
        Self {
            events: events.into_iter().collect(),
        }
    }

    /// Events for typing `text` followed by Enter
    pub fn typed_line(text: &str) -> Vec<Event> {
        text.chars()
            .map(|c| key(KeyCode::Char(c)))
            .chain(std::iter::once(key(KeyCode::Enter)))
            .collect()
    }

    pub fn push_event(&mut self, event: Event) {
        self.events.push_back(event);
    }
}

/// Key press without modifiers
pub fn key(code: KeyCode) -> Event {
    Event::Key(KeyEvent::new(code, KeyModifiers::empty()))
}

/// Ctrl + `c`
pub fn ctrl(c: char) -> Event {
    Event::Key(KeyEvent::new(KeyCode::Char(c), KeyModifiers::CONTROL))
}

impl EventStream for MockEventStream {
    fn poll(&mut self, _timeout: Duration) -> Result<bool> {
        // Always ready, so a script that forgets to quit ends in a read error
        // instead of spinning.
        Ok(true)
    }

    fn read(&mut self) -> Result<Event> {
        self.events
            .pop_front()
            .ok_or_else(|| anyhow::anyhow!("No events available"))
    }
}

/// Recorded render command for verification
#[derive(Debug, Clone, PartialEq)]
pub enum RenderCommand {
    ClearScreen,
    MoveCursor(u16, u16),
    HideCursor,
    ShowCursor,
    SetForeground(Color),
    ResetColor,
    EnterAlternateScreen,
    LeaveAlternateScreen,
    EnableRawMode,
    DisableRawMode,
    Write(Vec<u8>),
    Flush,
}

/// Records everything drawn, and keeps the text of the latest frame
pub struct MockRenderStream {
    commands: Vec<RenderCommand>,
    frame: Vec<u8>,
    frame_rows: usize,
    terminal_size: TerminalSize,
    raw_mode: bool,
    alternate_screen: bool,
}

impl MockRenderStream {
    pub fn new() -> Self {
        Self::with_size((80, 24))
    }

    pub fn with_size(size: TerminalSize) -> Self {
        Self {
            commands: Vec::new(),
            frame: Vec::new(),
            frame_rows: 0,
            terminal_size: size,
            raw_mode: false,
            alternate_screen: false,
        }
    }

    pub fn commands(&self) -> &[RenderCommand] {
        &self.commands
    }

    pub fn has_command(&self, command: &RenderCommand) -> bool {
        self.commands.contains(command)
    }

    /// Text written since the last `clear_screen`
    pub fn frame_text(&self) -> String {
        String::from_utf8_lossy(&self.frame).into_owned()
    }

    /// Every byte ever written, across frames
    pub fn all_text(&self) -> String {
        let bytes: Vec<u8> = self
            .commands
            .iter()
            .filter_map(|c| match c {
                RenderCommand::Write(bytes) => Some(bytes.as_slice()),
                _ => None,
            })
            .flatten()
            .copied()
            .collect();
        String::from_utf8_lossy(&bytes).into_owned()
    }

    pub fn is_raw_mode(&self) -> bool {
        self.raw_mode
    }

    pub fn is_alternate_screen(&self) -> bool {
        self.alternate_screen
    }
}

impl Write for MockRenderStream {
    fn write(&mut self, buf: &[u8]) -> std::io::Result<usize> {
        self.frame.extend_from_slice(buf);
        self.commands.push(RenderCommand::Write(buf.to_vec()));
        Ok(buf.len())
    }

    fn flush(&mut self) -> std::io::Result<()> {
        self.commands.push(RenderCommand::Flush);
        Ok(())
    }
}

impl RenderStream for MockRenderStream {
    fn clear_screen(&mut self) -> Result<()> {
        self.commands.push(RenderCommand::ClearScreen);
        self.frame.clear();
        self.frame_rows = 0;
        Ok(())
    }

    fn move_cursor(&mut self, x: u16, y: u16) -> Result<()> {
        self.commands.push(RenderCommand::MoveCursor(x, y));
        // one text line per cursor move
        if self.frame_rows > 0 {
            self.frame.push(b'\n');
        }
        self.frame_rows += 1;
        Ok(())
    }

    fn hide_cursor(&mut self) -> Result<()> {
        self.commands.push(RenderCommand::HideCursor);
        Ok(())
    }

    fn show_cursor(&mut self) -> Result<()> {
        self.commands.push(RenderCommand::ShowCursor);
        Ok(())
    }

    fn set_foreground(&mut self, color: Color) -> Result<()> {
        self.commands.push(RenderCommand::SetForeground(color));
        Ok(())
    }

    fn reset_color(&mut self) -> Result<()> {
        self.commands.push(RenderCommand::ResetColor);
        Ok(())
    }

    fn get_size(&self) -> Result<TerminalSize> {
        Ok(self.terminal_size)
    }

    fn enter_alternate_screen(&mut self) -> Result<()> {
        self.commands.push(RenderCommand::EnterAlternateScreen);
        self.alternate_screen = true;
        Ok(())
    }

    fn leave_alternate_screen(&mut self) -> Result<()> {
        self.commands.push(RenderCommand::LeaveAlternateScreen);
        self.alternate_screen = false;
        Ok(())
    }

    fn enable_raw_mode(&mut self) -> Result<()> {
        self.commands.push(RenderCommand::EnableRawMode);
        self.raw_mode = true;
        Ok(())
    }

    fn disable_raw_mode(&mut self) -> Result<()> {
        self.commands.push(RenderCommand::DisableRawMode);
        self.raw_mode = false;
        Ok(())
    }
}

impl Default for MockRenderStream {
    fn default() -> Self {
        Self::new()
    }
}
