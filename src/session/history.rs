//! # Session History
//!
//! What has been shown in the terminal so far, plus shell-style recall of
//! previously submitted lines.

use crate::interpreter::ComponentPayload;

/// One entry in the visible conversation
#[derive(Debug, Clone, PartialEq)]
pub enum HistoryItem {
    /// A line the user submitted
    Input(String),
    Output(String),
    Error(String),
    Component(ComponentPayload),
}

/// Up/Down arrow recall over submitted lines
///
/// The cursor counts back from the newest entry: `Some(0)` is the most
/// recent submission, `None` means the user is editing a fresh line.
#[derive(Debug, Clone, Default)]
pub struct CommandRecall {
    entries: Vec<String>,
    cursor: Option<usize>,
}

impl CommandRecall {
    pub fn new() -> Self {
        Self::default()
    }

    /// Record a submitted line and leave recall mode
    pub fn push(&mut self, line: impl Into<String>) {
        self.entries.push(line.into());
        self.cursor = None;
    }

    /// Step to an older entry (ArrowUp). Stops at the oldest one.
    pub fn previous(&mut self) -> Option<&str> {
        let newest = self.entries.len().checked_sub(1)?;
        let index = self.cursor.map_or(0, |i| (i + 1).min(newest));
        self.cursor = Some(index);
        self.entry(index)
    }

    /// Step to a newer entry (ArrowDown). Moving past the newest entry
    /// yields an empty line; outside recall mode nothing happens.
    pub fn next(&mut self) -> Option<&str> {
        match self.cursor? {
            0 => {
                self.cursor = None;
                Some("")
            }
            i => {
                self.cursor = Some(i - 1);
                self.entry(i - 1)
            }
        }
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    fn entry(&self, back: usize) -> Option<&str> {
        let index = self.entries.len().checked_sub(back + 1)?;
        self.entries.get(index).map(String::as_str)
    }
}
