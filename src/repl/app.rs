//! # Terminal Application
//!
//! Event loop of the interactive terminal. Reads key events, keeps the
//! input line, hands submitted lines to the [`SessionController`] and
//! redraws the screen after every change.
//!
//! Submissions are serialised: the loop awaits each command before reading
//! the next event, with a "Processing..." line on screen meanwhile.

use std::io::Write;
use std::time::{Duration, Instant};

use anyhow::Result;
use crossterm::event::{Event, KeyCode, KeyEvent, KeyEventKind, KeyModifiers};
use crossterm::style::Color;

use super::boot::{BootTiming, BOOT_SEQUENCE};
use super::io::{EventStream, RenderStream};
use crate::metadata::MetadataSource;
use crate::session::player::{embed_url, overlay_title};
use crate::session::{
    render_item, EnvironmentInfo, LineStyle, RenderContext, SessionController, StyledLine,
    SubmitOutcome, Theme,
};

const POLL_INTERVAL: Duration = Duration::from_millis(100);
const PROCESSING: &str = "Processing... (İşleniyor...)";
const BELL: &[u8] = b"\x07";

pub struct TerminalApp<ES: EventStream, RS: RenderStream, M: MetadataSource> {
    session: SessionController<M>,
    event_stream: ES,
    render_stream: RS,
    input: String,
    boot: Option<BootTiming>,
    started: Instant,
    should_quit: bool,
}

impl<ES: EventStream, RS: RenderStream, M: MetadataSource> TerminalApp<ES, RS, M> {
    pub fn new(session: SessionController<M>, event_stream: ES, render_stream: RS) -> Self {
        Self {
            session,
            event_stream,
            render_stream,
            input: String::new(),
            boot: Some(BootTiming::default()),
            started: Instant::now(),
            should_quit: false,
        }
    }

    /// Play the boot sequence with `timing`, or skip it with `None`.
    pub fn with_boot(mut self, timing: Option<BootTiming>) -> Self {
        self.boot = timing;
        self
    }

    pub fn session(&self) -> &SessionController<M> {
        &self.session
    }

    pub fn render_stream(&self) -> &RS {
        &self.render_stream
    }

    pub fn input(&self) -> &str {
        &self.input
    }

    /// Run until the user quits. The terminal is restored even when the
    /// loop fails.
    pub async fn run(&mut self) -> Result<()> {
        self.render_stream.enable_raw_mode()?;
        self.render_stream.enter_alternate_screen()?;
        self.render_stream.hide_cursor()?;

        let result = self.event_loop().await;
        let cleanup = self.cleanup();
        if let Err(e) = &result {
            tracing::error!("Terminal loop failed: {:#}", e);
        }
        result.and(cleanup)
    }

    async fn event_loop(&mut self) -> Result<()> {
        if let Some(timing) = self.boot {
            self.play_boot(timing).await?;
        }
        self.session.welcome();
        self.render()?;

        while !self.should_quit {
            if !self.event_stream.poll(POLL_INTERVAL)? {
                continue;
            }
            match self.event_stream.read()? {
                Event::Key(key) if key.kind != KeyEventKind::Release => {
                    tracing::trace!("Key event: {:?}", key);
                    self.handle_key(key).await?;
                }
                Event::Resize(width, height) => {
                    tracing::debug!("Terminal resized to {}x{}", width, height);
                    self.render()?;
                }
                _ => {}
            }
        }
        Ok(())
    }

    async fn play_boot(&mut self, timing: BootTiming) -> Result<()> {
        let mut shown = Vec::with_capacity(BOOT_SEQUENCE.len());
        for line in BOOT_SEQUENCE {
            tokio::time::sleep(timing.line_delay).await;
            shown.push(StyledLine::new(LineStyle::Normal, line));
            self.draw(&shown, None)?;
        }
        tokio::time::sleep(timing.settle_delay).await;
        Ok(())
    }

    async fn handle_key(&mut self, key: KeyEvent) -> Result<()> {
        let ctrl = key.modifiers.contains(KeyModifiers::CONTROL);
        match key.code {
            KeyCode::Char('c') | KeyCode::Char('d') if ctrl => {
                tracing::debug!("Quit requested");
                self.should_quit = true;
                return Ok(());
            }
            KeyCode::Enter => return self.submit().await,
            KeyCode::Esc => {
                if !self.session.close_playback() {
                    return Ok(());
                }
            }
            KeyCode::Backspace => {
                self.input.pop();
            }
            KeyCode::Up => match self.session.recall_previous() {
                Some(line) => self.input = line,
                None => return Ok(()),
            },
            KeyCode::Down => match self.session.recall_next() {
                Some(line) => self.input = line,
                None => return Ok(()),
            },
            KeyCode::Char(c) if !ctrl => self.input.push(c),
            _ => return Ok(()),
        }
        self.render()
    }

    async fn submit(&mut self) -> Result<()> {
        let line = std::mem::take(&mut self.input);
        if !line.trim().is_empty() {
            let mut pending = self.history_lines();
            pending.push(StyledLine::new(LineStyle::Input, format!("$ {line}")));
            pending.push(StyledLine::new(LineStyle::Dim, PROCESSING));
            self.draw(&pending, None)?;
        }

        let outcome = self.session.submit(&line).await;
        if outcome == SubmitOutcome::Failed && self.session.settings().sound {
            self.render_stream.write_all(BELL)?;
        }
        self.render()
    }

    fn render(&mut self) -> Result<()> {
        let mut lines = self.history_lines();
        if let Some(request) = self.session.playback() {
            lines.push(StyledLine::new(LineStyle::Normal, ""));
            lines.push(StyledLine::new(LineStyle::Accent, format!("▶ {}", overlay_title(request))));
            lines.push(StyledLine::new(LineStyle::Normal, embed_url(request)));
            lines.push(StyledLine::new(LineStyle::Dim, "[ESC] Kapat / Close"));
        }
        let prompt = format!("> {}_", self.input);
        self.draw(&lines, Some(&prompt))
    }

    fn history_lines(&self) -> Vec<StyledLine> {
        let ctx = self.render_context();
        self.session
            .history()
            .iter()
            .flat_map(|item| render_item(item, &ctx))
            .collect()
    }

    fn render_context(&self) -> RenderContext {
        let terminal_size = self.render_stream.get_size().unwrap_or((80, 24));
        RenderContext {
            zoom: self.session.settings().zoom,
            environment: EnvironmentInfo {
                terminal_size,
                uptime: self.started.elapsed(),
                theme: self.session.settings().theme(),
            },
        }
    }

    /// Draw the newest lines that fit above the prompt row.
    fn draw(&mut self, lines: &[StyledLine], prompt: Option<&str>) -> Result<()> {
        let (width, height) = self.render_stream.get_size()?;
        let theme = self.session.settings().theme();
        let body_rows = usize::from(height.saturating_sub(1));

        let wrapped: Vec<(LineStyle, String)> = lines
            .iter()
            .flat_map(|line| {
                wrap(&line.text, usize::from(width.max(1)))
                    .into_iter()
                    .map(move |text| (line.style, text))
            })
            .collect();
        let visible = &wrapped[wrapped.len().saturating_sub(body_rows)..];

        self.render_stream.clear_screen()?;
        for (row, (style, text)) in visible.iter().enumerate() {
            self.render_stream.move_cursor(0, row as u16)?;
            self.render_stream.set_foreground(color_for(*style, theme))?;
            self.render_stream.write_all(text.as_bytes())?;
        }
        if let Some(prompt) = prompt {
            self.render_stream.move_cursor(0, height.saturating_sub(1))?;
            self.render_stream.set_foreground(primary_color(theme))?;
            self.render_stream.write_all(prompt.as_bytes())?;
        }
        self.render_stream.reset_color()?;
        self.render_stream.flush()?;
        Ok(())
    }

    fn cleanup(&mut self) -> Result<()> {
        self.render_stream.reset_color()?;
        self.render_stream.show_cursor()?;
        self.render_stream.leave_alternate_screen()?;
        self.render_stream.disable_raw_mode()?;
        Ok(())
    }
}

fn primary_color(theme: Theme) -> Color {
    match theme {
        Theme::Green => Color::Green,
        // amber
        Theme::Fallout => Color::Rgb {
            r: 0xff,
            g: 0xb0,
            b: 0x00,
        },
    }
}

fn color_for(style: LineStyle, theme: Theme) -> Color {
    match style {
        LineStyle::Input | LineStyle::Normal => primary_color(theme),
        LineStyle::Accent => Color::White,
        LineStyle::Dim => Color::DarkGrey,
        LineStyle::Error => Color::Red,
    }
}

/// Split `text` into rows of at most `width` characters.
fn wrap(text: &str, width: usize) -> Vec<String> {
    let chars: Vec<char> = text.chars().collect();
    if chars.is_empty() {
        return vec![String::new()];
    }
    chars.chunks(width).map(|chunk| chunk.iter().collect()).collect()
}
