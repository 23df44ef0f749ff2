//! # Mock I/O Implementations for Testing
//!
//! `MockEventStream` replays scripted events. `MockRenderStream` records every
//! render call and keeps a character grid of what a terminal would show, so
//! tests can assert on screen contents after the stream has been moved into
//! the controller (through a cloned `RenderRecorder`).

use super::{EventStream, RenderStream, TerminalSize};
use anyhow::Result;
use crossterm::event::Event;
use std::collections::VecDeque;
use std::io::Write;
use std::sync::{Arc, Mutex, MutexGuard};
use std::time::Duration;
use unicode_width::UnicodeWidthChar;

/// Mock event stream for testing
pub struct MockEventStream {
    events: VecDeque<Event>,
}

impl MockEventStream {
    pub fn new(events: Vec<Event>) -> Self {
        Self {
            events: events.into_iter().collect(),
        }
    }

    pub fn empty() -> Self {
        Self {
            events: VecDeque::new(),
        }
    }

    pub fn push_event(&mut self, event: Event) {
        self.events.push_back(event);
    }

    pub fn remaining(&self) -> usize {
        self.events.len()
    }
}

impl EventStream for MockEventStream {
    fn poll(&mut self, _timeout: Duration) -> Result<bool> {
        Ok(!self.events.is_empty())
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
    EnterAlternateScreen,
    LeaveAlternateScreen,
    EnableRawMode,
    DisableRawMode,
    EnableBracketedPaste,
    DisableBracketedPaste,
    Write(Vec<u8>),
    Flush,
}

/// Marks the second cell of a double-width character
const WIDE_TAIL: char = '\0';

#[derive(Debug)]
struct EscapeState {
    in_escape: bool,
    in_csi: bool,
}

#[derive(Debug)]
struct Screen {
    commands: Vec<RenderCommand>,
    cells: Vec<Vec<char>>,
    width: u16,
    height: u16,
    cursor: (u16, u16),
    cursor_visible: bool,
    raw_mode: bool,
    alternate_screen: bool,
    bracketed_paste: bool,
    escape: EscapeState,
}

impl Screen {
    fn new((width, height): TerminalSize) -> Self {
        Self {
            commands: Vec::new(),
            cells: vec![vec![' '; width as usize]; height as usize],
            width,
            height,
            cursor: (0, 0),
            cursor_visible: true,
            raw_mode: false,
            alternate_screen: false,
            bracketed_paste: false,
            escape: EscapeState {
                in_escape: false,
                in_csi: false,
            },
        }
    }

    fn clear(&mut self) {
        for row in &mut self.cells {
            row.iter_mut().for_each(|cell| *cell = ' ');
        }
    }

    fn clear_to_end_of_line(&mut self) {
        let (x, y) = self.cursor;
        if let Some(row) = self.cells.get_mut(y as usize) {
            for cell in row.iter_mut().skip(x as usize) {
                *cell = ' ';
            }
        }
    }

    fn put_char(&mut self, ch: char) {
        let width = ch.width().unwrap_or(0) as u16;
        if width == 0 {
            return;
        }
        let (x, y) = self.cursor;
        if y >= self.height || x + width > self.width {
            return;
        }
        let row = &mut self.cells[y as usize];
        row[x as usize] = ch;
        if width == 2 {
            row[x as usize + 1] = WIDE_TAIL;
        }
        self.cursor.0 = x + width;
    }

    /// Interpret printable text and the few CSI sequences the renderer
    /// emits inline (clear-line); styling sequences are skipped.
    fn feed(&mut self, text: &str) {
        for ch in text.chars() {
            if self.escape.in_csi {
                if ('\u{40}'..='\u{7e}').contains(&ch) {
                    self.escape.in_csi = false;
                    if ch == 'K' {
                        self.clear_to_end_of_line();
                    }
                }
                continue;
            }
            if self.escape.in_escape {
                self.escape.in_escape = false;
                self.escape.in_csi = ch == '[';
                continue;
            }
            match ch {
                '\u{1b}' => self.escape.in_escape = true,
                '\r' => self.cursor.0 = 0,
                '\n' => self.cursor.1 = self.cursor.1.saturating_add(1),
                _ => self.put_char(ch),
            }
        }
    }

    fn row_text(&self, row: usize) -> String {
        self.cells
            .get(row)
            .map(|cells| {
                cells
                    .iter()
                    .filter(|ch| **ch != WIDE_TAIL)
                    .collect::<String>()
                    .trim_end()
                    .to_string()
            })
            .unwrap_or_default()
    }
}

/// Shared view of a `MockRenderStream` that survives moving the stream
#[derive(Debug, Clone)]
pub struct RenderRecorder {
    screen: Arc<Mutex<Screen>>,
}

impl RenderRecorder {
    fn lock(&self) -> MutexGuard<'_, Screen> {
        // A panicking test thread must not hide the recorded output
        self.screen.lock().unwrap_or_else(|e| e.into_inner())
    }

    pub fn commands(&self) -> Vec<RenderCommand> {
        self.lock().commands.clone()
    }

    pub fn has_command(&self, command: &RenderCommand) -> bool {
        self.lock().commands.contains(command)
    }

    pub fn clear_commands(&self) {
        self.lock().commands.clear();
    }

    /// Text shown on one screen row, trailing blanks trimmed
    pub fn screen_row(&self, row: usize) -> String {
        self.lock().row_text(row)
    }

    /// All screen rows joined with newlines
    pub fn screen_text(&self) -> String {
        let screen = self.lock();
        (0..screen.height as usize)
            .map(|row| screen.row_text(row))
            .collect::<Vec<_>>()
            .join("\n")
    }

    pub fn screen_contains(&self, needle: &str) -> bool {
        self.screen_text().contains(needle)
    }

    /// Current cursor cell on the grid
    pub fn cursor(&self) -> (u16, u16) {
        self.lock().cursor
    }

    pub fn cursor_visible(&self) -> bool {
        self.lock().cursor_visible
    }

    pub fn raw_mode(&self) -> bool {
        self.lock().raw_mode
    }

    pub fn alternate_screen(&self) -> bool {
        self.lock().alternate_screen
    }

    pub fn bracketed_paste(&self) -> bool {
        self.lock().bracketed_paste
    }
}

/// Mock render stream for testing
pub struct MockRenderStream {
    recorder: RenderRecorder,
    terminal_size: TerminalSize,
}

impl MockRenderStream {
    pub fn new() -> Self {
        Self::with_size((80, 24))
    }

    pub fn with_size(size: TerminalSize) -> Self {
        Self {
            recorder: RenderRecorder {
                screen: Arc::new(Mutex::new(Screen::new(size))),
            },
            terminal_size: size,
        }
    }

    /// Handle for inspecting output after the stream is handed off
    pub fn recorder(&self) -> RenderRecorder {
        self.recorder.clone()
    }

    fn record(&self, command: RenderCommand) -> MutexGuard<'_, Screen> {
        let mut screen = self.recorder.lock();
        screen.commands.push(command);
        screen
    }
}

impl Write for MockRenderStream {
    fn write(&mut self, buf: &[u8]) -> std::io::Result<usize> {
        let mut screen = self.record(RenderCommand::Write(buf.to_vec()));
        screen.feed(&String::from_utf8_lossy(buf));
        Ok(buf.len())
    }

    fn flush(&mut self) -> std::io::Result<()> {
        self.record(RenderCommand::Flush);
        Ok(())
    }
}

impl RenderStream for MockRenderStream {
    fn clear_screen(&mut self) -> Result<()> {
        self.record(RenderCommand::ClearScreen).clear();
        Ok(())
    }

    fn move_cursor(&mut self, x: u16, y: u16) -> Result<()> {
        self.record(RenderCommand::MoveCursor(x, y)).cursor = (x, y);
        Ok(())
    }

    fn hide_cursor(&mut self) -> Result<()> {
        self.record(RenderCommand::HideCursor).cursor_visible = false;
        Ok(())
    }

    fn show_cursor(&mut self) -> Result<()> {
        self.record(RenderCommand::ShowCursor).cursor_visible = true;
        Ok(())
    }

    fn get_size(&self) -> Result<TerminalSize> {
        Ok(self.terminal_size)
    }

    fn enter_alternate_screen(&mut self) -> Result<()> {
        self.record(RenderCommand::EnterAlternateScreen).alternate_screen = true;
        Ok(())
    }

    fn leave_alternate_screen(&mut self) -> Result<()> {
        self.record(RenderCommand::LeaveAlternateScreen).alternate_screen = false;
        Ok(())
    }

    fn enable_raw_mode(&mut self) -> Result<()> {
        self.record(RenderCommand::EnableRawMode).raw_mode = true;
        Ok(())
    }

    fn disable_raw_mode(&mut self) -> Result<()> {
        self.record(RenderCommand::DisableRawMode).raw_mode = false;
        Ok(())
    }

    fn enable_bracketed_paste(&mut self) -> Result<()> {
        self.record(RenderCommand::EnableBracketedPaste).bracketed_paste = true;
        Ok(())
    }

    fn disable_bracketed_paste(&mut self) -> Result<()> {
        self.record(RenderCommand::DisableBracketedPaste).bracketed_paste = false;
        Ok(())
    }
}

impl Default for MockEventStream {
    fn default() -> Self {
        Self::empty()
    }
}

impl Default for MockRenderStream {
    fn default() -> Self {
        Self::new()
    }
}
