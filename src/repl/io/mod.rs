//! # I/O Abstraction Layer
//!
//! Trait seams between the application and the terminal so the controller
//! can be driven by scripted input and a recording output in tests.
//!
//! ```text
//! Production:  AppController ──▶ TerminalEventStream  ──▶ crossterm::event::read()
//!                            ──▶ TerminalRenderStream ──▶ crossterm::execute!()
//!
//! Testing:     AppController ──▶ MockEventStream      ──▶ VecDeque<Event>
//!                            ──▶ MockRenderStream     ──▶ Vec<RenderCommand>
//! ```

use anyhow::Result;
use crossterm::event::Event;
use std::io::Write;
use std::time::Duration;

pub mod mock;
pub mod terminal;

pub use terminal::{TerminalEventStream, TerminalRenderStream};

pub use mock::{MockEventStream, MockRenderStream, RenderCommand, RenderRecorder};

/// Type alias for terminal size (width, height)
pub type TerminalSize = (u16, u16);

/// Input event stream abstraction
pub trait EventStream: Send {
    /// Check if events are available within the timeout
    fn poll(&mut self, timeout: Duration) -> Result<bool>;

    /// Read the next available event
    ///
    /// This should only be called after poll() returns true.
    fn read(&mut self) -> Result<Event>;
}

/// Output render stream abstraction
///
/// Styled text goes through the `Write` impl; terminal mode switches go
/// through the explicit methods so tests can observe them.
pub trait RenderStream: Write + Send {
    fn clear_screen(&mut self) -> Result<()>;

    /// Move cursor to specific position (column, row)
    fn move_cursor(&mut self, x: u16, y: u16) -> Result<()>;

    fn hide_cursor(&mut self) -> Result<()>;

    fn show_cursor(&mut self) -> Result<()>;

    /// Get terminal size as (width, height)
    fn get_size(&self) -> Result<TerminalSize>;

    fn enter_alternate_screen(&mut self) -> Result<()>;

    fn leave_alternate_screen(&mut self) -> Result<()>;

    fn enable_raw_mode(&mut self) -> Result<()>;

    fn disable_raw_mode(&mut self) -> Result<()>;

    /// Deliver pasted text as a single event instead of key presses
    fn enable_bracketed_paste(&mut self) -> Result<()>;

    fn disable_bracketed_paste(&mut self) -> Result<()>;
}
