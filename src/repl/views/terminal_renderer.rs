//! # View Layer
//!
//! Draws the analyzer form from the view model. The renderer holds no state
//! of its own beyond the terminal size; every frame is derived from the
//! view model, and each screen area can be redrawn on its own.

use crate::repl::events::ViewEvent;
use crate::repl::geometry::{wrap_words, ScreenLayout, INPUT_GUTTER};
use crate::repl::io::RenderStream;
use crate::repl::models::{BackendHealth, Sentiment};
use crate::repl::view_models::ViewModel;
use anyhow::Result;
use crossterm::{
    queue,
    style::{Attribute, Color, Print, ResetColor, SetAttribute, SetForegroundColor},
    terminal::{Clear, ClearType},
};
use unicode_width::UnicodeWidthChar;

// Helper macro to convert crossterm errors to anyhow errors
macro_rules! queue_term {
    ($($arg:expr),* $(,)?) => {
        queue!($($arg),*).map_err(anyhow::Error::from)
    };
}

pub const TITLE: &str = "Sentiment Analyzer";
pub const SUBTITLE: &str = "AI-powered emotion detection";
pub const PLACEHOLDER: &str = "Type or paste your text here";
pub const SUBMIT_LABEL: &str = "Analyze Sentiment";
pub const LOADING_LABEL: &str = "Analyzing...";
pub const RESULT_HEADING: &str = "Your Sentiment";
pub const RESULT_CAPTION: &str = "Detected emotion";
pub const CONFIDENCE_LINE: &str = "Confidence: High";
pub const LEGEND_HEADING: &str = "Understanding Sentiment";
const KEY_HINTS: &str = "^S analyze  ^U clear  ^Q quit";

const INDENT: u16 = 2;

/// Trait for rendering views
pub trait ViewRenderer {
    /// Prepare the terminal for rendering
    fn initialize(&mut self) -> Result<()>;

    /// Render the whole screen
    fn render_full(&mut self, view_model: &ViewModel) -> Result<()>;

    /// Render the text input area
    fn render_input_area(&mut self, view_model: &ViewModel) -> Result<()>;

    /// Render submit button, error banner and result panel
    fn render_outcome_area(&mut self, view_model: &ViewModel) -> Result<()>;

    fn render_status_bar(&mut self, view_model: &ViewModel) -> Result<()>;

    /// Place (or hide) the terminal cursor
    fn render_cursor(&mut self, view_model: &ViewModel) -> Result<()>;

    fn handle_view_event(&mut self, event: &ViewEvent, view_model: &ViewModel) -> Result<()>;

    /// Restore the terminal on exit
    fn cleanup(&mut self) -> Result<()>;
}

/// Cut `text` to at most `width` display columns
fn fit_to_width(text: &str, width: usize) -> String {
    let mut used = 0;
    text.chars()
        .take_while(|ch| {
            used += ch.width().unwrap_or(0);
            used <= width
        })
        .collect()
}

/// Terminal-based view renderer using crossterm
pub struct TerminalRenderer<RS: RenderStream> {
    render_stream: RS,
    terminal_size: (u16, u16),
}

impl<RS: RenderStream> TerminalRenderer<RS> {
    /// Create a renderer that owns the given output stream
    pub fn with_render_stream(render_stream: RS) -> Result<Self> {
        let terminal_size = render_stream.get_size()?;
        Ok(Self {
            render_stream,
            terminal_size,
        })
    }

    pub fn update_size(&mut self, width: u16, height: u16) {
        self.terminal_size = (width, height);
    }

    pub fn terminal_size(&self) -> (u16, u16) {
        self.terminal_size
    }

    fn width(&self) -> usize {
        self.terminal_size.0 as usize
    }

    /// Blank a row and leave the cursor at `col`; false when off screen
    fn start_row(&mut self, row: usize, col: u16) -> Result<bool> {
        if row >= self.terminal_size.1 as usize {
            return Ok(false);
        }
        let row = row as u16;
        self.render_stream.move_cursor(0, row)?;
        queue_term!(self.render_stream, Clear(ClearType::CurrentLine))?;
        if col > 0 {
            self.render_stream.move_cursor(col, row)?;
        }
        Ok(true)
    }

    fn print_styled(&mut self, text: &str, color: Option<Color>, attribute: Option<Attribute>) -> Result<()> {
        if let Some(color) = color {
            queue_term!(self.render_stream, SetForegroundColor(color))?;
        }
        if let Some(attribute) = attribute {
            queue_term!(self.render_stream, SetAttribute(attribute))?;
        }
        queue_term!(
            self.render_stream,
            Print(text),
            SetAttribute(Attribute::Reset),
            ResetColor
        )
    }

    /// Write one line of text at the indent, clipped to the screen width
    fn render_line(
        &mut self,
        row: usize,
        text: &str,
        color: Option<Color>,
        attribute: Option<Attribute>,
    ) -> Result<()> {
        if self.start_row(row, INDENT)? {
            let available = self.width().saturating_sub(INDENT as usize);
            self.print_styled(&fit_to_width(text, available), color, attribute)?;
        }
        Ok(())
    }

    fn render_header(&mut self, layout: &ScreenLayout) -> Result<()> {
        let top = layout.header.top;
        self.render_line(top, TITLE, None, Some(Attribute::Bold))?;
        self.render_line(top + 1, SUBTITLE, None, Some(Attribute::Dim))?;
        if self.start_row(top + 2, 0)? {
            let rule = "─".repeat(self.width());
            self.print_styled(&rule, Some(Color::DarkGrey), None)?;
        }
        Ok(())
    }

    fn render_submit_row(&mut self, view_model: &ViewModel) -> Result<()> {
        let row = view_model.layout().submit_row;
        let (label, attribute) = if view_model.analysis().is_loading() {
            (LOADING_LABEL, Attribute::Dim)
        } else if view_model.can_submit() {
            (SUBMIT_LABEL, Attribute::Bold)
        } else {
            (SUBMIT_LABEL, Attribute::Dim)
        };
        self.render_line(row, &format!("[ {label} ]"), None, Some(attribute))
    }

    /// Error banner, word-wrapped over the error rows
    fn render_error_banner(&mut self, view_model: &ViewModel) -> Result<()> {
        let region = view_model.layout().error;
        let lines = match view_model.analysis().error() {
            Some(error) => {
                let available = self.width().saturating_sub(INDENT as usize);
                wrap_words(&format!("✖ {error}"), available)
            }
            None => Vec::new(),
        };

        for (i, row) in region.rows().enumerate() {
            match lines.get(i) {
                Some(line) => self.render_line(row, line, Some(Color::Red), None)?,
                None => {
                    self.start_row(row, 0)?;
                }
            }
        }
        Ok(())
    }

    fn render_result_panel(&mut self, view_model: &ViewModel) -> Result<()> {
        let region = view_model.layout().result;
        let rows: Vec<usize> = region.rows().collect();

        let Some(result) = view_model.analysis().result() else {
            for row in rows {
                self.start_row(row, 0)?;
            }
            return Ok(());
        };

        self.render_line(rows[0], RESULT_HEADING, None, Some(Attribute::Bold))?;
        match result.treatment() {
            Some(treatment) => {
                let text = format!("{} {}", treatment.icon, result.label);
                self.render_line(rows[1], &text, Some(treatment.color), Some(Attribute::Bold))?;
            }
            None => self.render_line(rows[1], &result.label, None, Some(Attribute::Bold))?,
        }
        self.render_line(rows[2], RESULT_CAPTION, None, Some(Attribute::Dim))?;
        self.render_line(rows[3], CONFIDENCE_LINE, None, None)?;
        self.render_line(
            rows[4],
            &format!("Text length: {} characters", result.char_count),
            None,
            None,
        )
    }

    fn render_legend(&mut self, layout: &ScreenLayout) -> Result<()> {
        let Some(region) = layout.legend else {
            return Ok(());
        };
        self.render_line(region.top, LEGEND_HEADING, None, Some(Attribute::Bold))?;

        for (row, sentiment) in region.rows().skip(1).zip(Sentiment::ALL) {
            let treatment = sentiment.treatment();
            if !self.start_row(row, INDENT)? {
                continue;
            }
            let name = format!("{} {:<9}", treatment.icon, sentiment.title());
            let available = self.width().saturating_sub(INDENT as usize);
            let description = fit_to_width(
                sentiment.description(),
                available.saturating_sub(name.chars().count()),
            );
            self.print_styled(&name, Some(treatment.color), None)?;
            self.print_styled(&description, None, Some(Attribute::Dim))?;
        }
        Ok(())
    }

    fn status_text(view_model: &ViewModel) -> String {
        let status_line = view_model.status_line();
        let mut parts = Vec::new();
        if let Some(message) = status_line.status_message() {
            parts.push(message.to_string());
        }
        parts.push(status_line.endpoint().to_string());
        parts.push(format!("{} chars", view_model.input().char_count()));
        parts.push(KEY_HINTS.to_string());
        parts.join(" | ")
    }
}

impl<RS: RenderStream> ViewRenderer for TerminalRenderer<RS> {
    fn initialize(&mut self) -> Result<()> {
        self.render_stream.enable_raw_mode()?;
        self.render_stream.enter_alternate_screen()?;
        self.render_stream.enable_bracketed_paste()?;
        self.render_stream.clear_screen()?;
        self.render_stream.hide_cursor()?;
        Ok(())
    }

    fn render_full(&mut self, view_model: &ViewModel) -> Result<()> {
        self.render_stream.hide_cursor()?;
        self.render_stream.clear_screen()?;

        let layout = *view_model.layout();
        self.render_header(&layout)?;
        self.render_input_area(view_model)?;
        self.render_outcome_area(view_model)?;
        self.render_legend(&layout)?;
        self.render_status_bar(view_model)?;
        self.render_cursor(view_model)?;

        self.render_stream.flush()?;
        Ok(())
    }

    fn render_input_area(&mut self, view_model: &ViewModel) -> Result<()> {
        let region = view_model.layout().input;
        let text_width = view_model.layout().input_text_width();
        let display_rows = view_model.input_display_rows();
        let show_placeholder = view_model.input_text().is_empty();

        for (offset, row) in region.rows().enumerate() {
            if !self.start_row(row, 0)? {
                continue;
            }
            self.print_styled("│ ", Some(Color::DarkGrey), None)?;

            if show_placeholder {
                if offset == 0 {
                    self.print_styled(&fit_to_width(PLACEHOLDER, text_width), None, Some(Attribute::Dim))?;
                }
                continue;
            }
            if let Some(line) = display_rows.get(view_model.input_scroll() + offset) {
                queue_term!(self.render_stream, Print(line))?;
            }
        }
        Ok(())
    }

    fn render_outcome_area(&mut self, view_model: &ViewModel) -> Result<()> {
        self.render_submit_row(view_model)?;
        self.render_error_banner(view_model)?;
        self.render_result_panel(view_model)
    }

    fn render_status_bar(&mut self, view_model: &ViewModel) -> Result<()> {
        let row = view_model.layout().status_row;
        if !self.start_row(row, 0)? {
            return Ok(());
        }

        let health = view_model.status_line().backend_health();
        let bullet_color = match health {
            BackendHealth::Online => Color::Green,
            BackendHealth::Offline => Color::Red,
            BackendHealth::Unknown => Color::DarkGrey,
        };
        let badge = format!("● {} ", health.label());
        self.print_styled(&badge, Some(bullet_color), None)?;

        let available = self.width().saturating_sub(badge.chars().count());
        let text = fit_to_width(&Self::status_text(view_model), available);
        self.print_styled(&text, Some(Color::DarkGrey), None)
    }

    fn render_cursor(&mut self, view_model: &ViewModel) -> Result<()> {
        let layout = view_model.layout();
        let position = view_model.input_cursor_position();
        let visible_rows = view_model.input_scroll()..view_model.input_scroll() + layout.input.height;

        if !visible_rows.contains(&position.row) {
            return self.render_stream.hide_cursor();
        }
        let row = layout.input.top + position.row - view_model.input_scroll();
        let col = INPUT_GUTTER + position.col;
        if row >= self.terminal_size.1 as usize || col >= self.width() {
            return self.render_stream.hide_cursor();
        }

        self.render_stream.move_cursor(col as u16, row as u16)?;
        self.render_stream.show_cursor()
    }

    fn handle_view_event(&mut self, event: &ViewEvent, view_model: &ViewModel) -> Result<()> {
        match event {
            ViewEvent::FullRedrawRequired => return self.render_full(view_model),
            ViewEvent::InputAreaRedrawRequired => self.render_input_area(view_model)?,
            ViewEvent::OutcomeAreaRedrawRequired => self.render_outcome_area(view_model)?,
            ViewEvent::StatusBarUpdateRequired => self.render_status_bar(view_model)?,
            ViewEvent::CursorUpdateRequired => {}
        }
        // Drawing moves the terminal cursor, so always put it back
        self.render_cursor(view_model)?;
        self.render_stream.flush()?;
        Ok(())
    }

    fn cleanup(&mut self) -> Result<()> {
        self.render_stream.show_cursor()?;
        self.render_stream.disable_bracketed_paste()?;
        self.render_stream.leave_alternate_screen()?;
        self.render_stream.disable_raw_mode()?;
        self.render_stream.flush()?;
        Ok(())
    }
}
