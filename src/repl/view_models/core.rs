//! # Core ViewModel Structure
//!
//! Contains the main ViewModel struct and basic initialization logic.
//! Editing and analysis transitions live in sibling modules as further
//! `impl ViewModel` blocks.

use crate::repl::events::ViewEvent;
use crate::repl::geometry::{cursor_display_position, wrap_text, Position, ScreenLayout};
use crate::repl::models::{AnalysisState, InputModel, StatusLine};

/// The view model owns all view state and is the only thing that mutates it
pub struct ViewModel {
    pub(super) input: InputModel,
    pub(super) analysis: AnalysisState,
    pub(super) status_line: StatusLine,
    pub(super) layout: ScreenLayout,
    /// First wrapped input row shown in the input area
    pub(super) input_scroll: usize,
    pending_view_events: Vec<ViewEvent>,
}

impl ViewModel {
    /// Create a view model for the given endpoint
    pub fn new(endpoint: &str) -> Self {
        Self {
            input: InputModel::new(),
            analysis: AnalysisState::new(),
            status_line: StatusLine::new(endpoint),
            layout: ScreenLayout::compute(80, 24),
            input_scroll: 0,
            pending_view_events: Vec::new(),
        }
    }

    // === Accessors ===

    pub fn input(&self) -> &InputModel {
        &self.input
    }

    pub fn input_text(&self) -> &str {
        self.input.text()
    }

    pub fn analysis(&self) -> &AnalysisState {
        &self.analysis
    }

    pub fn status_line(&self) -> &StatusLine {
        &self.status_line
    }

    pub fn layout(&self) -> &ScreenLayout {
        &self.layout
    }

    pub fn terminal_size(&self) -> (u16, u16) {
        (
            self.layout.dimensions.width as u16,
            self.layout.dimensions.height as u16,
        )
    }

    /// Submit is offered only for non-blank input with nothing outstanding
    pub fn can_submit(&self) -> bool {
        !self.input.is_blank() && !self.analysis.is_loading()
    }

    // === Layout ===

    /// Update terminal size and recompute the layout
    pub fn update_terminal_size(&mut self, width: u16, height: u16) {
        self.layout = ScreenLayout::compute(width, height);
        self.ensure_cursor_visible();
        tracing::debug!("Terminal size updated to {}x{}", width, height);
        self.emit_view_event([ViewEvent::FullRedrawRequired]);
    }

    /// Input text wrapped to the input area width
    pub fn input_display_rows(&self) -> Vec<String> {
        wrap_text(self.input.text(), self.layout.input_text_width())
    }

    /// Cursor position within the wrapped input, before scrolling
    pub fn input_cursor_position(&self) -> Position {
        cursor_display_position(
            self.input.text(),
            self.input.cursor(),
            self.layout.input_text_width(),
        )
    }

    pub fn input_scroll(&self) -> usize {
        self.input_scroll
    }

    /// Scroll the input area so the cursor row is visible; returns true if it moved
    pub(super) fn ensure_cursor_visible(&mut self) -> bool {
        let cursor_row = self.input_cursor_position().row;
        let height = self.layout.input.height.max(1);
        let old = self.input_scroll;

        if cursor_row < self.input_scroll {
            self.input_scroll = cursor_row;
        } else if cursor_row >= self.input_scroll + height {
            self.input_scroll = cursor_row + 1 - height;
        }

        old != self.input_scroll
    }

    // === View Events ===

    /// Queue view events for the controller
    pub(crate) fn emit_view_event(&mut self, events: impl IntoIterator<Item = ViewEvent>) {
        for event in events {
            if !self.pending_view_events.contains(&event) {
                self.pending_view_events.push(event);
            }
        }
    }

    /// Take all queued view events
    pub fn collect_pending_view_events(&mut self) -> Vec<ViewEvent> {
        std::mem::take(&mut self.pending_view_events)
    }
}
