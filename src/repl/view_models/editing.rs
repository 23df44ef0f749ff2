//! # Input Editing
//!
//! Text edits and cursor movement in the input area. Every edit runs the
//! analysis `edit` transition, which dismisses a shown error.

use crate::repl::events::ViewEvent;
use crate::repl::view_models::core::ViewModel;

impl ViewModel {
    /// Common bookkeeping after the input text changed
    fn after_text_change(&mut self) {
        if self.analysis.edit() {
            tracing::debug!("Input edited, error dismissed");
        }
        self.status_line.clear_status_message();
        self.ensure_cursor_visible();
        self.emit_view_event([
            ViewEvent::InputAreaRedrawRequired,
            ViewEvent::OutcomeAreaRedrawRequired,
            ViewEvent::StatusBarUpdateRequired,
            ViewEvent::CursorUpdateRequired,
        ]);
    }

    /// Common bookkeeping after the cursor moved
    fn after_cursor_move(&mut self, moved: bool) {
        if !moved {
            return;
        }
        if self.ensure_cursor_visible() {
            self.emit_view_event([ViewEvent::InputAreaRedrawRequired]);
        }
        self.emit_view_event([ViewEvent::CursorUpdateRequired]);
    }

    /// Insert text (typed or pasted) at the cursor
    pub fn insert_text(&mut self, text: &str) {
        if text.is_empty() {
            return;
        }
        // Terminals deliver pasted line breaks as CR or CRLF
        let normalized = text.replace("\r\n", "\n").replace('\r', "\n");
        self.input.insert_str(&normalized);
        self.after_text_change();
    }

    pub fn delete_char_before_cursor(&mut self) {
        if self.input.delete_before_cursor() {
            self.after_text_change();
        }
    }

    pub fn delete_char_after_cursor(&mut self) {
        if self.input.delete_after_cursor() {
            self.after_text_change();
        }
    }

    pub fn clear_input(&mut self) {
        if self.input.clear() {
            self.input_scroll = 0;
            self.after_text_change();
            self.status_line.set_status_message("Input cleared");
        }
    }

    pub fn move_cursor_left(&mut self) {
        let moved = self.input.move_left();
        self.after_cursor_move(moved);
    }

    pub fn move_cursor_right(&mut self) {
        let moved = self.input.move_right();
        self.after_cursor_move(moved);
    }

    pub fn move_cursor_up(&mut self) {
        let moved = self.input.move_up();
        self.after_cursor_move(moved);
    }

    pub fn move_cursor_down(&mut self) {
        let moved = self.input.move_down();
        self.after_cursor_move(moved);
    }

    pub fn move_cursor_to_line_start(&mut self) {
        let moved = self.input.move_to_line_start();
        self.after_cursor_move(moved);
    }

    pub fn move_cursor_to_line_end(&mut self) {
        let moved = self.input.move_to_line_end();
        self.after_cursor_move(moved);
    }
}
