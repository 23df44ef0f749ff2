//! Input model for the text being analyzed
//!
//! Holds the raw text and a cursor measured in characters (not bytes), so
//! multi-byte input moves and deletes one visible character at a time.

/// Editable input text with a character cursor
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct InputModel {
    text: String,
    /// Cursor as a character offset, `0..=char_count`
    cursor: usize,
}

impl InputModel {
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a model with text and the cursor at the end
    pub fn with_text(text: &str) -> Self {
        Self {
            text: text.to_string(),
            cursor: text.chars().count(),
        }
    }

    pub fn text(&self) -> &str {
        &self.text
    }

    pub fn cursor(&self) -> usize {
        self.cursor
    }

    pub fn char_count(&self) -> usize {
        self.text.chars().count()
    }

    /// True when the text is empty or whitespace only
    pub fn is_blank(&self) -> bool {
        self.text.trim().is_empty()
    }

    fn byte_offset(&self, char_offset: usize) -> usize {
        self.text
            .char_indices()
            .nth(char_offset)
            .map(|(idx, _)| idx)
            .unwrap_or(self.text.len())
    }

    /// Insert text at the cursor and move the cursor past it
    pub fn insert_str(&mut self, s: &str) {
        if s.is_empty() {
            return;
        }
        let at = self.byte_offset(self.cursor);
        self.text.insert_str(at, s);
        self.cursor += s.chars().count();
    }

    pub fn insert_char(&mut self, ch: char) {
        let at = self.byte_offset(self.cursor);
        self.text.insert(at, ch);
        self.cursor += 1;
    }

    /// Delete the character before the cursor; returns false at the start
    pub fn delete_before_cursor(&mut self) -> bool {
        if self.cursor == 0 {
            return false;
        }
        let at = self.byte_offset(self.cursor - 1);
        self.text.remove(at);
        self.cursor -= 1;
        true
    }

    /// Delete the character under the cursor; returns false at the end
    pub fn delete_after_cursor(&mut self) -> bool {
        if self.cursor >= self.char_count() {
            return false;
        }
        let at = self.byte_offset(self.cursor);
        self.text.remove(at);
        true
    }

    /// Clear all text; returns false if there was nothing to clear
    pub fn clear(&mut self) -> bool {
        if self.text.is_empty() {
            return false;
        }
        self.text.clear();
        self.cursor = 0;
        true
    }

    pub fn move_left(&mut self) -> bool {
        if self.cursor == 0 {
            return false;
        }
        self.cursor -= 1;
        true
    }

    pub fn move_right(&mut self) -> bool {
        if self.cursor >= self.char_count() {
            return false;
        }
        self.cursor += 1;
        true
    }

    /// (line, column) of the cursor in logical lines, both in characters
    pub fn cursor_line_col(&self) -> (usize, usize) {
        let mut line = 0;
        let mut col = 0;
        for ch in self.text.chars().take(self.cursor) {
            if ch == '\n' {
                line += 1;
                col = 0;
            } else {
                col += 1;
            }
        }
        (line, col)
    }

    /// Character lengths of each logical line
    fn line_lengths(&self) -> Vec<usize> {
        self.text.split('\n').map(|l| l.chars().count()).collect()
    }

    fn offset_of(&self, line: usize, col: usize) -> usize {
        let lengths = self.line_lengths();
        let preceding: usize = lengths.iter().take(line).map(|len| len + 1).sum();
        preceding + col.min(lengths.get(line).copied().unwrap_or(0))
    }

    pub fn move_to_line_start(&mut self) -> bool {
        let (line, col) = self.cursor_line_col();
        if col == 0 {
            return false;
        }
        self.cursor = self.offset_of(line, 0);
        true
    }

    pub fn move_to_line_end(&mut self) -> bool {
        let (line, _) = self.cursor_line_col();
        let end = self.offset_of(line, usize::MAX);
        if end == self.cursor {
            return false;
        }
        self.cursor = end;
        true
    }

    /// Move to the previous logical line, clamping the column
    pub fn move_up(&mut self) -> bool {
        let (line, col) = self.cursor_line_col();
        if line == 0 {
            return false;
        }
        self.cursor = self.offset_of(line - 1, col);
        true
    }

    /// Move to the next logical line, clamping the column
    pub fn move_down(&mut self) -> bool {
        let (line, col) = self.cursor_line_col();
        if line + 1 >= self.line_lengths().len() {
            return false;
        }
        self.cursor = self.offset_of(line + 1, col);
        true
    }
}
