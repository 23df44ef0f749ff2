//! # Geometry Types
//!
//! Screen positions, the fixed screen layout, and soft wrapping of the input
//! text. Everything here is pure so it can be tested without a terminal.

use unicode_width::UnicodeWidthChar;

/// A position in 2D space with row and column coordinates
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct Position {
    pub row: usize,
    pub col: usize,
}

impl Position {
    /// Create a new position
    pub const fn new(row: usize, col: usize) -> Self {
        Self { row, col }
    }

    /// Create a position at the origin (0, 0)
    pub const fn origin() -> Self {
        Self::new(0, 0)
    }
}

/// Dimensions representing width and height
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct Dimensions {
    pub width: usize,
    pub height: usize,
}

impl Dimensions {
    /// Create new dimensions
    pub const fn new(width: usize, height: usize) -> Self {
        Self { width, height }
    }

    /// Check if dimensions are empty (width or height is 0)
    pub const fn is_empty(self) -> bool {
        self.width == 0 || self.height == 0
    }
}

/// A horizontal band of screen rows
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct Region {
    pub top: usize,
    pub height: usize,
}

impl Region {
    pub const fn new(top: usize, height: usize) -> Self {
        Self { top, height }
    }

    /// Screen rows covered by the region
    pub fn rows(self) -> std::ops::Range<usize> {
        self.top..self.top + self.height
    }
}

pub const HEADER_HEIGHT: usize = 3;
/// The connection-failure message needs two rows at 80 columns
pub const ERROR_HEIGHT: usize = 2;
pub const RESULT_HEIGHT: usize = 5;
pub const LEGEND_HEIGHT: usize = 4;
pub const MIN_INPUT_HEIGHT: usize = 3;

/// Columns before the input text (border and space)
pub const INPUT_GUTTER: usize = 2;

/// Rows that are always present besides the input area:
/// header, submit, error banner, result panel, status bar
const FIXED_HEIGHT: usize = HEADER_HEIGHT + 1 + ERROR_HEIGHT + RESULT_HEIGHT + 1;

/// Where every part of the screen goes, top to bottom
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ScreenLayout {
    pub dimensions: Dimensions,
    pub header: Region,
    pub input: Region,
    pub submit_row: usize,
    pub error: Region,
    pub result: Region,
    /// Dropped first when the terminal is short
    pub legend: Option<Region>,
    pub status_row: usize,
}

impl ScreenLayout {
    /// Lay out a terminal of the given size; the input area takes the slack
    pub fn compute(width: u16, height: u16) -> Self {
        let dimensions = Dimensions::new(width as usize, height as usize);
        let available = dimensions.height.saturating_sub(FIXED_HEIGHT);
        let show_legend = available >= MIN_INPUT_HEIGHT + LEGEND_HEIGHT;
        let input_height = if show_legend {
            available - LEGEND_HEIGHT
        } else {
            available
        }
        .max(1);

        let header = Region::new(0, HEADER_HEIGHT);
        let input = Region::new(header.top + header.height, input_height);
        let submit_row = input.top + input.height;
        let error = Region::new(submit_row + 1, ERROR_HEIGHT);
        let result = Region::new(error.top + error.height, RESULT_HEIGHT);
        let legend = show_legend.then(|| Region::new(result.top + result.height, LEGEND_HEIGHT));
        let status_row = dimensions.height.saturating_sub(1);

        Self {
            dimensions,
            header,
            input,
            submit_row,
            error,
            result,
            legend,
            status_row,
        }
    }

    /// Columns available for input text
    pub fn input_text_width(&self) -> usize {
        self.dimensions.width.saturating_sub(INPUT_GUTTER).max(1)
    }
}

fn char_width(ch: char) -> usize {
    UnicodeWidthChar::width(ch).unwrap_or(0)
}

/// Soft-wrap text into display rows no wider than `width` columns
///
/// Every logical line produces at least one row, so an empty line stays visible.
pub fn wrap_text(text: &str, width: usize) -> Vec<String> {
    let width = width.max(1);
    let mut rows = Vec::new();

    for line in text.split('\n') {
        let mut row = String::new();
        let mut row_width = 0;
        for ch in line.chars() {
            let w = char_width(ch);
            if row_width + w > width && row_width > 0 {
                rows.push(std::mem::take(&mut row));
                row_width = 0;
            }
            row.push(ch);
            row_width += w;
        }
        rows.push(row);
    }

    rows
}

/// Wrap text at spaces into rows no wider than `width` columns
///
/// Words wider than a row are split with `wrap_text`.
pub fn wrap_words(text: &str, width: usize) -> Vec<String> {
    let width = width.max(1);
    let mut rows = Vec::new();
    let mut row = String::new();
    let mut row_width = 0;

    for word in text.split_whitespace() {
        let word_width: usize = word.chars().map(char_width).sum();
        if row_width > 0 && row_width + 1 + word_width <= width {
            row.push(' ');
            row.push_str(word);
            row_width += 1 + word_width;
            continue;
        }
        if row_width > 0 {
            rows.push(std::mem::take(&mut row));
            row_width = 0;
        }
        if word_width <= width {
            row.push_str(word);
            row_width = word_width;
        } else {
            let mut pieces = wrap_text(word, width);
            if let Some(last) = pieces.pop() {
                rows.extend(pieces);
                row_width = last.chars().map(char_width).sum();
                row = last;
            }
        }
    }

    if row_width > 0 || rows.is_empty() {
        rows.push(row);
    }
    rows
}

/// Display position of a character cursor within wrapped text
///
/// A cursor that sits after a full row lands at the start of the next row,
/// which may be one past the last row `wrap_text` returns.
pub fn cursor_display_position(text: &str, cursor: usize, width: usize) -> Position {
    let width = width.max(1);
    let mut row = 0;
    let mut col = 0;
    let mut chars = text.chars();

    for ch in chars.by_ref().take(cursor) {
        if ch == '\n' {
            row += 1;
            col = 0;
            continue;
        }
        let w = char_width(ch);
        if col + w > width && col > 0 {
            row += 1;
            col = 0;
        }
        col += w;
    }

    let next_width = match chars.next() {
        Some('\n') | None => 1,
        Some(ch) => char_width(ch),
    };
    if col > 0 && col + next_width > width {
        row += 1;
        col = 0;
    }

    Position::new(row, col)
}
