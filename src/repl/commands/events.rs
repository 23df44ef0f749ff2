//! # Command Events
//!
//! Events produced by commands that describe what should happen.
//! Commands produce these events, and the controller applies them to the ViewModel.
//! This maintains proper separation of concerns - commands suggest, controller decides.

/// Events that commands can produce to request changes
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CommandEvent {
    /// Request cursor movement
    CursorMoveRequested { direction: MovementDirection },

    /// Request text insertion at the cursor
    TextInsertRequested { text: String },

    /// Request deletion of one character
    TextDeleteRequested { direction: MovementDirection },

    /// Request to clear the whole input
    InputClearRequested,

    /// Request sentiment analysis of the input
    AnalysisRequested,

    /// Request to quit application
    QuitRequested,
}

impl CommandEvent {
    pub fn text_insert(text: impl Into<String>) -> Self {
        CommandEvent::TextInsertRequested { text: text.into() }
    }

    pub fn cursor_move(direction: MovementDirection) -> Self {
        CommandEvent::CursorMoveRequested { direction }
    }
}

/// Direction for movement and deletion
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MovementDirection {
    Left,
    Right,
    Up,
    Down,
    LineStart,
    LineEnd,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn helpers_should_build_expected_variants() {
        assert_eq!(
            CommandEvent::text_insert("a"),
            CommandEvent::TextInsertRequested {
                text: "a".to_string()
            }
        );
        assert_eq!(
            CommandEvent::cursor_move(MovementDirection::Up),
            CommandEvent::CursorMoveRequested {
                direction: MovementDirection::Up
            }
        );
    }
}
