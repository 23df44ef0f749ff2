//! # Movement Commands
//!
//! Arrow keys, Home and End move the input cursor.

use anyhow::Result;
use crossterm::event::{KeyCode, KeyEvent};

use super::{Command, CommandContext, CommandEvent, MovementDirection};

/// Move the cursor with arrow keys, Home or End
pub struct MoveCursorCommand;

impl MoveCursorCommand {
    fn direction(event: &KeyEvent) -> Option<MovementDirection> {
        match event.code {
            KeyCode::Left => Some(MovementDirection::Left),
            KeyCode::Right => Some(MovementDirection::Right),
            KeyCode::Up => Some(MovementDirection::Up),
            KeyCode::Down => Some(MovementDirection::Down),
            KeyCode::Home => Some(MovementDirection::LineStart),
            KeyCode::End => Some(MovementDirection::LineEnd),
            _ => None,
        }
    }
}

impl Command for MoveCursorCommand {
    fn is_relevant(&self, _context: &CommandContext, event: &KeyEvent) -> bool {
        Self::direction(event).is_some()
    }

    fn execute(&self, event: KeyEvent, _context: &CommandContext) -> Result<Vec<CommandEvent>> {
        Ok(Self::direction(&event)
            .map(|direction| vec![CommandEvent::cursor_move(direction)])
            .unwrap_or_default())
    }

    fn name(&self) -> &'static str {
        "MoveCursor"
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::repl::commands::ViewModelSnapshot;
    use crossterm::event::KeyModifiers;

    #[test]
    fn arrow_keys_should_map_to_directions() {
        let context = CommandContext::new(ViewModelSnapshot::default());
        let cases = [
            (KeyCode::Left, MovementDirection::Left),
            (KeyCode::Right, MovementDirection::Right),
            (KeyCode::Up, MovementDirection::Up),
            (KeyCode::Down, MovementDirection::Down),
            (KeyCode::Home, MovementDirection::LineStart),
            (KeyCode::End, MovementDirection::LineEnd),
        ];

        for (code, direction) in cases {
            let event = KeyEvent::new(code, KeyModifiers::NONE);
            assert!(MoveCursorCommand.is_relevant(&context, &event));
            assert_eq!(
                MoveCursorCommand.execute(event, &context).unwrap(),
                vec![CommandEvent::cursor_move(direction)]
            );
        }
    }

    #[test]
    fn other_keys_should_not_move() {
        let context = CommandContext::new(ViewModelSnapshot::default());
        let event = KeyEvent::new(KeyCode::PageDown, KeyModifiers::NONE);
        assert!(!MoveCursorCommand.is_relevant(&context, &event));
    }
}
