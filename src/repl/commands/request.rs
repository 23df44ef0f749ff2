//! # Analysis Request Commands
//!
//! The submit action. It is only relevant while the form would show it as
//! enabled: non-blank input and no request outstanding.

use anyhow::Result;
use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};

use super::{Command, CommandContext, CommandEvent};

/// Analyze the input (Ctrl+S or F5)
pub struct AnalyzeCommand;

impl Command for AnalyzeCommand {
    fn is_relevant(&self, context: &CommandContext, event: &KeyEvent) -> bool {
        let is_submit_key = match event.code {
            KeyCode::Char('s') => event.modifiers.contains(KeyModifiers::CONTROL),
            KeyCode::F(5) => true,
            _ => false,
        };
        is_submit_key && context.state.can_submit
    }

    fn execute(&self, _event: KeyEvent, _context: &CommandContext) -> Result<Vec<CommandEvent>> {
        Ok(vec![CommandEvent::AnalysisRequested])
    }

    fn name(&self) -> &'static str {
        "Analyze"
    }
}
