//! # Command Context
//!
//! Read-only view of the state commands may base their decisions on.

use crate::repl::view_models::ViewModel;

/// Read-only snapshot of ViewModel state for commands
#[derive(Debug, Clone, Default)]
pub struct ViewModelSnapshot {
    pub input_text: String,
    pub can_submit: bool,
}

impl ViewModelSnapshot {
    /// Create snapshot from current ViewModel state
    pub fn from_view_model(view_model: &ViewModel) -> Self {
        Self {
            input_text: view_model.input_text().to_string(),
            can_submit: view_model.can_submit(),
        }
    }
}

/// Base context available to all commands
pub struct CommandContext {
    pub state: ViewModelSnapshot,
}

impl CommandContext {
    pub fn new(state: ViewModelSnapshot) -> Self {
        Self { state }
    }
}
