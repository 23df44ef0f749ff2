//! # Command Implementations
//!
//! Key events are matched against registered commands. The first relevant
//! command turns the key into `CommandEvent`s, which the controller applies
//! to the ViewModel.

use anyhow::Result;
use crossterm::event::KeyEvent;

pub mod app;
pub mod context;
pub mod editing;
pub mod events;
pub mod movement;
pub mod request;

pub use app::*;
pub use context::{CommandContext, ViewModelSnapshot};
pub use editing::*;
pub use events::{CommandEvent, MovementDirection};
pub use movement::*;
pub use request::*;

/// A key binding that knows when it applies and what it asks for
pub trait Command: Send + Sync {
    /// Check if this command should handle the given event
    fn is_relevant(&self, context: &CommandContext, event: &KeyEvent) -> bool;

    /// Produce the events this key press stands for
    fn execute(&self, event: KeyEvent, context: &CommandContext) -> Result<Vec<CommandEvent>>;

    /// Name used in debug logs
    fn name(&self) -> &'static str;
}

pub type CommandCollection = Vec<Box<dyn Command>>;

/// Registry that holds all available commands
pub struct CommandRegistry {
    commands: CommandCollection,
}

impl CommandRegistry {
    /// Create new command registry with default commands
    pub fn new() -> Self {
        let mut registry = Self {
            commands: Vec::new(),
        };

        registry.register_default_commands();
        registry
    }

    fn register_default_commands(&mut self) {
        // Application commands first so Ctrl+Q never reaches the editor
        self.add_command(Box::new(AppTerminateCommand));
        self.add_command(Box::new(AnalyzeCommand));

        self.add_command(Box::new(ClearInputCommand));
        self.add_command(Box::new(MoveCursorCommand));
        self.add_command(Box::new(InsertNewLineCommand));
        self.add_command(Box::new(DeleteCharBeforeCommand));
        self.add_command(Box::new(DeleteCharAfterCommand));
        self.add_command(Box::new(InsertCharCommand));
    }

    pub fn add_command(&mut self, command: Box<dyn Command>) {
        self.commands.push(command);
    }

    /// Process a key event through all commands
    pub fn process_event(
        &self,
        event: KeyEvent,
        context: &CommandContext,
    ) -> Result<Vec<CommandEvent>> {
        for command in &self.commands {
            if command.is_relevant(context, &event) {
                tracing::debug!("Key {:?} handled by {}", event.code, command.name());
                return command.execute(event, context);
            }
        }
        Ok(vec![])
    }

    pub fn commands(&self) -> &CommandCollection {
        &self.commands
    }
}

impl Default for CommandRegistry {
    fn default() -> Self {
        Self::new()
    }
}
