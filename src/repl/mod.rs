//! # Interactive Analyzer
//!
//! The full-screen form, layered as models, view model, views and a
//! controller that wires them to the terminal and the sentiment service.

pub mod commands;
pub mod controllers;
pub mod events;
pub mod geometry;
pub mod io;
pub mod models;
pub mod services;
pub mod view_models;
pub mod views;

pub use commands::{Command, CommandContext, CommandEvent, CommandRegistry, ViewModelSnapshot};
pub use controllers::AppController;
pub use events::ViewEvent;
pub use io::{EventStream, RenderStream, TerminalEventStream, TerminalRenderStream};
pub use services::{SentimentResponseMessage, SentimentService};
pub use view_models::ViewModel;
pub use views::{TerminalRenderer, ViewRenderer};
