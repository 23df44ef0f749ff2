//! # Views Module
//!
//! Contains all view-related components for rendering the terminal interface.

pub mod terminal_renderer;

pub use terminal_renderer::{TerminalRenderer, ViewRenderer};
