//! # Sentiline - Terminal Sentiment Analyzer
//!
//! A full-screen form that sends text to a sentiment-classification backend
//! and shows the returned label with a matching icon and color.
//!
//! ## Architecture
//!
//! The interactive view follows the Model-View-ViewModel (MVVM) pattern:
//!
//! ```text
//! ┌─────────────┐    Events    ┌──────────────┐    Updates   ┌──────────┐
//! │    View     │◄─────────────│  ViewModel   │◄─────────────│  Models  │
//! │             │              │              │              │          │
//! │ - Terminal  │              │ - Submit /   │              │ - Input  │
//! │ - Rendering │              │   resolve    │              │ - Result │
//! │ - Layout    │              │ - Editing    │              │ - Health │
//! └─────────────┘              └──────────────┘              └──────────┘
//!                                      ▲
//!                                      │ Commands
//!                                      ▼
//!                               ┌──────────────┐    POST    ┌──────────┐
//!                               │  Controller  │───────────▶│ Service  │
//!                               │ - Key map    │◀───────────│ (reqwest)│
//!                               │ - Event loop │  channel   └──────────┘
//!                               └──────────────┘
//! ```

pub mod cmd_args;
pub mod config;
pub mod error;
pub mod logging;
pub mod oneshot;
pub mod repl;

pub use error::{AnalysisError, ServiceError};
pub use repl::*;
