//! # Models Module
//!
//! Re-exports all model implementations organized by category.
//! Models hold state only; they know nothing about terminals or HTTP.

pub mod analysis_state;
pub mod input_model;
pub mod sentiment;
pub mod status_line;

// Re-export all models for easy access
pub use analysis_state::{AnalysisState, PendingRequest, RequestState, SentimentResult};
pub use input_model::InputModel;
pub use sentiment::{treatment_for, Sentiment, Treatment};
pub use status_line::{BackendHealth, StatusLine};
