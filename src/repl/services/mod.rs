//! # Services Layer
//!
//! Services encapsulate access to external resources so the view model and
//! controller never touch the network directly.

pub mod sentiment;

// Re-export service types
pub use sentiment::{
    SentimentRequestBody, SentimentResponseBody, SentimentResponseMessage, SentimentService,
};
