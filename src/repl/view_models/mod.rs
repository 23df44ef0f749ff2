//! # View Models
//!
//! The ViewModel sits between the controller and the models. It is split by
//! concern into several `impl ViewModel` blocks:
//!
//! - `core`: struct, layout, input scrolling, view event queue
//! - `editing`: text edits and cursor movement
//! - `analysis`: submit and service message handling

pub mod analysis;
pub mod core;
pub mod editing;

pub use self::core::ViewModel;
