//! State Management
//!
//! The reactive view-state table and the shared synchronizer.

pub mod derived;
pub mod global;

pub use derived::{list_view, signup_fields};
pub use global::{provide_app_state, AppState, Synchronizer};
