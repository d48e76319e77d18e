//! Page Components

pub mod activities;

pub use activities::Activities;
