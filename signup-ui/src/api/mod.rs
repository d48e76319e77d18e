//! HTTP access to the activities API from the browser

pub mod client;

pub use client::GlooActivityApi;
