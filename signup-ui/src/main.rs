//! Club Signup page
//!
//! Activity listing with live rosters, a signup form and per-participant
//! unregister buttons, built with Leptos (WASM).
//!
//! # Architecture
//!
//! This is a client-side rendered (CSR) Leptos application. All view state
//! lives in one reactive `ViewState` table owned by the core crate; the
//! components here only render its projection and forward user actions to
//! the shared synchronizer.

use leptos::*;

mod api;
mod app;
mod components;
mod pages;
mod state;

fn main() {
    // Set up panic hook for better error messages in WASM
    console_error_panic_hook::set_once();

    mount_to_body(|| view! { <app::App /> });
}
