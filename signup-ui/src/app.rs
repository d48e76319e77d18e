//! App Root Component
//!
//! Provides the shared state and loads the catalog once on mount.

use leptos::*;

use crate::pages::Activities;
use crate::state::provide_app_state;

/// Root application component
#[component]
pub fn App() -> impl IntoView {
    let state = provide_app_state();

    let sync = state.sync;
    create_effect(move |_| {
        let sync = sync.clone();
        spawn_local(async move {
            if let Err(e) = sync.load_catalog().await {
                web_sys::console::error_1(
                    &format!("Error fetching activities from '{}': {}", sync.api().base(), e).into(),
                );
            }
        });
    });

    view! {
        <header>
            <h1>"Extracurricular Activities"</h1>
            <h2>"Browse clubs, sign up and manage rosters"</h2>
        </header>

        <Activities />

        <footer>
            <p>"Club Signup"</p>
        </footer>
    }
}
