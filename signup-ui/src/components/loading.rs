//! Loading Component

use leptos::*;

use club_signup::view::LOADING_ACTIVITIES;

/// Placeholder shown in the list region until the first fetch resolves
#[component]
pub fn Loading() -> impl IntoView {
    view! {
        <p class="loading">
            <span class="loading-spinner" />
            {LOADING_ACTIVITIES}
        </p>
    }
}
