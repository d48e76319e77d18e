//! Notice Component
//!
//! The transient message under the signup form.

use leptos::*;

use club_signup::Notice;

use crate::state::AppState;

/// Class list for the notice element
fn notice_class(notice: &Notice) -> String {
    if notice.visible {
        notice.kind.class().to_string()
    } else {
        format!("{} hidden", notice.kind.class())
    }
}

#[component]
pub fn NoticeBanner() -> impl IntoView {
    let state = use_context::<AppState>().expect("AppState not found");
    let view_state = state.view;

    view! {
        <div
            id="message"
            class=move || view_state.with(|s| notice_class(&s.notice))
        >
            {move || view_state.with(|s| s.notice.message.clone())}
        </div>
    }
}
