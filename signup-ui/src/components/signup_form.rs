//! Signup Form Component
//!
//! Email input and activity selector bound to the form values in the view
//! state. Options come from the same projection as the cards, through a
//! memo so form edits do not rebuild them.

use leptos::*;
use web_sys::SubmitEvent;

use club_signup::SignupOutcome;

use crate::state::{signup_fields, AppState};

#[component]
pub fn SignupPanel() -> impl IntoView {
    let state = use_context::<AppState>().expect("AppState not found");
    let view_state = state.view;
    let sync = state.sync;
    let fields = signup_fields(view_state);

    let on_submit = move |ev: SubmitEvent| {
        ev.prevent_default();

        let sync = sync.clone();
        spawn_local(async move {
            if let SignupOutcome::Failed(e) = sync.submit_signup().await {
                web_sys::console::error_1(&format!("Error signing up: {}", e).into());
            }
        });
    };

    view! {
        <form id="signup-form" on:submit=on_submit>
            <div class="form-group">
                <label for="email">"Student Email:"</label>
                <input
                    type="email"
                    id="email"
                    required=true
                    placeholder="your-email@example.edu"
                    prop:value=move || fields.email.get()
                    on:input=move |ev| {
                        let value = event_target_value(&ev);
                        view_state.update(|s| s.form.email = value);
                    }
                />
            </div>
            <div class="form-group">
                <label for="activity">"Select Activity:"</label>
                <select
                    id="activity"
                    required=true
                    prop:value=move || fields.activity.get()
                    on:change=move |ev| {
                        let value = event_target_value(&ev);
                        view_state.update(|s| s.form.activity = value);
                    }
                >
                    <For
                        each=move || fields.options.get()
                        key=|option| option.value.clone()
                        let:option
                    >
                        {
                            let value = option.value.clone();
                            view! {
                                <option
                                    value=option.value
                                    selected=move || fields.activity.with(|a| *a == value)
                                >
                                    {option.label}
                                </option>
                            }
                        }
                    </For>
                </select>
            </div>
            <button type="submit">"Sign Up"</button>
        </form>
    }
}
