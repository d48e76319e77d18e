//! Activity Card Component
//!
//! One card per activity with its roster. Every participant row gets its
//! removal handler from [`removal_handler`], so rows present at load time
//! and rows added after a signup behave the same.

use leptos::*;
use web_sys::MouseEvent;

use club_signup::view::NO_PARTICIPANTS;
use club_signup::{CardView, RosterRow, UnregisterOutcome};

use crate::state::{AppState, Synchronizer};

/// Class of the "No participants yet" line, shared with the page stylesheet
pub const SENTINEL_CLASS: &str = "none";

/// Click handler for the removal control of one participant row
pub fn removal_handler(
    sync: Synchronizer,
    activity: String,
    email: String,
) -> impl Fn(MouseEvent) + 'static {
    move |ev: MouseEvent| {
        ev.prevent_default();

        let sync = sync.clone();
        let activity = activity.clone();
        let email = email.clone();
        spawn_local(async move {
            if let UnregisterOutcome::Failed(e) = sync.unregister(&activity, &email).await {
                web_sys::console::error_1(
                    &format!("Failed to unregister {} from {}: {}", email, activity, e).into(),
                );
            }
        });
    }
}

#[component]
pub fn ActivityCard(card: CardView) -> impl IntoView {
    let availability = card.availability();
    let activity = card.name.clone();

    view! {
        <div class="activity-card">
            <h4>{card.name}</h4>
            <p>{card.description}</p>
            <p><strong>"Schedule:"</strong>" "{card.schedule}</p>
            <p class="availability"><strong>"Availability:"</strong>" "{availability}</p>
            <div class="participants">
                <p><strong>"Participants:"</strong></p>
                <ul class="participants-list">
                    {card.roster
                        .into_iter()
                        .map(|row| view! { <RosterLine activity=activity.clone() row=row /> })
                        .collect_view()}
                </ul>
            </div>
        </div>
    }
}

#[component]
fn RosterLine(activity: String, row: RosterRow) -> impl IntoView {
    match row {
        RosterRow::Sentinel => view! { <li class=SENTINEL_CLASS>{NO_PARTICIPANTS}</li> }.into_view(),
        RosterRow::Participant { email, disabled } => {
            let state = use_context::<AppState>().expect("AppState not found");
            let on_click = removal_handler(state.sync, activity, email.clone());

            view! {
                <li>
                    <span class="participant-email">{email}</span>
                    <button
                        class="participant-delete"
                        title="Unregister participant"
                        aria-label="Unregister participant"
                        disabled=disabled
                        on:click=on_click
                    >
                        "✖"
                    </button>
                </li>
            }
            .into_view()
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_sentinel_matches_stylesheet() {
        assert_eq!(SENTINEL_CLASS, "none");
    }
}
