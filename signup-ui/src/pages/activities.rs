//! Activities Page
//!
//! The list region and the signup section side by side.

use leptos::*;

use club_signup::ListView;

use crate::components::{ActivityCard, Loading, NoticeBanner, SignupPanel};
use crate::state::{list_view, AppState};

#[component]
pub fn Activities() -> impl IntoView {
    let state = use_context::<AppState>().expect("AppState not found");
    let list = list_view(state.view);

    view! {
        <main>
            <section id="activities-container">
                <h3>"Available Activities"</h3>
                <div id="activities-list">
                    {move || match list.get() {
                        ListView::Cards(cards) => cards
                            .into_iter()
                            .map(|card| view! { <ActivityCard card=card /> })
                            .collect_view(),
                        ListView::Loading => view! { <Loading /> }.into_view(),
                        failed => view! { <p>{failed.message()}</p> }.into_view(),
                    }}
                </div>
            </section>

            <section id="signup-container">
                <h3>"Sign Up for an Activity"</h3>
                <SignupPanel />
                <NoticeBanner />
            </section>
        </main>
    }
}
