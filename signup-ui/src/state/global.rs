//! Global Application State
//!
//! The core `ViewState` table held in a Leptos signal, plus the
//! synchronizer that every component shares.

use std::time::Duration;

use gloo_timers::callback::Timeout;
use leptos::*;

use club_signup::{NoticeTimer, ViewState, ViewStore, ViewSynchronizer};

use crate::api::GlooActivityApi;

/// View-state table backed by a reactive signal.
///
/// Writes go through `update`, so every mutation re-renders whatever reads
/// the signal.
#[derive(Clone, Copy)]
pub struct SignalStore(pub RwSignal<ViewState>);

impl ViewStore for SignalStore {
    fn read<R>(&self, f: impl FnOnce(&ViewState) -> R) -> R {
        self.0.with_untracked(f)
    }

    fn write(&self, f: impl FnOnce(&mut ViewState)) {
        self.0.update(f)
    }
}

/// Notice timer on the browser event loop
#[derive(Clone, Copy, Default)]
pub struct GlooTimer;

impl NoticeTimer for GlooTimer {
    fn schedule(&self, after: Duration, task: Box<dyn FnOnce()>) {
        Timeout::new(timeout_millis(after), task).forget();
    }
}

fn timeout_millis(after: Duration) -> u32 {
    u32::try_from(after.as_millis()).unwrap_or(u32::MAX)
}

pub type Synchronizer = ViewSynchronizer<GlooActivityApi, SignalStore, GlooTimer>;

/// Global application state provided to all components
#[derive(Clone)]
pub struct AppState {
    /// Cards, form values and notice
    pub view: RwSignal<ViewState>,
    /// Runs load, signup and unregister against the API
    pub sync: Synchronizer,
}

/// Provide global state to the component tree
pub fn provide_app_state() -> AppState {
    let view = create_rw_signal(ViewState::new());
    let sync = ViewSynchronizer::new(GlooActivityApi::from_storage(), SignalStore(view), GlooTimer);

    let state = AppState { view, sync };
    provide_context(state.clone());
    state
}
