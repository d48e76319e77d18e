//! View Synchronizer
//!
//! Runs the three user-visible flows against an [`ActivityApi`] and keeps the
//! [`ViewState`] table consistent with what the server confirmed:
//!
//! - **load**: fetch the catalog and rebuild every card
//! - **signup**: register an email, then patch the card on success only
//! - **unregister**: disable the row's control, delete, then drop or re-enable
//!
//! ## Flow
//!
//! ```text
//! user action → store write (pending) → await API → store write (patch | rollback)
//! ```
//!
//! The flows are written once and shared by native callers and the browser
//! front end; only the [`ActivityApi`], [`ViewStore`] and [`NoticeTimer`]
//! implementations differ.

mod store;
mod timer;

pub use store::{shared_view, SharedView, ViewStore};
pub use timer::{NoticeTimer, QueuedTimer};

use std::rc::Rc;
use std::time::Duration;

use crate::api::{ActivityApi, ApiError, ApiResult};
use crate::view::{NoticeKind, SignupPatch, ViewState};

/// How long a signup notice stays visible
pub const NOTICE_HIDE_AFTER: Duration = Duration::from_secs(5);

/// Notice text for a rejection without a readable detail
pub const SIGNUP_FALLBACK_ERROR: &str = "An error occurred";

/// Notice text when the signup request itself failed
pub const SIGNUP_FAILED: &str = "Failed to sign up. Please try again.";

/// Result of a signup attempt
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SignupOutcome {
    /// The server accepted the signup
    Registered { message: String, patch: SignupPatch },
    /// The server refused; `message` is what the notice shows
    Rejected { status: u16, message: String },
    /// No usable response
    Failed(ApiError),
    /// A required field was empty; nothing was sent
    Incomplete,
}

/// Result of activating a removal control
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum UnregisterOutcome {
    Removed,
    /// The row stays and its control is enabled again
    Failed(ApiError),
    /// The row is gone or its control is already pending; nothing was sent
    Ignored,
}

/// Keeps the view-state table in step with the activities API
pub struct ViewSynchronizer<A, S, T> {
    api: Rc<A>,
    store: S,
    timer: T,
    notice_hide_after: Duration,
}

impl<A, S: Clone, T: Clone> Clone for ViewSynchronizer<A, S, T> {
    fn clone(&self) -> Self {
        Self {
            api: Rc::clone(&self.api),
            store: self.store.clone(),
            timer: self.timer.clone(),
            notice_hide_after: self.notice_hide_after,
        }
    }
}

impl<A, S, T> ViewSynchronizer<A, S, T>
where
    A: ActivityApi,
    S: ViewStore,
    T: NoticeTimer,
{
    pub fn new(api: A, store: S, timer: T) -> Self {
        Self {
            api: Rc::new(api),
            store,
            timer,
            notice_hide_after: NOTICE_HIDE_AFTER,
        }
    }

    /// Builder method: override the notice display time
    pub fn notice_hide_after(mut self, after: Duration) -> Self {
        self.notice_hide_after = after;
        self
    }

    pub fn api(&self) -> &A {
        &self.api
    }

    pub fn store(&self) -> &S {
        &self.store
    }

    /// Fetch the catalog and rebuild the view.
    ///
    /// On failure every card and option is dropped and the list shows the
    /// failure message. Nothing is retried.
    pub async fn load_catalog(&self) -> ApiResult<usize> {
        match self.api.list_activities().await {
            Ok(catalog) => {
                let count = catalog.len();
                self.store.write(|state| state.apply_catalog(catalog));
                tracing::info!(activities = count, "Catalog loaded");
                Ok(count)
            }
            Err(e) => {
                tracing::error!(error = %e, "Error fetching activities");
                self.store.write(ViewState::apply_load_failure);
                Err(e)
            }
        }
    }

    /// Submit whatever the signup form currently holds
    pub async fn submit_signup(&self) -> SignupOutcome {
        let form = self.store.read(|state| state.form.clone());
        if !form.is_complete() {
            tracing::debug!("Signup form incomplete, not submitting");
            return SignupOutcome::Incomplete;
        }

        self.signup(&form.activity, &form.email).await
    }

    /// Register `email` for `activity`.
    ///
    /// The card is patched only after the server accepts. Every outcome
    /// shows a notice and schedules it to hide.
    pub async fn signup(&self, activity: &str, email: &str) -> SignupOutcome {
        let outcome = match self.api.signup(activity, email).await {
            Ok(response) => {
                let message = response.message;
                let patch = self
                    .store
                    .modify(|state| {
                        state.notice.show(NoticeKind::Success, message.clone());
                        state.form.reset();
                        state.add_participant(activity, email)
                    })
                    .unwrap_or(SignupPatch::UnknownActivity);

                match patch {
                    SignupPatch::Applied => {
                        tracing::info!(activity, email, "Participant signed up");
                    }
                    SignupPatch::UnknownActivity | SignupPatch::AlreadyListed => {
                        tracing::warn!(activity, email, ?patch, "Signup accepted but card not patched");
                    }
                }

                SignupOutcome::Registered { message, patch }
            }
            Err(ApiError::Rejected { status, detail }) => {
                let message = detail.unwrap_or_else(|| SIGNUP_FALLBACK_ERROR.to_string());
                self.show_error(&message);
                tracing::warn!(activity, email, status, reason = %message, "Signup rejected");
                SignupOutcome::Rejected { status, message }
            }
            Err(ApiError::Status { status, body }) => {
                self.show_error(SIGNUP_FALLBACK_ERROR);
                tracing::warn!(activity, email, status, body = %body, "Signup rejected");
                SignupOutcome::Rejected {
                    status,
                    message: SIGNUP_FALLBACK_ERROR.to_string(),
                }
            }
            Err(e) => {
                self.show_error(SIGNUP_FAILED);
                tracing::error!(activity, email, error = %e, "Error signing up");
                SignupOutcome::Failed(e)
            }
        };

        self.schedule_notice_hide();
        outcome
    }

    /// Remove `email` from `activity`.
    ///
    /// The row's control is pending for the whole request. Failures are
    /// logged only and leave the row in place with its control enabled.
    pub async fn unregister(&self, activity: &str, email: &str) -> UnregisterOutcome {
        let began = self
            .store
            .modify(|state| state.begin_removal(activity, email))
            .unwrap_or(false);

        if !began {
            tracing::debug!(activity, email, "Removal ignored, row missing or pending");
            return UnregisterOutcome::Ignored;
        }

        match self.api.unregister(activity, email).await {
            Ok(()) => {
                self.store.write(|state| {
                    state.finish_removal(activity, email);
                });
                tracing::info!(activity, email, "Participant unregistered");
                UnregisterOutcome::Removed
            }
            Err(e) => {
                self.store.write(|state| {
                    state.cancel_removal(activity, email);
                });
                tracing::error!(activity, email, error = %e, "Failed to unregister");
                UnregisterOutcome::Failed(e)
            }
        }
    }

    fn show_error(&self, message: &str) {
        self.store
            .write(|state| state.notice.show(NoticeKind::Error, message));
    }

    fn schedule_notice_hide(&self) {
        let store = self.store.clone();
        self.timer.schedule(
            self.notice_hide_after,
            Box::new(move || store.write(|state| state.notice.hide())),
        );
    }
}
