//! View State
//!
//! The page's state lives in an explicit table instead of the DOM:
//!
//! - **state**: cards keyed by activity name, rosters, removal controls
//! - **form**: signup form values and the transient notice
//! - **projection**: pure mapping from state to what is rendered
//!
//! ```text
//! fetch / signup / unregister → ViewState mutation → projection → render
//! ```

pub mod form;
pub mod projection;
pub mod state;

pub use form::{Notice, NoticeKind, SignupForm};
pub use projection::{
    project_card, project_list, select_options, CardView, ListView, RosterRow, SelectOption,
    LOADING_ACTIVITIES, LOAD_FAILED, NO_PARTICIPANTS, SELECT_PLACEHOLDER,
};
pub use state::{CardState, LoadStatus, ParticipantRow, RemovalControl, SignupPatch, ViewState};
