//! Render projection
//!
//! Pure functions from [`ViewState`] to what the page shows. The UI renders
//! these values as-is, so anything checked here holds on screen too.

use super::state::{CardState, LoadStatus, RemovalControl, ViewState};

/// Sentinel row text for an empty roster
pub const NO_PARTICIPANTS: &str = "No participants yet";

/// List text before the first load completes
pub const LOADING_ACTIVITIES: &str = "Loading activities...";

/// List text after a failed load
pub const LOAD_FAILED: &str = "Failed to load activities. Please try again later.";

/// Placeholder option of the activity selector
pub const SELECT_PLACEHOLDER: &str = "-- Select an activity --";

/// What the list region shows
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ListView {
    Loading,
    Failed,
    Cards(Vec<CardView>),
}

impl ListView {
    /// Inline message for the non-card states
    pub fn message(&self) -> Option<&'static str> {
        match self {
            ListView::Loading => Some(LOADING_ACTIVITIES),
            ListView::Failed => Some(LOAD_FAILED),
            ListView::Cards(_) => None,
        }
    }
}

/// One rendered card
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CardView {
    pub name: String,
    pub description: String,
    pub schedule: String,
    pub spots_left: i64,
    pub roster: Vec<RosterRow>,
}

impl CardView {
    /// Text after the "Availability:" label
    pub fn availability(&self) -> String {
        format!("{} spots left", self.spots_left)
    }
}

/// One rendered roster line
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum RosterRow {
    /// Shown alone when nobody is signed up
    Sentinel,
    Participant {
        email: String,
        /// The removal control is disabled while a request is in flight
        disabled: bool,
    },
}

/// One option of the activity selector
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SelectOption {
    pub value: String,
    pub label: String,
}

/// Project the list region
pub fn project_list(state: &ViewState) -> ListView {
    match state.status() {
        LoadStatus::Loading => ListView::Loading,
        LoadStatus::Failed => ListView::Failed,
        LoadStatus::Ready => ListView::Cards(state.cards().iter().map(project_card).collect()),
    }
}

/// Project a single card
pub fn project_card(card: &CardState) -> CardView {
    let roster = if card.roster.is_empty() {
        vec![RosterRow::Sentinel]
    } else {
        card.roster
            .iter()
            .map(|row| RosterRow::Participant {
                email: row.email.clone(),
                disabled: row.control == RemovalControl::Pending,
            })
            .collect()
    };

    CardView {
        name: card.name.clone(),
        description: card.description.clone(),
        schedule: card.schedule.clone(),
        spots_left: card.spots_left(),
        roster,
    }
}

/// Selector options: the placeholder, then one per card in server order
pub fn select_options(state: &ViewState) -> Vec<SelectOption> {
    std::iter::once(SelectOption {
        value: String::new(),
        label: SELECT_PLACEHOLDER.to_string(),
    })
    .chain(state.cards().iter().map(|card| SelectOption {
        value: card.name.clone(),
        label: card.name.clone(),
    }))
    .collect()
}
