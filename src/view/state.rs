//! View-state table
//!
//! In-memory state behind the rendered page: one card per activity, keyed
//! by activity name and kept in server order. Every mutation the page can
//! see goes through the methods here; rendering only reads (see
//! [`projection`](super::projection)).

use std::collections::HashMap;

use super::form::{Notice, SignupForm};
use crate::catalog::{spots_left, Activity, Catalog};

/// Where the catalog load stands
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum LoadStatus {
    /// No load has completed yet
    #[default]
    Loading,
    Ready,
    Failed,
}

/// State of a participant row's removal control
///
/// `Idle -> Pending -> (row removed | Idle)`. A removed row is simply gone.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum RemovalControl {
    #[default]
    Idle,
    /// A delete request is in flight; the control is disabled
    Pending,
}

/// One rendered participant
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ParticipantRow {
    pub email: String,
    pub control: RemovalControl,
}

impl ParticipantRow {
    fn new(email: impl Into<String>) -> Self {
        Self {
            email: email.into(),
            control: RemovalControl::Idle,
        }
    }
}

/// One activity card
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CardState {
    pub name: String,
    pub description: String,
    pub schedule: String,
    /// Capacity captured when the catalog was loaded. Only a full reload
    /// refreshes it.
    pub max_participants: u32,
    pub roster: Vec<ParticipantRow>,
}

impl CardState {
    fn from_activity(activity: Activity) -> Self {
        Self {
            name: activity.name,
            description: activity.description,
            schedule: activity.schedule,
            max_participants: activity.max_participants,
            roster: activity
                .participants
                .into_iter()
                .map(ParticipantRow::new)
                .collect(),
        }
    }

    /// Remaining capacity from the cached capacity and the live roster
    pub fn spots_left(&self) -> i64 {
        spots_left(self.max_participants, self.roster.len())
    }

    pub fn row(&self, email: &str) -> Option<&ParticipantRow> {
        self.roster.iter().find(|row| row.email == email)
    }

    fn row_mut(&mut self, email: &str) -> Option<&mut ParticipantRow> {
        self.roster.iter_mut().find(|row| row.email == email)
    }
}

/// Result of patching a card after a confirmed signup
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SignupPatch {
    Applied,
    /// No card with that name is rendered
    UnknownActivity,
    /// The email already has a row; nothing was added
    AlreadyListed,
}

/// The whole page state
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ViewState {
    status: LoadStatus,
    cards: Vec<CardState>,
    /// Activity name -> position in `cards`
    index: HashMap<String, usize>,
    pub form: SignupForm,
    pub notice: Notice,
}

impl ViewState {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn status(&self) -> LoadStatus {
        self.status
    }

    /// Cards in server order
    pub fn cards(&self) -> &[CardState] {
        &self.cards
    }

    pub fn card(&self, name: &str) -> Option<&CardState> {
        self.index.get(name).map(|&i| &self.cards[i])
    }

    fn card_mut(&mut self, name: &str) -> Option<&mut CardState> {
        match self.index.get(name) {
            Some(&i) => self.cards.get_mut(i),
            None => None,
        }
    }

    /// Replace every card with the fetched catalog.
    ///
    /// The previous cards are discarded, so applying the same catalog twice
    /// leaves the same state as applying it once. The form keeps its
    /// selected activity only if that activity still exists.
    pub fn apply_catalog(&mut self, catalog: Catalog) {
        self.cards = catalog.into_iter().map(CardState::from_activity).collect();
        self.index = self
            .cards
            .iter()
            .enumerate()
            .map(|(i, card)| (card.name.clone(), i))
            .collect();
        self.status = LoadStatus::Ready;

        if !self.index.contains_key(&self.form.activity) {
            self.form.activity.clear();
        }
    }

    /// Drop every card after a failed load
    pub fn apply_load_failure(&mut self) {
        self.cards.clear();
        self.index.clear();
        self.status = LoadStatus::Failed;
        self.form.activity.clear();
    }

    /// Add a row for a participant the server just accepted
    pub fn add_participant(&mut self, activity: &str, email: &str) -> SignupPatch {
        let Some(card) = self.card_mut(activity) else {
            return SignupPatch::UnknownActivity;
        };

        if card.row(email).is_some() {
            return SignupPatch::AlreadyListed;
        }

        card.roster.push(ParticipantRow::new(email));
        SignupPatch::Applied
    }

    /// Move an idle removal control to pending.
    ///
    /// Returns false when the row does not exist or is already pending, in
    /// which case no request should be sent.
    pub fn begin_removal(&mut self, activity: &str, email: &str) -> bool {
        match self.card_mut(activity).and_then(|card| card.row_mut(email)) {
            Some(row) if row.control == RemovalControl::Idle => {
                row.control = RemovalControl::Pending;
                true
            }
            _ => false,
        }
    }

    /// Drop the row after the server confirmed the removal
    pub fn finish_removal(&mut self, activity: &str, email: &str) -> bool {
        let Some(card) = self.card_mut(activity) else {
            return false;
        };

        let before = card.roster.len();
        card.roster.retain(|row| row.email != email);
        card.roster.len() != before
    }

    /// Re-enable the control after a failed removal
    pub fn cancel_removal(&mut self, activity: &str, email: &str) -> bool {
        match self.card_mut(activity).and_then(|card| card.row_mut(email)) {
            Some(row) => {
                row.control = RemovalControl::Idle;
                true
            }
            None => false,
        }
    }
}
