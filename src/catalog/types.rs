//! Catalog data types
//!
//! This module defines the activity catalog as returned by the listing
//! endpoint:
//! - `Activity`: one club activity with its participant roster
//! - `Catalog`: all activities, in the order the server sent them

use serde::de::{MapAccess, Visitor};
use serde::ser::SerializeMap;
use serde::{Deserialize, Deserializer, Serialize, Serializer};
use std::fmt;

/// A single club activity
///
/// The name is the unique key; it is carried as the map key on the wire
/// and flattened into the struct here.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Activity {
    pub name: String,
    pub description: String,
    pub schedule: String,
    /// Capacity as reported by the server
    pub max_participants: u32,
    /// Participant emails in server order
    pub participants: Vec<String>,
}

impl Activity {
    /// Create an activity with an empty roster
    pub fn new(
        name: impl Into<String>,
        description: impl Into<String>,
        schedule: impl Into<String>,
        max_participants: u32,
    ) -> Self {
        Self {
            name: name.into(),
            description: description.into(),
            schedule: schedule.into(),
            max_participants,
            participants: Vec::new(),
        }
    }

    /// Builder method: add a participant
    pub fn participant(mut self, email: impl Into<String>) -> Self {
        self.participants.push(email.into());
        self
    }

    /// Remaining capacity. Not clamped: an over-full activity goes negative.
    pub fn spots_left(&self) -> i64 {
        spots_left(self.max_participants, self.participants.len())
    }

    fn from_details(name: String, details: ActivityDetails) -> Self {
        Self {
            name,
            description: details.description,
            schedule: details.schedule,
            max_participants: details.max_participants,
            participants: details.participants,
        }
    }
}

/// Remaining capacity for a given capacity and roster size
pub fn spots_left(max_participants: u32, participants: usize) -> i64 {
    i64::from(max_participants) - participants as i64
}

/// Wire shape of one catalog entry (the value half of the map)
#[derive(Debug, Clone, Serialize, Deserialize)]
struct ActivityDetails {
    description: String,
    schedule: String,
    max_participants: u32,
    #[serde(default)]
    participants: Vec<String>,
}

/// The full activity catalog
///
/// Serialized as a JSON object keyed by activity name. Key order is kept
/// exactly as received.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Catalog {
    activities: Vec<Activity>,
}

impl Catalog {
    /// Create an empty catalog
    pub fn new() -> Self {
        Self::default()
    }

    /// Insert an activity.
    ///
    /// A name that is already present keeps its position and takes the new
    /// value, which is how a browser treats a repeated key in a JSON object.
    pub fn insert(&mut self, activity: Activity) {
        match self.activities.iter_mut().find(|a| a.name == activity.name) {
            Some(existing) => *existing = activity,
            None => self.activities.push(activity),
        }
    }

    /// Builder method: add an activity
    pub fn with(mut self, activity: Activity) -> Self {
        self.insert(activity);
        self
    }

    /// Look up an activity by name
    pub fn get(&self, name: &str) -> Option<&Activity> {
        self.activities.iter().find(|a| a.name == name)
    }

    pub fn iter(&self) -> std::slice::Iter<'_, Activity> {
        self.activities.iter()
    }

    pub fn len(&self) -> usize {
        self.activities.len()
    }

    pub fn is_empty(&self) -> bool {
        self.activities.is_empty()
    }
}

impl IntoIterator for Catalog {
    type Item = Activity;
    type IntoIter = std::vec::IntoIter<Activity>;

    fn into_iter(self) -> Self::IntoIter {
        self.activities.into_iter()
    }
}

impl<'a> IntoIterator for &'a Catalog {
    type Item = &'a Activity;
    type IntoIter = std::slice::Iter<'a, Activity>;

    fn into_iter(self) -> Self::IntoIter {
        self.activities.iter()
    }
}

impl FromIterator<Activity> for Catalog {
    fn from_iter<I: IntoIterator<Item = Activity>>(iter: I) -> Self {
        let mut catalog = Catalog::new();
        for activity in iter {
            catalog.insert(activity);
        }
        catalog
    }
}

impl Serialize for Catalog {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let mut map = serializer.serialize_map(Some(self.activities.len()))?;
        for activity in &self.activities {
            let details = ActivityDetails {
                description: activity.description.clone(),
                schedule: activity.schedule.clone(),
                max_participants: activity.max_participants,
                participants: activity.participants.clone(),
            };
            map.serialize_entry(&activity.name, &details)?;
        }
        map.end()
    }
}

impl<'de> Deserialize<'de> for Catalog {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        struct CatalogVisitor;

        impl<'de> Visitor<'de> for CatalogVisitor {
            type Value = Catalog;

            fn expecting(&self, f: &mut fmt::Formatter) -> fmt::Result {
                f.write_str("a map of activity name to activity details")
            }

            fn visit_map<M: MapAccess<'de>>(self, mut access: M) -> Result<Catalog, M::Error> {
                let mut catalog = Catalog::new();
                while let Some((name, details)) = access.next_entry::<String, ActivityDetails>()? {
                    catalog.insert(Activity::from_details(name, details));
                }
                Ok(catalog)
            }
        }

        deserializer.deserialize_map(CatalogVisitor)
    }
}
