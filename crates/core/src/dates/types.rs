use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// A single date range with an opaque, unique id.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct EventDate {
    pub id: String,
    pub start_date: DateTime<Utc>,
    pub end_date: DateTime<Utc>,
}

impl EventDate {
    /// Creates a new event date.
    pub fn new(id: impl Into<String>, start_date: DateTime<Utc>, end_date: DateTime<Utc>) -> Self {
        Self {
            id: id.into(),
            start_date,
            end_date,
        }
    }

    /// Sets a new start date.
    pub fn with_start_date(mut self, start_date: DateTime<Utc>) -> Self {
        self.start_date = start_date;
        self
    }

    /// Sets a new end date.
    pub fn with_end_date(mut self, end_date: DateTime<Utc>) -> Self {
        self.end_date = end_date;
        self
    }
}

/// The canonical in-memory state: event dates ordered by start date.
///
/// The ordering is re-established by every reducer mutation except SET,
/// which trusts the caller.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct AppState {
    pub dates: Vec<EventDate>,
}

impl AppState {
    /// Creates a state from the given dates, kept in the given order.
    pub fn new(dates: Vec<EventDate>) -> Self {
        Self { dates }
    }

    /// Creates the default state: a single entry starting and ending at `at`.
    pub fn seeded(id: impl Into<String>, at: DateTime<Utc>) -> Self {
        Self {
            dates: vec![EventDate::new(id, at, at)],
        }
    }

    /// Returns the number of event dates.
    pub fn len(&self) -> usize {
        self.dates.len()
    }

    /// Returns true if there are no event dates.
    pub fn is_empty(&self) -> bool {
        self.dates.is_empty()
    }

    /// Returns the event date with the given id, if any.
    pub fn get(&self, id: &str) -> Option<&EventDate> {
        self.dates.iter().find(|event| event.id == id)
    }
}

/// Wire form of [`EventDate`], with dates as ISO-8601 strings.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SerializedEventDate {
    pub id: String,
    pub start_date: String,
    pub end_date: String,
}

/// Wire form of [`AppState`] as stored in the content store.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct SerializedAppState {
    pub dates: Vec<SerializedEventDate>,
}

/// What the content store hands back: nothing for a fresh field.
pub type ContentfulAppState = Option<SerializedAppState>;
