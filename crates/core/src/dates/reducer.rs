//! The event-date reducer.
//!
//! `reduce` maps the current [`AppState`] and an [`Action`] to the next state.
//! Unchanged results are returned as `Cow::Borrowed(state)` so callers can
//! detect no-op transitions without comparing values.

use std::borrow::Cow;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use super::arithmetic::{add_days, add_months};
use super::error::ReducerError;
use super::ids::IdGenerator;
use super::sorting::sort_dates;
use super::types::{AppState, EventDate};

/// Offset applied to the last event date when creating a new one.
///
/// Zero offsets count as absent: `days: 0` falls through to `months`, and
/// `months: 0` falls through to a plain copy.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct CreatePayload {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub days: Option<i64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub months: Option<i64>,
}

/// Partial event date merged into every entry with a matching id.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UpdatePayload {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub id: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub start_date: Option<DateTime<Utc>>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub end_date: Option<DateTime<Utc>>,
}

impl UpdatePayload {
    /// Creates a payload targeting the given id with no field changes.
    pub fn new(id: impl Into<String>) -> Self {
        Self {
            id: Some(id.into()),
            start_date: None,
            end_date: None,
        }
    }

    /// Sets the new start date.
    pub fn with_start_date(mut self, start_date: DateTime<Utc>) -> Self {
        self.start_date = Some(start_date);
        self
    }

    /// Sets the new end date.
    pub fn with_end_date(mut self, end_date: DateTime<Utc>) -> Self {
        self.end_date = Some(end_date);
        self
    }

    fn matches(&self, event: &EventDate) -> bool {
        self.id.as_deref() == Some(event.id.as_str())
    }

    fn merge_into(&self, event: &EventDate) -> EventDate {
        EventDate {
            id: self.id.clone().unwrap_or_else(|| event.id.clone()),
            start_date: self.start_date.unwrap_or(event.start_date),
            end_date: self.end_date.unwrap_or(event.end_date),
        }
    }
}

/// Identifies the event dates to remove. Without an id nothing matches.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct DeletePayload {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub id: Option<String>,
}

/// An action dispatched to the reducer.
///
/// The JSON form is `{"type": "CREATE", "payload": {...}}`. Unrecognised
/// type tags decode to [`Action::Unknown`], which leaves the state untouched.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "SCREAMING_SNAKE_CASE")]
pub enum Action {
    /// Append a copy of the last event date, optionally shifted.
    Create {
        #[serde(default, skip_serializing_if = "Option::is_none")]
        payload: Option<CreatePayload>,
    },
    /// Merge fields into the event dates with a matching id.
    Update {
        #[serde(default, skip_serializing_if = "Option::is_none")]
        payload: Option<UpdatePayload>,
    },
    /// Remove the event dates with a matching id.
    Delete {
        #[serde(default, skip_serializing_if = "Option::is_none")]
        payload: Option<DeletePayload>,
    },
    /// Replace the whole state.
    Set { payload: AppState },
    #[serde(other)]
    Unknown,
}

impl Action {
    /// CREATE shifted by `days`.
    pub fn create_by_days(days: i64) -> Self {
        Action::Create {
            payload: Some(CreatePayload {
                days: Some(days),
                months: None,
            }),
        }
    }

    /// CREATE shifted by `months`.
    pub fn create_by_months(months: i64) -> Self {
        Action::Create {
            payload: Some(CreatePayload {
                days: None,
                months: Some(months),
            }),
        }
    }

    /// CREATE copying the last event date as is.
    pub fn duplicate_last() -> Self {
        Action::Create {
            payload: Some(CreatePayload::default()),
        }
    }

    /// UPDATE with the given partial event date.
    pub fn update(payload: UpdatePayload) -> Self {
        Action::Update {
            payload: Some(payload),
        }
    }

    /// DELETE the event dates with the given id.
    pub fn delete(id: impl Into<String>) -> Self {
        Action::Delete {
            payload: Some(DeletePayload {
                id: Some(id.into()),
            }),
        }
    }

    /// SET the whole state.
    pub fn set(state: AppState) -> Self {
        Action::Set { payload: state }
    }

    /// Returns the wire name of the action type.
    pub fn kind(&self) -> &'static str {
        match self {
            Action::Create { .. } => "CREATE",
            Action::Update { .. } => "UPDATE",
            Action::Delete { .. } => "DELETE",
            Action::Set { .. } => "SET",
            Action::Unknown => "UNKNOWN",
        }
    }
}

/// Applies `action` to `state`.
///
/// CREATE, UPDATE and DELETE always produce a new, re-sorted state. SET
/// returns the borrowed input when the payload equals it and otherwise the
/// payload verbatim, unsorted. Unknown actions return the borrowed input.
///
/// # Errors
///
/// CREATE fails with [`ReducerError::EmptyState`] when there is no event
/// date to derive the new one from, and with [`ReducerError::Date`] when the
/// shifted dates overflow.
///
/// # Examples
///
/// ```
/// use chrono::{TimeZone, Utc};
/// use eventdates_core::{reduce, Action, AppState, EventDate, SequentialIds};
///
/// let start = Utc.with_ymd_and_hms(2024, 1, 10, 0, 0, 0).unwrap();
/// let end = Utc.with_ymd_and_hms(2024, 1, 12, 0, 0, 0).unwrap();
/// let state = AppState::new(vec![EventDate::new("a", start, end)]);
///
/// let next = reduce(&state, Action::create_by_days(5), &mut SequentialIds::default()).unwrap();
///
/// assert_eq!(next.dates.len(), 2);
/// assert_eq!(next.dates[1].start_date, Utc.with_ymd_and_hms(2024, 1, 15, 0, 0, 0).unwrap());
/// ```
pub fn reduce<'a>(
    state: &'a AppState,
    action: Action,
    ids: &mut dyn IdGenerator,
) -> Result<Cow<'a, AppState>, ReducerError> {
    match action {
        Action::Create { payload } => {
            let created = create_event_date(state, &payload.unwrap_or_default(), ids)?;
            let mut dates = state.dates.clone();
            dates.push(created);
            Ok(Cow::Owned(sorted(dates)))
        }
        Action::Update { payload } => {
            let dates = state
                .dates
                .iter()
                .map(|event| match &payload {
                    Some(update) if update.matches(event) => update.merge_into(event),
                    _ => event.clone(),
                })
                .collect();
            Ok(Cow::Owned(sorted(dates)))
        }
        Action::Delete { payload } => {
            let target = payload.and_then(|delete| delete.id);
            let dates = state
                .dates
                .iter()
                .filter(|event| target.as_deref() != Some(event.id.as_str()))
                .cloned()
                .collect();
            Ok(Cow::Owned(sorted(dates)))
        }
        Action::Set { payload } => {
            if *state == payload {
                Ok(Cow::Borrowed(state))
            } else {
                Ok(Cow::Owned(payload))
            }
        }
        Action::Unknown => Ok(Cow::Borrowed(state)),
    }
}

fn sorted(mut dates: Vec<EventDate>) -> AppState {
    sort_dates(&mut dates);
    AppState::new(dates)
}

/// Builds the new event date from the last entry in the list.
///
/// The last entry is read after the previous mutation's sort, so it is the
/// latest-starting one, not necessarily the most recently created.
fn create_event_date(
    state: &AppState,
    payload: &CreatePayload,
    ids: &mut dyn IdGenerator,
) -> Result<EventDate, ReducerError> {
    let reference = state.dates.last().ok_or(ReducerError::EmptyState)?;
    let days = payload.days.filter(|days| *days != 0);
    let months = payload.months.filter(|months| *months != 0);

    let (start_date, end_date) = match (days, months) {
        (Some(days), _) => (
            add_days(reference.start_date, days)?,
            add_days(reference.end_date, days)?,
        ),
        (None, Some(months)) => (
            add_months(reference.start_date, months)?,
            add_months(reference.end_date, months)?,
        ),
        (None, None) => (reference.start_date, reference.end_date),
    };

    Ok(EventDate::new(ids.generate(), start_date, end_date))
}
