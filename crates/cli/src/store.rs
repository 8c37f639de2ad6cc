//! Stateful wrapper that threads the reducer's output between dispatches.

use std::borrow::Cow;

use eventdates_core::{
    is_sorted, parse_contentful_app_state, reduce, serialize_app_state, Action, AppState,
    IdGenerator, SerializedAppState,
};

use crate::error::Result;

/// Owns the current state and the id generator handed to the reducer.
pub struct EventDateStore {
    state: AppState,
    ids: Box<dyn IdGenerator>,
}

impl EventDateStore {
    pub fn new(state: AppState, ids: Box<dyn IdGenerator>) -> Self {
        Self { state, ids }
    }

    /// Builds the store from what the content store returned, seeding a
    /// default entry when nothing was stored yet.
    pub fn from_stored(
        stored: Option<&SerializedAppState>,
        mut ids: Box<dyn IdGenerator>,
    ) -> Result<Self> {
        let state = parse_contentful_app_state(stored, ids.as_mut())?;
        if stored.is_none() {
            tracing::debug!("No stored state, seeded a default entry");
        }
        Ok(Self::new(state, ids))
    }

    pub fn state(&self) -> &AppState {
        &self.state
    }

    pub fn into_state(self) -> AppState {
        self.state
    }

    /// Serialized form of the current state, ready to be stored.
    pub fn to_stored(&self) -> SerializedAppState {
        serialize_app_state(&self.state)
    }

    /// Dispatches an action. Returns `true` if the reducer produced a new state.
    pub fn dispatch(&mut self, action: Action) -> Result<bool> {
        let kind = action.kind();
        tracing::debug!(action = kind, "Dispatching action");

        let next = match reduce(&self.state, action, self.ids.as_mut())? {
            Cow::Borrowed(_) => {
                tracing::debug!(action = kind, "State unchanged");
                return Ok(false);
            }
            Cow::Owned(next) => next,
        };

        if !is_sorted(&next.dates) {
            tracing::warn!(action = kind, "New state is not ordered by start date");
        }
        tracing::info!(
            action = kind,
            before = self.state.len(),
            after = next.len(),
            "State updated"
        );

        self.state = next;
        Ok(true)
    }
}
