//! Id generation for new event dates.
//!
//! The reducer never reaches for a global generator; callers pass an
//! [`IdGenerator`] so tests can supply deterministic ids.

use rand::{distr::Alphanumeric, Rng};
use uuid::Uuid;

/// Length of ids produced by [`ShortIds::default`].
pub const DEFAULT_SHORT_ID_LENGTH: usize = 9;

/// Source of fresh, unique, opaque ids.
pub trait IdGenerator {
    /// Returns a new id.
    fn generate(&mut self) -> String;
}

impl<F> IdGenerator for F
where
    F: FnMut() -> String,
{
    fn generate(&mut self) -> String {
        (*self)()
    }
}

/// Short random alphanumeric ids, compact enough for URLs and UI keys.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ShortIds {
    length: usize,
}

impl ShortIds {
    /// Creates a generator producing ids of the given length (at least 1).
    pub fn new(length: usize) -> Self {
        Self {
            length: length.max(1),
        }
    }

    /// Returns the length of generated ids.
    pub fn length(&self) -> usize {
        self.length
    }
}

impl Default for ShortIds {
    fn default() -> Self {
        Self::new(DEFAULT_SHORT_ID_LENGTH)
    }
}

impl IdGenerator for ShortIds {
    fn generate(&mut self) -> String {
        rand::rng()
            .sample_iter(&Alphanumeric)
            .take(self.length)
            .map(char::from)
            .collect()
    }
}

/// Random v4 UUIDs in their hyphenated form.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct UuidIds;

impl IdGenerator for UuidIds {
    fn generate(&mut self) -> String {
        Uuid::new_v4().to_string()
    }
}

/// Deterministic ids: `{prefix}{n}` with `n` counting up from 1.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SequentialIds {
    prefix: String,
    next: u64,
}

impl SequentialIds {
    /// Creates a generator with the given prefix.
    pub fn new(prefix: impl Into<String>) -> Self {
        Self {
            prefix: prefix.into(),
            next: 1,
        }
    }
}

impl Default for SequentialIds {
    fn default() -> Self {
        Self::new("id-")
    }
}

impl IdGenerator for SequentialIds {
    fn generate(&mut self) -> String {
        let id = format!("{}{}", self.prefix, self.next);
        self.next += 1;
        id
    }
}
