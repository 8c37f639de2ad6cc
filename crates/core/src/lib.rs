//! Core types and pure functions for eventdates.
//!
//! This crate is the Functional Core: a reducer over an ordered list of
//! date-range events, the date arithmetic it relies on, and the conversion
//! to and from the string form used by the external content store.
//! Nothing here performs I/O.

pub mod dates;

pub use dates::*;
