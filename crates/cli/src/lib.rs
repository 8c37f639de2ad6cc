//! eventdates_cli - command line host for the eventdates reducer.
//!
//! This is the Imperative Shell around `eventdates_core`: it loads the stored
//! state, dispatches actions, logs transitions and writes the result back.

pub mod cli;
pub mod commands;
pub mod config;
pub mod error;
pub mod output;
pub mod state_file;
pub mod store;

pub use config::Config;
pub use error::{CliError, Result};
pub use state_file::StateFile;
pub use store::EventDateStore;
