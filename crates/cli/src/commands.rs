//! Command execution: load, dispatch, store.

use std::fs;
use std::path::Path;

use eventdates_core::{
    parse_contentful_app_state, Action, AppState, ContentfulAppState, CreatePayload, UpdatePayload,
};

use crate::cli::Commands;
use crate::config::Config;
use crate::error::{CliError, Result};
use crate::state_file::StateFile;
use crate::store::EventDateStore;

/// What a command left behind.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Outcome {
    pub state: AppState,
    /// True if the stored state was written.
    pub changed: bool,
}

/// Runs a command against the state stored in `file`.
pub fn run(command: Commands, file: &StateFile, config: &Config) -> Result<Outcome> {
    let stored = file.load()?;
    let mut store = EventDateStore::from_stored(stored.as_ref(), config.id_generator())?;

    let changed = match command {
        Commands::Show => false,
        Commands::Init => stored.is_none(),
        other => {
            let action = to_action(other, config)?;
            store.dispatch(action)?
        }
    };

    if changed {
        file.save(&store.to_stored())?;
        tracing::debug!(path = %file.path().display(), "State saved");
    }

    Ok(Outcome {
        state: store.into_state(),
        changed,
    })
}

/// Translates a mutating command into the action it dispatches.
fn to_action(command: Commands, config: &Config) -> Result<Action> {
    match command {
        Commands::Create { days, months } => Ok(Action::Create {
            payload: Some(CreatePayload { days, months }),
        }),
        Commands::Update { id, start, end } => Ok(Action::update(UpdatePayload {
            id: Some(id),
            start_date: start,
            end_date: end,
        })),
        Commands::Delete { id } => Ok(Action::delete(id)),
        Commands::Set { file } => read_replacement(&file, config).map(Action::set),
        Commands::Dispatch { action } => Ok(serde_json::from_str(&action)?),
        Commands::Show | Commands::Init => Err(CliError::InvalidInput(
            "command does not dispatch an action".to_string(),
        )),
    }
}

fn read_replacement(path: &Path, config: &Config) -> Result<AppState> {
    let contents = fs::read_to_string(path).map_err(|source| CliError::StateFile {
        path: path.to_path_buf(),
        source,
    })?;
    let replacement: ContentfulAppState = serde_json::from_str(&contents)?;
    let replacement = replacement.ok_or_else(|| {
        CliError::InvalidInput(format!("{} does not contain a state", path.display()))
    })?;

    Ok(parse_contentful_app_state(
        Some(&replacement),
        config.id_generator().as_mut(),
    )?)
}
