//! JSON file standing in for the external content store.

use std::fs;
use std::io::ErrorKind;
use std::path::{Path, PathBuf};

use eventdates_core::{ContentfulAppState, SerializedAppState};

use crate::error::{CliError, Result};

/// A `ContentfulAppState` document on disk.
///
/// A missing file and a file containing `null` both read as an absent state.
#[derive(Debug, Clone)]
pub struct StateFile {
    path: PathBuf,
}

impl StateFile {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    pub fn exists(&self) -> bool {
        self.path.is_file()
    }

    /// Reads the stored state.
    pub fn load(&self) -> Result<ContentfulAppState> {
        match fs::read_to_string(&self.path) {
            Ok(contents) if contents.trim().is_empty() => Ok(None),
            Ok(contents) => Ok(serde_json::from_str(&contents)?),
            Err(err) if err.kind() == ErrorKind::NotFound => Ok(None),
            Err(source) => Err(self.io_error(source)),
        }
    }

    /// Writes the state as pretty-printed JSON.
    pub fn save(&self, state: &SerializedAppState) -> Result<()> {
        let mut contents = serde_json::to_string_pretty(state)?;
        contents.push('\n');
        fs::write(&self.path, contents).map_err(|source| self.io_error(source))
    }

    fn io_error(&self, source: std::io::Error) -> CliError {
        CliError::StateFile {
            path: self.path.clone(),
            source,
        }
    }
}
