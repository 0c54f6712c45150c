//! Preference stores: a JSON file for the CLI and an in-memory one for tests
//! and embedding.

use std::fs;
use std::io::{ErrorKind, Write};
use std::path::{Path, PathBuf};

use parking_lot::Mutex;
use tracing::debug;

use crate::error::{Result, StorageError};
use crate::port::{PreferenceStore, Preferences};

/// Preferences persisted as a small JSON file.
#[derive(Debug, Clone)]
pub struct JsonPreferenceStore {
    path: PathBuf,
}

impl JsonPreferenceStore {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    #[must_use]
    pub fn path(&self) -> &Path {
        &self.path
    }

    fn write_err(&self, source: std::io::Error) -> StorageError {
        StorageError::Write {
            path: self.path.clone(),
            source,
        }
    }
}

impl PreferenceStore for JsonPreferenceStore {
    fn load(&self) -> Result<Preferences> {
        let text = match fs::read_to_string(&self.path) {
            Ok(text) => text,
            Err(e) if e.kind() == ErrorKind::NotFound => return Ok(Preferences::default()),
            Err(source) => {
                return Err(StorageError::Read {
                    path: self.path.clone(),
                    source,
                }
                .into())
            }
        };

        let preferences = serde_json::from_str(&text).map_err(|source| StorageError::Malformed {
            path: self.path.clone(),
            source,
        })?;
        Ok(preferences)
    }

    /// Write via a temp file and rename so a crash never leaves half a file.
    fn save(&self, preferences: &Preferences) -> Result<()> {
        let json = serde_json::to_string_pretty(preferences)?;

        if let Some(parent) = self.path.parent().filter(|p| !p.as_os_str().is_empty()) {
            fs::create_dir_all(parent).map_err(|e| self.write_err(e))?;
        }

        let temp_path = self.path.with_extension("tmp");
        let cleanup_and_err = |e| {
            let _ = fs::remove_file(&temp_path);
            self.write_err(e)
        };

        let mut file = fs::File::create(&temp_path).map_err(|e| self.write_err(e))?;
        file.write_all(json.as_bytes()).map_err(cleanup_and_err)?;
        file.sync_all().map_err(cleanup_and_err)?;
        fs::rename(&temp_path, &self.path).map_err(cleanup_and_err)?;

        debug!(path = %self.path.display(), "Saved preferences");
        Ok(())
    }

    fn clear(&self) -> Result<()> {
        match fs::remove_file(&self.path) {
            Ok(()) => Ok(()),
            Err(e) if e.kind() == ErrorKind::NotFound => Ok(()),
            Err(e) => Err(self.write_err(e).into()),
        }
    }
}

/// Preferences held in memory only.
#[derive(Debug, Default)]
pub struct InMemoryPreferenceStore {
    preferences: Mutex<Preferences>,
}

impl InMemoryPreferenceStore {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with(preferences: Preferences) -> Self {
        Self {
            preferences: Mutex::new(preferences),
        }
    }
}

impl PreferenceStore for InMemoryPreferenceStore {
    fn load(&self) -> Result<Preferences> {
        Ok(*self.preferences.lock())
    }

    fn save(&self, preferences: &Preferences) -> Result<()> {
        *self.preferences.lock() = *preferences;
        Ok(())
    }

    fn clear(&self) -> Result<()> {
        *self.preferences.lock() = Preferences::default();
        Ok(())
    }
}
