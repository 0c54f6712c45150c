//! Where the ledger and preferences live.

use std::path::PathBuf;

use serde::Deserialize;

use super::paths;

#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub struct StorageConfig {
    pub ledger_path: Option<PathBuf>,
    pub preferences_path: Option<PathBuf>,
}

impl StorageConfig {
    /// Configured ledger path, or `~/.betledger/ledger.json`.
    #[must_use]
    pub fn ledger_path(&self) -> PathBuf {
        self.ledger_path.clone().unwrap_or_else(paths::default_ledger)
    }

    /// Configured preferences path, or `~/.betledger/preferences.json`.
    #[must_use]
    pub fn preferences_path(&self) -> PathBuf {
        self.preferences_path
            .clone()
            .unwrap_or_else(paths::default_preferences)
    }
}
