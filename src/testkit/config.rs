//! Canonical test configurations.

use std::path::Path;

use crate::infrastructure::config::Config;

/// Default configuration with ledger and preferences under `dir`.
pub fn in_dir(dir: &Path) -> Config {
    let mut config = Config::default();
    config.storage.ledger_path = Some(dir.join("ledger.json"));
    config.storage.preferences_path = Some(dir.join("preferences.json"));
    config
}
