//! Path utilities for betledger.
//!
//! All data lives under `~/.betledger/`:
//! - `~/.betledger/config.toml` - configuration
//! - `~/.betledger/ledger.json` - bet history
//! - `~/.betledger/preferences.json` - stored user preferences

use std::path::PathBuf;

/// Returns the betledger home directory (`~/.betledger/`).
pub fn home_dir() -> PathBuf {
    dirs::home_dir()
        .unwrap_or_else(|| PathBuf::from("."))
        .join(".betledger")
}

/// Returns the default config file path (`~/.betledger/config.toml`).
pub fn default_config() -> PathBuf {
    home_dir().join("config.toml")
}

/// Returns the default ledger path (`~/.betledger/ledger.json`).
pub fn default_ledger() -> PathBuf {
    home_dir().join("ledger.json")
}

/// Returns the default preferences path (`~/.betledger/preferences.json`).
pub fn default_preferences() -> PathBuf {
    home_dir().join("preferences.json")
}
