//! Services built from configuration for CLI handlers.

use crate::adapter::outbound::{JsonLedger, JsonPreferenceStore};
use crate::application::{OddsPreferences, RuntimeEnvironment};
use crate::infrastructure::config::Config;

/// Process environment with configured timezone and locale applied.
pub fn runtime_environment(config: &Config) -> RuntimeEnvironment {
    RuntimeEnvironment::detect().with_overrides(
        config.display.timezone.as_deref(),
        config.display.locale.as_deref(),
    )
}

/// Odds notation preferences backed by the configured file.
pub fn preferences(config: &Config) -> OddsPreferences<JsonPreferenceStore> {
    OddsPreferences::new(JsonPreferenceStore::new(config.storage.preferences_path()))
        .with_configured(config.display.odds_notation())
}

pub fn ledger(config: &Config, path: Option<&std::path::Path>) -> JsonLedger {
    match path {
        Some(path) => JsonLedger::new(path),
        None => JsonLedger::new(config.storage.ledger_path()),
    }
}
