//! Odds notation preference resolution.
//!
//! The notation shown to a user comes from, in order: a stored preference,
//! the configured default, or detection from the runtime timezone and
//! locale. A detected notation is stored so detection runs once per user.

use std::env;
use std::fmt;

use serde::Serialize;
use tracing::{debug, info};

use crate::domain::region::resolve_region;
use crate::domain::{OddsNotation, Region};
use crate::error::Result;
use crate::port::PreferenceStore;

/// Environment variables consulted for the locale, most specific first.
const LOCALE_VARS: [&str; 3] = ["LC_ALL", "LC_MESSAGES", "LANG"];

/// Timezone and locale identifiers of the running process.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct RuntimeEnvironment {
    pub timezone: Option<String>,
    pub locale: Option<String>,
}

impl RuntimeEnvironment {
    pub fn new(timezone: Option<String>, locale: Option<String>) -> Self {
        Self { timezone, locale }
    }

    /// Read `TZ` and the POSIX locale variables.
    pub fn detect() -> Self {
        let timezone = non_empty_var("TZ").map(|tz| tz.trim_start_matches(':').to_string());
        let locale = LOCALE_VARS.iter().find_map(|name| non_empty_var(name));
        Self { timezone, locale }
    }

    /// Replace detected values with explicitly configured ones.
    #[must_use]
    pub fn with_overrides(mut self, timezone: Option<&str>, locale: Option<&str>) -> Self {
        if let Some(tz) = timezone {
            self.timezone = Some(tz.to_string());
        }
        if let Some(locale) = locale {
            self.locale = Some(locale.to_string());
        }
        self
    }

    #[must_use]
    pub fn region(&self) -> Region {
        resolve_region(self.timezone.as_deref(), self.locale.as_deref())
    }
}

fn non_empty_var(name: &str) -> Option<String> {
    env::var(name).ok().filter(|value| !value.trim().is_empty())
}

/// Where a resolved notation came from.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(tag = "source", content = "region", rename_all = "lowercase")]
pub enum NotationSource {
    Stored,
    Configured,
    Detected(Region),
}

impl fmt::Display for NotationSource {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Stored => f.write_str("stored preference"),
            Self::Configured => f.write_str("configuration"),
            Self::Detected(region) => write!(f, "detected region {region}"),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct ResolvedNotation {
    pub notation: OddsNotation,
    #[serde(flatten)]
    pub source: NotationSource,
}

/// Resolves and updates the user's odds notation.
pub struct OddsPreferences<S> {
    store: S,
    configured: Option<OddsNotation>,
}

impl<S: PreferenceStore> OddsPreferences<S> {
    pub fn new(store: S) -> Self {
        Self {
            store,
            configured: None,
        }
    }

    /// Use `notation` instead of detection when nothing is stored.
    #[must_use]
    pub fn with_configured(mut self, notation: Option<OddsNotation>) -> Self {
        self.configured = notation;
        self
    }

    pub fn store(&self) -> &S {
        &self.store
    }

    /// Resolve the notation to display, storing a detected one.
    pub fn resolve(&self, env: &RuntimeEnvironment) -> Result<ResolvedNotation> {
        let mut stored = self.store.load()?;

        if let Some(notation) = stored.odds_format {
            debug!(%notation, "Using stored odds notation");
            return Ok(ResolvedNotation {
                notation,
                source: NotationSource::Stored,
            });
        }

        if let Some(notation) = self.configured {
            debug!(%notation, "Using configured odds notation");
            return Ok(ResolvedNotation {
                notation,
                source: NotationSource::Configured,
            });
        }

        let region = env.region();
        let notation = region.default_notation();
        stored.odds_format = Some(notation);
        self.store.save(&stored)?;
        info!(
            %region,
            %notation,
            timezone = env.timezone.as_deref().unwrap_or("-"),
            locale = env.locale.as_deref().unwrap_or("-"),
            "Detected odds notation"
        );

        Ok(ResolvedNotation {
            notation,
            source: NotationSource::Detected(region),
        })
    }

    /// Store an explicit choice, replacing any earlier one.
    pub fn set(&self, notation: OddsNotation) -> Result<()> {
        let mut preferences = self.store.load()?;
        preferences.odds_format = Some(notation);
        self.store.save(&preferences)?;
        info!(%notation, "Stored odds notation");
        Ok(())
    }

    /// Forget the stored choice so the next resolve detects again.
    pub fn reset(&self) -> Result<()> {
        self.store.clear()?;
        info!("Cleared stored preferences");
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::port::Preferences;
    use std::sync::atomic::{AtomicUsize, Ordering};
    use parking_lot::Mutex;

    /// Store that counts writes.
    #[derive(Default)]
    struct CountingStore {
        preferences: Mutex<Preferences>,
        saves: AtomicUsize,
    }

    impl CountingStore {
        fn saves(&self) -> usize {
            self.saves.load(Ordering::SeqCst)
        }
    }

    impl PreferenceStore for CountingStore {
        fn load(&self) -> Result<Preferences> {
            Ok(*self.preferences.lock())
        }

        fn save(&self, preferences: &Preferences) -> Result<()> {
            self.saves.fetch_add(1, Ordering::SeqCst);
            *self.preferences.lock() = *preferences;
            Ok(())
        }

        fn clear(&self) -> Result<()> {
            *self.preferences.lock() = Preferences::default();
            Ok(())
        }
    }

    fn env(tz: Option<&str>, locale: Option<&str>) -> RuntimeEnvironment {
        RuntimeEnvironment::new(tz.map(String::from), locale.map(String::from))
    }

    #[test]
    fn first_resolve_detects_and_stores() {
        let prefs = OddsPreferences::new(CountingStore::default());
        let resolved = prefs.resolve(&env(Some("Europe/London"), None)).unwrap();

        assert_eq!(resolved.notation, OddsNotation::Fractional);
        assert_eq!(resolved.source, NotationSource::Detected(Region::Uk));
        assert_eq!(
            prefs.store().load().unwrap().odds_format,
            Some(OddsNotation::Fractional)
        );
    }

    #[test]
    fn stored_preference_wins_over_detection() {
        let prefs = OddsPreferences::new(CountingStore::default());
        prefs.set(OddsNotation::Decimal).unwrap();

        let resolved = prefs.resolve(&env(Some("America/New_York"), None)).unwrap();
        assert_eq!(resolved.notation, OddsNotation::Decimal);
        assert_eq!(resolved.source, NotationSource::Stored);
    }

    #[test]
    fn detection_runs_once() {
        let prefs = OddsPreferences::new(CountingStore::default());
        prefs.resolve(&env(Some("America/Chicago"), None)).unwrap();

        // The user has since moved; the first detection sticks.
        let resolved = prefs.resolve(&env(Some("Europe/Paris"), None)).unwrap();
        assert_eq!(resolved.notation, OddsNotation::American);
        assert_eq!(resolved.source, NotationSource::Stored);
        assert_eq!(prefs.store().saves(), 1);
    }

    #[test]
    fn configured_default_skips_detection() {
        let prefs = OddsPreferences::new(CountingStore::default())
            .with_configured(Some(OddsNotation::Fractional));
        let resolved = prefs.resolve(&env(Some("America/Chicago"), None)).unwrap();

        assert_eq!(resolved.notation, OddsNotation::Fractional);
        assert_eq!(resolved.source, NotationSource::Configured);
        assert_eq!(prefs.store().load().unwrap().odds_format, None);
    }

    #[test]
    fn reset_restores_detection() {
        let prefs = OddsPreferences::new(CountingStore::default());
        prefs.set(OddsNotation::Fractional).unwrap();
        prefs.reset().unwrap();

        let resolved = prefs.resolve(&env(None, Some("en_US.UTF-8"))).unwrap();
        assert_eq!(resolved.notation, OddsNotation::American);
        assert_eq!(resolved.source, NotationSource::Detected(Region::Us));
    }

    #[test]
    fn unknown_environment_falls_back_to_decimal() {
        let prefs = OddsPreferences::new(CountingStore::default());
        let resolved = prefs.resolve(&env(None, None)).unwrap();
        assert_eq!(resolved.notation, OddsNotation::Decimal);
        assert_eq!(resolved.source, NotationSource::Detected(Region::Other));
    }

    #[test]
    fn overrides_replace_detected_values() {
        let detected = env(Some("UTC"), Some("C"));
        let merged = detected.with_overrides(Some("Europe/Berlin"), None);
        assert_eq!(merged.timezone.as_deref(), Some("Europe/Berlin"));
        assert_eq!(merged.locale.as_deref(), Some("C"));
        assert_eq!(merged.region(), Region::Eu);
    }
}
