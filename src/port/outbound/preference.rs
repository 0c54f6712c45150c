//! User preference persistence port.

use serde::{Deserialize, Serialize};

use crate::domain::OddsNotation;
use crate::error::Result;

/// Preferences remembered between sessions.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Preferences {
    /// Preferred odds notation, unset until chosen or first detected.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub odds_format: Option<OddsNotation>,
}

/// Port for loading and saving [`Preferences`].
pub trait PreferenceStore: Send + Sync {
    /// Load stored preferences. A missing store yields the defaults.
    fn load(&self) -> Result<Preferences>;

    /// Replace the stored preferences.
    fn save(&self, preferences: &Preferences) -> Result<()>;

    /// Forget everything stored.
    fn clear(&self) -> Result<()>;
}
