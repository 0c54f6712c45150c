//! Display preferences: odds notation and the user's locale and timezone.

use chrono::FixedOffset;
use serde::Deserialize;

use crate::domain::OddsNotation;
use crate::error::{ConfigError, Result};

/// Largest UTC offset in use anywhere, in minutes.
const MAX_OFFSET_MINUTES: i32 = 14 * 60;

#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub struct DisplayConfig {
    /// Notation to use when none is stored; detection otherwise.
    pub odds_format: Option<String>,
    /// IANA zone name used for region detection instead of `TZ`.
    pub timezone: Option<String>,
    /// Locale used for region detection instead of `LC_ALL`/`LANG`.
    pub locale: Option<String>,
    /// Offset for grouping bets by day; the system zone when unset.
    pub utc_offset_minutes: Option<i32>,
}

impl DisplayConfig {
    pub(crate) fn validate(&self) -> Result<()> {
        if let Some(format) = &self.odds_format {
            format
                .parse::<OddsNotation>()
                .map_err(|e| ConfigError::InvalidValue {
                    field: "display.odds_format",
                    reason: e.to_string(),
                })?;
        }
        if let Some(minutes) = self.utc_offset_minutes {
            if minutes.abs() > MAX_OFFSET_MINUTES {
                return Err(ConfigError::InvalidValue {
                    field: "display.utc_offset_minutes",
                    reason: format!("must be within ±{MAX_OFFSET_MINUTES}, got {minutes}"),
                }
                .into());
            }
        }
        Ok(())
    }

    /// Configured notation. Unparseable values were rejected on load.
    #[must_use]
    pub fn odds_notation(&self) -> Option<OddsNotation> {
        self.odds_format.as_deref().and_then(|s| s.parse().ok())
    }

    /// Fixed offset for daily grouping, if configured.
    #[must_use]
    pub fn offset(&self) -> Option<FixedOffset> {
        self.utc_offset_minutes
            .and_then(|minutes| FixedOffset::east_opt(minutes * 60))
    }
}
