//! Region detection for picking a default odds notation.
//!
//! First-time users get the notation customary where they are, inferred from
//! the host timezone and locale. Detection is best-effort: both inputs are
//! optional and the fallback is [`Region::Other`].

use std::fmt;

use serde::{Deserialize, Serialize};

use super::odds::OddsNotation;

/// Betting region used to choose a default odds notation.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Region {
    #[serde(rename = "UK")]
    Uk,
    #[serde(rename = "EU")]
    Eu,
    #[serde(rename = "US")]
    Us,
    #[serde(rename = "OTHER")]
    Other,
}

impl Region {
    /// Short uppercase code (`UK`, `EU`, `US`, `OTHER`).
    #[must_use]
    pub const fn code(self) -> &'static str {
        match self {
            Self::Uk => "UK",
            Self::Eu => "EU",
            Self::Us => "US",
            Self::Other => "OTHER",
        }
    }

    /// Customary odds notation for the region.
    #[must_use]
    pub const fn default_notation(self) -> OddsNotation {
        match self {
            Self::Uk => OddsNotation::Fractional,
            Self::Us => OddsNotation::American,
            Self::Eu | Self::Other => OddsNotation::Decimal,
        }
    }
}

impl fmt::Display for Region {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.code())
    }
}

/// Resolve a region from an IANA timezone and a BCP-47 locale.
///
/// Rules, first match wins:
/// 1. `Europe/London` is UK, any other `Europe/` zone is EU.
/// 2. The bare `CET`/`CEST` zones are EU.
/// 3. Any zone containing `America/` is US.
/// 4. Locale `en-GB` is UK, `en-US` is US.
/// 5. Otherwise OTHER.
#[must_use]
pub fn resolve_region(timezone: Option<&str>, locale: Option<&str>) -> Region {
    if let Some(tz) = timezone.map(str::trim).filter(|tz| !tz.is_empty()) {
        if tz.starts_with("Europe/") {
            return if tz == "Europe/London" {
                Region::Uk
            } else {
                Region::Eu
            };
        }
        if tz == "CET" || tz == "CEST" {
            return Region::Eu;
        }
        if tz.contains("America/") {
            return Region::Us;
        }
    }

    match locale.map(normalize_locale).as_deref() {
        Some("en-gb") => Region::Uk,
        Some("en-us") => Region::Us,
        _ => Region::Other,
    }
}

/// Default notation for the given environment.
#[must_use]
pub fn default_notation(timezone: Option<&str>, locale: Option<&str>) -> OddsNotation {
    resolve_region(timezone, locale).default_notation()
}

/// Lowercase a locale tag and convert POSIX form (`en_GB.UTF-8`) to BCP-47.
fn normalize_locale(raw: &str) -> String {
    let tag = raw.trim();
    let tag = tag.split(|c| c == '.' || c == '@').next().unwrap_or(tag);
    tag.replace('_', "-").to_ascii_lowercase()
}
