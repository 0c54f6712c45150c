//! Settlement status of legs and bets.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use super::error::DomainError;

/// Outcome state of a leg or a bet.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub enum SettlementStatus {
    /// Outcome not known yet.
    Pending,
    Won,
    Lost,
    /// Stake returned, no profit or loss. Also called a push.
    Void,
    /// Settled early by the bookmaker at a cashout value.
    Cashout,
}

impl SettlementStatus {
    /// Display name, matching the names stored in the status reference table.
    #[must_use]
    pub const fn name(self) -> &'static str {
        match self {
            Self::Pending => "Pending",
            Self::Won => "Won",
            Self::Lost => "Lost",
            Self::Void => "Void",
            Self::Cashout => "Cashout",
        }
    }

    /// True once the outcome is known.
    #[must_use]
    pub const fn is_settled(self) -> bool {
        !matches!(self, Self::Pending)
    }

    /// Won, Lost and Void legs cannot be re-settled.
    #[must_use]
    pub const fn is_terminal(self) -> bool {
        matches!(self, Self::Won | Self::Lost | Self::Void)
    }
}

impl fmt::Display for SettlementStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for SettlementStatus {
    type Err = DomainError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "pending" => Ok(Self::Pending),
            "won" => Ok(Self::Won),
            "lost" => Ok(Self::Lost),
            // "Cancelled" rows return the stake like a push.
            "void" | "push" | "cancelled" => Ok(Self::Void),
            "cashout" => Ok(Self::Cashout),
            _ => Err(DomainError::UnknownStatus(s.to_string())),
        }
    }
}
