//! Bet history port.

use serde::Serialize;

use crate::domain::Bet;
use crate::error::Result;

/// A stored row that could not be turned into a [`Bet`].
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct RejectedRow {
    /// Zero-based position of the row in the source.
    pub index: usize,
    /// The row's `id`, when it had a readable one.
    pub id: Option<String>,
    pub reason: String,
}

/// Bets read from a source, plus the rows left behind.
#[derive(Debug, Clone, Default)]
pub struct LoadedBets {
    pub bets: Vec<Bet>,
    pub rejected: Vec<RejectedRow>,
}

/// Port for reading a user's bet history.
///
/// Implementations skip malformed rows rather than failing the whole load;
/// an `Err` means the source itself could not be read.
pub trait BetSource: Send + Sync {
    /// Load every bet the source holds.
    fn load_bets(&self) -> Result<LoadedBets>;
}
