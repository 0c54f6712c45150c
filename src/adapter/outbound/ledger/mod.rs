//! JSON file bet ledger.
//!
//! Rows are decoded one at a time so a single malformed record is reported
//! and skipped instead of hiding the rest of the history.

pub mod dto;

use std::fs;
use std::path::{Path, PathBuf};

use tracing::{debug, warn};

use crate::domain::Bet;
use crate::error::{Result, StorageError};
use crate::port::{BetSource, LoadedBets, RejectedRow};

use self::dto::{BetRow, LedgerDocument};

/// Bet history kept in a JSON file.
#[derive(Debug, Clone)]
pub struct JsonLedger {
    path: PathBuf,
}

impl JsonLedger {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    #[must_use]
    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Decode ledger JSON text, skipping rows that do not form a valid bet.
    pub fn parse(&self, text: &str) -> Result<LoadedBets> {
        let document: LedgerDocument =
            serde_json::from_str(text).map_err(|source| StorageError::Malformed {
                path: self.path.clone(),
                source,
            })?;

        let mut loaded = LoadedBets::default();
        for (index, value) in document.into_rows().into_iter().enumerate() {
            let id = value
                .get("id")
                .and_then(serde_json::Value::as_str)
                .map(String::from);

            let decoded = serde_json::from_value::<BetRow>(value)
                .map_err(|e| e.to_string())
                .and_then(|row| Bet::try_from(row).map_err(|e| e.to_string()));

            match decoded {
                Ok(bet) => loaded.bets.push(bet),
                Err(reason) => {
                    warn!(
                        index,
                        id = id.as_deref().unwrap_or("-"),
                        reason = %reason,
                        "Skipping malformed ledger row"
                    );
                    loaded.rejected.push(RejectedRow { index, id, reason });
                }
            }
        }

        debug!(
            path = %self.path.display(),
            bets = loaded.bets.len(),
            rejected = loaded.rejected.len(),
            "Loaded ledger"
        );
        Ok(loaded)
    }

    /// Write `bets` as a JSON array, replacing the file.
    pub fn write_bets(&self, bets: &[Bet]) -> Result<()> {
        let rows: Vec<BetRow> = bets.iter().map(BetRow::from).collect();
        let text = serde_json::to_string_pretty(&rows)?;

        if let Some(parent) = self.path.parent().filter(|p| !p.as_os_str().is_empty()) {
            fs::create_dir_all(parent).map_err(|source| StorageError::Write {
                path: parent.to_path_buf(),
                source,
            })?;
        }
        fs::write(&self.path, text).map_err(|source| StorageError::Write {
            path: self.path.clone(),
            source,
        })?;
        Ok(())
    }
}

impl BetSource for JsonLedger {
    fn load_bets(&self) -> Result<LoadedBets> {
        let text = fs::read_to_string(&self.path).map_err(|source| StorageError::Read {
            path: self.path.clone(),
            source,
        })?;
        self.parse(&text)
    }
}
