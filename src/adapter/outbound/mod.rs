//! Outbound adapters (driven side).

pub mod ledger;
pub mod preference;

pub use ledger::JsonLedger;
pub use preference::{InMemoryPreferenceStore, JsonPreferenceStore};
