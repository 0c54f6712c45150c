//! Outbound ports (driven side): interfaces implemented by outbound adapters.
//!
//! These contracts describe the storage the application depends on.

pub mod ledger;
pub mod preference;
