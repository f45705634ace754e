//! Records module - identity assignment and the upsert policy shared by all
//! record collections.

mod identity;
mod records_traits;

#[cfg(test)]
mod identity_tests;

pub use identity::{assign_identity, next_id, remove_record, upsert_record, UpsertOutcome};
pub use records_traits::{NewRecord, Record};
