use super::records_traits::{NewRecord, Record};
use crate::constants::UNASSIGNED_ID;

/// Whether an upsert appended a record or replaced one in place.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum UpsertOutcome {
    Inserted,
    Replaced,
}

/// Next id for a collection: highest existing id plus one, or 1 when empty.
///
/// Independent of collection order. Not safe on its own under concurrent
/// writers; callers run it inside the collection's single writer.
pub fn next_id<T: Record>(existing: &[T]) -> i64 {
    existing.iter().map(Record::id).fold(0, i64::max) + 1
}

/// Resolves the id a record will be stored under.
///
/// Only positive requested ids are kept; zero and negative ids are treated
/// as unassigned.
pub fn assign_identity<T: Record>(requested: Option<i64>, existing: &[T]) -> i64 {
    match requested {
        Some(id) if id > UNASSIGNED_ID => id,
        _ => next_id(existing),
    }
}

/// Inserts `new_record` or replaces the record with the same id, keeping the
/// position of a replaced record. Returns the stored record.
pub fn upsert_record<N: NewRecord>(
    collection: &mut Vec<N::Record>,
    new_record: N,
) -> (N::Record, UpsertOutcome) {
    let id = assign_identity(new_record.requested_id(), collection);
    let record = new_record.into_record(id);

    match collection.iter().position(|existing| existing.id() == id) {
        Some(index) => {
            collection[index] = record.clone();
            (record, UpsertOutcome::Replaced)
        }
        None => {
            collection.push(record.clone());
            (record, UpsertOutcome::Inserted)
        }
    }
}

/// Removes every record with the given id. Returns how many were removed.
pub fn remove_record<T: Record>(collection: &mut Vec<T>, id: i64) -> usize {
    let before = collection.len();
    collection.retain(|record| record.id() != id);
    before - collection.len()
}
