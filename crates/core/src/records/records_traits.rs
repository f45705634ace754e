/// A persisted record with an assigned integer id.
pub trait Record: Clone {
    fn id(&self) -> i64;
}

/// A record that has not necessarily been given an id yet.
///
/// The store turns it into its persisted form once the id is known.
pub trait NewRecord {
    type Record: Record;

    /// The id requested by the caller, if any. `None` and `Some(0)` both
    /// mean "assign one".
    fn requested_id(&self) -> Option<i64>;

    fn into_record(self, id: i64) -> Self::Record;
}
