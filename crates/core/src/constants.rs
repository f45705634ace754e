/// Wire format for calendar dates in persisted records and filters.
pub const DATE_FORMAT: &str = "%Y-%m-%d";

/// Id value treated as "not yet assigned" when it reaches the store.
pub const UNASSIGNED_ID: i64 = 0;
