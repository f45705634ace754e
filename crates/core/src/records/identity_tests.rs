use super::*;

#[derive(Debug, Clone, PartialEq)]
struct Tag {
    id: i64,
    label: &'static str,
}

impl Record for Tag {
    fn id(&self) -> i64 {
        self.id
    }
}

struct NewTag {
    id: Option<i64>,
    label: &'static str,
}

impl NewRecord for NewTag {
    type Record = Tag;

    fn requested_id(&self) -> Option<i64> {
        self.id
    }

    fn into_record(self, id: i64) -> Tag {
        Tag {
            id,
            label: self.label,
        }
    }
}

fn tags(ids: &[i64]) -> Vec<Tag> {
    ids.iter().map(|&id| Tag { id, label: "x" }).collect()
}

#[test]
fn test_next_id_on_empty_collection_is_one() {
    let empty: Vec<Tag> = Vec::new();
    assert_eq!(next_id(&empty), 1);
}

#[test]
fn test_next_id_ignores_order() {
    assert_eq!(next_id(&tags(&[3, 7, 2])), 8);
    assert_eq!(next_id(&tags(&[7, 2, 3])), 8);
}

#[test]
fn test_assign_identity_keeps_requested_id() {
    assert_eq!(assign_identity(Some(42), &tags(&[1, 2])), 42);
}

#[test]
fn test_assign_identity_treats_zero_as_unassigned() {
    assert_eq!(assign_identity(Some(0), &tags(&[1, 2])), 3);
    assert_eq!(assign_identity(None, &tags(&[1, 2])), 3);
}

#[test]
fn test_assign_identity_treats_negative_as_unassigned() {
    assert_eq!(assign_identity(Some(-4), &tags(&[1, 2])), 3);
    assert_eq!(assign_identity(Some(-1), &tags(&[])), 1);
}

#[test]
fn test_upsert_with_negative_id_appends_with_store_id() {
    let mut collection = tags(&[1, 5]);
    let (stored, outcome) = upsert_record(
        &mut collection,
        NewTag {
            id: Some(-5),
            label: "negative",
        },
    );

    assert_eq!(outcome, UpsertOutcome::Inserted);
    assert_eq!(stored.id, 6);
    assert_eq!(collection.len(), 3);
}

#[test]
fn test_upsert_appends_new_record() {
    let mut collection = tags(&[1, 5]);
    let (stored, outcome) = upsert_record(
        &mut collection,
        NewTag {
            id: None,
            label: "new",
        },
    );

    assert_eq!(outcome, UpsertOutcome::Inserted);
    assert_eq!(stored.id, 6);
    assert_eq!(collection.last(), Some(&stored));
}

#[test]
fn test_upsert_replaces_in_place() {
    let mut collection = tags(&[1, 5, 9]);
    let (stored, outcome) = upsert_record(
        &mut collection,
        NewTag {
            id: Some(5),
            label: "edited",
        },
    );

    assert_eq!(outcome, UpsertOutcome::Replaced);
    assert_eq!(collection.len(), 3);
    assert_eq!(collection[1], stored);
    assert_eq!(collection[1].label, "edited");
}

#[test]
fn test_upsert_with_unknown_requested_id_appends() {
    let mut collection = tags(&[1]);
    let (stored, outcome) = upsert_record(
        &mut collection,
        NewTag {
            id: Some(10),
            label: "explicit",
        },
    );

    assert_eq!(outcome, UpsertOutcome::Inserted);
    assert_eq!(stored.id, 10);
    assert_eq!(collection.len(), 2);
}

#[test]
fn test_remove_record_counts_removed() {
    let mut collection = tags(&[1, 2, 3]);
    assert_eq!(remove_record(&mut collection, 2), 1);
    assert_eq!(remove_record(&mut collection, 2), 0);
    assert_eq!(collection, tags(&[1, 3]));
}
