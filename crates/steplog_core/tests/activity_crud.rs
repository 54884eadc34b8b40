use steplog_core::db::open_db_in_memory;
use steplog_core::{
    ActivityDraft, ActivityStore, DraftValidationError, SqliteActivityStore, StoreError,
};

#[test]
fn insert_then_list_includes_record_with_assigned_id() {
    let conn = open_db_in_memory().unwrap();
    let store = SqliteActivityStore::new(&conn);

    let id = store.insert(&ActivityDraft::new(2837, 1_700_000_000)).unwrap();
    assert_eq!(id, 1);

    let records = store.list_all().unwrap();
    assert_eq!(records.len(), 1);
    assert_eq!(records[0].id, id);
    assert_eq!(records[0].steps, 2837);
    assert_eq!(records[0].date, 1_700_000_000);
}

#[test]
fn ids_are_monotonically_increasing() {
    let conn = open_db_in_memory().unwrap();
    let store = SqliteActivityStore::new(&conn);

    let first = store.insert(&ActivityDraft::new(100, 1_700_000_000)).unwrap();
    let second = store.insert(&ActivityDraft::new(200, 1_700_000_100)).unwrap();
    let third = store.insert(&ActivityDraft::new(300, 1_700_000_200)).unwrap();

    assert!(first < second);
    assert!(second < third);
}

#[test]
fn list_orders_by_date_descending() {
    let conn = open_db_in_memory().unwrap();
    let store = SqliteActivityStore::new(&conn);

    let oldest = store.insert(&ActivityDraft::new(100, 1_700_000_000)).unwrap();
    let newest = store.insert(&ActivityDraft::new(200, 1_700_007_200)).unwrap();
    let middle = store.insert(&ActivityDraft::new(300, 1_700_003_600)).unwrap();

    let ids: Vec<_> = store.list_all().unwrap().iter().map(|r| r.id).collect();
    assert_eq!(ids, vec![newest, middle, oldest]);
}

#[test]
fn equal_dates_break_ties_by_descending_id() {
    let conn = open_db_in_memory().unwrap();
    let store = SqliteActivityStore::new(&conn);

    let earlier_insert = store.insert(&ActivityDraft::new(100, 1_700_000_000)).unwrap();
    let later_insert = store.insert(&ActivityDraft::new(200, 1_700_000_000)).unwrap();

    let ids: Vec<_> = store.list_all().unwrap().iter().map(|r| r.id).collect();
    assert_eq!(ids, vec![later_insert, earlier_insert]);
}

#[test]
fn list_on_empty_table_returns_empty_vec() {
    let conn = open_db_in_memory().unwrap();
    let store = SqliteActivityStore::new(&conn);

    assert!(store.list_all().unwrap().is_empty());
}

#[test]
fn get_returns_record_or_none() {
    let conn = open_db_in_memory().unwrap();
    let store = SqliteActivityStore::new(&conn);

    let id = store.insert(&ActivityDraft::new(512, 1_700_000_000)).unwrap();

    let found = store.get(id).unwrap().unwrap();
    assert_eq!(found.steps, 512);
    assert!(store.get(id + 1).unwrap().is_none());
}

#[test]
fn delete_one_removes_record_and_is_idempotent() {
    let conn = open_db_in_memory().unwrap();
    let store = SqliteActivityStore::new(&conn);

    let keep = store.insert(&ActivityDraft::new(100, 1_700_000_000)).unwrap();
    let gone = store.insert(&ActivityDraft::new(200, 1_700_003_600)).unwrap();

    store.delete_one(gone).unwrap();
    let ids: Vec<_> = store.list_all().unwrap().iter().map(|r| r.id).collect();
    assert_eq!(ids, vec![keep]);

    // Absent id: still Ok.
    store.delete_one(gone).unwrap();
    store.delete_one(9999).unwrap();
}

#[test]
fn delete_all_empties_table_and_is_noop_when_empty() {
    let conn = open_db_in_memory().unwrap();
    let store = SqliteActivityStore::new(&conn);

    store.delete_all().unwrap();

    store.insert(&ActivityDraft::new(100, 1_700_000_000)).unwrap();
    store.insert(&ActivityDraft::new(200, 1_700_003_600)).unwrap();

    store.delete_all().unwrap();
    assert!(store.list_all().unwrap().is_empty());
}

#[test]
fn insert_rejects_non_positive_steps() {
    let conn = open_db_in_memory().unwrap();
    let store = SqliteActivityStore::new(&conn);

    for steps in [0, -1, -2837] {
        let err = store
            .insert(&ActivityDraft::new(steps, 1_700_000_000))
            .unwrap_err();
        assert!(matches!(
            err,
            StoreError::InvalidDraft(DraftValidationError::NonPositiveSteps(s)) if s == steps
        ));
    }
    assert!(store.list_all().unwrap().is_empty());
}

#[test]
fn insert_rejects_negative_date() {
    let conn = open_db_in_memory().unwrap();
    let store = SqliteActivityStore::new(&conn);

    let err = store.insert(&ActivityDraft::new(100, -1)).unwrap_err();
    assert!(matches!(
        err,
        StoreError::InvalidDraft(DraftValidationError::NegativeDate(-1))
    ));
}

#[test]
fn list_rejects_corrupt_persisted_rows() {
    let conn = open_db_in_memory().unwrap();

    // Bypass the store to plant a row that violates the steps invariant.
    conn.execute("INSERT INTO activities (steps, date) VALUES (0, 1700000000);", [])
        .unwrap();

    let store = SqliteActivityStore::new(&conn);
    let err = store.list_all().unwrap_err();
    assert!(matches!(err, StoreError::InvalidData(_)));
}

// The end-to-end lifecycle: two inserts, a targeted delete, then a wipe.
#[test]
fn full_lifecycle_scenario() {
    let conn = open_db_in_memory().unwrap();
    let store = SqliteActivityStore::new(&conn);

    let first = store.insert(&ActivityDraft::new(2837, 1_700_000_000)).unwrap();
    let records = store.list_all().unwrap();
    assert_eq!(records.len(), 1);
    assert_eq!(
        (records[0].id, records[0].steps, records[0].date),
        (first, 2837, 1_700_000_000)
    );

    let second = store.insert(&ActivityDraft::new(500, 1_700_003_600)).unwrap();
    let ids: Vec<_> = store.list_all().unwrap().iter().map(|r| r.id).collect();
    assert_eq!(ids, vec![second, first]);

    store.delete_one(first).unwrap();
    let ids: Vec<_> = store.list_all().unwrap().iter().map(|r| r.id).collect();
    assert_eq!(ids, vec![second]);

    store.delete_all().unwrap();
    assert!(store.list_all().unwrap().is_empty());
}
