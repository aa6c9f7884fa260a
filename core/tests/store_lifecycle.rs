//! Store lifecycle tests driven through the public API with a pinned clock.

use std::sync::Arc;

use todo_core::{ManualClock, StoreError, TodoStore, SEED_TASK};

fn seeded_store() -> (TodoStore, ManualClock) {
    let clock = ManualClock::new(1_700_000_000_000);
    (TodoStore::seeded(Arc::new(clock.clone())), clock)
}

#[test]
fn crud_lifecycle() {
    let (mut store, clock) = seeded_store();
    assert_eq!(store.len(), 1);

    // create
    clock.advance(10);
    let created = store.create("buy milk").unwrap();
    assert_eq!(store.len(), 2);
    assert!(!created.is_done);
    assert_eq!(created.created_at, created.updated_at);
    let id = created.id.clone();

    // get
    assert_eq!(store.get(&id).unwrap(), &created);

    // update
    clock.advance(10);
    let updated = store
        .update(&id, "buy milk and eggs".to_string(), true)
        .unwrap();
    assert_eq!(updated.task, "buy milk and eggs");
    assert!(updated.is_done);
    assert_eq!(updated.created_at, created.created_at);
    assert!(updated.updated_at > created.updated_at);

    // delete
    let deleted = store.delete(&id).unwrap();
    assert_eq!(deleted, updated);
    assert_eq!(store.len(), 1);
    assert_eq!(store.list()[0].task, SEED_TASK);

    // get after delete
    assert!(matches!(store.get(&id), Err(StoreError::NotFound(_))));
}

#[test]
fn list_length_tracks_creates_and_deletes() {
    let (mut store, _clock) = seeded_store();
    let mut ids = Vec::new();
    for i in 0..5 {
        ids.push(store.create(&format!("task {i}")).unwrap().id);
    }
    assert!(store.create("").is_err());
    store.delete(&ids[1]).unwrap();
    store.delete(&ids[3]).unwrap();
    assert!(store.delete(&ids[3]).is_err());

    assert_eq!(store.len(), 1 + 5 - 2);
    let tasks: Vec<&str> = store.list().iter().map(|t| t.task.as_str()).collect();
    assert_eq!(tasks, vec![SEED_TASK, "task 0", "task 2", "task 4"]);
}

#[test]
fn delete_leaves_other_records_untouched() {
    let (mut store, clock) = seeded_store();
    let keep = store.create("keep").unwrap();
    clock.advance(100);
    let gone = store.create("gone").unwrap();

    let before: Vec<_> = store
        .list()
        .iter()
        .filter(|t| t.id != gone.id)
        .cloned()
        .collect();
    store.delete(&gone.id).unwrap();
    assert_eq!(store.list(), before.as_slice());
    assert_eq!(store.get(&keep.id).unwrap(), &keep);
}

#[test]
fn ids_are_unique_across_many_creates() {
    let (mut store, _clock) = seeded_store();
    for i in 0..100 {
        store.create(&format!("t{i}")).unwrap();
    }
    let mut ids: Vec<&str> = store.list().iter().map(|t| t.id.as_str()).collect();
    ids.sort_unstable();
    ids.dedup();
    assert_eq!(ids.len(), 101);
}
