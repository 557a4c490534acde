//! Integration tests for the in-memory user store.

use utilkit::store::{User, UserStore, FIRST_ID};

#[test]
fn add_then_get_returns_matching_fields() {
    let mut store = UserStore::new();
    let id = store.add("Alice", "alice@example.com", 25).id;

    let user = store.get(id);
    assert_eq!(
        user,
        Some(&User {
            id: FIRST_ID,
            name: "Alice".to_string(),
            email: "alice@example.com".to_string(),
            age: 25,
        })
    );
}

#[test]
fn delete_then_get_is_absent() {
    let mut store = UserStore::new();
    let id = store.add("Bob", "bob@example.com", 30).id;

    assert!(store.delete(id));
    assert_eq!(store.get(id), None);
    assert!(!store.delete(id), "second delete should report nothing removed");
}

#[test]
fn ids_are_never_reused() {
    let mut store = UserStore::new();
    let a = store.add("a", "a@example.com", 1).id;
    let b = store.add("b", "b@example.com", 2).id;
    assert!(store.delete(b));
    assert!(store.delete(a));
    assert!(store.is_empty());

    let c = store.add("c", "c@example.com", 3).id;
    assert!(c > b && b > a);
    assert_eq!(c, 3);
}

#[test]
fn list_all_reflects_current_records() {
    let mut store = UserStore::new();
    for (i, name) in ["u1", "u2", "u3", "u4"].iter().enumerate() {
        store.add(*name, format!("{name}@example.com"), u32::try_from(i).unwrap_or(0));
    }
    assert!(store.delete(2));

    let ids: Vec<u64> = store.list_all().iter().map(|u| u.id).collect();
    assert_eq!(ids, vec![1, 3, 4]);
    assert_eq!(store.len(), 3);
    assert_eq!(store.next_id(), 5);
}

#[test]
fn get_on_empty_store_is_none() {
    let store = UserStore::default();
    assert_eq!(store.get(FIRST_ID), None);
    assert!(store.list_all().is_empty());
}
