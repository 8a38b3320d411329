//! Property tests for sorting, searching, and mutating the record store

use proptest::prelude::*;
use student_portal::core::models::{Campus, StudentRecord};
use student_portal::core::store::{RecordStore, SortKey};

fn arb_campus() -> impl Strategy<Value = Campus> {
    prop::sample::select(Campus::ALL.to_vec())
}

fn arb_key() -> impl Strategy<Value = SortKey> {
    prop::sample::select(SortKey::ALL.to_vec())
}

/// Names from a small alphabet so that ties are common.
fn arb_name() -> impl Strategy<Value = String> {
    prop::sample::select(vec!["Ahmed", "Ayhan", "Roshni", "Hassan", "Mia"])
        .prop_map(str::to_string)
}

/// Records with distinct ids `S000`, `S001`, ... in insertion order.
fn arb_store() -> impl Strategy<Value = RecordStore> {
    prop::collection::vec((arb_name(), arb_name(), arb_campus()), 0..40).prop_map(|rows| {
        let records = rows
            .into_iter()
            .enumerate()
            .map(|(i, (first, last, campus))| {
                let email = format!("{}{i}@example.com", first.to_lowercase());
                StudentRecord::new(first, last, email, campus, Some(format!("S{i:03}")))
            })
            .collect();
        RecordStore::from_records(records)
    })
}

fn ids(records: &[StudentRecord]) -> Vec<String> {
    records.iter().map(|r| r.id().to_string()).collect()
}

proptest! {
    /// Sorting produces a non-decreasing permutation of the input.
    #[test]
    fn prop_sort_orders_and_preserves(mut store in arb_store(), key in arb_key()) {
        let mut before = ids(store.records());
        let sorted = store.sort_by(key).to_vec();

        for pair in sorted.windows(2) {
            prop_assert!(key.value(&pair[0]) <= key.value(&pair[1]));
        }

        let mut after = ids(&sorted);
        before.sort();
        after.sort();
        prop_assert_eq!(before, after);
    }

    /// Sorting twice by the same key changes nothing.
    #[test]
    fn prop_sort_is_idempotent(mut store in arb_store(), key in arb_key()) {
        let once = store.sort_by(key).to_vec();
        let mut fresh = RecordStore::from_records(once.clone());
        prop_assert_eq!(fresh.sort_by(key).to_vec(), once);
    }

    /// Records with equal keys keep their insertion order.
    #[test]
    fn prop_sort_is_stable(mut store in arb_store(), key in arb_key()) {
        let sorted = store.sort_by(key).to_vec();
        for pair in sorted.windows(2) {
            if key.value(&pair[0]) == key.value(&pair[1]) {
                prop_assert!(pair[0].id() < pair[1].id());
            }
        }
    }

    /// Binary search finds a match exactly when a linear scan does.
    #[test]
    fn prop_sorted_search_agrees_with_exact(
        mut store in arb_store(),
        key in arb_key(),
        value in prop_oneof![arb_name(), Just("Nobody".to_string()), Just("S005".to_string())],
    ) {
        let exact = ids(
            &store
                .search_exact(key, &value)
                .into_iter()
                .cloned()
                .collect::<Vec<_>>(),
        );
        let found = store.search_sorted(key, &value).map(|r| r.id().to_string());

        match found {
            Some(id) => prop_assert!(exact.contains(&id)),
            None => prop_assert!(exact.is_empty()),
        }
    }

    /// A freshly inserted record is found once by its id.
    #[test]
    fn prop_insert_then_search(mut store in arb_store(), first in arb_name(), campus in arb_campus()) {
        let len = store.len();
        let record = StudentRecord::new(
            first.clone(),
            "Newcomer".to_string(),
            "new@example.com".to_string(),
            campus,
            Some("NEW".to_string()),
        );
        store.insert(record.clone());

        prop_assert_eq!(store.len(), len + 1);
        prop_assert_eq!(store.search_exact(SortKey::Id, "NEW"), vec![&record]);
        prop_assert_eq!(store.search_sorted(SortKey::Id, "NEW"), Some(&record));
    }

    /// Deleting a present id removes exactly that record.
    #[test]
    fn prop_delete_removes_one(mut store in arb_store(), pick in any::<prop::sample::Index>()) {
        prop_assume!(!store.is_empty());
        let len = store.len();
        let id = pick.get(store.records()).id().to_string();

        prop_assert_eq!(store.delete(&id), 1);
        prop_assert_eq!(store.len(), len - 1);
        prop_assert!(store.search_exact(SortKey::Id, &id).is_empty());
        prop_assert_eq!(store.delete(&id), 0);
    }
}
