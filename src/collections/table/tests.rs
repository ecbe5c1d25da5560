#![cfg(all(test, feature = "tables-all"))]

use std::cell::{Cell, RefCell};
use std::rc::Rc;

use super::*;
use crate::collections::traits::Table;
use crate::util::alloc::DropCounter;
use crate::util::panic::assert_panics;

const SMALL: TableConfig = TableConfig::new().with_capacity(8);

fn append(config: TableConfig) -> TableConfig {
    config.with_policy(DuplicatePolicy::Append)
}

fn int_fns() -> TableFns<i32, String> {
    TableFns::new(|a: &i32, b: &i32| a.cmp(b))
}

/// Capabilities that record every released value and count every released key.
fn recording_fns() -> (TableFns<i32, String>, Rc<RefCell<Vec<String>>>, Rc<Cell<usize>>) {
    let values = Rc::new(RefCell::new(Vec::new()));
    let keys = Rc::new(Cell::new(0));

    let fns = int_fns()
        .free_value({
            let values = values.clone();
            move |value| values.borrow_mut().push(value)
        })
        .free_key({
            let keys = keys.clone();
            move |_| keys.set(keys.get() + 1)
        });

    (fns, values, keys)
}

fn all_tables(
    mut make_fns: impl FnMut() -> TableFns<i32, String>,
    config: TableConfig,
) -> (ArrayTable<i32, String>, SortedArrayTable<i32, String>, SortedListTable<i32, String>) {
    (
        ArrayTable::with_config(make_fns(), config).expect("Small tables should allocate."),
        SortedArrayTable::with_config(make_fns(), config).expect("Small tables should allocate."),
        SortedListTable::with_config(make_fns(), config),
    )
}

fn check_postal_codes<T: Table<Key = i32, Value = String>>(mut table: T) {
    assert!(table.is_empty());

    table.insert(90187, "Umea".into()).unwrap();
    table.insert(90184, "Umea".into()).unwrap();
    table.insert(98185, "Kiruna".into()).unwrap();
    assert_eq!(table.lookup(&90187).map(String::as_str), Some("Umea"));

    table.insert(90187, "Umea (Universitet)".into()).unwrap();
    assert_eq!(
        table.lookup(&90187).map(String::as_str),
        Some("Umea (Universitet)"),
        "Inserting a duplicate should overwrite the value."
    );
    assert_eq!(table.len(), 3, "Overwriting shouldn't grow the table.");
    assert_eq!(table.lookup(&12345), None, "Absent keys aren't an error.");

    table.kill();
}

#[test]
fn test_postal_codes() {
    let (array, sorted_array, sorted_list) = all_tables(int_fns, SMALL);
    check_postal_codes(array);
    check_postal_codes(sorted_array);
    check_postal_codes(sorted_list);
}

fn check_overwrite_releases<T: Table<Key = i32, Value = String>>(
    mut table: T,
    values: Rc<RefCell<Vec<String>>>,
    keys: Rc<Cell<usize>>,
) {
    table.insert(1, "first".into()).unwrap();
    table.insert(1, "second".into()).unwrap();

    assert_eq!(*values.borrow(), ["first"], "The old value should be released exactly once.");
    assert_eq!(keys.get(), 1, "The old key should be released exactly once.");
    assert_eq!(table.len(), 1);

    assert_eq!(table.remove(&1), 1);
    assert_eq!(table.remove(&1), 0, "Removing an absent key should do nothing.");
    assert_eq!(*values.borrow(), ["first", "second"]);
    assert_eq!(keys.get(), 2);
    assert!(table.is_empty());
}

#[test]
fn test_overwrite_releases() {
    let (fns, values, keys) = recording_fns();
    check_overwrite_releases(ArrayTable::with_config(fns, SMALL).unwrap(), values, keys);

    let (fns, values, keys) = recording_fns();
    check_overwrite_releases(SortedArrayTable::with_config(fns, SMALL).unwrap(), values, keys);

    let (fns, values, keys) = recording_fns();
    check_overwrite_releases(SortedListTable::new(fns), values, keys);
}

fn check_append_policy<T: Table<Key = i32, Value = String>>(mut table: T) {
    assert!(table.policy().is_append());

    table.insert(5, "old".into()).unwrap();
    table.insert(3, "other".into()).unwrap();
    table.insert(5, "new".into()).unwrap();
    table.insert(7, "last".into()).unwrap();

    assert_eq!(table.len(), 4, "Appending should keep every duplicate.");
    assert_eq!(
        table.lookup(&5).map(String::as_str),
        Some("new"),
        "Lookup should find the most recent match."
    );

    assert_eq!(table.remove(&5), 2, "Removal should delete every match.");
    assert_eq!(table.lookup(&5), None);
    assert_eq!(table.len(), 2);
    assert_eq!(table.lookup(&3).map(String::as_str), Some("other"));
    assert_eq!(table.lookup(&7).map(String::as_str), Some("last"));

    table.insert(7, "newest".into()).unwrap();
    assert_eq!(table.lookup(&7).map(String::as_str), Some("newest"));
}

#[test]
fn test_append_policy() {
    let (array, sorted_array, sorted_list) = all_tables(int_fns, append(SMALL));
    check_append_policy(array);
    check_append_policy(sorted_array);
    check_append_policy(sorted_list);
}

fn check_drain<T: Table<Key = i32, Value = String>>(mut table: T) {
    let keys = [40, 10, 30, 20, 50];
    for key in keys {
        table.insert(key, format!("v{key}")).unwrap();
    }

    let mut drained = Vec::new();
    while !table.is_empty() {
        let key = *table.choose_key().unwrap();
        assert_eq!(table.lookup(&key), Some(&format!("v{key}")));
        assert_eq!(table.remove(&key), 1);
        drained.push(key);
    }

    drained.sort();
    assert_eq!(drained, [10, 20, 30, 40, 50], "Draining should visit every key once.");
    assert_eq!(table.choose_key(), Err(TableError::EmptyTable(EmptyTable)));
}

#[test]
fn test_drain() {
    let (array, sorted_array, sorted_list) = all_tables(int_fns, SMALL);
    check_drain(array);
    check_drain(sorted_array);
    check_drain(sorted_list);
}

#[test]
fn test_empty_choose_key() {
    let (array, sorted_array, sorted_list) = all_tables(int_fns, SMALL);
    assert!(array.choose_key().unwrap_err().is_empty_table());
    assert!(sorted_array.choose_key().unwrap_err().is_empty_table());
    assert!(sorted_list.choose_key().unwrap_err().is_empty_table());
}

fn check_capacity<T: Table<Key = i32, Value = String>>(
    mut table: T,
    values: Rc<RefCell<Vec<String>>>,
) {
    for key in 0..3 {
        table.insert(key, key.to_string()).unwrap();
    }

    assert_eq!(
        table.insert(3, "rejected".into()),
        Err(TableError::CapacityExceeded(CapacityExceeded { capacity: 3 }))
    );
    assert_eq!(table.len(), 3, "A failed insert shouldn't change the table.");
    assert_eq!(table.lookup(&3), None);
    assert_eq!(*values.borrow(), ["rejected"], "A rejected pair should still be released.");

    table.insert(1, "one".into()).expect("Overwriting should work in a full table.");
    assert_eq!(table.lookup(&1).map(String::as_str), Some("one"));

    table.remove(&0);
    table.insert(3, "three".into()).expect("Removing should free up a slot.");
    assert_eq!(table.len(), 3);
}

#[test]
fn test_capacity_boundary() {
    let config = TableConfig::new().with_capacity(3);

    let (fns, values, _) = recording_fns();
    check_capacity(ArrayTable::with_config(fns, config).unwrap(), values);

    let (fns, values, _) = recording_fns();
    check_capacity(SortedArrayTable::with_config(fns, config).unwrap(), values);

    let mut table = SortedListTable::with_config(int_fns(), config);
    table.try_extend((0..100).map(|i| (i, i.to_string())))
        .expect("The list-backed table should be unbounded.");
    assert_eq!(table.len(), 100);
}

#[test]
fn test_zero_capacity() {
    let config = TableConfig::new().with_capacity(0);
    let mut table = ArrayTable::with_config(int_fns(), config).unwrap();

    assert!(table.insert(1, "one".into()).unwrap_err().is_capacity_exceeded());
    assert!(table.is_empty());
}

#[test]
fn test_alloc_error() {
    let config = TableConfig::new().with_capacity(usize::MAX);

    assert!(matches!(
        ArrayTable::with_config(int_fns(), config),
        Err(TableError::Alloc(AllocError::CapacityOverflow(_)))
    ));
    assert!(matches!(
        SortedArrayTable::with_config(int_fns(), config),
        Err(TableError::Alloc(AllocError::CapacityOverflow(_)))
    ));
}

#[test]
fn test_kill_releases_entries() {
    let (fns, values, keys) = recording_fns();
    let mut table = SortedArrayTable::with_config(fns, SMALL).unwrap();
    table.try_extend([(2, "b".to_string()), (1, "a".to_string())]).unwrap();

    table.kill();
    assert_eq!(*values.borrow(), ["a", "b"], "Killing should release entries in storage order.");
    assert_eq!(keys.get(), 2);

    let (fns, values, keys) = recording_fns();
    drop(SortedListTable::new(fns));
    assert!(values.borrow().is_empty(), "Killing an empty table should release nothing.");
    assert_eq!(keys.get(), 0);
}

#[test]
fn test_drop_without_hooks() {
    let counter = DropCounter::new();
    let mut table = ArrayTable::with_config(TableFns::ord(), SMALL).unwrap();

    for i in 0..5 {
        table.insert(counter.track(i), counter.track(i * 10)).unwrap();
    }
    table.insert(counter.track(2), counter.track(200)).unwrap();
    assert_eq!(counter.get(), 2, "The replaced key and value should be dropped.");

    table.remove(&counter.track(4));
    assert_eq!(counter.get(), 5, "The removed pair and the probe key should be dropped.");

    drop(table);
    assert_eq!(counter.get(), 13, "Every remaining pair should be dropped with the table.");
}

fn keys_of<T: Table<Key = i32, Value = String>>(table: &T) -> Vec<i32> {
    let mut keys = Vec::new();
    table.for_each(|key, _| keys.push(*key));
    keys
}

#[test]
fn test_storage_order() {
    let pairs = [(3, "c"), (1, "a"), (4, "d"), (2, "b")];
    let (mut array, mut sorted_array, mut sorted_list) = all_tables(int_fns, SMALL);

    for (key, value) in pairs {
        array.insert(key, value.into()).unwrap();
        sorted_array.insert(key, value.into()).unwrap();
        sorted_list.insert(key, value.into()).unwrap();
    }

    assert_eq!(keys_of(&array), [3, 1, 4, 2]);
    assert_eq!(keys_of(&sorted_array), [1, 2, 3, 4]);
    assert_eq!(keys_of(&sorted_list), [1, 2, 3, 4]);

    array.remove(&3);
    assert_eq!(keys_of(&array), [2, 1, 4], "Removal should move the last entry into the gap.");

    assert_eq!(format!("{sorted_list}"), r#"{1: "a", 2: "b", 3: "c", 4: "d"}"#);
    assert_eq!(format!("{sorted_array}"), format!("{sorted_list}"));
}

#[test]
fn test_from_entries() {
    let pairs = [(5, "five"), (1, "one"), (3, "three"), (1, "uno")]
        .map(|(key, value)| (key, value.to_string()));

    let table = SortedArrayTable::from_entries(int_fns(), SMALL, pairs.clone()).unwrap();
    assert_eq!(
        table.iter().map(|(key, value)| (*key, value.as_str())).collect::<Vec<_>>(),
        [(1, "uno"), (3, "three"), (5, "five")]
    );

    let table = SortedArrayTable::from_entries(int_fns(), append(SMALL), pairs.clone()).unwrap();
    assert_eq!(
        table.iter().map(|(key, value)| (*key, value.as_str())).collect::<Vec<_>>(),
        [(1, "one"), (1, "uno"), (3, "three"), (5, "five")],
        "Appended duplicates should keep their insertion order."
    );

    let config = TableConfig::new().with_capacity(2);
    assert!(SortedArrayTable::from_entries(int_fns(), config, pairs).is_err());
}

#[test]
fn test_borrowed_payloads() {
    let names = [String::from("Umea"), String::from("Kiruna")];
    let mut table = SortedListTable::new(TableFns::new(|a: &&str, b: &&str| a.cmp(b)));

    table.insert("north", &names[1]).unwrap();
    table.insert("south", &names[0]).unwrap();
    table.kill();

    assert_eq!(names[0], "Umea", "The caller keeps ownership of borrowed values.");
}

/// Capabilities whose value hook panics when it is handed "two".
fn panicking_fns() -> TableFns<i32, String> {
    int_fns().free_value(|value: String| {
        if value == "two" {
            panic!("refusing to release {value}");
        }
    })
}

fn check_panicking_hook<T: Table<Key = i32, Value = String>>(mut table: T) {
    table.insert(1, "one".into()).unwrap();
    table.insert(2, "two".into()).unwrap();
    table.insert(3, "three".into()).unwrap();

    assert_panics!({
        table.remove(&2);
    });

    assert_eq!(table.len(), 2, "The entry should be gone before its hook runs.");
    assert_eq!(table.iter().count(), 2);
    assert_eq!(table.lookup(&1).map(String::as_str), Some("one"));
    assert_eq!(table.lookup(&2), None);
    assert_eq!(table.lookup(&3).map(String::as_str), Some("three"));
    assert!(matches!(table.choose_key().copied(), Ok(1 | 3)));

    let mut keys = keys_of(&table);
    keys.sort();
    assert_eq!(keys, [1, 3]);

    table.insert(4, "four".into()).unwrap();
    assert_eq!(table.remove(&1), 1);
    assert_eq!(table.len(), 2);
    table.kill();
}

#[test]
fn test_panicking_hook() {
    let (array, sorted_array, sorted_list) = all_tables(panicking_fns, SMALL);
    check_panicking_hook(array);
    check_panicking_hook(sorted_array);
    check_panicking_hook(sorted_list);

    let (array, sorted_array, sorted_list) = all_tables(panicking_fns, append(SMALL));
    check_panicking_hook(array);
    check_panicking_hook(sorted_array);
    check_panicking_hook(sorted_list);
}

#[test]
fn test_is_full() {
    let config = TableConfig::new().with_capacity(2);
    let mut table = ArrayTable::with_config(int_fns(), config).unwrap();

    table.insert(1, "a".into()).unwrap();
    assert!(!table.is_full());
    table.insert(2, "b".into()).unwrap();
    assert!(table.is_full());
    assert!(table.insert(2, "c".into()).is_ok(), "Overwriting needs no room.");
    assert!(table.insert(3, "d".into()).unwrap_err().is_capacity_exceeded());

    let mut table = SortedArrayTable::with_config(int_fns(), config).unwrap();
    table.insert(5, "e".into()).unwrap();
    table.insert(6, "f".into()).unwrap();
    assert!(table.is_full());
    assert_eq!(table.remove(&5), 1);
    assert!(!table.is_full());
    assert_eq!(table.iter().len(), 1);
}
