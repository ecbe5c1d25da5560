#![cfg(all(test, feature = "tables-all"))]

use std::collections::{BTreeMap, BTreeSet};

use proptest::prelude::*;

use super::*;
use crate::collections::traits::Table;

const KEY_SPACE: u8 = 32;

#[derive(Debug, Clone)]
enum Op {
    Insert(u8, u32),
    Remove(u8),
}

fn op_strategy() -> impl Strategy<Value = Op> {
    prop_oneof![
        3 => (0..KEY_SPACE, any::<u32>()).prop_map(|(k, v)| Op::Insert(k, v)),
        1 => (0..KEY_SPACE).prop_map(Op::Remove),
    ]
}

fn ops_strategy() -> impl Strategy<Value = Vec<Op>> {
    prop::collection::vec(op_strategy(), 0..200)
}

fn check_sorted<T: Table<Key = u8, Value = u32>>(table: &T) -> Result<(), TestCaseError> {
    let keys: Vec<u8> = table.iter().map(|(k, _)| *k).collect();
    prop_assert!(keys.windows(2).all(|w| w[0] <= w[1]), "keys out of order: {:?}", keys);
    Ok(())
}

/// Runs `ops` against `table` and a BTreeMap, checking that they agree after every step.
fn check_overwrite_model<T: Table<Key = u8, Value = u32>>(
    table: &mut T,
    ops: &[Op],
    sorted: bool,
) -> Result<(), TestCaseError> {
    let mut model = BTreeMap::new();

    for op in ops {
        match *op {
            Op::Insert(k, v) => {
                table.insert(k, v).map_err(|e| TestCaseError::fail(e.to_string()))?;
                model.insert(k, v);
                prop_assert_eq!(table.lookup(&k), Some(&v));
            },
            Op::Remove(k) => {
                let expected = usize::from(model.remove(&k).is_some());
                prop_assert_eq!(table.remove(&k), expected);
                prop_assert_eq!(table.lookup(&k), None);
            },
        }

        prop_assert_eq!(table.len(), model.len());
        if sorted {
            check_sorted(table)?;
        }
    }

    for (k, v) in &model {
        prop_assert_eq!(table.lookup(k), Some(v));
    }
    Ok(())
}

/// Like [`check_overwrite_model`], for tables that append duplicates.
fn check_append_model<T: Table<Key = u8, Value = u32>>(
    table: &mut T,
    ops: &[Op],
    sorted: bool,
) -> Result<(), TestCaseError> {
    let mut model: Vec<(u8, u32)> = Vec::new();

    for op in ops {
        match *op {
            Op::Insert(k, v) => {
                table.insert(k, v).map_err(|e| TestCaseError::fail(e.to_string()))?;
                model.push((k, v));
            },
            Op::Remove(k) => {
                let before = model.len();
                model.retain(|&(mk, _)| mk != k);
                prop_assert_eq!(table.remove(&k), before - model.len());
            },
        }

        prop_assert_eq!(table.len(), model.len());
        if sorted {
            check_sorted(table)?;
        }
    }

    for k in 0..KEY_SPACE {
        let newest = model.iter().rev().find(|&&(mk, _)| mk == k).map(|(_, v)| v);
        prop_assert_eq!(table.lookup(&k), newest);
    }
    Ok(())
}

fn check_drain<T: Table<Key = u16, Value = u16>>(
    table: &mut T,
    keys: &BTreeSet<u16>,
) -> Result<(), TestCaseError> {
    for &key in keys {
        table.insert(key, key).map_err(|e| TestCaseError::fail(e.to_string()))?;
    }

    let mut drained = BTreeSet::new();
    while !table.is_empty() {
        let key = *table.choose_key().map_err(|e| TestCaseError::fail(e.to_string()))?;
        prop_assert_eq!(table.lookup(&key), Some(&key));
        prop_assert_eq!(table.remove(&key), 1);
        prop_assert!(drained.insert(key), "key {} drained twice", key);
    }

    prop_assert_eq!(&drained, keys);
    prop_assert!(table.choose_key().is_err());
    Ok(())
}

fn config(policy: DuplicatePolicy) -> TableConfig {
    TableConfig::new().with_capacity(256).with_policy(policy)
}

proptest! {
    #[test]
    fn array_table_matches_model(ops in ops_strategy()) {
        let mut table = ArrayTable::with_config(TableFns::ord(), config(DuplicatePolicy::Overwrite))
            .unwrap();
        check_overwrite_model(&mut table, &ops, false)?;
    }

    #[test]
    fn sorted_array_table_matches_model(ops in ops_strategy()) {
        let mut table =
            SortedArrayTable::with_config(TableFns::ord(), config(DuplicatePolicy::Overwrite))
                .unwrap();
        check_overwrite_model(&mut table, &ops, true)?;
    }

    #[test]
    fn sorted_list_table_matches_model(ops in ops_strategy()) {
        let mut table = SortedListTable::new(TableFns::ord());
        check_overwrite_model(&mut table, &ops, true)?;
    }

    #[test]
    fn append_tables_match_model(ops in ops_strategy()) {
        let mut table = ArrayTable::with_config(TableFns::ord(), config(DuplicatePolicy::Append))
            .unwrap();
        check_append_model(&mut table, &ops, false)?;

        let mut table =
            SortedArrayTable::with_config(TableFns::ord(), config(DuplicatePolicy::Append))
                .unwrap();
        check_append_model(&mut table, &ops, true)?;

        let mut table = SortedListTable::with_config(
            TableFns::ord(),
            config(DuplicatePolicy::Append),
        );
        check_append_model(&mut table, &ops, true)?;
    }

    #[test]
    fn drain_visits_every_key(keys in prop::collection::btree_set(any::<u16>(), 0..64)) {
        let mut table = ArrayTable::with_config(TableFns::ord(), config(DuplicatePolicy::Overwrite))
            .unwrap();
        check_drain(&mut table, &keys)?;

        let mut table =
            SortedArrayTable::with_config(TableFns::ord(), config(DuplicatePolicy::Overwrite))
                .unwrap();
        check_drain(&mut table, &keys)?;

        let mut table = SortedListTable::new(TableFns::ord());
        check_drain(&mut table, &keys)?;
    }
}
