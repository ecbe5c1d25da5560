use std::cmp::Ordering;
use std::fmt::{self, Debug, Display, Formatter};
use std::mem;

use super::{DuplicatePolicy, EmptyTable, Entry, EntryIter, TableConfig, TableError, TableFns};
use crate::collections::linked::DoublyLinkedList;
use crate::collections::traits::Table;

/// A table backed by a [`DoublyLinkedList`], kept in ascending key order.
///
/// The list has no random access, so every operation walks from the front. The ordering still
/// lets a walk stop as soon as it passes the place where `key` would be, which saves comparisons
/// for absent keys but not asymptotic time. The table is unbounded, so inserts only fail if a
/// node can't be allocated.
///
/// # Time Complexity
/// For this analysis of time complexity, variables are defined as follows:
/// - `n`: The number of entries in the SortedListTable.
///
/// | Method | Complexity |
/// |-|-|
/// | `len` | `O(1)` |
/// | `insert` | `O(n)` |
/// | `lookup` | `O(n)` |
/// | `remove` | `O(n)` |
/// | `choose_key` | `O(1)` |
pub struct SortedListTable<K, V> {
    pub(crate) entries: DoublyLinkedList<Entry<K, V>>,
    pub(crate) fns: TableFns<K, V>,
    pub(crate) policy: DuplicatePolicy,
}

impl<K, V> SortedListTable<K, V> {
    /// Creates an empty SortedListTable that overwrites duplicates.
    pub const fn new(fns: TableFns<K, V>) -> SortedListTable<K, V> {
        SortedListTable {
            entries: DoublyLinkedList::new(),
            fns,
            policy: DuplicatePolicy::Overwrite,
        }
    }

    /// Creates an empty SortedListTable with the policy from `config`. The capacity is ignored.
    pub const fn with_config(fns: TableFns<K, V>, config: TableConfig) -> SortedListTable<K, V> {
        SortedListTable {
            entries: DoublyLinkedList::new(),
            fns,
            policy: config.policy,
        }
    }

    /// Returns the capabilities the table was created with.
    pub const fn fns(&self) -> &TableFns<K, V> {
        &self.fns
    }
}

impl<K, V> Table for SortedListTable<K, V> {
    type Key = K;
    type Value = V;
    type Iter<'a> = EntryIter<'a, K, V> where Self: 'a;

    fn len(&self) -> usize {
        self.entries.len()
    }

    fn policy(&self) -> DuplicatePolicy {
        self.policy
    }

    fn insert(&mut self, key: K, value: V) -> Result<(), TableError> {
        let SortedListTable { entries, fns, policy } = self;
        let mut cursor = entries.cursor_front_mut();

        while let Some(current) = cursor.current_mut() {
            match (fns.compare(&current.key, &key), *policy) {
                (Ordering::Less, _) | (Ordering::Equal, DuplicatePolicy::Append) => {
                    cursor.move_next();
                },
                (Ordering::Equal, DuplicatePolicy::Overwrite) => {
                    let old = mem::replace(current, Entry::new(key, value));
                    fns.release(old);
                    return Ok(());
                },
                (Ordering::Greater, _) => break,
            }
        }

        cursor.try_insert_before(Entry::new(key, value)).or_else(|(entry, err)| {
            fns.release(entry);
            Err(err.into())
        })
    }

    fn lookup(&self, key: &K) -> Option<&V> {
        let mut found = None;

        for entry in self.entries.iter() {
            match self.fns.compare(&entry.key, key) {
                Ordering::Less => continue,
                Ordering::Greater => break,
                Ordering::Equal => {
                    found = Some(&entry.value);
                    if self.policy.is_overwrite() {
                        break;
                    }
                },
            }
        }

        found
    }

    fn remove(&mut self, key: &K) -> usize {
        let SortedListTable { entries, fns, policy } = self;
        let mut cursor = entries.cursor_front_mut();
        let mut removed = 0;

        while let Some(current) = cursor.current() {
            match fns.compare(&current.key, key) {
                Ordering::Less => {
                    cursor.move_next();
                },
                Ordering::Greater => break,
                Ordering::Equal => {
                    if let Some(entry) = cursor.remove_current() {
                        fns.release(entry);
                        removed += 1;
                    }
                    if policy.is_overwrite() {
                        break;
                    }
                },
            }
        }

        removed
    }

    fn choose_key(&self) -> Result<&K, TableError> {
        self.entries.front()
            .map(|entry| &entry.key)
            .ok_or(EmptyTable.into())
    }

    fn iter(&self) -> Self::Iter<'_> {
        EntryIter {
            inner: self.entries.iter(),
        }
    }
}

impl<K, V> Drop for SortedListTable<K, V> {
    fn drop(&mut self) {
        while let Some(entry) = self.entries.pop_front() {
            self.fns.release(entry);
        }
    }
}

impl<K: Debug, V: Debug> Debug for SortedListTable<K, V> {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        f.debug_struct("SortedListTable")
            .field("entries", &self.entries)
            .field("policy", &self.policy)
            .finish()
    }
}

impl<K: Debug, V: Debug> Display for SortedListTable<K, V> {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        f.debug_map().entries(self.iter()).finish()
    }
}
