use std::fmt::{self, Debug, Display, Formatter};

use super::{
    CapacityExceeded, DebugSlots, DuplicatePolicy, EmptyTable, Entry, SlotIter, TableConfig,
    TableError, TableFns,
};
use crate::collections::contiguous::Array;
use crate::collections::traits::Table;

/// An unordered table backed by a fixed-capacity [`Array`] of slots.
///
/// Live entries always occupy the slots `0..len` with no gaps. Keys are located by a linear scan,
/// so the only requirement on the comparator is that it reports equality consistently.
///
/// Under [`DuplicatePolicy::Overwrite`], removal fills the gap with the last live entry, which is
/// `O(1)` but doesn't preserve insertion order. Under [`DuplicatePolicy::Append`], removal shifts
/// the remaining entries down instead, so that insertion order (and therefore "newest match")
/// survives.
///
/// # Time Complexity
/// For this analysis of time complexity, variables are defined as follows:
/// - `n`: The number of entries in the ArrayTable.
///
/// | Method | Complexity |
/// |-|-|
/// | `len` | `O(1)` |
/// | `insert` | `O(n)`, `O(1)`* |
/// | `lookup` | `O(n)` |
/// | `remove` | `O(n)` |
/// | `choose_key` | `O(1)` |
///
/// \* Inserting under [`DuplicatePolicy::Append`] doesn't search for an existing key.
pub struct ArrayTable<K, V> {
    pub(crate) slots: Array<Option<Entry<K, V>>>,
    pub(crate) len: usize,
    pub(crate) fns: TableFns<K, V>,
    pub(crate) policy: DuplicatePolicy,
}

impl<K, V> ArrayTable<K, V> {
    /// Creates an empty ArrayTable with the default [`TableConfig`].
    ///
    /// # Errors
    /// Returns [`TableError::Alloc`] if the slots can't be allocated.
    pub fn new(fns: TableFns<K, V>) -> Result<ArrayTable<K, V>, TableError> {
        Self::with_config(fns, TableConfig::default())
    }

    /// Creates an empty ArrayTable with `config.capacity` slots, all allocated up front.
    ///
    /// # Errors
    /// Returns [`TableError::Alloc`] if the slots can't be allocated.
    pub fn with_config(
        fns: TableFns<K, V>,
        config: TableConfig,
    ) -> Result<ArrayTable<K, V>, TableError> {
        Ok(ArrayTable {
            slots: Array::try_repeat_default(config.capacity)?,
            len: 0,
            fns,
            policy: config.policy,
        })
    }

    /// Returns the maximum number of entries the table can hold.
    pub fn cap(&self) -> usize {
        self.slots.size()
    }

    /// Returns true if the table can't accept another entry. Inserting an existing key under
    /// [`DuplicatePolicy::Overwrite`] still succeeds when full.
    pub fn is_full(&self) -> bool {
        self.len == self.cap()
    }

    /// Returns the capabilities the table was created with.
    pub const fn fns(&self) -> &TableFns<K, V> {
        &self.fns
    }

    fn key_matches(&self, index: usize, key: &K) -> bool {
        self.slots.inspect(index)
            .is_some_and(|entry| self.fns.compare(&entry.key, key).is_eq())
    }

    /// Finds the slot for `key`. Appended duplicates are searched newest first.
    fn find(&self, key: &K) -> Option<usize> {
        match self.policy {
            DuplicatePolicy::Overwrite => (0..self.len).find(|&i| self.key_matches(i, key)),
            DuplicatePolicy::Append => (0..self.len).rev().find(|&i| self.key_matches(i, key)),
        }
    }

    fn push(&mut self, entry: Entry<K, V>) -> Result<(), TableError> {
        if self.is_full() {
            let capacity = self.cap();
            self.fns.release(entry);
            return Err(CapacityExceeded { capacity }.into());
        }

        self.slots.set(self.len, entry);
        self.len += 1;
        Ok(())
    }

    /// Removes the entry at `index`, moving the last live entry into its place.
    fn swap_remove(&mut self, index: usize) {
        let last = self.len - 1;

        self.slots.swap(index, last);
        self.len = last;
        self.release_from(last, last + 1);
    }

    /// Removes every entry matching `key` while keeping the others in order.
    fn retain_unmatched(&mut self, key: &K) -> usize {
        let mut kept = 0;

        for index in 0..self.len {
            if !self.key_matches(index, key) {
                self.slots.swap(kept, index);
                kept += 1;
            }
        }

        let removed = self.len - kept;
        let end = self.len;
        self.len = kept;
        self.release_from(kept, end);
        removed
    }

    /// Releases the entries in `start..end`, which must already lie outside of `0..len`.
    fn release_from(&mut self, start: usize, end: usize) {
        for index in start..end {
            if let Some(entry) = self.slots.take(index) {
                self.fns.release(entry);
            }
        }
    }
}

impl<K, V> Table for ArrayTable<K, V> {
    type Key = K;
    type Value = V;
    type Iter<'a> = SlotIter<'a, K, V> where Self: 'a;

    fn len(&self) -> usize {
        self.len
    }

    fn policy(&self) -> DuplicatePolicy {
        self.policy
    }

    fn insert(&mut self, key: K, value: V) -> Result<(), TableError> {
        let entry = Entry::new(key, value);
        let existing = match self.policy {
            DuplicatePolicy::Overwrite => self.find(&entry.key),
            DuplicatePolicy::Append => None,
        };

        match existing {
            Some(index) => {
                if let Some(old) = self.slots.set(index, entry) {
                    self.fns.release(old);
                }
                Ok(())
            },
            None => self.push(entry),
        }
    }

    fn lookup(&self, key: &K) -> Option<&V> {
        let index = self.find(key)?;
        self.slots.inspect(index).map(|entry| &entry.value)
    }

    fn remove(&mut self, key: &K) -> usize {
        match self.policy {
            DuplicatePolicy::Overwrite => match self.find(key) {
                Some(index) => {
                    self.swap_remove(index);
                    1
                },
                None => 0,
            },
            DuplicatePolicy::Append => self.retain_unmatched(key),
        }
    }

    fn choose_key(&self) -> Result<&K, TableError> {
        self.iter()
            .next()
            .map(|(key, _)| key)
            .ok_or(EmptyTable.into())
    }

    fn iter(&self) -> Self::Iter<'_> {
        SlotIter {
            inner: self.slots[..self.len].iter(),
        }
    }
}

impl<K, V> Drop for ArrayTable<K, V> {
    fn drop(&mut self) {
        let len = self.len;
        self.len = 0;
        self.release_from(0, len);
    }
}

impl<K: Debug, V: Debug> Debug for ArrayTable<K, V> {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        f.debug_struct("ArrayTable")
            .field("slots", &DebugSlots(&self.slots[..self.len]))
            .field("len", &self.len)
            .field("cap", &self.cap())
            .field("policy", &self.policy)
            .finish()
    }
}

impl<K: Debug, V: Debug> Display for ArrayTable<K, V> {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        f.debug_map().entries(self.iter()).finish()
    }
}
