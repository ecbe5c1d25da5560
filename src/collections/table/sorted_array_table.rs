use std::cmp::Ordering;
use std::fmt::{self, Debug, Display, Formatter};

use super::{
    CapacityExceeded, DebugSlots, DuplicatePolicy, EmptyTable, Entry, SlotIter, TableConfig,
    TableError, TableFns,
};
use crate::collections::contiguous::Array;
use crate::collections::traits::Table;
use crate::util::option::OptionExtension;

/// A table backed by a fixed-capacity [`Array`], kept in ascending key order so that keys can be
/// located with a binary search.
///
/// Live entries occupy the slots `0..len` with no gaps, sorted by the table's comparator. Inserting
/// a new key and removing a key both shift the entries after it by one slot to keep that order.
///
/// Under [`DuplicatePolicy::Append`] a new duplicate is placed after every existing entry with an
/// equal key, so the newest match is always the last of its run.
///
/// # Time Complexity
/// For this analysis of time complexity, variables are defined as follows:
/// - `n`: The number of entries in the SortedArrayTable.
///
/// | Method | Complexity |
/// |-|-|
/// | `len` | `O(1)` |
/// | `insert` | `O(n)`* |
/// | `lookup` | `O(log n)` |
/// | `remove` | `O(n)`* |
/// | `choose_key` | `O(1)` |
///
/// \* Only `O(log n)` comparisons are made, the rest of the time is spent moving entries.
pub struct SortedArrayTable<K, V> {
    pub(crate) slots: Array<Option<Entry<K, V>>>,
    pub(crate) len: usize,
    pub(crate) fns: TableFns<K, V>,
    pub(crate) policy: DuplicatePolicy,
}

impl<K, V> SortedArrayTable<K, V> {
    /// Creates an empty SortedArrayTable with the default [`TableConfig`].
    ///
    /// # Errors
    /// Returns [`TableError::Alloc`] if the slots can't be allocated.
    pub fn new(fns: TableFns<K, V>) -> Result<SortedArrayTable<K, V>, TableError> {
        Self::with_config(fns, TableConfig::default())
    }

    /// Creates an empty SortedArrayTable with `config.capacity` slots, all allocated up front.
    ///
    /// # Errors
    /// Returns [`TableError::Alloc`] if the slots can't be allocated.
    pub fn with_config(
        fns: TableFns<K, V>,
        config: TableConfig,
    ) -> Result<SortedArrayTable<K, V>, TableError> {
        Ok(SortedArrayTable {
            slots: Array::try_repeat_default(config.capacity)?,
            len: 0,
            fns,
            policy: config.policy,
        })
    }

    /// Creates a SortedArrayTable holding every pair from `pairs`, which can be in any order. Each
    /// pair is inserted in turn, so this amounts to an insertion sort that applies the table's
    /// duplicate policy as it goes.
    ///
    /// # Errors
    /// Returns [`TableError::Alloc`] if the slots can't be allocated, or
    /// [`TableError::CapacityExceeded`] if `pairs` holds more distinct keys (or, when appending,
    /// more pairs) than `config.capacity`.
    pub fn from_entries<I>(
        fns: TableFns<K, V>,
        config: TableConfig,
        pairs: I,
    ) -> Result<SortedArrayTable<K, V>, TableError>
    where
        I: IntoIterator<Item = (K, V)>,
    {
        let mut table = Self::with_config(fns, config)?;
        table.try_extend(pairs)?;
        Ok(table)
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

    fn entry_at(&self, index: usize) -> &Entry<K, V> {
        // UNREACHABLE: Every slot in 0..len holds an entry.
        unsafe { self.slots.inspect(index).unreachable() }
    }

    fn compare_at(&self, index: usize, key: &K) -> Ordering {
        self.fns.compare(&self.entry_at(index).key, key)
    }

    /// Binary searches `0..len` for `key`. Returns the index of a matching entry, or the index at
    /// which `key` would have to be inserted to keep the table sorted.
    fn search(&self, key: &K) -> Result<usize, usize> {
        let mut low = 0;
        let mut high = self.len;

        while low < high {
            let mid = low + (high - low) / 2;

            match self.compare_at(mid, key) {
                Ordering::Equal => return Ok(mid),
                Ordering::Greater => high = mid,
                Ordering::Less => low = mid + 1,
            }
        }

        Err(low)
    }

    /// Returns the first index in `0..=len` whose entry doesn't satisfy `before`, which must hold
    /// for a prefix of the table.
    fn partition_point(&self, before: impl Fn(Ordering) -> bool, key: &K) -> usize {
        let mut low = 0;
        let mut high = self.len;

        while low < high {
            let mid = low + (high - low) / 2;

            if before(self.compare_at(mid, key)) {
                low = mid + 1;
            } else {
                high = mid;
            }
        }

        low
    }

    /// Returns the range of indices holding entries equal to `key`.
    fn equal_range(&self, key: &K) -> (usize, usize) {
        let start = self.partition_point(Ordering::is_lt, key);
        let end = self.partition_point(Ordering::is_le, key);
        (start, end)
    }

    /// Places `entry` at `index`, shifting every entry from `index` onwards up by one slot.
    fn insert_at(&mut self, index: usize, entry: Entry<K, V>) -> Result<(), TableError> {
        if self.is_full() {
            let capacity = self.cap();
            self.fns.release(entry);
            return Err(CapacityExceeded { capacity }.into());
        }

        self.slots.set(self.len, entry);
        self.slots[index..=self.len].rotate_right(1);
        self.len += 1;
        Ok(())
    }

    /// Removes the entries in `start..end`, shifting the following entries down to close the gap.
    fn remove_range(&mut self, start: usize, end: usize) -> usize {
        let removed = end - start;
        let old_len = self.len;

        self.slots[start..old_len].rotate_left(removed);
        self.len -= removed;
        self.release_from(self.len, old_len);
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

impl<K, V> Table for SortedArrayTable<K, V> {
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

        match self.policy {
            DuplicatePolicy::Overwrite => match self.search(&entry.key) {
                Ok(index) => {
                    if let Some(old) = self.slots.set(index, entry) {
                        self.fns.release(old);
                    }
                    Ok(())
                },
                Err(index) => self.insert_at(index, entry),
            },
            DuplicatePolicy::Append => {
                let index = self.partition_point(Ordering::is_le, &entry.key);
                self.insert_at(index, entry)
            },
        }
    }

    fn lookup(&self, key: &K) -> Option<&V> {
        let index = match self.policy {
            DuplicatePolicy::Overwrite => self.search(key).ok()?,
            DuplicatePolicy::Append => {
                let (start, end) = self.equal_range(key);
                if start == end {
                    return None;
                }
                end - 1
            },
        };

        Some(&self.entry_at(index).value)
    }

    fn remove(&mut self, key: &K) -> usize {
        match self.policy {
            DuplicatePolicy::Overwrite => match self.search(key) {
                Ok(index) => self.remove_range(index, index + 1),
                Err(_) => 0,
            },
            DuplicatePolicy::Append => {
                let (start, end) = self.equal_range(key);
                self.remove_range(start, end)
            },
        }
    }

    fn choose_key(&self) -> Result<&K, TableError> {
        match self.len {
            0 => Err(EmptyTable.into()),
            _ => Ok(&self.entry_at(0).key),
        }
    }

    fn iter(&self) -> Self::Iter<'_> {
        SlotIter {
            inner: self.slots[..self.len].iter(),
        }
    }
}

impl<K, V> Drop for SortedArrayTable<K, V> {
    fn drop(&mut self) {
        let len = self.len;
        self.len = 0;
        self.release_from(0, len);
    }
}

impl<K: Debug, V: Debug> Debug for SortedArrayTable<K, V> {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        f.debug_struct("SortedArrayTable")
            .field("slots", &DebugSlots(&self.slots[..self.len]))
            .field("len", &self.len)
            .field("cap", &self.cap())
            .field("policy", &self.policy)
            .finish()
    }
}

impl<K: Debug, V: Debug> Display for SortedArrayTable<K, V> {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        f.debug_map().entries(self.iter()).finish()
    }
}
