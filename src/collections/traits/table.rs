use crate::collections::table::{DuplicatePolicy, TableError};

/// An associative table that maps keys to values using a caller supplied comparator.
///
/// Every implementor follows one [`DuplicatePolicy`], chosen when it is created:
/// - [`Overwrite`](DuplicatePolicy::Overwrite): inserting an existing key replaces its entry in
///   place, releasing the old key and value.
/// - [`Append`](DuplicatePolicy::Append): every insert adds an entry, `lookup` returns the newest
///   match and `remove` deletes all matches.
///
/// A table is killed either with [`Table::kill`] or by dropping it. Either way every remaining
/// entry is released through the table's hooks, and nothing can use the table afterwards.
pub trait Table {
    type Key;
    type Value;
    type Iter<'a>: Iterator<Item = (&'a Self::Key, &'a Self::Value)>
    where
        Self: 'a;

    /// Returns the number of live entries.
    fn len(&self) -> usize;

    /// Returns true if the table contains no entries.
    fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Returns the duplicate policy this table was created with.
    fn policy(&self) -> DuplicatePolicy;

    /// Adds `key` and `value` to the table, following the table's duplicate policy.
    ///
    /// # Errors
    /// Returns [`TableError::CapacityExceeded`] if the table is bounded and full. The table is
    /// left unchanged and the rejected key and value are released: they go to the table's hooks,
    /// or are dropped if it has none. They are not handed back, so a caller that needs them
    /// afterwards should check for room first (e.g. with `ArrayTable::is_full`) or store
    /// references or [`Rc`](std::rc::Rc)s.
    fn insert(&mut self, key: Self::Key, value: Self::Value) -> Result<(), TableError>;

    /// Returns the value associated with `key`, or None if the key isn't present.
    fn lookup(&self, key: &Self::Key) -> Option<&Self::Value>;

    /// Returns true if an entry with `key` is present.
    fn contains(&self, key: &Self::Key) -> bool {
        self.lookup(key).is_some()
    }

    /// Removes the entries matching `key`, returning how many were removed. Removing an absent key
    /// does nothing and returns 0.
    fn remove(&mut self, key: &Self::Key) -> usize;

    /// Returns an arbitrary key currently stored in the table. Useful for draining a table without
    /// keeping track of its keys elsewhere.
    ///
    /// # Errors
    /// Returns [`TableError::EmptyTable`] if there is nothing to choose.
    fn choose_key(&self) -> Result<&Self::Key, TableError>;

    /// Returns an iterator over all entries, in the table's storage order.
    fn iter(&self) -> Self::Iter<'_>;

    /// Calls `visit` once for every entry, in the table's storage order.
    fn for_each<F: FnMut(&Self::Key, &Self::Value)>(&self, mut visit: F) {
        for (key, value) in self.iter() {
            visit(key, value);
        }
    }

    /// Inserts every pair from `pairs`, stopping at the first error.
    ///
    /// # Errors
    /// See [`Table::insert`].
    fn try_extend<I: IntoIterator<Item = (Self::Key, Self::Value)>>(&mut self, pairs: I) -> Result<(), TableError> {
        for (key, value) in pairs {
            self.insert(key, value)?;
        }
        Ok(())
    }

    /// Destroys the table, releasing every remaining entry.
    fn kill(self)
    where
        Self: Sized,
    {
        drop(self)
    }
}
