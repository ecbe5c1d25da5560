use std::iter::FusedIterator;
#[cfg(any(feature = "array-table", feature = "sorted-array-table"))]
use std::slice;

use super::Entry;
#[cfg(feature = "sorted-list-table")]
use crate::collections::linked::list::Iter as ListIter;

/// A borrowed iterator over the live slots of an array-backed table, in index order.
#[cfg(any(feature = "array-table", feature = "sorted-array-table"))]
pub struct SlotIter<'a, K, V> {
    pub(crate) inner: slice::Iter<'a, Option<Entry<K, V>>>,
}

#[cfg(any(feature = "array-table", feature = "sorted-array-table"))]
impl<'a, K, V> Iterator for SlotIter<'a, K, V> {
    type Item = (&'a K, &'a V);

    fn next(&mut self) -> Option<Self::Item> {
        // Only the live slots are handed to the iterator, and every one of them holds an entry.
        self.inner.by_ref().flatten().next().map(Entry::as_pair)
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        self.inner.size_hint()
    }
}

#[cfg(any(feature = "array-table", feature = "sorted-array-table"))]
impl<K, V> FusedIterator for SlotIter<'_, K, V> {}

#[cfg(any(feature = "array-table", feature = "sorted-array-table"))]
impl<K, V> ExactSizeIterator for SlotIter<'_, K, V> {}

/// A borrowed iterator over the entries of a list-backed table, from front to back.
#[cfg(feature = "sorted-list-table")]
pub struct EntryIter<'a, K, V> {
    pub(crate) inner: ListIter<'a, Entry<K, V>>,
}

#[cfg(feature = "sorted-list-table")]
impl<'a, K, V> Iterator for EntryIter<'a, K, V> {
    type Item = (&'a K, &'a V);

    fn next(&mut self) -> Option<Self::Item> {
        self.inner.next().map(Entry::as_pair)
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        self.inner.size_hint()
    }
}

#[cfg(feature = "sorted-list-table")]
impl<K, V> FusedIterator for EntryIter<'_, K, V> {}

#[cfg(feature = "sorted-list-table")]
impl<K, V> ExactSizeIterator for EntryIter<'_, K, V> {}
