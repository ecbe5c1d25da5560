#[cfg(any(feature = "array-table", feature = "sorted-array-table"))]
use std::fmt::{self, Debug, Formatter};

#[cfg(any(feature = "array-table", feature = "sorted-array-table"))]
use crate::util::fmt::DebugRaw;

/// One key-value pair stored in a table.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Entry<K, V> {
    pub key: K,
    pub value: V,
}

impl<K, V> Entry<K, V> {
    pub const fn new(key: K, value: V) -> Entry<K, V> {
        Entry { key, value }
    }

    pub const fn as_pair(&self) -> (&K, &V) {
        (&self.key, &self.value)
    }

    pub fn into_pair(self) -> (K, V) {
        (self.key, self.value)
    }
}

impl<K, V> From<(K, V)> for Entry<K, V> {
    fn from((key, value): (K, V)) -> Self {
        Entry::new(key, value)
    }
}

/// Debug formats a run of table slots, with `-` for empty ones.
#[cfg(any(feature = "array-table", feature = "sorted-array-table"))]
pub(crate) struct DebugSlots<'a, K, V>(pub &'a [Option<Entry<K, V>>]);

#[cfg(any(feature = "array-table", feature = "sorted-array-table"))]
impl<K: Debug, V: Debug> Debug for DebugSlots<'_, K, V> {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        f.debug_list().entries(
            self.0.iter()
                .map(|slot| DebugRaw(match slot {
                    Some(Entry { key, value }) => format!("({key:?}: {value:?})"),
                    None => "-".into(),
                }))
        ).finish()
    }
}
