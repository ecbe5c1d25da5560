use std::cmp::Ordering;
use std::fmt::{self, Debug, Formatter};

use super::Entry;

/// A three-way comparison over keys. Must be a total order.
pub type Comparator<K> = Box<dyn Fn(&K, &K) -> Ordering>;

/// A hook that takes ownership of a key or value as the table lets go of it.
pub type FreeFn<T> = Box<dyn FnMut(T)>;

/// The capabilities a table is created with: a mandatory key comparator and optional release
/// hooks for keys and values.
///
/// Whenever a table lets go of a key or value it was given (because it was overwritten, removed,
/// rejected or left over when the table is killed), the matching hook receives it exactly once.
/// Without a hook, the key or value is dropped. A caller that wants to keep ownership of its data
/// should store references or [`Rc`](std::rc::Rc)s, which the table never frees.
///
/// The hooks are fixed once the table is created.
///
/// # Examples
/// ```
/// # use tablekit::collections::table::TableFns;
/// # use std::cmp::Ordering;
/// let fns: TableFns<i32, String> = TableFns::new(|a: &i32, b: &i32| a.cmp(b))
///     .free_value(|value: String| println!("releasing {value}"));
///
/// assert_eq!(fns.compare(&1, &2), Ordering::Less);
/// assert!(fns.owns_values());
/// assert!(!fns.owns_keys());
/// ```
pub struct TableFns<K, V> {
    pub(crate) compare: Comparator<K>,
    pub(crate) free_key: Option<FreeFn<K>>,
    pub(crate) free_value: Option<FreeFn<V>>,
}

impl<K, V> TableFns<K, V> {
    /// Creates a set of capabilities with the provided comparator and no release hooks.
    pub fn new<C>(compare: C) -> TableFns<K, V>
    where
        C: Fn(&K, &K) -> Ordering + 'static,
    {
        TableFns {
            compare: Box::new(compare),
            free_key: None,
            free_value: None,
        }
    }

    /// Registers a hook that receives every key released by the table.
    pub fn free_key<F>(mut self, free: F) -> TableFns<K, V>
    where
        F: FnMut(K) + 'static,
    {
        self.free_key = Some(Box::new(free));
        self
    }

    /// Registers a hook that receives every value released by the table.
    pub fn free_value<F>(mut self, free: F) -> TableFns<K, V>
    where
        F: FnMut(V) + 'static,
    {
        self.free_value = Some(Box::new(free));
        self
    }

    pub fn compare(&self, a: &K, b: &K) -> Ordering {
        (self.compare)(a, b)
    }

    pub const fn owns_keys(&self) -> bool {
        self.free_key.is_some()
    }

    pub const fn owns_values(&self) -> bool {
        self.free_value.is_some()
    }

    /// Passes the parts of `entry` to their hooks, value first, or drops them.
    pub(crate) fn release(&mut self, entry: Entry<K, V>) {
        let Entry { key, value } = entry;

        match &mut self.free_value {
            Some(free) => free(value),
            None => drop(value),
        }
        match &mut self.free_key {
            Some(free) => free(key),
            None => drop(key),
        }
    }
}

impl<K: Ord + 'static, V> TableFns<K, V> {
    /// Creates a set of capabilities that orders keys with [`Ord`].
    pub fn ord() -> TableFns<K, V> {
        TableFns::new(K::cmp)
    }
}

impl<K, V> Debug for TableFns<K, V> {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        f.debug_struct("TableFns")
            .field("owns_keys", &self.owns_keys())
            .field("owns_values", &self.owns_values())
            .finish_non_exhaustive()
    }
}
