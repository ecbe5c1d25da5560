//! Drop-tracking helpers for tests.

use std::cell::Cell;
use std::cmp::Ordering;
use std::fmt::{self, Debug, Formatter};
use std::rc::Rc;

/// A shared counter of how many [`Tracked`] values have been dropped.
#[derive(Debug, Default, Clone)]
pub struct DropCounter(Rc<Cell<usize>>);

impl DropCounter {
    pub fn new() -> DropCounter {
        DropCounter::default()
    }

    pub fn track<T>(&self, value: T) -> Tracked<T> {
        Tracked {
            value,
            counter: self.clone(),
        }
    }

    pub fn get(&self) -> usize {
        self.0.get()
    }
}

/// A value that bumps its [`DropCounter`] when dropped. Comparison only looks at `value`, so a
/// Tracked can stand in for a key.
pub struct Tracked<T> {
    pub value: T,
    counter: DropCounter,
}

impl<T> Drop for Tracked<T> {
    fn drop(&mut self) {
        self.counter.0.set(self.counter.0.get() + 1);
    }
}

impl<T: Debug> Debug for Tracked<T> {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        write!(f, "Tracked({:?})", self.value)
    }
}

impl<T: PartialEq> PartialEq for Tracked<T> {
    fn eq(&self, other: &Self) -> bool {
        self.value == other.value
    }
}

impl<T: Eq> Eq for Tracked<T> {}

impl<T: PartialOrd> PartialOrd for Tracked<T> {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        self.value.partial_cmp(&other.value)
    }
}

impl<T: Ord> Ord for Tracked<T> {
    fn cmp(&self, other: &Self) -> Ordering {
        self.value.cmp(&other.value)
    }
}
