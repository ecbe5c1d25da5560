use std::error::Error;
use std::fmt::{self, Display, Formatter};

use derive_more::{Display, Error, From, IsVariant};

#[doc(inline)]
pub use crate::util::error::{AllocError, AllocFailed, CapacityOverflow};

/// An insert into a full array-backed table.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CapacityExceeded {
    pub capacity: usize,
}

impl Display for CapacityExceeded {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        write!(f, "Unable to insert into a full table with capacity {}!", self.capacity)
    }
}

impl Error for CapacityExceeded {}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct EmptyTable;

impl Display for EmptyTable {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        write!(f, "Unable to choose a key from an empty table!")
    }
}

impl Error for EmptyTable {}

/// Every error a table operation can return. A missing key isn't an error, lookups and removals
/// report it through their return values instead.
#[derive(Debug, PartialEq, Eq, Display, Error, From, IsVariant)]
pub enum TableError {
    CapacityExceeded(CapacityExceeded),
    EmptyTable(EmptyTable),
    Alloc(AllocError),
}
