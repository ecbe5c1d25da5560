use std::error::Error;
use std::fmt::{self, Display, Formatter};

use derive_more::{Display, Error, From, IsVariant};

#[derive(Debug, PartialEq, Eq)]
pub struct IndexOutOfBounds {
    pub index: usize,
    pub len: usize,
}

impl Display for IndexOutOfBounds {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        write!(f, "Index {} out of bounds for collection with {} elements!", self.index, self.len)
    }
}

impl Error for IndexOutOfBounds {}

#[derive(Debug, PartialEq, Eq)]
pub struct CapacityOverflow;

impl Display for CapacityOverflow {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        write!(f, "Capacity overflow!")
    }
}

impl Error for CapacityOverflow {}

/// The global allocator returned null for a request of `bytes` bytes.
#[derive(Debug, PartialEq, Eq)]
pub struct AllocFailed {
    pub bytes: usize,
}

impl Display for AllocFailed {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        write!(f, "Allocation of {} bytes failed!", self.bytes)
    }
}

impl Error for AllocFailed {}

#[derive(Debug, PartialEq, Eq, Display, Error, From, IsVariant)]
pub enum AllocError {
    CapacityOverflow(CapacityOverflow),
    AllocFailed(AllocFailed),
}
