//! Various general-purpose collection types.
//!
//! # Purpose
//! The tables are the main event here. [`contiguous`] and [`linked`] hold the containers they are
//! built on, which are usable by themselves as well.

#[cfg(feature = "contiguous")]
pub mod contiguous;
#[cfg(feature = "linked")]
pub mod linked;
#[cfg(any(feature = "array-table", feature = "sorted-array-table", feature = "sorted-list-table"))]
pub mod table;
#[cfg(any(feature = "array-table", feature = "sorted-array-table", feature = "sorted-list-table"))]
pub mod traits;
