//! Contiguous collection types. At the moment this is only [`Array`], a fixed-size heap array that
//! backs the array-based tables.
#![warn(missing_docs)]

pub mod array;

#[doc(inline)]
pub use array::Array;
