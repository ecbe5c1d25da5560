//! Traits shared between collection types.

pub mod table;

#[doc(inline)]
pub use table::Table;
