//! Associative tables that map keys to values using a caller supplied comparator, rather than
//! hashing.
//!
//! All tables implement the [`Table`](crate::collections::traits::Table) trait and are created
//! from a [`TableFns`] (the comparator and release hooks) and, optionally, a [`TableConfig`].
//!
//! | Table | Backing | Order | Bounded |
//! |-|-|-|-|
//! | [`ArrayTable`] | [`Array`](crate::collections::contiguous::Array) | None | Yes |
//! | [`SortedArrayTable`] | [`Array`](crate::collections::contiguous::Array) | Ascending keys | Yes |
//! | [`SortedListTable`] | [`DoublyLinkedList`](crate::collections::linked::DoublyLinkedList) | Ascending keys | No |
//!
//! # Examples
//! ```
//! # use tablekit::collections::table::{SortedArrayTable, TableConfig, TableFns};
//! # use tablekit::collections::traits::Table;
//! let config = TableConfig::new().with_capacity(8);
//! let mut table = SortedArrayTable::with_config(TableFns::ord(), config).unwrap();
//!
//! table.insert(90187, "Umea").unwrap();
//! table.insert(98185, "Kiruna").unwrap();
//! table.insert(90187, "Umea (Universitet)").unwrap();
//!
//! assert_eq!(table.lookup(&90187), Some(&"Umea (Universitet)"));
//! assert_eq!(table.len(), 2);
//! ```

#[cfg(feature = "array-table")]
mod array_table;
mod config;
mod entry;
mod error;
mod fns;
mod iter;
#[cfg(feature = "sorted-array-table")]
mod sorted_array_table;
#[cfg(feature = "sorted-list-table")]
mod sorted_list_table;

mod proptests;
mod tests;

#[cfg(feature = "array-table")]
pub use array_table::*;
pub use config::*;
pub use entry::*;
pub use error::*;
pub use fns::*;
pub use iter::*;
#[cfg(feature = "sorted-array-table")]
pub use sorted_array_table::*;
#[cfg(feature = "sorted-list-table")]
pub use sorted_list_table::*;
