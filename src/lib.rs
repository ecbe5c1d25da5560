//! This crate provides associative tables: containers that map keys to values using nothing more
//! than a comparator supplied by the caller.
//!
//! # Purpose
//! Hash maps need a hash function and [`BTreeMap`](std::collections::BTreeMap) needs [`Ord`]. The
//! tables here only need a three-way comparison, passed in as a closure when the table is created,
//! so keys can be ordered in whatever way suits the caller (case-insensitive strings, reversed
//! numbers, a single field of a struct, etc.). Every table implements the same
//! [`Table`](collections::traits::Table) trait, so they can be swapped for one another freely.
//!
//! Three tables are provided, each built on a container from this crate:
//! - [`ArrayTable`](collections::table::ArrayTable): unordered, on a fixed-capacity
//!   [`Array`](collections::contiguous::Array).
//! - [`SortedArrayTable`](collections::table::SortedArrayTable): sorted, with binary search.
//! - [`SortedListTable`](collections::table::SortedListTable): sorted, on a
//!   [`DoublyLinkedList`](collections::linked::DoublyLinkedList).
//!
//! # Ownership
//! A table takes its keys and values by value. When it lets go of one, because it was overwritten,
//! removed or left behind when the table was killed, it hands it to the release hook registered in
//! its [`TableFns`](collections::table::TableFns), or drops it if there is none. To keep ownership
//! of the data, store references or [`Rc`](std::rc::Rc)s instead.
//!
//! # Error Handling
//! When this crate employs errors via [`Result`]s, it does so in a method that is strongly typed,
//! using enums for static dispatch rather than dynamic, with structs (often ZSTs) that implement
//! [`Error`](std::error::Error). Running out of room in a bounded table, choosing a key from an
//! empty one and failing to allocate are all errors. Passing an index out of bounds to a container
//! is a bug, so it panics.
//!
//! # Dependencies
//! This crate depends on some derive macros because they're helpful and remove the need for some
//! very repetitive programming. The `table-mwe` binary uses `tracing` to report failures.
#![warn(clippy::missing_safety_doc)]
#![warn(clippy::undocumented_unsafe_blocks)]
#![warn(clippy::missing_panics_doc)]
#![warn(clippy::unwrap_used)]
#![allow(clippy::module_inception)]

#[cfg(feature = "collections")]
pub mod collections;

pub(crate) mod util;
