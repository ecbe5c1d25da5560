//! Linked collection types. Primarily revolves around [`DoublyLinkedList`] and its accompanying
//! [`CursorMut`] type, which together form a positional sequence.

pub mod list;

#[doc(inline)]
pub use list::{CursorMut, DoublyLinkedList};
