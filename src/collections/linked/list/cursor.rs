use std::alloc::{self, Layout};

use super::{DoublyLinkedList, Link, Node};
use crate::util::error::AllocError;

/// A position within a [`DoublyLinkedList`] that can read, insert and remove items in place.
/// Created with [`DoublyLinkedList::cursor_front_mut`].
///
/// A cursor is always either on an item or at the end position, which sits after the last item.
/// Moving forward from the last item reaches the end position, and moving forward from the end
/// position does nothing.
pub struct CursorMut<'a, T> {
    pub(crate) list: &'a mut DoublyLinkedList<T>,
    pub(crate) curr: Link<T>,
}

impl<'a, T> CursorMut<'a, T> {
    /// Returns true if the cursor is at the end position, past the last item.
    pub fn is_end(&self) -> bool {
        self.curr.is_none()
    }

    /// Returns the item under the cursor, or None at the end position.
    pub fn current(&self) -> Option<&T> {
        self.curr.map(|node| node.value())
    }

    /// Returns the item under the cursor mutably, or None at the end position.
    pub fn current_mut(&mut self) -> Option<&mut T> {
        self.curr.map(|node| node.value_mut())
    }

    /// Returns the item after the one under the cursor, without moving.
    pub fn peek_next(&self) -> Option<&T> {
        self.curr.and_then(|node| node.next()).map(|node| node.value())
    }

    /// Moves the cursor to the next item (or the end position).
    pub fn move_next(&mut self) -> &mut Self {
        if let Some(node) = self.curr {
            self.curr = node.next();
        }
        self
    }

    /// Inserts `value` directly before the cursor's position. The cursor stays on the item it was
    /// on, so at the end position this appends to the list.
    ///
    /// If the new node can't be allocated, this defers to [`alloc::handle_alloc_error`]. See
    /// [`CursorMut::try_insert_before`] for a fallible version.
    pub fn insert_before(&mut self, value: T) {
        if self.try_insert_before(value).is_err() {
            alloc::handle_alloc_error(Layout::new::<Node<T>>());
        }
    }

    /// Inserts `value` directly before the cursor's position, like [`CursorMut::insert_before`].
    ///
    /// # Errors
    /// If the new node can't be allocated, the list is left unchanged and `value` is returned
    /// alongside an [`AllocError`].
    pub fn try_insert_before(&mut self, value: T) -> Result<(), (T, AllocError)> {
        self.list.try_link_before(value, self.curr).map(|_| ())
    }

    /// Removes and returns the item under the cursor, moving the cursor onto the following item.
    /// Returns None at the end position.
    pub fn remove_current(&mut self) -> Option<T> {
        let node = self.curr?;
        self.curr = node.next();
        Some(self.list.unlink(node))
    }

    /// Returns a reference to the list being traversed.
    pub fn list(&self) -> &DoublyLinkedList<T> {
        &*self.list
    }
}
