use std::fmt::{self, Debug, Display, Formatter};
use std::marker::PhantomData;

use super::{CursorMut, Iter, IterMut, Link, Node, NodeRef};
use crate::util::error::AllocError;

/// A list with links in both directions. See also: [`CursorMut`] for positional traversal and
/// mutation.
///
/// # Time Complexity
/// For this analysis of time complexity, variables are defined as follows:
/// - `n`: The number of items in the DoublyLinkedList.
///
/// | Method | Complexity |
/// |-|-|
/// | `len` | `O(1)` |
/// | `front` | `O(1)` |
/// | `back` | `O(1)` |
/// | `push_front` | `O(1)` |
/// | `push_back` | `O(1)` |
/// | `pop_front` | `O(1)` |
/// | `pop_back` | `O(1)` |
/// | `clear` | `O(n)` |
/// | `CursorMut::insert_before` | `O(1)` |
/// | `CursorMut::remove_current` | `O(1)` |
///
/// Reaching a position is always a walk from the front, so anything positional is `O(i)` overall.
pub struct DoublyLinkedList<T> {
    pub(crate) head: Link<T>,
    pub(crate) tail: Link<T>,
    pub(crate) len: usize,
    pub(crate) _phantom: PhantomData<T>,
}

impl<T> DoublyLinkedList<T> {
    /// Creates a new, empty DoublyLinkedList. No memory is allocated until an item is added.
    pub const fn new() -> DoublyLinkedList<T> {
        DoublyLinkedList {
            head: None,
            tail: None,
            len: 0,
            _phantom: PhantomData,
        }
    }

    pub const fn len(&self) -> usize {
        self.len
    }

    pub const fn is_empty(&self) -> bool {
        self.len == 0
    }

    pub fn front(&self) -> Option<&T> {
        self.head.map(|node| node.value())
    }

    pub fn front_mut(&mut self) -> Option<&mut T> {
        self.head.map(|node| node.value_mut())
    }

    pub fn back(&self) -> Option<&T> {
        self.tail.map(|node| node.value())
    }

    pub fn back_mut(&mut self) -> Option<&mut T> {
        self.tail.map(|node| node.value_mut())
    }

    pub fn push_front(&mut self, value: T) {
        let node = NodeRef::from_node(Node {
            value,
            prev: None,
            next: self.head,
        });

        match self.head {
            Some(old_head) => old_head.set_prev(Some(node)),
            None => self.tail = Some(node),
        }

        self.head = Some(node);
        self.len += 1;
    }

    pub fn push_back(&mut self, value: T) {
        let node = NodeRef::from_node(Node {
            value,
            prev: self.tail,
            next: None,
        });

        match self.tail {
            Some(old_tail) => old_tail.set_next(Some(node)),
            None => self.head = Some(node),
        }

        self.tail = Some(node);
        self.len += 1;
    }

    pub fn pop_front(&mut self) -> Option<T> {
        self.head.map(|head| self.unlink(head))
    }

    pub fn pop_back(&mut self) -> Option<T> {
        self.tail.map(|tail| self.unlink(tail))
    }

    /// Drops every item in the list, leaving it empty.
    pub fn clear(&mut self) {
        while self.pop_front().is_some() {}
    }

    /// Returns an iterator over all items in the list, from front to back.
    pub fn iter(&self) -> Iter<'_, T> {
        Iter {
            curr: self.head,
            len: self.len,
            _phantom: PhantomData,
        }
    }

    /// Returns an iterator over all items in the list as mutable references, from front to back.
    pub fn iter_mut(&mut self) -> IterMut<'_, T> {
        IterMut {
            curr: self.head,
            len: self.len,
            _phantom: PhantomData,
        }
    }

    /// Creates a [`CursorMut`] positioned on the first item of the list, or at the end position if
    /// the list is empty.
    pub fn cursor_front_mut(&mut self) -> CursorMut<'_, T> {
        CursorMut {
            curr: self.head,
            list: self,
        }
    }

    /// Links a new node holding `value` directly before `next`, or at the back if `next` is None.
    /// If the node can't be allocated, the list is unchanged and `value` is handed back.
    pub(crate) fn try_link_before(
        &mut self,
        value: T,
        next: Link<T>,
    ) -> Result<NodeRef<T>, (T, AllocError)> {
        let prev = match next {
            Some(next_node) => next_node.prev(),
            None => self.tail,
        };

        let node = NodeRef::try_from_node(Node { value, prev, next })
            .map_err(|(node, err)| (node.value, err))?;

        match prev {
            Some(prev_node) => prev_node.set_next(Some(node)),
            None => self.head = Some(node),
        }
        match next {
            Some(next_node) => next_node.set_prev(Some(node)),
            None => self.tail = Some(node),
        }
        self.len += 1;

        Ok(node)
    }

    /// Unlinks `node` from the list and frees it, returning its value.
    ///
    /// `node` must belong to this list.
    pub(crate) fn unlink(&mut self, node: NodeRef<T>) -> T {
        let Node { value, prev, next } = node.take_node();

        match prev {
            Some(prev_node) => prev_node.set_next(next),
            None => self.head = next,
        }
        match next {
            Some(next_node) => next_node.set_prev(prev),
            None => self.tail = prev,
        }
        self.len -= 1;

        value
    }
}

impl<T> Default for DoublyLinkedList<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T> Drop for DoublyLinkedList<T> {
    fn drop(&mut self) {
        self.clear();
    }
}

impl<T> FromIterator<T> for DoublyLinkedList<T> {
    fn from_iter<I: IntoIterator<Item = T>>(iter: I) -> Self {
        let mut list = DoublyLinkedList::new();
        list.extend(iter);
        list
    }
}

impl<T> Extend<T> for DoublyLinkedList<T> {
    fn extend<I: IntoIterator<Item = T>>(&mut self, iter: I) {
        for item in iter {
            self.push_back(item);
        }
    }
}

impl<T: PartialEq> PartialEq for DoublyLinkedList<T> {
    fn eq(&self, other: &Self) -> bool {
        self.len == other.len && self.iter().eq(other.iter())
    }
}

impl<T: Eq> Eq for DoublyLinkedList<T> {}

// SAFETY: The list owns all of its nodes uniquely, so it can be sent when T can.
unsafe impl<T: Send> Send for DoublyLinkedList<T> {}
// SAFETY: Shared references to the list only hand out shared references to items.
unsafe impl<T: Sync> Sync for DoublyLinkedList<T> {}

impl<T: Debug> Debug for DoublyLinkedList<T> {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        f.debug_struct("DoublyLinkedList")
            .field("contents", &ListContents(self))
            .field("len", &self.len)
            .finish()
    }
}

impl<T: Debug> Display for DoublyLinkedList<T> {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        Debug::fmt(&ListContents(self), f)
    }
}

struct ListContents<'a, T>(&'a DoublyLinkedList<T>);

impl<T: Debug> Debug for ListContents<'_, T> {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        f.debug_list().entries(self.0.iter()).finish()
    }
}
