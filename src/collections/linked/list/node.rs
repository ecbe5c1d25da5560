use std::alloc::{self, Layout};
use std::ptr::NonNull;

use crate::util::error::{AllocError, AllocFailed};

pub(crate) type Link<T> = Option<NodeRef<T>>;

/// A copyable handle to a heap allocated [`Node`]. The owning list is responsible for keeping
/// every handle it holds pointing at a live node, and for freeing each node exactly once via
/// [`NodeRef::take_node`].
#[derive(Debug)]
pub(crate) struct NodeRef<T>(pub NonNull<Node<T>>);

impl<T> NodeRef<T> {
    /// Allocates an uninitialized node.
    pub(crate) fn try_alloc() -> Result<NodeRef<T>, AllocError> {
        let layout = Layout::new::<Node<T>>();

        // SAFETY: A Node always holds two links, so its layout is never zero-sized.
        let raw_ptr: *mut Node<T> = unsafe { alloc::alloc(layout).cast() };

        NonNull::new(raw_ptr)
            .map(NodeRef)
            .ok_or_else(|| AllocFailed { bytes: layout.size() }.into())
    }

    /// Moves `node` onto the heap. If the allocation fails, the node is handed back alongside the
    /// error.
    pub(crate) fn try_from_node(node: Node<T>) -> Result<NodeRef<T>, (Node<T>, AllocError)> {
        match NodeRef::try_alloc() {
            Ok(node_ref) => {
                // SAFETY: The pointer was just allocated with the layout of Node<T>.
                unsafe { node_ref.0.as_ptr().write(node) };
                Ok(node_ref)
            },
            Err(err) => Err((node, err)),
        }
    }

    /// Moves `node` onto the heap, deferring to [`alloc::handle_alloc_error`] if that fails.
    pub(crate) fn from_node(node: Node<T>) -> NodeRef<T> {
        match NodeRef::try_from_node(node) {
            Ok(node_ref) => node_ref,
            Err(_) => alloc::handle_alloc_error(Layout::new::<Node<T>>()),
        }
    }

    pub(crate) fn take_node(self) -> Node<T> {
        // SAFETY: The node was allocated by the global allocator with the layout of Node<T>, which
        // is what Box expects, and the list only takes each node once, after unlinking it.
        unsafe { *Box::from_raw(self.0.as_ptr()) }
    }

    pub(crate) fn value<'a>(&self) -> &'a T {
        // SAFETY: The node is live while it is linked into a list, and the list hands out
        // references with lifetimes bounded by its own borrow.
        unsafe { &(*self.0.as_ptr()).value }
    }

    #[allow(clippy::mut_from_ref)]
    pub(crate) fn value_mut<'a>(&self) -> &'a mut T {
        // SAFETY: As for value, with exclusivity provided by a mutable borrow of the list.
        unsafe { &mut (*self.0.as_ptr()).value }
    }

    pub(crate) fn prev(&self) -> Link<T> {
        // SAFETY: The node is live while it is linked into a list.
        unsafe { (*self.0.as_ptr()).prev }
    }

    pub(crate) fn next(&self) -> Link<T> {
        // SAFETY: The node is live while it is linked into a list.
        unsafe { (*self.0.as_ptr()).next }
    }

    pub(crate) fn set_prev(&self, link: Link<T>) {
        // SAFETY: The node is live and the list is mutably borrowed while links change.
        unsafe { (*self.0.as_ptr()).prev = link }
    }

    pub(crate) fn set_next(&self, link: Link<T>) {
        // SAFETY: The node is live and the list is mutably borrowed while links change.
        unsafe { (*self.0.as_ptr()).next = link }
    }
}

impl<T> Clone for NodeRef<T> {
    fn clone(&self) -> Self {
        *self
    }
}

impl<T> Copy for NodeRef<T> {}

impl<T> PartialEq for NodeRef<T> {
    fn eq(&self, other: &Self) -> bool {
        self.0 == other.0
    }
}

pub(crate) struct Node<T> {
    pub value: T,
    pub prev: Link<T>,
    pub next: Link<T>,
}
