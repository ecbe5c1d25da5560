use std::alloc;
use std::iter::FusedIterator;
use std::marker::PhantomData;
use std::ptr::{self, NonNull};

use super::Array;

impl<T> IntoIterator for Array<T> {
    type Item = T;

    type IntoIter = IntoIter<T>;

    fn into_iter(self) -> Self::IntoIter {
        let (buf, size) = self.into_parts();
        IntoIter {
            buf,
            size,
            start: 0,
            end: size,
            _phantom: PhantomData,
        }
    }
}

/// An owned iterator over the items of an [`Array`]. See [`Array::into_iter`].
pub struct IntoIter<T> {
    pub(crate) buf: NonNull<T>,
    pub(crate) size: usize,
    pub(crate) start: usize,
    pub(crate) end: usize,
    pub(crate) _phantom: PhantomData<T>,
}

impl<T> Drop for IntoIter<T> {
    fn drop(&mut self) {
        // SAFETY: Values in start..end haven't been read out yet, so they are still initialized
        // and owned by the iterator.
        unsafe {
            ptr::drop_in_place(ptr::slice_from_raw_parts_mut(
                self.buf.add(self.start).as_ptr(),
                self.end - self.start,
            ));
        }

        let Ok(layout) = Array::<T>::make_layout(self.size) else { return };

        if layout.size() != 0 {
            // SAFETY: buf was allocated by the Array with exactly this layout.
            unsafe { alloc::dealloc(self.buf.as_ptr().cast(), layout) }
        }
    }
}

impl<T> Iterator for IntoIter<T> {
    type Item = T;

    fn next(&mut self) -> Option<Self::Item> {
        if self.start < self.end {
            // SAFETY: start is in bounds and its value hasn't been read yet. Incrementing start
            // afterwards means the value is effectively moved off of the heap.
            let value = unsafe { self.buf.add(self.start).read() };
            self.start += 1;
            Some(value)
        } else {
            None
        }
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        let len = self.end - self.start;
        (len, Some(len))
    }
}

impl<T> DoubleEndedIterator for IntoIter<T> {
    fn next_back(&mut self) -> Option<Self::Item> {
        if self.start < self.end {
            self.end -= 1;
            // SAFETY: The newly decremented end is in bounds and hasn't been read yet.
            let value = unsafe { self.buf.add(self.end).read() };
            Some(value)
        } else {
            None
        }
    }
}

impl<T> FusedIterator for IntoIter<T> {}

impl<T> ExactSizeIterator for IntoIter<T> {}

// Borrowed iteration comes from Deref<Target = [T]>.
