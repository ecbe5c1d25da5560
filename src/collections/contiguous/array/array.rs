use std::alloc::{self, Layout};
use std::borrow::{Borrow, BorrowMut};
use std::fmt::{self, Debug, Display, Formatter};
use std::marker::PhantomData;
use std::mem::{self, MaybeUninit};
use std::ops::{Deref, DerefMut};
use std::ptr::{self, NonNull};
use std::slice;

use crate::util::error::{AllocError, AllocFailed, CapacityOverflow, IndexOutOfBounds};
use crate::util::result::ResultExtension;

/// An implementation of an array that is sized at runtime. Similar to a [`Box<[T]>`](Box<T>).
///
/// The size is fixed once the Array is created, which makes it a natural backing store for
/// collections with a hard capacity. Arrays of [`Option<T>`] additionally expose slot-style
/// methods ([`set`](Array::set), [`take`](Array::take), [`inspect`](Array::inspect)) so that a
/// slot can be empty.
///
/// # Time Complexity
/// For this analysis of time complexity, variables are defined as follows:
/// - `n`: The number of items in the Array.
///
/// | Method | Complexity |
/// |-|-|
/// | `size` | `O(1)` |
/// | `inspect` | `O(1)` |
/// | `set` | `O(1)` |
/// | `take` | `O(1)` |
/// | `repeat_default` | `O(n)` |
pub struct Array<T> {
    pub(crate) ptr: NonNull<T>,
    pub(crate) size: usize,
    pub(crate) _phantom: PhantomData<T>,
}

impl<T> Array<T> {
    /// Returns the size of the Array.
    ///
    /// # Examples
    /// ```
    /// # use tablekit::collections::contiguous::Array;
    /// let arr = Array::from([1, 2, 3].into_iter());
    /// assert_eq!(arr.size(), 3);
    /// ```
    pub const fn size(&self) -> usize {
        self.size
    }

    /// Creates a new Array with size 0. No memory is allocated.
    pub fn new() -> Array<T> {
        Array {
            ptr: NonNull::dangling(),
            size: 0,
            _phantom: PhantomData,
        }
    }

    /// Creates a new Array of [`MaybeUninit<T>`] with the provided `size`, reporting allocation
    /// problems as an [`AllocError`] instead of aborting.
    ///
    /// # Errors
    /// - [`AllocError::CapacityOverflow`] if the layout would exceed [`isize::MAX`] bytes.
    /// - [`AllocError::AllocFailed`] if the global allocator returns null.
    pub fn try_new_uninit(size: usize) -> Result<Array<MaybeUninit<T>>, AllocError> {
        let layout = Array::<MaybeUninit<T>>::make_layout(size)?;
        let ptr = Array::<MaybeUninit<T>>::make_ptr(layout)?;

        Ok(Array {
            ptr,
            size,
            _phantom: PhantomData,
        })
    }

    /// Creates a new Array of [`MaybeUninit<T>`] with the provided `size`. All values are
    /// uninitialized.
    ///
    /// # Panics
    /// Panics if memory layout size exceeds [`isize::MAX`] or the allocation fails.
    pub fn new_uninit(size: usize) -> Array<MaybeUninit<T>> {
        Self::try_new_uninit(size).throw()
    }

    /// Decomposes an `Array<T>` into its raw components, a [`NonNull<T>`] pointer to the contained
    /// data and a [`usize`] representing the size.
    ///
    /// After calling this function, the caller is responsible for the allocated data. The parts
    /// can be turned back into an Array with [`Array::from_parts`].
    pub const fn into_parts(self) -> (NonNull<T>, usize) {
        let ret = (self.ptr, self.size);
        mem::forget(self);
        ret
    }

    /// Creates an `Array<T>` from its raw components.
    ///
    /// # Safety
    /// - `ptr` needs to be a currently and correctly allocated pointer within the global allocator,
    ///   using the layout of `size` elements of `T` (or dangling if that layout is zero-sized).
    /// - `ptr` needs to refer to `size` properly initialized values of `T`.
    pub const unsafe fn from_parts(ptr: NonNull<T>, size: usize) -> Array<T> {
        Array {
            ptr,
            size,
            _phantom: PhantomData,
        }
    }

    /// Interprets self as an `Array<MaybeUninit<T>>`, the counterpart to [`Array::assume_init`].
    pub fn forget_init(self) -> Array<MaybeUninit<T>> {
        let (ptr, size) = self.into_parts();
        // SAFETY: MaybeUninit<T> has the same layout as T, so the allocation is unchanged.
        unsafe { Array::from_parts(ptr.cast(), size) }
    }
}

impl<T> Array<T> {
    /// A helper function to create a [`Layout`] for use during allocation, containing `size` number
    /// of elements of type `T`.
    pub(crate) fn make_layout(size: usize) -> Result<Layout, AllocError> {
        Layout::array::<T>(size).map_err(|_| CapacityOverflow.into())
    }

    /// A helper function to create a [`NonNull`] for the provided [`Layout`]. Returns a dangling
    /// pointer for a zero-sized layout.
    pub(crate) fn make_ptr(layout: Layout) -> Result<NonNull<T>, AllocError> {
        if layout.size() == 0 {
            return Ok(NonNull::dangling());
        }

        // SAFETY: Zero-sized layouts have been guarded against.
        let raw_ptr: *mut T = unsafe { alloc::alloc(layout).cast() };

        NonNull::new(raw_ptr).ok_or_else(|| AllocFailed { bytes: layout.size() }.into())
    }
}

impl<T: Default> Array<T> {
    /// Creates a new `Array<T>` by repeating the default value of `T` `count` times.
    ///
    /// # Errors
    /// Returns an [`AllocError`] if the memory can't be allocated.
    pub fn try_repeat_default(count: usize) -> Result<Array<T>, AllocError> {
        let arr = Self::try_new_uninit(count)?;

        for i in 0..count {
            // SAFETY: The layout for count elements was created successfully, so every offset
            // below count is within the allocated range of the Array.
            unsafe {
                arr.ptr.add(i).write(MaybeUninit::new(T::default()))
            }
        }

        // SAFETY: All values are initialized with the default value for T.
        Ok(unsafe { arr.assume_init() })
    }

    /// Creates a new `Array<T>` by repeating the default value of `T` `count` times.
    ///
    /// # Panics
    /// Panics if memory layout size exceeds [`isize::MAX`] or the allocation fails.
    ///
    /// # Examples
    /// ```
    /// # use tablekit::collections::contiguous::Array;
    /// let arr: Array<Option<u8>> = Array::repeat_default(3);
    /// assert_eq!(&*arr, &[None, None, None]);
    /// ```
    pub fn repeat_default(count: usize) -> Array<T> {
        Self::try_repeat_default(count).throw()
    }
}

impl<T> Array<Option<T>> {
    /// Returns true if the slot at `index` holds a value.
    ///
    /// # Panics
    /// Panics if `index` is out of bounds.
    pub fn has_value(&self, index: usize) -> bool {
        self.checked_slot(index).throw().is_some()
    }

    /// Returns a reference to the value in the slot at `index`, or None if it is empty.
    ///
    /// # Panics
    /// Panics if `index` is out of bounds.
    pub fn inspect(&self, index: usize) -> Option<&T> {
        self.checked_slot(index).throw().as_ref()
    }

    /// Places `value` in the slot at `index`, returning the value it displaced.
    ///
    /// # Panics
    /// Panics if `index` is out of bounds.
    pub fn set(&mut self, index: usize, value: T) -> Option<T> {
        self.checked_slot(index).throw();
        self[index].replace(value)
    }

    /// Empties the slot at `index`, returning its value.
    ///
    /// # Panics
    /// Panics if `index` is out of bounds.
    pub fn take(&mut self, index: usize) -> Option<T> {
        self.checked_slot(index).throw();
        self[index].take()
    }

    pub(crate) fn checked_slot(&self, index: usize) -> Result<&Option<T>, IndexOutOfBounds> {
        self.get(index).ok_or(IndexOutOfBounds {
            index,
            len: self.size,
        })
    }
}

impl<T, I> From<I> for Array<T>
where
    I: Iterator<Item = T> + ExactSizeIterator,
{
    /// Creates an Array from an [`ExactSizeIterator`].
    ///
    /// # Panics
    /// Panics if memory layout size exceeds [`isize::MAX`], or if the iterator yields a different
    /// number of items than it reported.
    ///
    /// # Examples
    /// ```
    /// # use tablekit::collections::contiguous::Array;
    /// let arr = Array::from([1, 2, 3].into_iter());
    /// assert_eq!(&*arr, [1, 2, 3]);
    /// ```
    fn from(iter: I) -> Self {
        let size = iter.len();
        let arr = Self::new_uninit(size);
        let mut written = 0;

        for item in iter.take(size) {
            // SAFETY: written < size, so the offset is within the allocated range of the Array.
            unsafe {
                arr.ptr.add(written).write(MaybeUninit::new(item))
            }
            written += 1;
        }

        assert_eq!(written, size, "ExactSizeIterator reported the wrong length!");

        // SAFETY: All values are initialized.
        unsafe { arr.assume_init() }
    }
}

impl<T> Array<MaybeUninit<T>> {
    /// Assume that all values of an `Array<MaybeUninit<T>>` are initialized.
    ///
    /// # Safety
    /// It is up to the caller to guarantee that the Array is properly initialized. Failing to do so
    /// is undefined behavior.
    pub unsafe fn assume_init(self) -> Array<T> {
        let (ptr, size) = self.into_parts();
        // SAFETY: MaybeUninit<T> has the same layout as T and the caller guarantees that every
        // value is initialized.
        unsafe { Array::from_parts(ptr.cast(), size) }
    }
}

impl<T> Default for Array<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T> Drop for Array<T> {
    fn drop(&mut self) {
        // SAFETY: All size values are initialized and the slice covers exactly the allocation.
        unsafe {
            ptr::drop_in_place(ptr::slice_from_raw_parts_mut(self.ptr.as_ptr(), self.size));
        }

        // The layout was valid when the Array was allocated, so it can't fail here.
        let Ok(layout) = Array::<T>::make_layout(self.size) else { return };

        if layout.size() != 0 {
            // SAFETY: ptr is always allocated in the global allocator and layout is the same as
            // when allocated. Zero-sized layouts aren't allocated and are guarded against
            // deallocation.
            unsafe {
                alloc::dealloc(self.ptr.as_ptr().cast(), layout)
            }
        }
    }
}

impl<T> Deref for Array<T> {
    type Target = [T];

    fn deref(&self) -> &Self::Target {
        // SAFETY: The held data uses Layout::array(size) and is therefore valid and properly
        // aligned for size elements. Data is properly initialized and the borrow checker prevents
        // mutation for the lifetime of the slice.
        unsafe {
            slice::from_raw_parts(self.ptr.as_ptr(), self.size)
        }
    }
}

impl<T> DerefMut for Array<T> {
    fn deref_mut(&mut self) -> &mut Self::Target {
        // SAFETY: As for deref, with exclusive access guaranteed by &mut self.
        unsafe {
            slice::from_raw_parts_mut(self.ptr.as_ptr(), self.size)
        }
    }
}

impl<T> AsRef<[T]> for Array<T> {
    fn as_ref(&self) -> &[T] {
        self.deref()
    }
}

impl<T> AsMut<[T]> for Array<T> {
    fn as_mut(&mut self) -> &mut [T] {
        self.deref_mut()
    }
}

impl<T> Borrow<[T]> for Array<T> {
    fn borrow(&self) -> &[T] {
        self.as_ref()
    }
}

impl<T> BorrowMut<[T]> for Array<T> {
    fn borrow_mut(&mut self) -> &mut [T] {
        self.as_mut()
    }
}

// SAFETY: Arrays rely on unique pointers and are therefore safe for Send when T: Send.
unsafe impl<T: Send> Send for Array<T> {}
// SAFETY: Array's safe API obeys all rules of the borrow checker, so no interior mutability occurs.
unsafe impl<T: Sync> Sync for Array<T> {}

impl<T: Clone> Clone for Array<T> {
    fn clone(&self) -> Self {
        Array::from(self.iter().cloned())
    }
}

impl<T: PartialEq> PartialEq for Array<T> {
    fn eq(&self, other: &Self) -> bool {
        **self == **other
    }
}

impl<T: Eq> Eq for Array<T> {}

impl<T: Debug> Debug for Array<T> {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        f.debug_struct("Array")
            .field("contents", &&**self)
            .field("size", &self.size)
            .finish()
    }
}

impl<T: Debug> Display for Array<T> {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        f.debug_list().entries(self.iter()).finish()
    }
}
