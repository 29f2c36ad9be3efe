#![warn(
    clippy::all,
    clippy::pedantic,
    clippy::nursery,
    clippy::perf,
    clippy::cargo,
    clippy::alloc_instead_of_core,
    clippy::std_instead_of_alloc,
    clippy::std_instead_of_core,
    clippy::get_unwrap,
    clippy::panic_in_result_fn,
    clippy::todo,
    clippy::undocumented_unsafe_blocks,
    unsafe_op_in_unsafe_fn,
    clippy::multiple_unsafe_ops_per_block
)]
#![cfg_attr(not(test), warn(clippy::unwrap_used, clippy::expect_used))]
#![cfg_attr(not(feature = "std"), no_std)]
#![doc = include_str!("../README.md")]

extern crate alloc;

use core::{fmt, mem::ManuallyDrop, ptr};

pub mod cursor;
mod errors;
mod integer;
pub mod iter;
mod list;
#[cfg(test)]
mod proptests;

pub use cursor::{Cursor, Enumerator};
pub use errors::{ListError, ListResult};
pub use growbuf::{GrowError, RawBuf};
pub use integer::IntegerList;
pub use list::List;

use iter::{IntoIter, Iter};

/// The capacity of a list created without one.
pub const DEFAULT_CAPACITY: usize = 4;

/// An ordered, index-addressable list backed by a doubling buffer.
///
/// Elements live contiguously in the first [`len`](Self::len) slots of the buffer.
/// When an [`add`](Self::add) finds the buffer full, the capacity doubles first; it never shrinks.
pub struct ArrayList<T> {
    buf: RawBuf<T>,
    len: usize,
}

impl<T> ArrayList<T> {
    #[must_use]
    #[inline]
    /// Creates an empty [`ArrayList`] with [`DEFAULT_CAPACITY`] slots.
    pub fn new() -> Self {
        Self {
            buf: RawBuf::with_capacity(DEFAULT_CAPACITY),
            len: 0,
        }
    }

    /// Creates an empty [`ArrayList`] with `capacity` slots.
    ///
    /// # Errors
    /// If `capacity` is zero, this will return [`ListError::InvalidArgument`].
    pub fn with_capacity(capacity: usize) -> ListResult<Self> {
        if capacity == 0 {
            return Err(ListError::InvalidArgument { capacity });
        }

        Ok(Self {
            buf: RawBuf::with_capacity(capacity),
            len: 0,
        })
    }

    #[must_use]
    #[inline]
    /// Gets the number of elements in the list.
    pub const fn len(&self) -> usize {
        self.len
    }

    #[must_use]
    #[inline]
    /// Returns `true` if the list has no elements.
    pub const fn is_empty(&self) -> bool {
        self.len == 0
    }

    #[must_use]
    #[inline]
    /// Gets the number of slots allocated for elements.
    pub fn capacity(&self) -> usize {
        self.buf.capacity()
    }

    /// Appends `item` to the back of the list, doubling the capacity first if the list is full.
    pub fn add(&mut self, item: T) {
        if self.len == self.buf.capacity() {
            // SAFETY:
            // The first `len` slots are initialised and `len` equals the capacity.
            unsafe { self.buf.double(self.len) };
        }

        self.buf.write(self.len, item);
        self.len += 1;
    }

    /// Gets a reference to the element at `index`.
    ///
    /// # Errors
    /// If `index` is not less than the length, this will return [`ListError::IndexOutOfRange`].
    pub fn get(&self, index: usize) -> ListResult<&T> {
        if index >= self.len {
            return Err(ListError::out_of_range(index, self.len));
        }

        // SAFETY:
        // `index < len`, so the slot is initialised.
        Ok(unsafe { self.buf.get_unchecked(index) })
    }

    /// Removes the element at `index` and returns it, shifting the elements after it to the left.
    ///
    /// An index between the length and the capacity refers to an unoccupied slot and returns [`None`].
    ///
    /// # Errors
    /// If `index` is not less than the capacity, this will return [`ListError::IndexOutOfRange`].
    pub fn take_at(&mut self, index: usize) -> ListResult<Option<T>> {
        let capacity = self.buf.capacity();
        if index >= capacity {
            return Err(ListError::out_of_range(index, capacity));
        }
        if index >= self.len {
            return Ok(None);
        }

        // SAFETY:
        // `index < len`, so the slot is initialised; it is overwritten by the shift below.
        let item = unsafe { self.buf.read(index) };
        // SAFETY:
        // - `index < len <= capacity`
        // - the value at `index` was moved out above
        unsafe { self.buf.shift_left(index, self.len) };
        self.len -= 1;

        Ok(Some(item))
    }

    /// Removes the element at `index`, shifting the elements after it to the left.
    ///
    /// Returns `false` without changing the list if `index` is between the length and the capacity.
    ///
    /// # Errors
    /// If `index` is not less than the capacity, this will return [`ListError::IndexOutOfRange`].
    pub fn remove_at(&mut self, index: usize) -> ListResult<bool> {
        self.take_at(index).map(|item| item.is_some())
    }

    /// Removes the first element equal to `item`.
    ///
    /// Returns `false` if there is no such element.
    pub fn remove(&mut self, item: &T) -> bool
    where
        T: PartialEq,
    {
        match self.index_of(item) {
            // An index found by the scan is below the length, so this cannot fail.
            Some(index) => self.remove_at(index).unwrap_or(false),
            None => false,
        }
    }

    #[must_use]
    /// Gets the position of the first element equal to `item`.
    pub fn index_of(&self, item: &T) -> Option<usize>
    where
        T: PartialEq,
    {
        self.iter().position(|element| element == item)
    }

    #[must_use]
    #[inline]
    /// Returns `true` if an element equal to `item` is in the list.
    pub fn contains(&self, item: &T) -> bool
    where
        T: PartialEq,
    {
        self.index_of(item).is_some()
    }

    /// Removes every element from the list.
    ///
    /// The capacity is kept.
    pub fn clear(&mut self) {
        let len = self.len;
        // The length is reset first so a panicking destructor cannot cause a double drop.
        self.len = 0;
        tracing::trace!(dropped = len, capacity = self.buf.capacity(), "cleared list");

        // SAFETY:
        // The first `len` slots were initialised and are no longer counted.
        unsafe { self.buf.drop_range(0..len) };
    }

    #[must_use]
    #[inline]
    /// Creates a cursor positioned before the first element.
    pub const fn cursor(&self) -> Cursor<'_, Self> {
        Cursor::new(self)
    }

    #[must_use]
    #[inline]
    /// Returns an iterator over references to the elements.
    pub const fn iter(&self) -> Iter<'_, Self> {
        Iter::new(self)
    }

    #[must_use]
    /// Decomposes the [`ArrayList`] into its buffer and length.
    ///
    /// The first `len` slots of the buffer are initialised and now have to be dropped by the caller.
    pub fn into_raw_parts(self) -> (RawBuf<T>, usize) {
        let me = ManuallyDrop::new(self);
        // SAFETY:
        // `me` is never dropped, so the buffer is moved out exactly once.
        let buf = unsafe { ptr::read(&me.buf) };
        (buf, me.len)
    }

    #[must_use]
    #[inline]
    /// Creates an [`ArrayList`] from a buffer and a length.
    ///
    /// # Safety
    /// - `len` must not exceed the capacity of `buf`
    /// - the first `len` slots of `buf` must be initialised
    /// - `buf` must have at least one slot
    pub unsafe fn from_raw_parts(buf: RawBuf<T>, len: usize) -> Self {
        debug_assert!(len <= buf.capacity());
        debug_assert!(buf.capacity() > 0);
        Self { buf, len }
    }

    #[must_use]
    #[inline]
    /// Converts the list to an iterator that yields the elements by value.
    pub fn into_iter(self) -> IntoIter<T> {
        IntoIter::new(self)
    }
}

impl<T> Default for ArrayList<T> {
    #[inline]
    fn default() -> Self {
        Self::new()
    }
}

impl<T> Drop for ArrayList<T> {
    fn drop(&mut self) {
        // SAFETY:
        // The first `len` slots are initialised and the list is never used again.
        unsafe { self.buf.drop_range(0..self.len) };
    }
}

impl<T> Clone for ArrayList<T>
where
    T: Clone,
{
    fn clone(&self) -> Self {
        // Built through `extend` so a panicking `clone` drops the copies made so far.
        let mut list = Self {
            buf: RawBuf::with_capacity(self.capacity()),
            len: 0,
        };
        list.extend(self.iter().cloned());
        list
    }
}

impl<T> PartialEq for ArrayList<T>
where
    T: PartialEq,
{
    fn eq(&self, other: &Self) -> bool {
        self.len == other.len && self.iter().eq(other.iter())
    }
}

impl<T> Eq for ArrayList<T> where T: Eq {}

impl<T> fmt::Debug for ArrayList<T>
where
    T: fmt::Debug,
{
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_list().entries(self.iter()).finish()
    }
}
