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

use alloc::boxed::Box;
use core::{alloc::Layout, cmp, mem::MaybeUninit, ops::Range, ptr};

mod errors;
mod fmt;

pub use errors::GrowError;

/// A fixed number of slots that may or may not hold a `T`.
///
/// The buffer does not track which slots are initialised.
/// The owner keeps that count (usually as a prefix length) and is responsible for dropping the values; dropping a [`RawBuf`] only releases the allocation.
pub struct RawBuf<T> {
    slots: Box<[MaybeUninit<T>]>,
}

impl<T> RawBuf<T> {
    #[must_use]
    #[inline]
    /// Creates a buffer with no slots.
    ///
    /// This does not allocate.
    pub fn empty() -> Self {
        Self {
            slots: Box::new_uninit_slice(0),
        }
    }

    /// Attempts to create a buffer with `capacity` uninitialised slots.
    ///
    /// # Errors
    /// If the layout for `capacity` slots cannot be calculated, this will return a [`GrowError`].
    pub fn try_with_capacity(capacity: usize) -> Result<Self, GrowError> {
        Layout::array::<T>(capacity)?;
        Ok(Self {
            slots: Box::new_uninit_slice(capacity),
        })
    }

    #[must_use]
    #[inline]
    /// Creates a buffer with `capacity` uninitialised slots.
    pub fn with_capacity(capacity: usize) -> Self {
        GrowError::unwrap_result(Self::try_with_capacity(capacity))
    }

    #[must_use]
    #[inline]
    /// Gets the number of slots in the buffer.
    pub fn capacity(&self) -> usize {
        self.slots.len()
    }

    /// Moves the first `len` slots into a new buffer of `new_capacity` slots.
    ///
    /// The old allocation is released. No values are dropped or duplicated.
    ///
    /// # Safety
    /// `len` must not exceed either the current capacity or `new_capacity`.
    ///
    /// # Errors
    /// If the layout for `new_capacity` slots cannot be calculated, this will return a [`GrowError`] and the buffer is unchanged.
    pub unsafe fn try_grow_to(&mut self, len: usize, new_capacity: usize) -> Result<(), GrowError> {
        debug_assert!(len <= self.capacity());
        debug_assert!(len <= new_capacity);

        let mut grown = Self::try_with_capacity(new_capacity)?;
        // SAFETY:
        // - both buffers have at least `len` slots (safety condition)
        // - they are separate allocations, so they cannot overlap
        unsafe { ptr::copy_nonoverlapping(self.slots.as_ptr(), grown.slots.as_mut_ptr(), len) };

        tracing::trace!(
            from = self.capacity(),
            to = new_capacity,
            moved = len,
            "grew buffer"
        );
        self.slots = grown.slots;
        Ok(())
    }

    /// Doubles the capacity, keeping the first `len` slots.
    ///
    /// A buffer with no slots grows to one slot.
    ///
    /// # Safety
    /// `len` must not exceed the current capacity.
    ///
    /// # Errors
    /// If the doubled capacity overflows or cannot be laid out, this will return a [`GrowError`] and the buffer is unchanged.
    pub unsafe fn try_double(&mut self, len: usize) -> Result<(), GrowError> {
        let new_capacity = next_capacity(self.capacity())?;
        // SAFETY:
        // `len <= capacity < new_capacity`.
        unsafe { self.try_grow_to(len, new_capacity) }
    }

    /// Doubles the capacity, keeping the first `len` slots.
    ///
    /// # Safety
    /// `len` must not exceed the current capacity.
    pub unsafe fn double(&mut self, len: usize) {
        // SAFETY:
        // Same safety conditions.
        GrowError::unwrap_result(unsafe { self.try_double(len) });
    }

    #[inline]
    /// Writes `value` into the slot at `index`.
    ///
    /// If the slot was initialised, the old value is leaked rather than dropped.
    ///
    /// # Panics
    /// This panics if `index` is not less than the capacity.
    pub fn write(&mut self, index: usize, value: T) {
        self.slots[index].write(value);
    }

    #[must_use]
    #[inline]
    /// Gets a reference to the value in the slot at `index`.
    ///
    /// # Safety
    /// `index` must be less than the capacity and the slot must be initialised.
    pub unsafe fn get_unchecked(&self, index: usize) -> &T {
        debug_assert!(index < self.capacity());
        // SAFETY:
        // The index is in bounds (safety condition).
        let slot = unsafe { self.slots.get_unchecked(index) };
        // SAFETY:
        // The slot is initialised (safety condition).
        unsafe { slot.assume_init_ref() }
    }

    #[must_use]
    #[inline]
    /// Moves the value out of the slot at `index`.
    ///
    /// The slot is left logically uninitialised.
    ///
    /// # Safety
    /// `index` must be less than the capacity and the slot must be initialised.
    /// The slot must not be read again until it is rewritten.
    pub unsafe fn read(&self, index: usize) -> T {
        debug_assert!(index < self.capacity());
        // SAFETY:
        // The index is in bounds (safety condition).
        let slot = unsafe { self.slots.get_unchecked(index) };
        // SAFETY:
        // The slot is initialised and treated as uninitialised afterwards (safety condition).
        unsafe { slot.assume_init_read() }
    }

    /// Shifts the slots `index + 1..len` one slot to the left, over the slot at `index`.
    ///
    /// Afterwards the slot at `len - 1` is logically uninitialised.
    ///
    /// # Safety
    /// - `index < len <= capacity`
    /// - the slot at `index` must not hold a value that still needs dropping
    pub unsafe fn shift_left(&mut self, index: usize, len: usize) {
        debug_assert!(index < len);
        debug_assert!(len <= self.capacity());

        let dst = self.slots[index..len].as_mut_ptr();
        // SAFETY:
        // `index + 1 <= len`, so the source is inside the slice (or one past its end when it is empty).
        let src = unsafe { dst.add(1) };
        // SAFETY:
        // - both ranges stay inside `index..len`
        // - `ptr::copy` allows the ranges to overlap
        unsafe { ptr::copy(src, dst, len - index - 1) };
    }

    /// Drops the values in the slots in `range`.
    ///
    /// # Safety
    /// `range` must be inside the capacity and every slot in it must be initialised.
    /// The slots must not be read again until they are rewritten.
    pub unsafe fn drop_range(&mut self, range: Range<usize>) {
        debug_assert!(range.start <= range.end);
        debug_assert!(range.end <= self.capacity());

        // SAFETY:
        // The range is inside the allocation (safety condition).
        let start = unsafe { self.slots.as_mut_ptr().add(range.start) }.cast::<T>();
        let values = ptr::slice_from_raw_parts_mut(start, range.end - range.start);
        // SAFETY:
        // Every slot in the range is initialised (safety condition).
        unsafe { ptr::drop_in_place(values) };
    }
}

impl<T> Default for RawBuf<T> {
    #[inline]
    fn default() -> Self {
        Self::empty()
    }
}

/// Calculates the capacity a buffer of `capacity` slots grows to.
///
/// This is double the capacity, or one slot for an empty buffer.
///
/// # Errors
/// If doubling overflows, this will return [`GrowError::CapacityOverflow`].
pub fn next_capacity(capacity: usize) -> Result<usize, GrowError> {
    capacity
        .checked_mul(2)
        .map(|doubled| cmp::max(doubled, 1))
        .ok_or(GrowError::CapacityOverflow { capacity })
}
