use alloc::{boxed::Box, vec};
use core::{alloc::Layout, fmt};

use growbuf::GrowError;

use crate::{cursor::Cursor, iter::Iter, List, ListError, ListResult, DEFAULT_CAPACITY};

/// An [`ArrayList`](crate::ArrayList) specialised for `i32`.
///
/// Slots are always initialised (to zero when allocated), so clearing or removing leaves the old values behind the length.
/// Items are taken and compared by value.
pub struct IntegerList {
    storage: Box<[i32]>,
    count: usize,
}

impl IntegerList {
    #[must_use]
    #[inline]
    /// Creates an empty [`IntegerList`] with [`DEFAULT_CAPACITY`] slots.
    pub fn new() -> Self {
        Self {
            storage: vec![0; DEFAULT_CAPACITY].into_boxed_slice(),
            count: 0,
        }
    }

    /// Creates an empty [`IntegerList`] with `capacity` slots.
    ///
    /// # Errors
    /// If `capacity` is zero, this will return [`ListError::InvalidArgument`].
    pub fn with_capacity(capacity: usize) -> ListResult<Self> {
        if capacity == 0 {
            return Err(ListError::InvalidArgument { capacity });
        }

        Ok(Self {
            storage: vec![0; capacity].into_boxed_slice(),
            count: 0,
        })
    }

    #[must_use]
    #[inline]
    /// Gets the number of elements in the list.
    pub const fn len(&self) -> usize {
        self.count
    }

    #[must_use]
    #[inline]
    /// Returns `true` if the list has no elements.
    pub const fn is_empty(&self) -> bool {
        self.count == 0
    }

    #[must_use]
    #[inline]
    /// Gets the number of allocated slots.
    pub fn capacity(&self) -> usize {
        self.storage.len()
    }

    fn try_grow(&mut self) -> Result<(), GrowError> {
        let capacity = growbuf::next_capacity(self.storage.len())?;
        Layout::array::<i32>(capacity)?;

        let mut grown = vec![0; capacity].into_boxed_slice();
        grown[..self.count].copy_from_slice(&self.storage[..self.count]);

        tracing::trace!(from = self.storage.len(), to = capacity, "grew integer list");
        self.storage = grown;
        Ok(())
    }

    /// Appends `item` to the back of the list, doubling the capacity first if the list is full.
    pub fn add(&mut self, item: i32) {
        if self.count == self.storage.len() {
            GrowError::unwrap_result(self.try_grow());
        }

        self.storage[self.count] = item;
        self.count += 1;
    }

    /// Gets a reference to the element at `index`.
    ///
    /// # Errors
    /// If `index` is not less than the length, this will return [`ListError::IndexOutOfRange`].
    pub fn get(&self, index: usize) -> ListResult<&i32> {
        self.storage[..self.count]
            .get(index)
            .ok_or(ListError::out_of_range(index, self.count))
    }

    /// Removes the element at `index`, shifting the elements after it to the left.
    ///
    /// Returns `false` without changing the list if `index` is between the length and the capacity.
    ///
    /// # Errors
    /// If `index` is not less than the capacity, this will return [`ListError::IndexOutOfRange`].
    pub fn remove_at(&mut self, index: usize) -> ListResult<bool> {
        let capacity = self.storage.len();
        if index >= capacity {
            return Err(ListError::out_of_range(index, capacity));
        }
        if index >= self.count {
            return Ok(false);
        }

        self.storage.copy_within(index + 1..self.count, index);
        self.count -= 1;
        Ok(true)
    }

    /// Removes the first occurrence of `item`.
    ///
    /// Returns `false` if `item` is not in the list.
    pub fn remove(&mut self, item: i32) -> bool {
        match self.index_of(item) {
            Some(index) => self.remove_at(index).unwrap_or(false),
            None => false,
        }
    }

    #[must_use]
    /// Gets the position of the first occurrence of `item`.
    pub fn index_of(&self, item: i32) -> Option<usize> {
        self.storage[..self.count]
            .iter()
            .position(|&element| element == item)
    }

    #[must_use]
    #[inline]
    /// Returns `true` if `item` is in the list.
    pub fn contains(&self, item: i32) -> bool {
        self.storage[..self.count].contains(&item)
    }

    #[inline]
    /// Removes every element from the list.
    ///
    /// The capacity is kept and the old values are not overwritten.
    pub fn clear(&mut self) {
        tracing::trace!(dropped = self.count, "cleared integer list");
        self.count = 0;
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
}

impl List for IntegerList {
    type Item = i32;

    #[inline]
    fn count(&self) -> usize {
        self.count
    }

    #[inline]
    fn add(&mut self, item: i32) {
        Self::add(self, item);
    }

    #[inline]
    fn get(&self, index: usize) -> ListResult<&i32> {
        Self::get(self, index)
    }

    #[inline]
    fn remove_at(&mut self, index: usize) -> ListResult<bool> {
        Self::remove_at(self, index)
    }

    #[inline]
    fn clear(&mut self) {
        Self::clear(self);
    }

    #[inline]
    fn index_of(&self, item: &i32) -> Option<usize> {
        Self::index_of(self, *item)
    }

    #[inline]
    fn remove(&mut self, item: &i32) -> bool {
        Self::remove(self, *item)
    }
}

impl Default for IntegerList {
    #[inline]
    fn default() -> Self {
        Self::new()
    }
}

impl Clone for IntegerList {
    fn clone(&self) -> Self {
        Self {
            storage: self.storage.clone(),
            count: self.count,
        }
    }
}

impl PartialEq for IntegerList {
    fn eq(&self, other: &Self) -> bool {
        self.storage[..self.count] == other.storage[..other.count]
    }
}

impl Eq for IntegerList {}

impl fmt::Debug for IntegerList {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_list().entries(&self.storage[..self.count]).finish()
    }
}
