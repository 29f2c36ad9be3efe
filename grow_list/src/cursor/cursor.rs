use core::fmt;

use crate::{iter::Iter, List, ListError, ListResult};

use super::Enumerator;

/// A cursor over a [`List`].
///
/// The cursor borrows the list, so the list cannot change while it is in use.
/// It is created before the first element; [`reset`](Self::reset) returns it there.
pub struct Cursor<'a, L>
where
    L: ?Sized,
{
    list: &'a L,
    // `None` is the position before the first element.
    position: Option<usize>,
}

impl<'a, L> Cursor<'a, L>
where
    L: ?Sized,
{
    #[must_use]
    #[inline]
    pub(crate) const fn new(list: &'a L) -> Self {
        Self {
            list,
            position: None,
        }
    }

    #[must_use]
    #[inline]
    /// Gets the index the cursor is at, or [`None`] if it has not been advanced yet.
    ///
    /// After the cursor runs off the end, this is an index past the last element.
    pub const fn position(&self) -> Option<usize> {
        self.position
    }

    #[inline]
    /// Moves the cursor back to before the first element.
    pub fn reset(&mut self) {
        self.position = None;
    }

    #[must_use]
    #[inline]
    /// Returns a reference to the underlying list.
    pub const fn as_list(&self) -> &'a L {
        self.list
    }
}

impl<'a, L> Cursor<'a, L>
where
    L: List + ?Sized,
{
    /// Moves the cursor to the next element.
    ///
    /// Returns `false` once the cursor has moved past the last element.
    pub fn advance(&mut self) -> bool {
        let next = self
            .position
            .map_or(0, |position| position.saturating_add(1));
        self.position = Some(next);
        next < self.list.count()
    }

    /// Gets a reference to the current element.
    ///
    /// # Errors
    /// If the cursor has not been advanced or has moved past the last element, this will return [`ListError::IndexOutOfRange`].
    /// Before the first advance its `index` is [`None`].
    pub fn current(&self) -> ListResult<&'a L::Item> {
        match self.position {
            Some(index) => self.list.get(index),
            None => Err(ListError::IndexOutOfRange {
                index: None,
                bound: self.list.count(),
            }),
        }
    }
}

impl<L> Enumerator for Cursor<'_, L>
where
    L: List + ?Sized,
{
    type Item = L::Item;

    #[inline]
    fn advance(&mut self) -> bool {
        Cursor::advance(self)
    }

    #[inline]
    fn current(&self) -> ListResult<&L::Item> {
        Cursor::current(self)
    }

    #[inline]
    fn reset(&mut self) {
        Cursor::reset(self);
    }
}

impl<L> Clone for Cursor<'_, L>
where
    L: ?Sized,
{
    #[inline]
    fn clone(&self) -> Self {
        Self {
            list: self.list,
            position: self.position,
        }
    }
}

impl<'a, L> IntoIterator for Cursor<'a, L>
where
    L: List + ?Sized,
{
    type Item = &'a L::Item;
    type IntoIter = Iter<'a, L>;

    /// Continues from the cursor's position as an [`Iterator`].
    fn into_iter(self) -> Self::IntoIter {
        Iter::from_cursor(self)
    }
}

impl<L> fmt::Debug for Cursor<'_, L>
where
    L: ?Sized,
{
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Cursor")
            .field("position", &self.position)
            .finish_non_exhaustive()
    }
}
