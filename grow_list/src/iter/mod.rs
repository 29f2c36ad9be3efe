use core::iter::FusedIterator;

mod into_iter;

pub use into_iter::IntoIter;

use crate::{cursor::Cursor, ArrayList, IntegerList, List};

/// An iterator over references to the elements of a [`List`].
///
/// This is created by [`ArrayList::iter`], [`IntegerList::iter`] or by turning a [`Cursor`] into an iterator.
pub struct Iter<'a, L>
where
    L: ?Sized,
{
    cursor: Cursor<'a, L>,
}

impl<'a, L> Iter<'a, L>
where
    L: ?Sized,
{
    #[must_use]
    #[inline]
    pub(crate) const fn new(list: &'a L) -> Self {
        Self {
            cursor: Cursor::new(list),
        }
    }

    #[must_use]
    #[inline]
    pub(crate) const fn from_cursor(cursor: Cursor<'a, L>) -> Self {
        Self { cursor }
    }
}

impl<'a, L> Iterator for Iter<'a, L>
where
    L: List + ?Sized,
{
    type Item = &'a L::Item;

    fn next(&mut self) -> Option<Self::Item> {
        if self.cursor.advance() {
            self.cursor.current().ok()
        } else {
            None
        }
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        let visited = self
            .cursor
            .position()
            .map_or(0, |position| position.saturating_add(1));
        let remaining = self.cursor.as_list().count().saturating_sub(visited);
        (remaining, Some(remaining))
    }
}

impl<L> ExactSizeIterator for Iter<'_, L> where L: List + ?Sized {}

impl<L> FusedIterator for Iter<'_, L> where L: List + ?Sized {}

impl<L> Clone for Iter<'_, L>
where
    L: ?Sized,
{
    fn clone(&self) -> Self {
        Self {
            cursor: self.cursor.clone(),
        }
    }
}

impl<'a, T> IntoIterator for &'a ArrayList<T> {
    type Item = &'a T;
    type IntoIter = Iter<'a, ArrayList<T>>;

    fn into_iter(self) -> Self::IntoIter {
        Iter::new(self)
    }
}

impl<'a> IntoIterator for &'a IntegerList {
    type Item = &'a i32;
    type IntoIter = Iter<'a, IntegerList>;

    fn into_iter(self) -> Self::IntoIter {
        Iter::new(self)
    }
}

impl<T> Extend<T> for ArrayList<T> {
    fn extend<I: IntoIterator<Item = T>>(&mut self, iter: I) {
        for item in iter {
            self.add(item);
        }
    }
}

impl<'a, T> Extend<&'a T> for ArrayList<T>
where
    T: Copy,
{
    fn extend<I: IntoIterator<Item = &'a T>>(&mut self, iter: I) {
        for item in iter.into_iter().copied() {
            self.add(item);
        }
    }
}

impl<T> FromIterator<T> for ArrayList<T> {
    fn from_iter<I: IntoIterator<Item = T>>(iter: I) -> Self {
        let mut list = Self::new();
        list.extend(iter);
        list
    }
}

impl Extend<i32> for IntegerList {
    fn extend<I: IntoIterator<Item = i32>>(&mut self, iter: I) {
        for item in iter {
            self.add(item);
        }
    }
}

impl<'a> Extend<&'a i32> for IntegerList {
    fn extend<I: IntoIterator<Item = &'a i32>>(&mut self, iter: I) {
        self.extend(iter.into_iter().copied());
    }
}

impl FromIterator<i32> for IntegerList {
    fn from_iter<I: IntoIterator<Item = i32>>(iter: I) -> Self {
        let mut list = Self::new();
        list.extend(iter);
        list
    }
}
