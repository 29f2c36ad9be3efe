use core::{fmt, iter::FusedIterator};

use growbuf::RawBuf;

use crate::ArrayList;

/// An iterator over owned elements of an [`ArrayList`].
///
/// This is created by [`ArrayList::into_iter`].
pub struct IntoIter<T> {
    buf: RawBuf<T>,
    // The slots in `front..back` are initialised and not yet yielded.
    front: usize,
    back: usize,
}

impl<T> IntoIter<T> {
    #[must_use]
    #[inline]
    pub(crate) fn new(list: ArrayList<T>) -> Self {
        let (buf, len) = list.into_raw_parts();
        Self {
            buf,
            front: 0,
            back: len,
        }
    }

    #[must_use]
    /// Collects the elements that have not been yielded into a new [`ArrayList`].
    pub fn take_remainder(mut self) -> ArrayList<T> {
        let mut list = ArrayList::new();
        list.extend(self.by_ref());
        list
    }
}

impl<T> Default for IntoIter<T> {
    #[inline]
    fn default() -> Self {
        Self {
            buf: RawBuf::empty(),
            front: 0,
            back: 0,
        }
    }
}

impl<T> Iterator for IntoIter<T> {
    type Item = T;

    fn next(&mut self) -> Option<Self::Item> {
        if self.front == self.back {
            return None;
        }

        // SAFETY:
        // `front < back`, so the slot is initialised and is not counted again after this.
        let item = unsafe { self.buf.read(self.front) };
        self.front += 1;
        Some(item)
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        let remaining = self.back - self.front;
        (remaining, Some(remaining))
    }
}

impl<T> DoubleEndedIterator for IntoIter<T> {
    fn next_back(&mut self) -> Option<Self::Item> {
        if self.front == self.back {
            return None;
        }

        self.back -= 1;
        // SAFETY:
        // `front <= back` after the decrement, so the slot is initialised and is not counted again.
        Some(unsafe { self.buf.read(self.back) })
    }
}

impl<T> ExactSizeIterator for IntoIter<T> {}

impl<T> FusedIterator for IntoIter<T> {}

impl<T> Drop for IntoIter<T> {
    fn drop(&mut self) {
        // SAFETY:
        // The slots in `front..back` are initialised and never read again.
        unsafe { self.buf.drop_range(self.front..self.back) };
    }
}

impl<T> IntoIterator for ArrayList<T> {
    type Item = T;
    type IntoIter = IntoIter<T>;

    fn into_iter(self) -> Self::IntoIter {
        IntoIter::new(self)
    }
}

impl<T> fmt::Debug for IntoIter<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("IntoIter")
            .field("remaining", &(self.back - self.front))
            .finish_non_exhaustive()
    }
}
