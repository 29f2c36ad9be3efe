//! Cursors over the lists.
//!
//! A [`Cursor`] starts before the first element. Each [`advance`](Enumerator::advance) moves it one element forward and reports whether it landed on an element.

#[allow(clippy::module_inception)]
mod cursor;

pub use cursor::Cursor;

use crate::ListResult;

/// A forward cursor that can be restarted.
pub trait Enumerator {
    /// The type of the elements the cursor reads.
    type Item;

    /// Moves the cursor to the next position.
    ///
    /// Returns `true` if the new position holds an element.
    fn advance(&mut self) -> bool;

    /// Gets a reference to the element at the cursor.
    ///
    /// # Errors
    /// If the cursor is not on an element, this will return [`ListError::IndexOutOfRange`](crate::ListError::IndexOutOfRange).
    fn current(&self) -> ListResult<&Self::Item>;

    /// Moves the cursor back to before the first element.
    fn reset(&mut self);
}
