use core::fmt;

use thiserror::Error;

/// Result of a fallible list operation.
pub type ListResult<T> = Result<T, ListError>;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
/// The error type returned by list and cursor operations.
///
/// None of these leave the list in a different state; they are raised before anything is changed.
pub enum ListError {
    /// A list was constructed with a capacity of zero.
    #[error("initial capacity has to be greater than zero, got {capacity}")]
    InvalidArgument {
        /// The rejected capacity.
        capacity: usize,
    },
    /// A position with no element behind it was accessed.
    ///
    /// For element access and cursors the bound is the length.
    /// For [`remove_at`](crate::ArrayList::remove_at) it is the capacity.
    #[error("{} is out of range (bound {bound})", Position(.index))]
    IndexOutOfRange {
        /// The requested index, or [`None`] for a cursor that has not been advanced yet.
        index: Option<usize>,
        /// The exclusive upper bound that was checked.
        bound: usize,
    },
}

impl ListError {
    #[must_use]
    #[inline]
    pub(crate) const fn out_of_range(index: usize, bound: usize) -> Self {
        Self::IndexOutOfRange {
            index: Some(index),
            bound,
        }
    }
}

struct Position<'a>(&'a Option<usize>);

impl fmt::Display for Position<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match *self.0 {
            Some(index) => write!(f, "index {index}"),
            None => f.write_str("the position before the first element"),
        }
    }
}

#[cfg(test)]
mod test {
    use pretty_assertions::assert_eq;

    use super::ListError;

    #[test]
    fn messages() {
        assert_eq!(
            ListError::InvalidArgument { capacity: 0 }.to_string(),
            "initial capacity has to be greater than zero, got 0"
        );
        assert_eq!(
            ListError::out_of_range(7, 3).to_string(),
            "index 7 is out of range (bound 3)"
        );
        assert_eq!(
            ListError::IndexOutOfRange {
                index: None,
                bound: 2
            }
            .to_string(),
            "the position before the first element is out of range (bound 2)"
        );
    }

    #[test]
    fn out_of_range_wraps_index() {
        assert_eq!(
            ListError::out_of_range(0, 0),
            ListError::IndexOutOfRange {
                index: Some(0),
                bound: 0
            }
        );
    }
}
