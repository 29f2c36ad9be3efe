use core::alloc::LayoutError;

use thiserror::Error;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
/// The error type returned when a buffer cannot be sized.
///
/// This can either be from an arithmetic overflow when calculating the new capacity or from the slot layout exceeding `isize::MAX` bytes.
pub enum GrowError {
    /// Doubling the capacity overflowed `usize`.
    #[error("capacity overflow when growing a buffer of {capacity} slots")]
    CapacityOverflow {
        /// The capacity that could not be doubled.
        capacity: usize,
    },
    /// The layout for the requested number of slots could not be calculated.
    #[error("invalid buffer layout: {0}")]
    Layout(#[from] LayoutError),
}

impl GrowError {
    #[cold]
    #[track_caller]
    /// Handles the error by panicking, with or without `std`.
    ///
    /// No allocation was attempted, so there is no layout to pass to `handle_alloc_error`.
    pub fn handle(self) -> ! {
        panic!("{self}")
    }

    #[inline]
    #[track_caller]
    /// Unwraps the result using [`Self::handle`] when it is an error.
    pub fn unwrap_result<T>(result: Result<T, Self>) -> T {
        match result {
            Ok(value) => value,
            Err(err) => err.handle(),
        }
    }

    #[must_use]
    #[inline]
    /// Returns `true` if the error came from the capacity arithmetic.
    pub const fn is_overflow(&self) -> bool {
        matches!(self, Self::CapacityOverflow { .. })
    }
}

#[cfg(test)]
mod test {
    use core::alloc::Layout;

    use pretty_assertions::assert_eq;

    use super::GrowError;

    #[test]
    fn layout_error_converts() {
        let source = Layout::array::<u64>(usize::MAX).unwrap_err();
        let error = GrowError::from(source.clone());

        assert_eq!(error, GrowError::Layout(source));
        assert!(!error.is_overflow());
    }

    #[test]
    fn overflow_message() {
        let error = GrowError::CapacityOverflow { capacity: 12 };
        assert!(error.is_overflow());
        assert_eq!(
            error.to_string(),
            "capacity overflow when growing a buffer of 12 slots"
        );
    }

    #[test]
    #[should_panic(expected = "capacity overflow")]
    fn unwrap_result_panics() {
        let result: Result<(), GrowError> = Err(GrowError::CapacityOverflow { capacity: 1 });
        GrowError::unwrap_result(result);
    }

    #[test]
    #[should_panic(expected = "invalid buffer layout")]
    fn handle_panics_on_layout_error() {
        let source = Layout::array::<u64>(usize::MAX).unwrap_err();
        GrowError::from(source).handle();
    }
}
