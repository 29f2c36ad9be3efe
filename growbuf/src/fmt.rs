use core::fmt::{Debug, Formatter, Result};

use crate::RawBuf;

impl<T> Debug for RawBuf<T> {
    fn fmt(&self, f: &mut Formatter<'_>) -> Result {
        f.debug_struct("RawBuf")
            .field("capacity", &self.capacity())
            .finish_non_exhaustive()
    }
}
