//! Errors reported by [`ObservableList`](crate::ObservableList).

use thiserror::Error;

/// An index-based operation was given an index outside the list.
///
/// The list is left unmodified and no listener is notified.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum ListError {
    #[error("index {index} out of range for list of length {len}")]
    IndexOutOfRange { index: usize, len: usize },
}

impl ListError {
    /// Check `index < len`.
    #[inline]
    pub(crate) fn check(index: usize, len: usize) -> Result<(), ListError> {
        if index < len {
            return Ok(());
        }
        tracing::debug!(index, len, "index out of range");
        return Err(ListError::IndexOutOfRange { index, len });
    }
}
