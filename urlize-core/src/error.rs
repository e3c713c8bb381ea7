use std::collections::TryReserveError;

use thiserror::Error;

/// Failure of a slug computation.
///
/// Every input is valid, so the only thing that can go wrong is obtaining
/// memory for the output buffer.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum SlugError {
    #[error("out of memory: could not reserve {requested} bytes for slug")]
    AllocationFailure {
        /// Number of bytes the slugifier asked for.
        requested: usize,
        #[source]
        source: TryReserveError,
    },
}

impl SlugError {
    /// True when the host should report its own out-of-memory condition.
    pub fn is_out_of_memory(&self) -> bool {
        matches!(self, SlugError::AllocationFailure { .. })
    }

    /// Size of the reservation that failed.
    pub fn requested(&self) -> usize {
        match self {
            SlugError::AllocationFailure { requested, .. } => *requested,
        }
    }
}
