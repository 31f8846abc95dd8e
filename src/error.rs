use crate::tuner::Algorithm;
use thiserror::Error;

/// Configuration errors reported by [`SortBuilder`](crate::SortBuilder).
///
/// Every variant is produced before the input slice is touched, so an `Err`
/// always leaves the data in its original order.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum SortError {
    #[error("{algorithm:?} cannot be used here: {reason}")]
    CapabilityMismatch {
        algorithm: Algorithm,
        reason: &'static str,
    },

    #[error("{algorithm:?} sorts at most {max} elements, got {len}")]
    UnsupportedLength {
        algorithm: Algorithm,
        len: usize,
        max: usize,
    },

    #[error("invalid tuning parameter `{name}`: {reason}")]
    InvalidTuning { name: &'static str, reason: String },
}
