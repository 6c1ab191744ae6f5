//! Precondition errors reported before any transformation work begins.

use thiserror::Error;

/// Errors raised by key expansion and the block transforms.
///
/// All variants are local precondition violations; once inputs pass
/// validation the transforms are total and cannot fail.
#[derive(Debug, Error, Clone, Copy, PartialEq, Eq)]
pub enum Error {
    /// The key byte count is not one of 16, 24, or 32.
    #[error("invalid key length: got {got} bytes, expected 16, 24, or 32")]
    InvalidKeyLength {
        /// Number of key bytes supplied.
        got: usize,
    },

    /// The block input is not exactly 16 bytes.
    #[error("invalid block length: got {got} bytes, expected 16")]
    InvalidBlockLength {
        /// Number of block bytes supplied.
        got: usize,
    },

    /// The caller-declared round count does not match the schedule.
    #[error("schedule mismatch: declared {declared} rounds but the schedule was expanded for {expanded}")]
    ScheduleMismatch {
        /// Round count declared by the caller.
        declared: usize,
        /// Round count the schedule was expanded for.
        expanded: usize,
    },
}

/// Result alias for cipher operations.
pub type Result<T> = core::result::Result<T, Error>;
