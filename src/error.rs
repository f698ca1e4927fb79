use thiserror::Error;

use crate::types::ElementKind;

/// Convenience result type for series operations.
pub type SeriesResult<T> = Result<T, SeriesError>;

/// Error type returned by series operations.
///
/// This is a single error enum shared across ingestion, positional reads, and
/// transformation passes.
#[derive(Debug, Error)]
pub enum SeriesError {
    /// Dynamic ingestion received elements of more than one kind.
    #[error("invalid input: {message}")]
    InvalidInput { message: String },

    /// A positional read past the end of the series.
    #[error("index {index} out of range for series of length {len}")]
    IndexOutOfRange { index: usize, len: usize },

    /// A transformation pass was cancelled via its token.
    ///
    /// The first `processed` positions completed (including any commits);
    /// remaining positions hold their pre-call values.
    #[error("lambda pass cancelled after {processed} elements")]
    Cancelled { processed: usize },

    /// A transformation callback committed a value whose kind differs from the
    /// series kind.
    #[error("kind mismatch at index {index}: series holds {expected}, commit was {found}")]
    KindMismatch {
        index: usize,
        expected: ElementKind,
        found: ElementKind,
    },
}
