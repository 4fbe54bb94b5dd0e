//! Error types for vector algebra

use thiserror::Error;

/// Result type for vector operations
pub type Result<T> = std::result::Result<T, MathError>;

/// Errors that can occur in vector algebra
///
/// Failures are surfaced as explicit results; no operation returns a
/// zeroed or unmodified vector to signal a problem.
#[derive(Error, Debug, Clone, Copy, PartialEq, Eq)]
pub enum MathError {
    /// An operation received a vector with a non-finite component
    #[error("invalid argument: vector has a non-finite component")]
    InvalidArgument,

    /// Normalization was attempted on a zero-length vector
    #[error("degenerate vector: cannot normalize a zero-length vector")]
    DegenerateVector,
}
