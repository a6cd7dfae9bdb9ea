// src/error.rs
//! Error type shared by the vector primitives and the orthonormalization loop.

use thiserror::Error;

/// Failures surfaced by vector arithmetic and Gram-Schmidt.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum GramSchmidtError {
    /// Two operands of a binary vector operation have different lengths.
    #[error("dimension mismatch: expected {expected}, got {actual}")]
    DimensionMismatch { expected: usize, actual: usize },

    /// A vector in an input list does not share the first vector's length.
    #[error("vector {index} has dimension {actual}, expected {expected}")]
    InconsistentDimension {
        index: usize,
        expected: usize,
        actual: usize,
    },

    /// Projection onto the zero vector (v·v = 0).
    #[error("cannot project onto a zero vector")]
    ZeroAxis,

    /// The orthogonalized vector at `index` vanished: the inputs are linearly dependent.
    #[error(
        "degenerate vector at index {index} (residual magnitude {magnitude:e}): \
         input vectors are linearly dependent"
    )]
    DegenerateVector { index: usize, magnitude: f64 },

    /// The residual magnitude at `index` overflowed or is NaN.
    #[error("vector {index} has a non-finite residual magnitude; components overflow or are not finite")]
    NonFiniteResidual { index: usize },
}

/// Result alias used throughout the crate.
pub type Result<T> = std::result::Result<T, GramSchmidtError>;
