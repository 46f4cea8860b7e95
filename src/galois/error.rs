//! Error types for Galois field construction and arithmetic

use thiserror::Error;

/// Errors raised while constructing or operating on a Galois field.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum FieldError {
    /// The requested field order is not a supported power of two
    #[error("only field sizes 2, 4, 8, 16, 32, 64, 128, and 256 are permitted")]
    FieldSize,

    /// The reducing polynomial does not have degree log2(n)
    #[error("polynomial is out of range")]
    PolyOutOfRange,

    /// The reducing polynomial has a nontrivial divisor
    #[error("polynomial is reducible")]
    ReduciblePoly,

    /// The chosen element does not generate the multiplicative group
    #[error("value is not a generator")]
    NotGenerator,

    /// Division (or inversion) by the zero element
    #[error("division by zero")]
    DivByZero,

    /// Logarithm of the zero element
    #[error("logarithm of zero")]
    LogZero,
}
