//! Error types for the laboratory.

use thiserror::Error;

/// Result type for kernel, matrix and harness operations
pub type Result<T> = std::result::Result<T, LabError>;

/// Errors raised by the kernels and the benchmark harness.
///
/// Every variant is a contract violation reported at the call that
/// detected it; nothing is retried.
#[derive(Debug, Error)]
pub enum LabError {
    /// Operands of unequal length
    #[error("length mismatch: left operand has {left} elements, right operand has {right}")]
    LengthMismatch { left: usize, right: usize },

    /// Operation that needs at least one element got none
    #[error("empty operand: {0} needs at least one element")]
    EmptyOperand(&'static str),

    /// Packed kernels only accept whole registers
    #[error("length {len} is not a multiple of the packed register width {width}")]
    PackedLength { len: usize, width: usize },

    /// Nested literal whose inner sequences differ in length
    #[error("jagged literal: line {line} has {actual} elements, expected {expected}")]
    JaggedLiteral {
        line: usize,
        expected: usize,
        actual: usize,
    },

    /// Variant compiled out of this build
    #[error("variant not available in this build: {0}")]
    Unavailable(&'static str),

    /// A variant disagreed with its reference implementation
    #[error("verification failed: {0}")]
    Verification(String),

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}
