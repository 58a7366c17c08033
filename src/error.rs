//! Error types for sparsekron

use crate::dtype::DType;
use thiserror::Error;

/// Result type alias using sparsekron's Error
pub type Result<T> = std::result::Result<T, Error>;

/// Errors that can occur in tensor and sparse operations
#[derive(Error, Debug)]
pub enum Error {
    /// Shape mismatch in an operation
    #[error("Shape mismatch: expected {expected:?}, got {got:?}")]
    ShapeMismatch {
        /// Expected shape
        expected: Vec<usize>,
        /// Actual shape
        got: Vec<usize>,
    },

    /// Shapes cannot be broadcast together
    #[error("Cannot broadcast shapes {lhs:?} and {rhs:?}")]
    BroadcastError {
        /// Left-hand side shape
        lhs: Vec<usize>,
        /// Right-hand side shape
        rhs: Vec<usize>,
    },

    /// Invalid dimension index
    #[error("Invalid dimension {dim} for tensor with {ndim} dimensions")]
    InvalidDimension {
        /// The invalid dimension
        dim: isize,
        /// Number of dimensions
        ndim: usize,
    },

    /// Operand of a matrix operation is not rank-2
    #[error("Expected 2D matrix, got {}D tensor with shape {shape:?}", .shape.len())]
    NotMatrix {
        /// Shape of the offending operand
        shape: Vec<usize>,
    },

    /// Unsupported dtype for an operation
    #[error("Unsupported dtype {dtype:?} for operation '{op}'")]
    UnsupportedDType {
        /// The unsupported dtype
        dtype: DType,
        /// The operation name
        op: &'static str,
    },

    /// DType mismatch between operands
    #[error("DType mismatch: {lhs:?} vs {rhs:?}")]
    DTypeMismatch {
        /// Left-hand side dtype
        lhs: DType,
        /// Right-hand side dtype
        rhs: DType,
    },

    /// DType needs a cargo feature that is not enabled
    #[error("DType {dtype:?} requires the '{feature}' feature")]
    FeatureRequired {
        /// The dtype that was requested
        dtype: DType,
        /// The feature that enables it
        feature: &'static str,
    },

    /// Index out of bounds
    #[error("Index {index} out of bounds for dimension of size {size}")]
    IndexOutOfBounds {
        /// The invalid index
        index: usize,
        /// Size of the dimension
        size: usize,
    },

    /// Invalid argument provided to an operation
    #[error("Invalid argument '{arg}': {reason}")]
    InvalidArgument {
        /// The argument name
        arg: &'static str,
        /// Reason for invalidity
        reason: String,
    },

    /// Tensor is not contiguous when contiguous memory is required
    #[error("Operation requires contiguous tensor")]
    NotContiguous,

    /// Backend-specific error (thread pool construction, etc.)
    #[error("Backend error: {0}")]
    Backend(String),

    /// Generic internal error
    #[error("Internal error: {0}")]
    Internal(String),
}

impl Error {
    /// Create a shape mismatch error
    pub fn shape_mismatch(expected: &[usize], got: &[usize]) -> Self {
        Self::ShapeMismatch {
            expected: expected.to_vec(),
            got: got.to_vec(),
        }
    }

    /// Create a broadcast error
    pub fn broadcast(lhs: &[usize], rhs: &[usize]) -> Self {
        Self::BroadcastError {
            lhs: lhs.to_vec(),
            rhs: rhs.to_vec(),
        }
    }

    /// Create an unsupported dtype error
    pub fn unsupported_dtype(dtype: DType, op: &'static str) -> Self {
        Self::UnsupportedDType { dtype, op }
    }

    /// Create a not-a-matrix error
    pub fn not_matrix(shape: &[usize]) -> Self {
        Self::NotMatrix {
            shape: shape.to_vec(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_not_matrix_message() {
        let err = Error::not_matrix(&[2, 3, 4]);
        assert_eq!(
            err.to_string(),
            "Expected 2D matrix, got 3D tensor with shape [2, 3, 4]"
        );
    }

    #[test]
    fn test_dtype_mismatch_message() {
        let err = Error::DTypeMismatch {
            lhs: DType::F32,
            rhs: DType::F64,
        };
        assert_eq!(err.to_string(), "DType mismatch: F32 vs F64");
    }

    #[test]
    fn test_unsupported_dtype_message() {
        let err = Error::unsupported_dtype(DType::BF16, "kron");
        assert!(matches!(
            err,
            Error::UnsupportedDType {
                dtype: DType::BF16,
                op: "kron"
            }
        ));
        assert_eq!(err.to_string(), "Unsupported dtype BF16 for operation 'kron'");
    }
}
