//! Linear algebra operations trait.

use crate::error::Result;
use crate::tensor::Tensor;

/// Matrix operations on rank-2 tensors
pub trait LinalgOps {
    /// Kronecker product: A ⊗ B
    ///
    /// For A of shape [m1, n1] and B of shape [m2, n2], the result has shape
    /// [m1·m2, n1·n2] with
    ///
    /// ```text
    /// out[i·m2 + k, j·n2 + l] = A[i, j] · B[k, l]
    /// ```
    ///
    /// Each entry of A scales a full copy of B, so the result is a grid of
    /// m1 × n1 blocks.
    ///
    /// # Arguments
    ///
    /// * `a` - First matrix [m1, n1]
    /// * `b` - Second matrix [m2, n2]
    ///
    /// # Returns
    ///
    /// Kronecker product [m1·m2, n1·n2]. Zero-sized dimensions give an empty
    /// result of the matching shape. Strided inputs (such as transposed
    /// views) are accepted. Integer products wrap around on overflow.
    ///
    /// # Errors
    ///
    /// - `NotMatrix` if either input is not 2D
    /// - `DTypeMismatch` if dtypes don't match
    /// - `FeatureRequired` for F16/BF16 without the `f16` feature
    ///
    /// # Example
    ///
    /// ```
    /// # use sparsekron::prelude::*;
    /// # let client = CpuClient::new();
    /// let a = Tensor::from_slice(&[1.0, 2.0, 3.0, 4.0], &[2, 2]);
    /// let b = Tensor::from_slice(&[0.0, 1.0, 1.0, 0.0], &[2, 2]);
    /// let c = client.kron(&a, &b)?;
    /// assert_eq!(c.shape(), &[4, 4]);
    /// // [[0, 1, 0, 2],
    /// //  [1, 0, 2, 0],
    /// //  [0, 3, 0, 4],
    /// //  [3, 0, 4, 0]]
    /// # Ok::<(), sparsekron::error::Error>(())
    /// ```
    fn kron(&self, a: &Tensor, b: &Tensor) -> Result<Tensor>;
}
