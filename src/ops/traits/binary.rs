//! Binary operations trait.
//!
//! This trait defines element-wise binary operations on tensors.

use crate::error::Result;
use crate::tensor::Tensor;

/// Element-wise binary operations on tensors.
///
/// All binary operations support broadcasting.
///
/// # Broadcasting
///
/// Binary operations follow NumPy-style broadcasting rules:
/// - Dimensions are compared element-wise, from the trailing dimensions backward
/// - Two dimensions are compatible when they are equal, or when one of them is 1
/// - Dimensions of size 1 are stretched to match the other dimension
/// - The output has shape equal to the pairwise maximum of the input shapes
///
/// # Example
///
/// ```
/// use sparsekron::prelude::*;
///
/// let client = CpuClient::new();
///
/// let a = Tensor::from_slice(&[1.0f32, 2.0, 3.0, 4.0], &[2, 2]);
/// let b = Tensor::from_slice(&[10.0f32, 100.0], &[2]);
///
/// let c = client.mul(&a, &b)?;
/// assert_eq!(c.to_vec::<f32>(), [10.0, 200.0, 30.0, 400.0]);
/// # Ok::<(), sparsekron::error::Error>(())
/// ```
pub trait BinaryOps {
    /// Element-wise multiplication: a * b
    ///
    /// # Arguments
    /// * `a` - Left operand
    /// * `b` - Right operand (shape must be broadcastable with `a`)
    ///
    /// # Returns
    /// A new contiguous tensor with the broadcast shape. Inputs are not modified.
    /// Integer products wrap around on overflow.
    ///
    /// # Errors
    /// - `DTypeMismatch` if the operands have different dtypes (no promotion)
    /// - `BroadcastError` if the shapes are not broadcastable
    fn mul(&self, a: &Tensor, b: &Tensor) -> Result<Tensor>;
}
