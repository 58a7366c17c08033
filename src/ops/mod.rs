//! Tensor operations
//!
//! Operations are defined as traits implemented by the runtime client, so the
//! client's execution settings apply to every call.
//!
//! ```text
//! CpuClient
//!   ├── implements BinaryOps
//!   │     └── mul      (broadcasting elementwise product)
//!   └── implements LinalgOps
//!         └── kron     (Kronecker product of two matrices)
//! ```
//!
//! [`kronecker_product`] is a shorthand that runs `kron` on a default client.

mod cpu;
pub(crate) mod dispatch;
mod traits;

pub use traits::{BinaryOps, LinalgOps};

use crate::error::Result;
use crate::runtime::CpuClient;
use crate::tensor::Tensor;

/// Kronecker product of two matrices using a default [`CpuClient`]
///
/// See [`LinalgOps::kron`] for the shape rules and errors.
///
/// ```
/// use sparsekron::prelude::*;
///
/// let a = Tensor::eye(2, DType::F64)?;
/// let b = Tensor::eye(3, DType::F64)?;
/// let c = kronecker_product(&a, &b)?;
/// assert_eq!(c.to_vec::<f64>(), Tensor::eye(6, DType::F64)?.to_vec::<f64>());
/// # Ok::<(), sparsekron::error::Error>(())
/// ```
pub fn kronecker_product(a: &Tensor, b: &Tensor) -> Result<Tensor> {
    CpuClient::new().kron(a, b)
}
