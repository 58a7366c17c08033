//! CPU implementation of linear algebra operations.

use crate::error::Result;
use crate::ops::LinalgOps;
use crate::runtime::cpu::{CpuClient, linalg::kron_impl};
use crate::tensor::Tensor;

impl LinalgOps for CpuClient {
    fn kron(&self, a: &Tensor, b: &Tensor) -> Result<Tensor> {
        kron_impl(self, a, b)
    }
}
