//! CPU implementation of binary operations.

use crate::error::Result;
use crate::ops::BinaryOps;
use crate::runtime::cpu::{CpuClient, helpers::mul_impl};
use crate::tensor::Tensor;

/// BinaryOps implementation for CPU runtime.
impl BinaryOps for CpuClient {
    fn mul(&self, a: &Tensor, b: &Tensor) -> Result<Tensor> {
        mul_impl(self, a, b)
    }
}
