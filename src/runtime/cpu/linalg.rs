//! CPU matrix operations built from tensor primitives

use super::CpuClient;
use super::helpers::{mul_impl, validate_binary_dtypes, validate_matrix};
use crate::error::Result;
use crate::tensor::Tensor;

/// Kronecker product through reshape, broadcast multiply and collapse
///
/// `a` (m1 x n1) is viewed as (m1, 1, n1, 1) and `b` (m2 x n2) as
/// (1, m2, 1, n2). Their broadcast product has shape (m1, m2, n1, n2), where
/// element `[i, k, j, l]` is `a[i, j] * b[k, l]`. Collapsing the leading and
/// trailing axis pairs places it at row `i * m2 + k`, column `j * n2 + l`.
pub(crate) fn kron_impl(client: &CpuClient, a: &Tensor, b: &Tensor) -> Result<Tensor> {
    let (m1, n1) = validate_matrix(a)?;
    let (m2, n2) = validate_matrix(b)?;
    let dtype = validate_binary_dtypes(a, b)?;

    tracing::debug!(
        lhs = ?[m1, n1],
        rhs = ?[m2, n2],
        %dtype,
        "kron"
    );

    let a4 = a.reshape(&[m1, 1, n1, 1])?;
    let b4 = b.reshape(&[1, m2, 1, n2])?;

    let block_shape = [m1, m2, n1, n2];
    let product = mul_impl(
        client,
        &a4.broadcast_to(&block_shape)?,
        &b4.broadcast_to(&block_shape)?,
    )?;

    product.reshape(&[m1 * m2, n1 * n2])
}
