//! Shared validation and dispatch for CPU operations

use super::{CpuClient, kernels};
use crate::dispatch_dtype;
use crate::dtype::DType;
use crate::error::{Error, Result};
use crate::tensor::{Shape, Tensor, broadcast_shapes};

/// Both operands must share a dtype; there is no implicit promotion
pub(crate) fn validate_binary_dtypes(a: &Tensor, b: &Tensor) -> Result<DType> {
    if a.dtype() != b.dtype() {
        return Err(Error::DTypeMismatch {
            lhs: a.dtype(),
            rhs: b.dtype(),
        });
    }
    Ok(a.dtype())
}

/// Output shape of a broadcasting binary operation
pub(crate) fn compute_broadcast_shape(a: &Tensor, b: &Tensor) -> Result<Shape> {
    broadcast_shapes(a.shape(), b.shape()).ok_or_else(|| Error::broadcast(a.shape(), b.shape()))
}

/// Rank-2 check used by the matrix operations
pub(crate) fn validate_matrix(t: &Tensor) -> Result<(usize, usize)> {
    match *t.shape() {
        [rows, cols] => Ok((rows, cols)),
        _ => Err(Error::not_matrix(t.shape())),
    }
}

/// Elementwise multiply with broadcasting
pub(crate) fn mul_impl(client: &CpuClient, a: &Tensor, b: &Tensor) -> Result<Tensor> {
    let dtype = validate_binary_dtypes(a, b)?;
    let out_shape = compute_broadcast_shape(a, b)?;
    let len: usize = out_shape.iter().product();

    let same_shapes = a.shape() == out_shape.as_slice() && b.shape() == out_shape.as_slice();
    let both_contiguous = a.is_contiguous() && b.is_contiguous();
    let fast_path = same_shapes && both_contiguous;

    tracing::trace!(
        shape = ?out_shape.as_slice(),
        %dtype,
        fast_path,
        parallel = client.should_parallelize(len),
        "mul kernel"
    );

    dispatch_dtype!(dtype, T => {
        let a_data = a.storage().as_slice::<T>()?;
        let b_data = b.storage().as_slice::<T>()?;

        let out = if fast_path {
            let a_start = a.layout().offset();
            let b_start = b.layout().offset();
            kernels::mul_contiguous(
                client,
                &a_data[a_start..a_start + len],
                &b_data[b_start..b_start + len],
            )
        } else {
            // Zero-copy views with stride 0 on the broadcast axes
            let a_view = a.broadcast_to(&out_shape)?;
            let b_view = b.broadcast_to(&out_shape)?;
            kernels::mul_strided(client, a_data, a_view.layout(), b_data, b_view.layout(), len)
        };

        Tensor::try_from_slice(&out, &out_shape)
    }, "mul")
}
