//! Coordinate/value extraction from sparse matrices
//!
//! [`sparse_indices`] turns any [`SparseStorage`] into a [`SparseIndices`]
//! descriptor: an `[nnz, 2]` I64 tensor of (row, col) pairs, the matching
//! values, and the dense shape. This is the layout sparse-tensor
//! constructors in training pipelines expect.

use crate::dtype::DType;
use crate::error::{Error, Result};
use crate::tensor::Tensor;

use super::CooData;
use super::format::SparseStorage;
use super::utils::{scatter_to_dense, validate_bounds, validate_index_tensor};

/// Coordinates, values and dense shape of a sparse matrix
///
/// # Invariants
///
/// - `indices` has shape `[nnz, 2]` and dtype I64
/// - `values` has shape `[nnz]`, entry `i` belongs to row `i` of `indices`
/// - every pair lies inside `dense_shape`
#[derive(Debug, Clone)]
pub struct SparseIndices {
    indices: Tensor,
    values: Tensor,
    dense_shape: [usize; 2],
}

impl SparseIndices {
    /// Assemble a descriptor from its parts, checking the invariants
    pub fn new(indices: Tensor, values: Tensor, dense_shape: [usize; 2]) -> Result<Self> {
        if indices.dtype() != DType::I64 {
            return Err(Error::DTypeMismatch {
                lhs: DType::I64,
                rhs: indices.dtype(),
            });
        }
        if values.ndim() != 1 {
            return Err(Error::InvalidArgument {
                arg: "values",
                reason: format!("expected 1D tensor, got {}D", values.ndim()),
            });
        }
        let nnz = values.numel();
        if indices.shape() != [nnz, 2] {
            return Err(Error::shape_mismatch(&[nnz, 2], indices.shape()));
        }

        let desc = Self {
            indices,
            values,
            dense_shape,
        };
        let (rows, cols) = desc.coordinates()?;
        validate_bounds(&rows, dense_shape[0], "indices")?;
        validate_bounds(&cols, dense_shape[1], "indices")?;
        Ok(desc)
    }

    /// `[nnz, 2]` I64 tensor of (row, col) pairs
    pub fn indices(&self) -> &Tensor {
        &self.indices
    }

    /// Values aligned with [`indices`](Self::indices)
    pub fn values(&self) -> &Tensor {
        &self.values
    }

    /// Shape of the dense matrix the entries came from
    pub fn dense_shape(&self) -> [usize; 2] {
        self.dense_shape
    }

    /// Number of entries
    pub fn nnz(&self) -> usize {
        self.values.numel()
    }

    /// Host copy of the coordinate pairs
    pub fn index_pairs(&self) -> Vec<[i64; 2]> {
        self.indices
            .to_vec::<i64>()
            .chunks_exact(2)
            .map(|p| [p[0], p[1]])
            .collect()
    }

    /// Host copies of the row and column coordinates
    fn coordinates(&self) -> Result<(Vec<i64>, Vec<i64>)> {
        let flat: Vec<i64> = self.indices.try_to_vec()?;
        Ok((
            flat.iter().step_by(2).copied().collect(),
            flat.iter().skip(1).step_by(2).copied().collect(),
        ))
    }

    /// Rebuild the dense matrix
    pub fn to_dense(&self) -> Result<Tensor> {
        let (rows, cols) = self.coordinates()?;
        scatter_to_dense(&rows, &cols, &self.values, self.dense_shape)
    }

    /// Rebuild a COO matrix with the same entries in the same order
    pub fn to_coo(&self) -> Result<CooData> {
        let (rows, cols) = self.coordinates()?;
        CooData::new(
            Tensor::try_from_slice(&rows, &[rows.len()])?,
            Tensor::try_from_slice(&cols, &[cols.len()])?,
            self.values.clone(),
            self.dense_shape,
        )
    }
}

/// Extract the coordinate/value descriptor of a sparse matrix
///
/// Queries [`SparseStorage::nonzero`] for the row and column indices, pairs
/// them up in the order returned, takes [`SparseStorage::data`] as the values
/// and [`SparseStorage::shape`] as the dense shape.
///
/// A matrix without entries gives empty `indices` (`[0, 2]`) and `values`
/// (`[0]`) with the original dense shape.
///
/// # Errors
///
/// `ShapeMismatch` if the number of nonzero positions differs from the
/// number of stored values. This happens when the matrix stores explicit
/// zeros; call `eliminate_zeros` first. Whether the value order matches the
/// coordinate order is not checked.
///
/// # Example
///
/// ```
/// use sparsekron::prelude::*;
///
/// let coo = CooData::from_slices(&[0, 1], &[1, 0], &[5.0f64, 7.0], [2, 2])?;
/// let desc = sparse_indices(&coo)?;
/// assert_eq!(desc.index_pairs(), vec![[0, 1], [1, 0]]);
/// assert_eq!(desc.values().to_vec::<f64>(), [5.0, 7.0]);
/// assert_eq!(desc.dense_shape(), [2, 2]);
/// # Ok::<(), sparsekron::error::Error>(())
/// ```
pub fn sparse_indices<S: SparseStorage>(matrix: &S) -> Result<SparseIndices> {
    let (rows, cols) = matrix.nonzero()?;
    let values = matrix.data();
    let nnz = rows.numel();

    tracing::debug!(
        format = %matrix.format(),
        shape = ?matrix.shape(),
        nnz,
        stored = values.numel(),
        "sparse_indices"
    );

    if nnz != values.numel() {
        tracing::warn!(
            format = %matrix.format(),
            nonzero = nnz,
            stored = values.numel(),
            "nonzero positions do not line up with stored values"
        );
        return Err(Error::ShapeMismatch {
            expected: vec![nnz],
            got: vec![values.numel()],
        });
    }

    validate_index_tensor(&rows, "rows")?;
    validate_index_tensor(&cols, "cols")?;
    let rows: Vec<i64> = rows.try_to_vec()?;
    let cols: Vec<i64> = cols.try_to_vec()?;
    let pairs: Vec<i64> = rows
        .iter()
        .zip(&cols)
        .flat_map(|(&r, &c)| [r, c])
        .collect();

    Ok(SparseIndices {
        indices: Tensor::try_from_slice(&pairs, &[nnz, 2])?,
        values: values.contiguous(),
        dense_shape: matrix.shape(),
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::sparse::CsrData;

    #[test]
    fn test_descriptor_shapes() {
        let coo = CooData::from_slices(&[0, 1], &[1, 0], &[5i32, 7], [2, 2]).unwrap();
        let desc = sparse_indices(&coo).unwrap();
        assert_eq!(desc.indices().shape(), &[2, 2]);
        assert_eq!(desc.indices().dtype(), DType::I64);
        assert_eq!(desc.values().shape(), &[2]);
        assert_eq!(desc.nnz(), 2);
    }

    #[test]
    fn test_empty_matrix() {
        let coo = CooData::empty([3, 3], DType::F64);
        let desc = sparse_indices(&coo).unwrap();
        assert_eq!(desc.indices().shape(), &[0, 2]);
        assert_eq!(desc.values().shape(), &[0]);
        assert!(desc.index_pairs().is_empty());
        assert_eq!(desc.dense_shape(), [3, 3]);
    }

    #[test]
    fn test_explicit_zero_is_rejected() {
        let coo = CooData::from_slices(&[0, 1], &[0, 1], &[0.0f64, 2.0], [2, 2]).unwrap();
        assert!(matches!(
            sparse_indices(&coo),
            Err(Error::ShapeMismatch { .. })
        ));
        let desc = sparse_indices(&coo.eliminate_zeros().unwrap()).unwrap();
        assert_eq!(desc.index_pairs(), vec![[1, 1]]);
    }

    #[test]
    fn test_new_checks_invariants() {
        let indices = Tensor::from_slice(&[0i64, 1, 1, 0], &[2, 2]);
        let values = Tensor::from_slice(&[1.0f32, 2.0], &[2]);
        assert!(SparseIndices::new(indices.clone(), values.clone(), [2, 2]).is_ok());
        assert!(matches!(
            SparseIndices::new(indices.clone(), values.clone(), [1, 2]),
            Err(Error::IndexOutOfBounds { index: 1, size: 1 })
        ));

        let short = Tensor::from_slice(&[1.0f32], &[1]);
        assert!(matches!(
            SparseIndices::new(indices, short, [2, 2]),
            Err(Error::ShapeMismatch { .. })
        ));
    }

    #[test]
    fn test_to_dense_and_coo() {
        let csr = CsrData::from_slices(&[0, 1, 2], &[1, 0], &[5i64, 7], [2, 2]).unwrap();
        let desc = sparse_indices(&csr).unwrap();
        assert_eq!(desc.to_dense().unwrap().to_vec::<i64>(), [0, 5, 7, 0]);

        let coo = desc.to_coo().unwrap();
        assert_eq!(coo.row_indices().to_vec::<i64>(), [0, 1]);
        assert_eq!(coo.col_indices().to_vec::<i64>(), [1, 0]);
    }
}
