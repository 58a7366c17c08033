//! Core COO implementation: struct, creation, getters

use crate::dtype::{DType, Element};
use crate::error::{Error, Result};
use crate::tensor::Tensor;

use super::super::format::{SparseFormat, SparseStorage};
use super::super::utils::{
    dense_entries, is_ordered, nonzero_coordinates, validate_bounds, validate_index_tensor,
};

/// COO (Coordinate) sparse matrix data
///
/// Entries are kept in the order they were given. Duplicate coordinates are
/// allowed and stay separate stored entries; they add up in [`to_dense`](Self::to_dense).
#[derive(Debug, Clone)]
pub struct CooData {
    pub(crate) row_indices: Tensor,
    pub(crate) col_indices: Tensor,
    pub(crate) values: Tensor,
    pub(crate) shape: [usize; 2],
    pub(crate) sorted: bool,
}

impl CooData {
    /// Create a new COO matrix from components
    ///
    /// # Arguments
    ///
    /// * `row_indices` - 1D tensor of row indices (I64)
    /// * `col_indices` - 1D tensor of column indices (I64)
    /// * `values` - 1D tensor of values
    /// * `shape` - Matrix shape [nrows, ncols]
    ///
    /// # Errors
    ///
    /// Returns error if:
    /// - Arrays have different lengths
    /// - Indices are out of bounds
    /// - Index tensors are not I64
    pub fn new(
        row_indices: Tensor,
        col_indices: Tensor,
        values: Tensor,
        shape: [usize; 2],
    ) -> Result<Self> {
        let nnz = values.numel();
        if row_indices.numel() != nnz || col_indices.numel() != nnz {
            return Err(Error::ShapeMismatch {
                expected: vec![nnz],
                got: vec![row_indices.numel(), col_indices.numel()],
            });
        }

        validate_index_tensor(&row_indices, "row_indices")?;
        validate_index_tensor(&col_indices, "col_indices")?;
        if values.ndim() != 1 {
            return Err(Error::InvalidArgument {
                arg: "values",
                reason: format!("expected 1D tensor, got {}D", values.ndim()),
            });
        }

        let rows: Vec<i64> = row_indices.try_to_vec()?;
        let cols: Vec<i64> = col_indices.try_to_vec()?;
        validate_bounds(&rows, shape[0], "row_indices")?;
        validate_bounds(&cols, shape[1], "col_indices")?;

        Ok(Self {
            row_indices,
            col_indices,
            values,
            shape,
            sorted: is_ordered(&rows, &cols),
        })
    }

    /// Create an empty COO matrix
    pub fn empty(shape: [usize; 2], dtype: DType) -> Self {
        Self {
            row_indices: Tensor::zeros(&[0], DType::I64),
            col_indices: Tensor::zeros(&[0], DType::I64),
            values: Tensor::zeros(&[0], dtype),
            shape,
            sorted: true,
        }
    }

    /// Create COO matrix from host slices
    ///
    /// # Arguments
    ///
    /// * `rows` - Row indices
    /// * `cols` - Column indices
    /// * `values` - Stored values
    /// * `shape` - Matrix shape [nrows, ncols]
    pub fn from_slices<T: Element>(
        rows: &[i64],
        cols: &[i64],
        values: &[T],
        shape: [usize; 2],
    ) -> Result<Self> {
        if rows.len() != values.len() || cols.len() != values.len() {
            return Err(Error::ShapeMismatch {
                expected: vec![values.len()],
                got: vec![rows.len(), cols.len()],
            });
        }

        let row_indices = Tensor::try_from_slice(rows, &[rows.len()])?;
        let col_indices = Tensor::try_from_slice(cols, &[cols.len()])?;
        let values_tensor = Tensor::try_from_slice(values, &[values.len()])?;

        Self::new(row_indices, col_indices, values_tensor, shape)
    }

    /// Build from a dense 2D tensor, keeping its nonzero entries in row-major order
    pub fn from_dense(dense: &Tensor) -> Result<Self> {
        let (rows, cols, values) = dense_entries(dense)?;
        let shape = [dense.shape()[0], dense.shape()[1]];
        Ok(Self {
            row_indices: Tensor::try_from_slice(&rows, &[rows.len()])?,
            col_indices: Tensor::try_from_slice(&cols, &[cols.len()])?,
            values,
            shape,
            sorted: true,
        })
    }

    /// Returns the row indices tensor
    pub fn row_indices(&self) -> &Tensor {
        &self.row_indices
    }

    /// Returns the column indices tensor
    pub fn col_indices(&self) -> &Tensor {
        &self.col_indices
    }

    /// Returns the values tensor
    pub fn values(&self) -> &Tensor {
        &self.values
    }

    /// Returns whether entries are sorted in row-major order
    pub fn is_sorted(&self) -> bool {
        self.sorted
    }

    /// Host copies of the row and column indices
    pub(crate) fn index_vecs(&self) -> Result<(Vec<i64>, Vec<i64>)> {
        Ok((self.row_indices.try_to_vec()?, self.col_indices.try_to_vec()?))
    }
}

impl SparseStorage for CooData {
    fn format(&self) -> SparseFormat {
        SparseFormat::Coo
    }

    fn shape(&self) -> [usize; 2] {
        self.shape
    }

    fn nnz(&self) -> usize {
        self.values.numel()
    }

    fn dtype(&self) -> DType {
        self.values.dtype()
    }

    fn memory_usage(&self) -> usize {
        // row_indices (I64) + col_indices (I64) + values
        let index_size = self.nnz() * std::mem::size_of::<i64>() * 2;
        let value_size = self.nnz() * self.dtype().size_in_bytes();
        index_size + value_size
    }

    fn data(&self) -> &Tensor {
        &self.values
    }

    fn nonzero(&self) -> Result<(Tensor, Tensor)> {
        let (rows, cols) = self.index_vecs()?;
        nonzero_coordinates(&rows, &cols, &self.values)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_coo_creation() {
        let rows = vec![0i64, 1, 2];
        let cols = vec![1i64, 0, 2];
        let values = vec![1.0f32, 2.0, 3.0];

        let coo = CooData::from_slices(&rows, &cols, &values, [3, 3]);
        assert!(coo.is_ok());

        let coo = coo.unwrap();
        assert_eq!(coo.nnz(), 3);
        assert_eq!(coo.shape(), [3, 3]);
        assert_eq!(coo.dtype(), DType::F32);
        assert_eq!(coo.format(), SparseFormat::Coo);
        assert!(coo.is_sorted());
    }

    #[test]
    fn test_coo_unsorted_detected() {
        let coo = CooData::from_slices(&[1, 0], &[0, 1], &[7i32, 5], [2, 2]).unwrap();
        assert!(!coo.is_sorted());
    }

    #[test]
    fn test_coo_empty() {
        let coo = CooData::empty([100, 100], DType::F32);

        assert_eq!(coo.nnz(), 0);
        assert_eq!(coo.shape(), [100, 100]);
        assert!(coo.is_empty());
        assert!(coo.is_sorted());
        assert_eq!(coo.memory_usage(), 0);
    }

    #[test]
    fn test_coo_sparsity() {
        let rows = vec![0i64, 1];
        let cols = vec![0i64, 1];
        let values = vec![1.0f32, 2.0];

        let coo = CooData::from_slices(&rows, &cols, &values, [10, 10]).unwrap();

        // 2 non-zeros out of 100 elements = 2% density = 98% sparsity
        assert!((coo.density() - 0.02).abs() < 1e-10);
        assert!((coo.sparsity() - 0.98).abs() < 1e-10);
        assert_eq!(coo.memory_usage(), 2 * 8 * 2 + 2 * 4);
    }

    #[test]
    fn test_coo_invalid_indices() {
        let rows = vec![0i64, 5]; // 5 is out of bounds for 3x3
        let cols = vec![0i64, 0];
        let values = vec![1.0f32, 2.0];

        let result = CooData::from_slices(&rows, &cols, &values, [3, 3]);
        assert!(matches!(
            result,
            Err(Error::IndexOutOfBounds { index: 5, size: 3 })
        ));
    }

    #[test]
    fn test_coo_rejects_float_indices() {
        let rows = Tensor::from_slice(&[0.0f64], &[1]);
        let cols = Tensor::from_slice(&[0i64], &[1]);
        let values = Tensor::from_slice(&[1.0f64], &[1]);
        assert!(matches!(
            CooData::new(rows, cols, values, [1, 1]),
            Err(Error::DTypeMismatch { .. })
        ));
    }

    #[test]
    fn test_coo_length_mismatch() {
        let result = CooData::from_slices(&[0, 1], &[0], &[1.0f64, 2.0], [2, 2]);
        assert!(matches!(result, Err(Error::ShapeMismatch { .. })));
    }

    #[test]
    fn test_coo_nonzero_skips_explicit_zeros() {
        let coo = CooData::from_slices(&[1, 0, 1], &[1, 1, 0], &[4.0f64, 0.0, 6.0], [2, 2]).unwrap();
        let (rows, cols) = coo.nonzero().unwrap();
        assert_eq!(rows.to_vec::<i64>(), [1, 1]);
        assert_eq!(cols.to_vec::<i64>(), [1, 0]);
        assert_eq!(coo.data().numel(), 3);
    }

    #[test]
    fn test_coo_from_dense() {
        let dense = Tensor::from_slice(&[0i64, 2, 0, 3, 0, 4], &[2, 3]);
        let coo = CooData::from_dense(&dense).unwrap();
        assert_eq!(coo.shape(), [2, 3]);
        assert_eq!(coo.row_indices().to_vec::<i64>(), [0, 1, 1]);
        assert_eq!(coo.col_indices().to_vec::<i64>(), [1, 0, 2]);
        assert_eq!(coo.values().to_vec::<i64>(), [2, 3, 4]);
        assert!(coo.is_sorted());

        let vector = Tensor::from_slice(&[1.0f32], &[1]);
        assert!(matches!(
            CooData::from_dense(&vector),
            Err(Error::NotMatrix { .. })
        ));
    }
}
