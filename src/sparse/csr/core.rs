//! Core CSR implementation: struct, creation, getters

use crate::dtype::{DType, Element};
use crate::error::{Error, Result};
use crate::tensor::Tensor;

use super::super::format::{SparseFormat, SparseStorage};
use super::super::utils::{
    expand_ptrs, nonzero_coordinates, validate_bounds, validate_index_tensor, validate_ptrs,
};

/// CSR (Compressed Sparse Row) sparse matrix data
#[derive(Debug, Clone)]
pub struct CsrData {
    pub(crate) row_ptrs: Tensor,
    pub(crate) col_indices: Tensor,
    pub(crate) values: Tensor,
    pub(crate) shape: [usize; 2],
}

impl CsrData {
    /// Create a new CSR matrix from components
    ///
    /// # Arguments
    ///
    /// * `row_ptrs` - Row pointers (length: nrows + 1)
    /// * `col_indices` - Column indices for each stored entry
    /// * `values` - Values at each position
    /// * `shape` - Matrix shape [nrows, ncols]
    ///
    /// # Errors
    ///
    /// Returns error if:
    /// - row_ptrs length != nrows + 1, or the pointers do not run from 0 to nnz
    /// - col_indices and values have different lengths
    /// - a column index is out of bounds
    /// - Index tensors are not I64
    pub fn new(
        row_ptrs: Tensor,
        col_indices: Tensor,
        values: Tensor,
        shape: [usize; 2],
    ) -> Result<Self> {
        let [nrows, ncols] = shape;
        let nnz = values.numel();

        if row_ptrs.numel() != nrows + 1 {
            return Err(Error::ShapeMismatch {
                expected: vec![nrows + 1],
                got: vec![row_ptrs.numel()],
            });
        }
        if col_indices.numel() != nnz {
            return Err(Error::ShapeMismatch {
                expected: vec![nnz],
                got: vec![col_indices.numel()],
            });
        }

        validate_index_tensor(&row_ptrs, "row_ptrs")?;
        validate_index_tensor(&col_indices, "col_indices")?;
        if values.ndim() != 1 {
            return Err(Error::InvalidArgument {
                arg: "values",
                reason: format!("expected 1D tensor, got {}D", values.ndim()),
            });
        }

        validate_ptrs(&row_ptrs.try_to_vec::<i64>()?, nnz, "row_ptrs")?;
        validate_bounds(&col_indices.try_to_vec::<i64>()?, ncols, "col_indices")?;

        Ok(Self {
            row_ptrs,
            col_indices,
            values,
            shape,
        })
    }

    /// Create an empty CSR matrix
    pub fn empty(shape: [usize; 2], dtype: DType) -> Self {
        let [nrows, _ncols] = shape;
        Self {
            // Row pointers are all zeros for an empty matrix
            row_ptrs: Tensor::zeros(&[nrows + 1], DType::I64),
            col_indices: Tensor::zeros(&[0], DType::I64),
            values: Tensor::zeros(&[0], dtype),
            shape,
        }
    }

    /// Create a CSR matrix from host slices
    pub fn from_slices<T: Element>(
        row_ptrs: &[i64],
        col_indices: &[i64],
        values: &[T],
        shape: [usize; 2],
    ) -> Result<Self> {
        Self::new(
            Tensor::try_from_slice(row_ptrs, &[row_ptrs.len()])?,
            Tensor::try_from_slice(col_indices, &[col_indices.len()])?,
            Tensor::try_from_slice(values, &[values.len()])?,
            shape,
        )
    }

    /// Returns the row pointers tensor
    pub fn row_ptrs(&self) -> &Tensor {
        &self.row_ptrs
    }

    /// Returns the column indices tensor
    pub fn col_indices(&self) -> &Tensor {
        &self.col_indices
    }

    /// Returns the values tensor
    pub fn values(&self) -> &Tensor {
        &self.values
    }

    /// Returns the number of stored entries in a specific row
    ///
    /// # Errors
    ///
    /// Returns `IndexOutOfBounds` if `row >= nrows`.
    pub fn row_nnz(&self, row: usize) -> Result<usize> {
        if row >= self.nrows() {
            return Err(Error::IndexOutOfBounds {
                index: row,
                size: self.nrows(),
            });
        }
        let ptrs: Vec<i64> = self.row_ptrs.try_to_vec()?;
        Ok((ptrs[row + 1] - ptrs[row]) as usize)
    }

    /// Host copies of the expanded row indices and the column indices
    pub(crate) fn index_vecs(&self) -> Result<(Vec<i64>, Vec<i64>)> {
        let ptrs: Vec<i64> = self.row_ptrs.try_to_vec()?;
        Ok((expand_ptrs(&ptrs), self.col_indices.try_to_vec()?))
    }
}

impl SparseStorage for CsrData {
    fn format(&self) -> SparseFormat {
        SparseFormat::Csr
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
        // row_ptrs (I64) + col_indices (I64) + values
        let ptrs_size = (self.nrows() + 1) * std::mem::size_of::<i64>();
        let indices_size = self.nnz() * std::mem::size_of::<i64>();
        let values_size = self.nnz() * self.dtype().size_in_bytes();
        ptrs_size + indices_size + values_size
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

    // [[1, 0, 2],
    //  [0, 0, 3],
    //  [4, 5, 6]]
    fn sample() -> CsrData {
        CsrData::from_slices(
            &[0, 2, 3, 6],
            &[0, 2, 2, 0, 1, 2],
            &[1.0f32, 2.0, 3.0, 4.0, 5.0, 6.0],
            [3, 3],
        )
        .unwrap()
    }

    #[test]
    fn test_csr_creation() {
        let csr = sample();
        assert_eq!(csr.nnz(), 6);
        assert_eq!(csr.shape(), [3, 3]);
        assert_eq!(csr.format(), SparseFormat::Csr);
        assert_eq!(csr.dtype(), DType::F32);
    }

    #[test]
    fn test_csr_row_nnz() {
        let csr = sample();
        assert_eq!(csr.row_nnz(0).unwrap(), 2);
        assert_eq!(csr.row_nnz(1).unwrap(), 1);
        assert_eq!(csr.row_nnz(2).unwrap(), 3);
        assert!(matches!(
            csr.row_nnz(3),
            Err(Error::IndexOutOfBounds { index: 3, size: 3 })
        ));
    }

    #[test]
    fn test_csr_empty() {
        let csr = CsrData::empty([4, 2], DType::F64);
        assert!(csr.is_empty());
        assert_eq!(csr.row_ptrs().to_vec::<i64>(), [0, 0, 0, 0, 0]);
        assert_eq!(csr.row_nnz(3).unwrap(), 0);
    }

    #[test]
    fn test_csr_invalid_row_ptrs() {
        // Wrong length
        assert!(CsrData::from_slices(&[0, 1], &[0], &[1.0f64], [2, 2]).is_err());
        // Decreasing
        assert!(CsrData::from_slices(&[0, 2, 1], &[0, 1], &[1.0f64, 2.0], [2, 2]).is_err());
        // Last pointer != nnz
        assert!(CsrData::from_slices(&[0, 1, 1], &[0, 1], &[1.0f64, 2.0], [2, 2]).is_err());
    }

    #[test]
    fn test_csr_column_out_of_bounds() {
        let result = CsrData::from_slices(&[0, 1], &[3], &[1.0f64], [1, 3]);
        assert!(matches!(
            result,
            Err(Error::IndexOutOfBounds { index: 3, size: 3 })
        ));
    }

    #[test]
    fn test_csr_nonzero_row_major() {
        let csr = CsrData::from_slices(&[0, 2, 3], &[1, 0, 0], &[5i32, 0, 7], [2, 2]).unwrap();
        let (rows, cols) = csr.nonzero().unwrap();
        assert_eq!(rows.to_vec::<i64>(), [0, 1]);
        assert_eq!(cols.to_vec::<i64>(), [1, 0]);
    }

    #[test]
    fn test_csr_memory_usage() {
        let csr = sample();
        assert_eq!(csr.memory_usage(), 4 * 8 + 6 * 8 + 6 * 4);
    }
}
