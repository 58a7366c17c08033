//! Core CSC implementation: struct, creation, getters

use crate::dtype::{DType, Element};
use crate::error::{Error, Result};
use crate::tensor::Tensor;

use super::super::format::{SparseFormat, SparseStorage};
use super::super::utils::{
    expand_ptrs, nonzero_coordinates, validate_bounds, validate_index_tensor, validate_ptrs,
};

/// CSC (Compressed Sparse Column) sparse matrix data
#[derive(Debug, Clone)]
pub struct CscData {
    pub(crate) col_ptrs: Tensor,
    pub(crate) row_indices: Tensor,
    pub(crate) values: Tensor,
    pub(crate) shape: [usize; 2],
}

impl CscData {
    /// Create a new CSC matrix from components
    ///
    /// # Arguments
    ///
    /// * `col_ptrs` - Column pointers (length: ncols + 1)
    /// * `row_indices` - Row indices for each stored entry
    /// * `values` - Values at each position
    /// * `shape` - Matrix shape [nrows, ncols]
    ///
    /// # Errors
    ///
    /// Same checks as [`CsrData::new`](crate::sparse::CsrData::new) with rows
    /// and columns swapped.
    pub fn new(
        col_ptrs: Tensor,
        row_indices: Tensor,
        values: Tensor,
        shape: [usize; 2],
    ) -> Result<Self> {
        let [nrows, ncols] = shape;
        let nnz = values.numel();

        if col_ptrs.numel() != ncols + 1 {
            return Err(Error::ShapeMismatch {
                expected: vec![ncols + 1],
                got: vec![col_ptrs.numel()],
            });
        }
        if row_indices.numel() != nnz {
            return Err(Error::ShapeMismatch {
                expected: vec![nnz],
                got: vec![row_indices.numel()],
            });
        }

        validate_index_tensor(&col_ptrs, "col_ptrs")?;
        validate_index_tensor(&row_indices, "row_indices")?;
        if values.ndim() != 1 {
            return Err(Error::InvalidArgument {
                arg: "values",
                reason: format!("expected 1D tensor, got {}D", values.ndim()),
            });
        }

        validate_ptrs(&col_ptrs.try_to_vec::<i64>()?, nnz, "col_ptrs")?;
        validate_bounds(&row_indices.try_to_vec::<i64>()?, nrows, "row_indices")?;

        Ok(Self {
            col_ptrs,
            row_indices,
            values,
            shape,
        })
    }

    /// Create an empty CSC matrix
    pub fn empty(shape: [usize; 2], dtype: DType) -> Self {
        let [_nrows, ncols] = shape;
        Self {
            col_ptrs: Tensor::zeros(&[ncols + 1], DType::I64),
            row_indices: Tensor::zeros(&[0], DType::I64),
            values: Tensor::zeros(&[0], dtype),
            shape,
        }
    }

    /// Create a CSC matrix from host slices
    pub fn from_slices<T: Element>(
        col_ptrs: &[i64],
        row_indices: &[i64],
        values: &[T],
        shape: [usize; 2],
    ) -> Result<Self> {
        Self::new(
            Tensor::try_from_slice(col_ptrs, &[col_ptrs.len()])?,
            Tensor::try_from_slice(row_indices, &[row_indices.len()])?,
            Tensor::try_from_slice(values, &[values.len()])?,
            shape,
        )
    }

    /// Returns the column pointers tensor
    pub fn col_ptrs(&self) -> &Tensor {
        &self.col_ptrs
    }

    /// Returns the row indices tensor
    pub fn row_indices(&self) -> &Tensor {
        &self.row_indices
    }

    /// Returns the values tensor
    pub fn values(&self) -> &Tensor {
        &self.values
    }

    /// Returns the number of stored entries in a specific column
    pub fn col_nnz(&self, col: usize) -> Result<usize> {
        if col >= self.ncols() {
            return Err(Error::IndexOutOfBounds {
                index: col,
                size: self.ncols(),
            });
        }
        let ptrs: Vec<i64> = self.col_ptrs.try_to_vec()?;
        Ok((ptrs[col + 1] - ptrs[col]) as usize)
    }

    /// Host copies of the row indices and the expanded column indices
    pub(crate) fn index_vecs(&self) -> Result<(Vec<i64>, Vec<i64>)> {
        let ptrs: Vec<i64> = self.col_ptrs.try_to_vec()?;
        Ok((self.row_indices.try_to_vec()?, expand_ptrs(&ptrs)))
    }
}

impl SparseStorage for CscData {
    fn format(&self) -> SparseFormat {
        SparseFormat::Csc
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
        let ptrs_size = (self.ncols() + 1) * std::mem::size_of::<i64>();
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
