//! COO format conversion: to_dense, to_csr, to_csc

use super::CooData;
use crate::error::Result;
use crate::sparse::utils::{
    compress, gather, mask_positions, nonzero_mask, scatter_to_dense, select, sort_permutation,
};
use crate::sparse::{CscData, CsrData, SparseStorage};
use crate::tensor::Tensor;

impl CooData {
    /// Convert to a dense 2D tensor
    ///
    /// Duplicate coordinates are summed.
    pub fn to_dense(&self) -> Result<Tensor> {
        let (rows, cols) = self.index_vecs()?;
        scatter_to_dense(&rows, &cols, &self.values, self.shape)
    }

    /// Convert to CSR format
    ///
    /// Entries are stably sorted by (row, col) and row pointers are computed
    /// from the row counts. Duplicates are kept as separate stored entries.
    pub fn to_csr(&self) -> Result<CsrData> {
        let [nrows, _ncols] = self.shape;

        if self.nnz() == 0 {
            return Ok(CsrData::empty(self.shape, self.dtype()));
        }

        let (rows, cols) = self.index_vecs()?;
        let perm = sort_permutation(&rows, &cols);

        let sorted_cols: Vec<i64> = perm.iter().map(|&i| cols[i]).collect();
        let row_ptrs = compress(&rows, nrows);

        CsrData::new(
            Tensor::try_from_slice(&row_ptrs, &[row_ptrs.len()])?,
            Tensor::try_from_slice(&sorted_cols, &[sorted_cols.len()])?,
            gather(&self.values, &perm),
            self.shape,
        )
    }

    /// Convert to CSC format
    ///
    /// Entries are stably sorted by (col, row) and column pointers are
    /// computed from the column counts. Duplicates are kept.
    pub fn to_csc(&self) -> Result<CscData> {
        let [_nrows, ncols] = self.shape;

        if self.nnz() == 0 {
            return Ok(CscData::empty(self.shape, self.dtype()));
        }

        let (rows, cols) = self.index_vecs()?;
        let perm = sort_permutation(&cols, &rows);

        let sorted_rows: Vec<i64> = perm.iter().map(|&i| rows[i]).collect();
        let col_ptrs = compress(&cols, ncols);

        CscData::new(
            Tensor::try_from_slice(&col_ptrs, &[col_ptrs.len()])?,
            Tensor::try_from_slice(&sorted_rows, &[sorted_rows.len()])?,
            gather(&self.values, &perm),
            self.shape,
        )
    }

    /// Drop stored entries whose value is zero, keeping the order of the rest
    pub fn eliminate_zeros(&self) -> Result<Self> {
        let mask = nonzero_mask(&self.values)?;
        let (rows, cols) = self.index_vecs()?;
        let rows = select(&rows, &mask);
        let cols = select(&cols, &mask);

        Ok(Self {
            row_indices: Tensor::try_from_slice(&rows, &[rows.len()])?,
            col_indices: Tensor::try_from_slice(&cols, &[cols.len()])?,
            values: gather(&self.values, &mask_positions(&mask)),
            shape: self.shape,
            sorted: self.sorted,
        })
    }
}
