//! CSR format conversion: to_dense, to_coo, to_csc

use super::CsrData;
use crate::error::Result;
use crate::sparse::utils::{compress, gather, mask_positions, nonzero_mask, select, scatter_to_dense};
use crate::sparse::{CooData, CscData, SparseStorage};
use crate::tensor::Tensor;

impl CsrData {
    /// Build from a dense 2D tensor, keeping its nonzero entries
    pub fn from_dense(dense: &Tensor) -> Result<Self> {
        CooData::from_dense(dense)?.to_csr()
    }

    /// Convert to a dense 2D tensor
    pub fn to_dense(&self) -> Result<Tensor> {
        let (rows, cols) = self.index_vecs()?;
        scatter_to_dense(&rows, &cols, &self.values, self.shape)
    }

    /// Convert to COO format
    ///
    /// Row pointers are expanded into explicit row indices. Entry order is
    /// unchanged, so the result is row-major.
    pub fn to_coo(&self) -> Result<CooData> {
        let (rows, cols) = self.index_vecs()?;
        CooData::new(
            Tensor::try_from_slice(&rows, &[rows.len()])?,
            Tensor::try_from_slice(&cols, &[cols.len()])?,
            self.values.clone(),
            self.shape,
        )
    }

    /// Convert to CSC format
    pub fn to_csc(&self) -> Result<CscData> {
        self.to_coo()?.to_csc()
    }

    /// Drop stored entries whose value is zero
    ///
    /// Row pointers are recomputed; the order within each row is kept.
    pub fn eliminate_zeros(&self) -> Result<Self> {
        let mask = nonzero_mask(&self.values)?;
        let (rows, cols) = self.index_vecs()?;
        let rows = select(&rows, &mask);
        let cols = select(&cols, &mask);
        let row_ptrs = compress(&rows, self.nrows());

        Ok(Self {
            row_ptrs: Tensor::try_from_slice(&row_ptrs, &[row_ptrs.len()])?,
            col_indices: Tensor::try_from_slice(&cols, &[cols.len()])?,
            values: gather(&self.values, &mask_positions(&mask)),
            shape: self.shape,
        })
    }
}
