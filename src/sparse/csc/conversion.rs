//! CSC format conversion: to_dense, to_coo, to_csr

use super::CscData;
use crate::error::Result;
use crate::sparse::utils::{compress, gather, mask_positions, nonzero_mask, select, scatter_to_dense};
use crate::sparse::{CooData, CsrData, SparseStorage};
use crate::tensor::Tensor;

impl CscData {
    /// Build from a dense 2D tensor, keeping its nonzero entries
    pub fn from_dense(dense: &Tensor) -> Result<Self> {
        CooData::from_dense(dense)?.to_csc()
    }

    /// Convert to a dense 2D tensor
    pub fn to_dense(&self) -> Result<Tensor> {
        let (rows, cols) = self.index_vecs()?;
        scatter_to_dense(&rows, &cols, &self.values, self.shape)
    }

    /// Convert to COO format
    ///
    /// Entry order is unchanged, so the result is column-major.
    pub fn to_coo(&self) -> Result<CooData> {
        let (rows, cols) = self.index_vecs()?;
        CooData::new(
            Tensor::try_from_slice(&rows, &[rows.len()])?,
            Tensor::try_from_slice(&cols, &[cols.len()])?,
            self.values.clone(),
            self.shape,
        )
    }

    /// Convert to CSR format
    pub fn to_csr(&self) -> Result<CsrData> {
        self.to_coo()?.to_csr()
    }

    /// Drop stored entries whose value is zero
    pub fn eliminate_zeros(&self) -> Result<Self> {
        let mask = nonzero_mask(&self.values)?;
        let (rows, cols) = self.index_vecs()?;
        let rows = select(&rows, &mask);
        let cols = select(&cols, &mask);
        let col_ptrs = compress(&cols, self.ncols());

        Ok(Self {
            col_ptrs: Tensor::try_from_slice(&col_ptrs, &[col_ptrs.len()])?,
            row_indices: Tensor::try_from_slice(&rows, &[rows.len()])?,
            values: gather(&self.values, &mask_positions(&mask)),
            shape: self.shape,
        })
    }
}
