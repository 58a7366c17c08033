//! Sparse format definitions and traits

use crate::dtype::DType;
use crate::error::Result;
use crate::tensor::Tensor;

/// Sparse matrix storage format
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum SparseFormat {
    /// Coordinate format (COO)
    ///
    /// Stores explicit (row, col, value) triplets.
    /// Best for: construction, format conversion, random access insertion
    /// Storage: O(3 * nnz)
    Coo,

    /// Compressed Sparse Row (CSR)
    ///
    /// Row pointers + column indices + values.
    /// Best for: row slicing, SpMV, most sparse operations
    /// Storage: O(2 * nnz + nrows + 1)
    Csr,

    /// Compressed Sparse Column (CSC)
    ///
    /// Column pointers + row indices + values.
    /// Best for: column slicing, transposed operations
    /// Storage: O(2 * nnz + ncols + 1)
    Csc,
}

impl SparseFormat {
    /// Returns true if format is efficient for row operations
    #[inline]
    pub fn is_row_major(&self) -> bool {
        matches!(self, SparseFormat::Csr)
    }

    /// Returns true if format is efficient for column operations
    #[inline]
    pub fn is_col_major(&self) -> bool {
        matches!(self, SparseFormat::Csc)
    }

    /// Returns the format name as a string
    pub fn name(&self) -> &'static str {
        match self {
            SparseFormat::Coo => "COO",
            SparseFormat::Csr => "CSR",
            SparseFormat::Csc => "CSC",
        }
    }
}

impl std::fmt::Display for SparseFormat {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.name())
    }
}

/// Trait for sparse storage backends
///
/// This trait defines the common interface for all sparse storage formats.
/// Each format (COO, CSR, CSC) implements this trait.
///
/// # Stored entries vs nonzeros
///
/// A format stores `nnz()` entries. Stored values may be explicit zeros, so
/// [`nonzero`](Self::nonzero) can report fewer positions than [`data`](Self::data)
/// holds. Call `eliminate_zeros` on the concrete format to drop them.
pub trait SparseStorage: Sized {
    /// Returns the sparse format type
    fn format(&self) -> SparseFormat;

    /// Returns the shape as [nrows, ncols]
    fn shape(&self) -> [usize; 2];

    /// Returns the number of rows
    #[inline]
    fn nrows(&self) -> usize {
        self.shape()[0]
    }

    /// Returns the number of columns
    #[inline]
    fn ncols(&self) -> usize {
        self.shape()[1]
    }

    /// Returns the number of stored entries (explicit zeros included)
    fn nnz(&self) -> usize;

    /// Returns the data type of values
    fn dtype(&self) -> DType;

    /// Returns the sparsity ratio (fraction of zeros)
    ///
    /// Sparsity = 1.0 - (nnz / total_elements)
    #[inline]
    fn sparsity(&self) -> f64 {
        let total = (self.nrows() * self.ncols()) as f64;
        if total == 0.0 {
            0.0
        } else {
            1.0 - (self.nnz() as f64 / total)
        }
    }

    /// Returns the density ratio (fraction of non-zeros)
    ///
    /// Density = nnz / total_elements = 1.0 - sparsity
    #[inline]
    fn density(&self) -> f64 {
        1.0 - self.sparsity()
    }

    /// Returns true if the matrix is empty (no non-zeros)
    #[inline]
    fn is_empty(&self) -> bool {
        self.nnz() == 0
    }

    /// Returns the memory usage in bytes (approximate)
    fn memory_usage(&self) -> usize;

    /// Stored values in storage order
    ///
    /// One element per stored entry, explicit zeros included.
    fn data(&self) -> &Tensor;

    /// Row and column indices of the stored entries whose value is nonzero
    ///
    /// Returns two 1-D I64 tensors of equal length. Entries appear in storage
    /// order: insertion order for COO, row-major for CSR, column-major for
    /// CSC.
    fn nonzero(&self) -> Result<(Tensor, Tensor)>;
}
