//! Sparse matrix support for sparsekron
//!
//! This module provides sparse matrix formats and the coordinate/value
//! extraction built on top of them.
//!
//! # Sparse Formats
//!
//! Three standard sparse formats are supported:
//!
//! - **COO** (Coordinate): Stores (row, col, value) triplets in insertion
//!   order. Best for construction and format conversion. O(nnz) storage.
//!
//! - **CSR** (Compressed Sparse Row): Row-major compressed format.
//!   O(nnz + nrows) storage.
//!
//! - **CSC** (Compressed Sparse Column): Column-major compressed format.
//!   O(nnz + ncols) storage.
//!
//! All formats implement [`SparseStorage`], which exposes the stored values
//! ([`SparseStorage::data`]), the positions of the nonzero entries
//! ([`SparseStorage::nonzero`]) and the shape. [`sparse_indices`] combines
//! the three into a [`SparseIndices`] descriptor.
//!
//! # Usage
//!
//! ```
//! use sparsekron::prelude::*;
//!
//! let dense = Tensor::from_slice(&[0.0f32, 5.0, 7.0, 0.0], &[2, 2]);
//! let csc = CscData::from_dense(&dense)?;
//!
//! // CSC reports entries column by column
//! let desc = sparse_indices(&csc)?;
//! assert_eq!(desc.index_pairs(), vec![[1, 0], [0, 1]]);
//! assert_eq!(desc.values().to_vec::<f32>(), [7.0, 5.0]);
//! # Ok::<(), sparsekron::error::Error>(())
//! ```
//!
//! # Explicit zeros
//!
//! Formats may store entries whose value is zero. They count toward
//! [`SparseStorage::nnz`] and appear in `data()`, but not in `nonzero()`.
//! `sparse_indices` refuses such matrices; `eliminate_zeros` removes them.

mod coo;
mod csc;
mod csr;
mod format;
mod indices;
pub(crate) mod utils;

pub use coo::CooData;
pub use csc::CscData;
pub use csr::CsrData;
pub use format::{SparseFormat, SparseStorage};
pub use indices::{SparseIndices, sparse_indices};
