//! # sparsekron
//!
//! **Kronecker products and sparse coordinate extraction on a small strided tensor core.**
//!
//! sparsekron provides a runtime-typed n-dimensional tensor with zero-copy
//! views, a broadcasting elementwise multiply, the Kronecker product built
//! from them, and COO/CSR/CSC sparse matrices that can be flattened into a
//! coordinate/value descriptor.
//!
//! ## Features
//!
//! - **Tensors**: strided views (transpose, reshape, broadcast) sharing storage
//! - **Kronecker product**: reshape, broadcast multiply, collapse
//! - **Sparse matrices**: COO, CSR, CSC with conversions and nonzero queries
//! - **Sparse descriptors**: `indices` / `values` / `dense_shape` extraction
//! - **Multiple dtypes**: f64, f32, f16, bf16, signed and unsigned integers
//!
//! ## Quick Start
//!
//! ```rust
//! use sparsekron::prelude::*;
//!
//! let a = Tensor::from_slice(&[1.0, 2.0, 3.0, 4.0], &[2, 2]);
//! let b = Tensor::from_slice(&[0.0, 1.0, 1.0, 0.0], &[2, 2]);
//!
//! let k = kronecker_product(&a, &b)?;
//! assert_eq!(k.shape(), &[4, 4]);
//!
//! # #[cfg(feature = "sparse")]
//! # {
//! let coo = CooData::from_slices(&[0, 1], &[1, 0], &[5.0, 7.0], [2, 2])?;
//! let desc = sparse_indices(&coo)?;
//! assert_eq!(desc.index_pairs(), vec![[0, 1], [1, 0]]);
//! # }
//! # Ok::<(), sparsekron::error::Error>(())
//! ```
//!
//! ## Feature Flags
//!
//! - `rayon` (default): Multi-threaded elementwise kernels
//! - `sparse` (default): Sparse matrix formats and `sparse_indices`
//! - `f16`: Half-precision floats (F16, BF16)
//!
//! ## Logging
//!
//! Operations emit [`tracing`] events (`debug` at operation entry, `trace`
//! for kernel selection, `warn` before sparse alignment errors). The library
//! never installs a subscriber.

#![warn(missing_docs)]
#![warn(clippy::all)]
#![allow(clippy::module_inception)]

pub mod dtype;
pub mod error;
pub mod ops;
pub mod runtime;
#[cfg(feature = "sparse")]
pub mod sparse;
pub mod tensor;

pub use ops::kronecker_product;
#[cfg(feature = "sparse")]
pub use sparse::sparse_indices;

/// Prelude module for convenient imports
pub mod prelude {
    pub use crate::dtype::{DType, Element};
    pub use crate::error::{Error, Result};
    pub use crate::ops::{BinaryOps, LinalgOps, kronecker_product};
    pub use crate::runtime::{CpuClient, ParallelismConfig};
    pub use crate::tensor::{Layout, Tensor};

    #[cfg(feature = "sparse")]
    pub use crate::sparse::{
        CooData, CscData, CsrData, SparseFormat, SparseIndices, SparseStorage, sparse_indices,
    };
}
