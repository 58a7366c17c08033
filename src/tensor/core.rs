//! Core Tensor type

use super::{Layout, Storage};
use crate::dtype::{DType, Element};
use crate::error::{Error, Result};
use std::fmt;

/// N-dimensional array in host memory
///
/// `Tensor` is the fundamental data structure in sparsekron. It consists of:
/// - **Storage**: Reference-counted, dtype-tagged buffer
/// - **Layout**: Shape, strides, and offset defining the view into storage
/// - **DType**: Element type (determined at runtime)
///
/// # Zero-Copy Views
///
/// Operations like `transpose`, `view`, and `broadcast_to` create new tensors
/// that share the same underlying storage. Only the layout changes.
///
/// # Example
///
/// ```
/// use sparsekron::prelude::*;
///
/// let a = Tensor::from_slice(&[1.0f32, 2.0, 3.0, 4.0], &[2, 2]);
/// let b = a.t()?; // Zero-copy, shares storage with a
/// assert_eq!(b.contiguous().to_vec::<f32>(), [1.0, 3.0, 2.0, 4.0]);
/// # Ok::<(), sparsekron::error::Error>(())
/// ```
#[derive(Clone)]
pub struct Tensor {
    storage: Storage,
    layout: Layout,
}

impl Tensor {
    /// Create a tensor from storage and layout
    pub fn from_parts(storage: Storage, layout: Layout) -> Self {
        Self { storage, layout }
    }

    /// Create a tensor from a slice of data
    ///
    /// # Panics
    ///
    /// Panics if `data.len()` does not equal the product of the `shape` dimensions.
    /// For a fallible alternative, use [`Self::try_from_slice`].
    pub fn from_slice<T: Element>(data: &[T], shape: &[usize]) -> Self {
        Self::try_from_slice(data, shape).expect("Tensor::from_slice failed")
    }

    /// Create a tensor from a slice of data (fallible version)
    ///
    /// Returns an error if `data.len()` does not equal the product of the `shape` dimensions.
    pub fn try_from_slice<T: Element>(data: &[T], shape: &[usize]) -> Result<Self> {
        let expected_len: usize = shape.iter().product();
        if data.len() != expected_len {
            return Err(Error::ShapeMismatch {
                expected: shape.to_vec(),
                got: vec![data.len()],
            });
        }

        Ok(Self {
            storage: Storage::from_slice(data),
            layout: Layout::contiguous(shape),
        })
    }

    /// Create a tensor filled with zeros
    pub fn zeros(shape: &[usize], dtype: DType) -> Self {
        let len: usize = shape.iter().product();
        Self {
            storage: Storage::zeros(len, dtype),
            layout: Layout::contiguous(shape),
        }
    }

    /// Create an `n x n` identity matrix
    pub fn eye(n: usize, dtype: DType) -> Result<Self> {
        crate::dispatch_dtype!(dtype, T => {
            let mut data = vec![T::zero(); n * n];
            for i in 0..n {
                data[i * n + i] = T::one();
            }
            Self::try_from_slice(&data, &[n, n])
        }, "eye")
    }

    // ===== Accessors =====

    /// Get the storage
    #[inline]
    pub fn storage(&self) -> &Storage {
        &self.storage
    }

    /// Get the layout
    #[inline]
    pub fn layout(&self) -> &Layout {
        &self.layout
    }

    /// Get the shape
    #[inline]
    pub fn shape(&self) -> &[usize] {
        self.layout.shape()
    }

    /// Get the strides
    #[inline]
    pub fn strides(&self) -> &[isize] {
        self.layout.strides()
    }

    /// Get the number of dimensions (rank)
    #[inline]
    pub fn ndim(&self) -> usize {
        self.layout.ndim()
    }

    /// Get the total number of elements
    #[inline]
    pub fn numel(&self) -> usize {
        self.layout.elem_count()
    }

    /// Get the element type
    #[inline]
    pub fn dtype(&self) -> DType {
        self.storage.dtype()
    }

    /// Check if the tensor is contiguous in memory
    #[inline]
    pub fn is_contiguous(&self) -> bool {
        self.layout.is_contiguous()
    }

    /// Check if this is a scalar (0-dimensional tensor)
    #[inline]
    pub fn is_scalar(&self) -> bool {
        self.layout.is_scalar()
    }

    /// Get size along a dimension (supports negative indexing)
    pub fn size(&self, dim: isize) -> Option<usize> {
        self.layout.dim(dim)
    }

    // ===== View Operations (Zero-Copy) =====

    fn with_layout(&self, layout: Layout) -> Self {
        Self {
            storage: self.storage.clone(),
            layout,
        }
    }

    /// Transpose two dimensions (zero-copy)
    pub fn transpose(&self, dim0: isize, dim1: isize) -> Result<Self> {
        let new_layout =
            self.layout
                .transpose(dim0, dim1)
                .ok_or_else(|| Error::InvalidDimension {
                    dim: dim0,
                    ndim: self.ndim(),
                })?;
        Ok(self.with_layout(new_layout))
    }

    /// Transpose last two dimensions (matrix transpose)
    pub fn t(&self) -> Result<Self> {
        self.transpose(-2, -1)
    }

    /// View tensor with a different shape (zero-copy, contiguous only)
    pub fn view(&self, shape: &[usize]) -> Result<Self> {
        self.check_numel(shape)?;
        let new_layout = self.layout.reshape(shape).ok_or(Error::NotContiguous)?;
        Ok(self.with_layout(new_layout))
    }

    /// Reshape to a new shape
    ///
    /// Zero-copy when the tensor is contiguous; otherwise the data is first
    /// copied into row-major order.
    pub fn reshape(&self, shape: &[usize]) -> Result<Self> {
        self.check_numel(shape)?;
        if self.is_contiguous() {
            self.view(shape)
        } else {
            self.contiguous().view(shape)
        }
    }

    fn check_numel(&self, shape: &[usize]) -> Result<()> {
        let new_count: usize = shape.iter().product();
        if new_count != self.numel() {
            return Err(Error::shape_mismatch(self.shape(), shape));
        }
        Ok(())
    }

    /// Add a dimension of size 1
    pub fn unsqueeze(&self, dim: isize) -> Result<Self> {
        let new_layout = self
            .layout
            .unsqueeze(dim)
            .ok_or_else(|| Error::InvalidDimension {
                dim,
                ndim: self.ndim(),
            })?;
        Ok(self.with_layout(new_layout))
    }

    /// Broadcast to a target shape (zero-copy)
    pub fn broadcast_to(&self, shape: &[usize]) -> Result<Self> {
        let new_layout = self
            .layout
            .broadcast_to(shape)
            .ok_or_else(|| Error::broadcast(self.shape(), shape))?;
        Ok(self.with_layout(new_layout))
    }

    /// Make tensor contiguous (copy if needed)
    ///
    /// If the tensor is already contiguous, returns a view (zero-copy).
    /// Otherwise, allocates new storage and copies the elements in row-major
    /// order. Broadcast axes are expanded.
    pub fn contiguous(&self) -> Self {
        if self.is_contiguous() && self.storage.len() == self.numel() {
            return self.clone();
        }

        Self {
            storage: self.storage.gather(self.layout.offsets()),
            layout: Layout::contiguous(self.shape()),
        }
    }

    // ===== Data Access =====

    /// Copy tensor data to a Vec in row-major order
    ///
    /// # Panics
    ///
    /// Panics if `T` does not match the tensor's dtype.
    /// For a fallible alternative, use [`Self::try_to_vec`].
    pub fn to_vec<T: Element>(&self) -> Vec<T> {
        self.try_to_vec().expect("Tensor::to_vec failed")
    }

    /// Copy tensor data to a Vec in row-major order (fallible version)
    pub fn try_to_vec<T: Element>(&self) -> Result<Vec<T>> {
        let data = self.storage.as_slice::<T>()?;
        if self.is_contiguous() {
            let start = self.layout.offset();
            Ok(data[start..start + self.numel()].to_vec())
        } else {
            Ok(self.layout.offsets().map(|off| data[off]).collect())
        }
    }

    /// Extract the scalar value from a single-element tensor
    pub fn item<T: Element>(&self) -> Result<T> {
        if self.numel() != 1 {
            return Err(Error::ShapeMismatch {
                expected: vec![1],
                got: self.shape().to_vec(),
            });
        }
        let data = self.storage.as_slice::<T>()?;
        Ok(data[self.layout.offset_of(0)])
    }
}

impl fmt::Debug for Tensor {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Tensor")
            .field("shape", &self.shape())
            .field("dtype", &self.dtype())
            .field("contiguous", &self.is_contiguous())
            .finish()
    }
}

impl fmt::Display for Tensor {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Tensor({:?}, dtype={})", self.shape(), self.dtype())
    }
}
