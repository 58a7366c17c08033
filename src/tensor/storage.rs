//! Storage: host memory with Arc-based sharing

use crate::dtype::{DType, Element};
use crate::error::{Error, Result};
use std::fmt;
use std::sync::Arc;

/// Storage for tensor data
///
/// Storage wraps a host buffer with reference counting, enabling zero-copy
/// views (transpose, reshape, broadcast) that share the underlying buffer.
///
/// The buffer is allocated as `u64` words so that reinterpreting its bytes as
/// any supported element type is always correctly aligned.
#[derive(Clone)]
pub struct Storage {
    inner: Arc<StorageInner>,
}

struct StorageInner {
    /// Backing words; only the first `len * dtype.size_in_bytes()` bytes are live
    words: Vec<u64>,
    /// Number of elements (not bytes)
    len: usize,
    /// Element type
    dtype: DType,
}

fn word_count(size_bytes: usize) -> usize {
    size_bytes.div_ceil(std::mem::size_of::<u64>())
}

impl Storage {
    /// Create zero-initialized storage for `len` elements of `dtype`
    pub fn zeros(len: usize, dtype: DType) -> Self {
        let size_bytes = len * dtype.size_in_bytes();
        Self {
            inner: Arc::new(StorageInner {
                words: vec![0u64; word_count(size_bytes)],
                len,
                dtype,
            }),
        }
    }

    /// Create storage from existing data with inferred dtype
    pub fn from_slice<T: Element>(data: &[T]) -> Self {
        let bytes: &[u8] = bytemuck::cast_slice(data);
        let mut words = vec![0u64; word_count(bytes.len())];
        bytemuck::cast_slice_mut::<u64, u8>(&mut words)[..bytes.len()].copy_from_slice(bytes);

        Self {
            inner: Arc::new(StorageInner {
                words,
                len: data.len(),
                dtype: T::DTYPE,
            }),
        }
    }

    /// Create storage from raw bytes with explicit dtype
    ///
    /// Returns an error if the byte count is not a multiple of the element size.
    pub fn from_bytes(data: &[u8], dtype: DType) -> Result<Self> {
        let elem_size = dtype.size_in_bytes();
        if data.len() % elem_size != 0 {
            return Err(Error::InvalidArgument {
                arg: "data",
                reason: format!(
                    "{} bytes is not a whole number of {} elements",
                    data.len(),
                    dtype
                ),
            });
        }

        let mut words = vec![0u64; word_count(data.len())];
        bytemuck::cast_slice_mut::<u64, u8>(&mut words)[..data.len()].copy_from_slice(data);

        Ok(Self {
            inner: Arc::new(StorageInner {
                words,
                len: data.len() / elem_size,
                dtype,
            }),
        })
    }

    /// Get the number of elements
    #[inline]
    pub fn len(&self) -> usize {
        self.inner.len
    }

    /// Check if storage is empty
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.inner.len == 0
    }

    /// Get the element type
    #[inline]
    pub fn dtype(&self) -> DType {
        self.inner.dtype
    }

    /// Get the size in bytes
    #[inline]
    pub fn size_in_bytes(&self) -> usize {
        self.inner.len * self.inner.dtype.size_in_bytes()
    }

    /// View the live bytes of this storage
    pub fn as_bytes(&self) -> &[u8] {
        &bytemuck::cast_slice::<u64, u8>(&self.inner.words)[..self.size_in_bytes()]
    }

    /// View the storage as a typed slice
    ///
    /// Returns `DTypeMismatch` if `T` does not match the storage dtype.
    pub fn as_slice<T: Element>(&self) -> Result<&[T]> {
        if T::DTYPE != self.dtype() {
            return Err(Error::DTypeMismatch {
                lhs: self.dtype(),
                rhs: T::DTYPE,
            });
        }
        bytemuck::try_cast_slice(self.as_bytes())
            .map_err(|e| Error::Internal(format!("storage cast failed: {e}")))
    }

    /// Copy the elements at `offsets` (in iteration order) into new storage
    pub(crate) fn gather(&self, offsets: impl ExactSizeIterator<Item = usize>) -> Self {
        let elem_size = self.dtype().size_in_bytes();
        let len = offsets.len();
        let mut words = vec![0u64; word_count(len * elem_size)];
        let dst = bytemuck::cast_slice_mut::<u64, u8>(&mut words);
        let src = self.as_bytes();
        for (i, off) in offsets.enumerate() {
            let from = off * elem_size;
            dst[i * elem_size..(i + 1) * elem_size].copy_from_slice(&src[from..from + elem_size]);
        }

        Self {
            inner: Arc::new(StorageInner {
                words,
                len,
                dtype: self.dtype(),
            }),
        }
    }

    /// Get the reference count (for debugging)
    pub fn ref_count(&self) -> usize {
        Arc::strong_count(&self.inner)
    }

    /// Check whether two storages share the same buffer
    pub fn ptr_eq(&self, other: &Storage) -> bool {
        Arc::ptr_eq(&self.inner, &other.inner)
    }
}

impl fmt::Debug for Storage {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Storage")
            .field("len", &self.inner.len)
            .field("dtype", &self.inner.dtype)
            .field("refs", &self.ref_count())
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_from_slice_roundtrip() {
        let storage = Storage::from_slice(&[1.5f64, -2.0, 3.25]);
        assert_eq!(storage.len(), 3);
        assert_eq!(storage.dtype(), DType::F64);
        assert_eq!(storage.size_in_bytes(), 24);
        assert_eq!(storage.as_slice::<f64>().unwrap(), &[1.5, -2.0, 3.25]);
    }

    #[test]
    fn test_odd_byte_length() {
        let storage = Storage::from_slice(&[1u8, 2, 3]);
        assert_eq!(storage.as_bytes(), &[1, 2, 3]);
        assert_eq!(storage.as_slice::<u8>().unwrap(), &[1, 2, 3]);
    }

    #[test]
    fn test_wrong_type_rejected() {
        let storage = Storage::from_slice(&[1.0f32, 2.0]);
        assert!(matches!(
            storage.as_slice::<f64>(),
            Err(Error::DTypeMismatch { .. })
        ));
    }

    #[test]
    fn test_zeros_and_empty() {
        let storage = Storage::zeros(4, DType::I32);
        assert_eq!(storage.as_slice::<i32>().unwrap(), &[0, 0, 0, 0]);

        let empty = Storage::zeros(0, DType::F64);
        assert!(empty.is_empty());
        assert!(empty.as_slice::<f64>().unwrap().is_empty());
    }

    #[test]
    fn test_from_bytes_rejects_partial_element() {
        assert!(Storage::from_bytes(&[0u8; 6], DType::F32).is_err());
        let storage = Storage::from_bytes(&[0u8; 8], DType::F32).unwrap();
        assert_eq!(storage.len(), 2);
    }

    #[test]
    fn test_clone_shares_buffer() {
        let a = Storage::from_slice(&[1i64, 2]);
        let b = a.clone();
        assert!(a.ptr_eq(&b));
        assert_eq!(a.ref_count(), 2);
    }
}
