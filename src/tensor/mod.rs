//! Tensor types and operations
//!
//! This module provides the core `Tensor` type, an n-dimensional strided
//! array in host memory with a runtime element type.

mod core;
mod layout;
mod storage;

pub use core::Tensor;
pub use layout::{Layout, Offsets, Shape, Strides, broadcast_shapes};
pub use storage::Storage;
