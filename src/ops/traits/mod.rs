//! Operation traits for tensor operations.
//!
//! This module contains trait definitions for the tensor operations.
//! Implementations live in the backend module (`cpu/`).

mod binary;
mod linalg;

pub use binary::BinaryOps;
pub use linalg::LinalgOps;
