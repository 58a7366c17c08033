//! CPU implementation of tensor operations.
//!
//! This module contains the operation trait implementations for [`CpuClient`](crate::runtime::CpuClient).

mod binary;
mod linalg;
