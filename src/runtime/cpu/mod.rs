//! CPU execution
//!
//! Operations run on the host. Elementwise kernels split work across a rayon
//! pool when the `rayon` feature is enabled and the output is large enough.

mod client;
pub(crate) mod helpers;
pub(crate) mod kernels;
pub(crate) mod linalg;
mod parallelism;

pub use client::CpuClient;
pub use parallelism::{DEFAULT_MIN_PARALLEL_LEN, ParallelismConfig};
