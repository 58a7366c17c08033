//! Compute runtime
//!
//! Operations are dispatched through a client that carries the execution
//! configuration (thread count, parallel thresholds). Only a CPU backend
//! exists; it runs every kernel synchronously on the calling thread or on a
//! rayon pool.

pub mod cpu;

pub use cpu::{CpuClient, ParallelismConfig};
