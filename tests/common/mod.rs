//! Common test utilities
#![allow(dead_code)]

use approx::relative_eq;
use sparsekron::runtime::{CpuClient, ParallelismConfig};

/// Create a CPU client with the default configuration
pub fn create_cpu_client() -> CpuClient {
    CpuClient::new()
}

/// Create a CPU client that goes parallel on every kernel, using `threads` threads
pub fn create_parallel_client(threads: usize) -> CpuClient {
    CpuClient::with_config(
        ParallelismConfig::default()
            .with_num_threads(threads)
            .with_min_parallel_len(1),
    )
    .expect("parallel client")
}

/// Create a CPU client that never splits work
pub fn create_sequential_client() -> CpuClient {
    CpuClient::with_config(ParallelismConfig::sequential()).expect("sequential client")
}

/// Assert two f64 slices are close within tolerance
///
/// Uses the formula: |a - b| <= atol + rtol * |b|
pub fn assert_allclose_f64(a: &[f64], b: &[f64], rtol: f64, atol: f64, msg: &str) {
    assert_eq!(a.len(), b.len(), "{}: length mismatch", msg);
    for (i, (x, y)) in a.iter().zip(b.iter()).enumerate() {
        let diff = (x - y).abs();
        let tol = atol + rtol * y.abs();
        assert!(
            diff <= tol,
            "{}: element {} differs: {} vs {} (diff={}, tol={})",
            msg,
            i,
            x,
            y,
            diff,
            tol
        );
    }
}

/// Assert two f32 slices are close within relative tolerance `rtol`
pub fn assert_allclose_f32(a: &[f32], b: &[f32], rtol: f32, msg: &str) {
    assert_eq!(a.len(), b.len(), "{}: length mismatch", msg);
    for (i, (x, y)) in a.iter().zip(b.iter()).enumerate() {
        assert!(
            relative_eq!(*x, *y, max_relative = rtol, epsilon = f32::EPSILON),
            "{}: element {} differs: {} vs {}",
            msg,
            i,
            x,
            y
        );
    }
}
