//! Parallelism configuration for CPU kernels

use crate::error::{Error, Result};

/// Default minimum number of output elements before a kernel goes parallel
pub const DEFAULT_MIN_PARALLEL_LEN: usize = 4096;

/// Execution settings for a [`CpuClient`](super::CpuClient)
///
/// # Fields
///
/// - `num_threads`: `None` uses rayon's global pool; `Some(n)` builds a
///   dedicated pool with `n` threads for this client.
/// - `min_parallel_len`: kernels producing fewer elements than this run
///   sequentially. Also used as rayon's `with_min_len` chunk size.
///
/// Without the `rayon` feature every kernel is sequential and both fields
/// are only validated.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct ParallelismConfig {
    /// Dedicated thread count, or `None` for the global pool
    pub num_threads: Option<usize>,
    /// Minimum output length before splitting work across threads
    pub min_parallel_len: usize,
}

impl Default for ParallelismConfig {
    fn default() -> Self {
        Self {
            num_threads: None,
            min_parallel_len: DEFAULT_MIN_PARALLEL_LEN,
        }
    }
}

impl ParallelismConfig {
    /// Single-threaded execution regardless of problem size
    pub fn sequential() -> Self {
        Self {
            num_threads: Some(1),
            min_parallel_len: usize::MAX,
        }
    }

    /// Use a dedicated pool with `n` threads
    pub fn with_num_threads(mut self, n: usize) -> Self {
        self.num_threads = Some(n);
        self
    }

    /// Set the parallel threshold
    pub fn with_min_parallel_len(mut self, len: usize) -> Self {
        self.min_parallel_len = len;
        self
    }

    /// Check the settings are usable
    pub fn validate(&self) -> Result<()> {
        if self.num_threads == Some(0) {
            return Err(Error::InvalidArgument {
                arg: "num_threads",
                reason: "thread count must be at least 1".to_string(),
            });
        }
        if self.min_parallel_len == 0 {
            return Err(Error::InvalidArgument {
                arg: "min_parallel_len",
                reason: "threshold must be at least 1".to_string(),
            });
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default() {
        let cfg = ParallelismConfig::default();
        assert_eq!(cfg.num_threads, None);
        assert_eq!(cfg.min_parallel_len, DEFAULT_MIN_PARALLEL_LEN);
        assert!(cfg.validate().is_ok());
    }

    #[test]
    fn test_builders() {
        let cfg = ParallelismConfig::default()
            .with_num_threads(3)
            .with_min_parallel_len(16);
        assert_eq!(cfg.num_threads, Some(3));
        assert_eq!(cfg.min_parallel_len, 16);
    }

    #[test]
    fn test_validate_rejects_zero() {
        assert!(
            ParallelismConfig::default()
                .with_num_threads(0)
                .validate()
                .is_err()
        );
        assert!(
            ParallelismConfig::default()
                .with_min_parallel_len(0)
                .validate()
                .is_err()
        );
        assert!(ParallelismConfig::sequential().validate().is_ok());
    }
}
