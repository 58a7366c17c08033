//! CPU client

use super::ParallelismConfig;
use crate::error::Result;
#[cfg(feature = "rayon")]
use std::sync::Arc;

/// CPU client for operation dispatch
///
/// The client owns the execution configuration. Operation traits
/// ([`BinaryOps`](crate::ops::BinaryOps), [`LinalgOps`](crate::ops::LinalgOps))
/// are implemented on it, so the same call can run with different thread
/// settings just by using a different client.
#[derive(Clone, Debug)]
pub struct CpuClient {
    config: ParallelismConfig,
    #[cfg(feature = "rayon")]
    pool: Option<Arc<rayon::ThreadPool>>,
}

impl CpuClient {
    /// Create a client with the default configuration (global rayon pool)
    pub fn new() -> Self {
        Self {
            config: ParallelismConfig::default(),
            #[cfg(feature = "rayon")]
            pool: None,
        }
    }

    /// Create a client with explicit parallelism settings
    ///
    /// # Errors
    ///
    /// Returns `InvalidArgument` for a zero thread count or threshold, and
    /// `Backend` if the dedicated thread pool cannot be built.
    pub fn with_config(config: ParallelismConfig) -> Result<Self> {
        config.validate()?;

        #[cfg(feature = "rayon")]
        let pool = match config.num_threads {
            Some(n) => Some(Arc::new(
                rayon::ThreadPoolBuilder::new()
                    .num_threads(n)
                    .build()
                    .map_err(|e| crate::error::Error::Backend(e.to_string()))?,
            )),
            None => None,
        };

        tracing::debug!(
            num_threads = ?config.num_threads,
            min_parallel_len = config.min_parallel_len,
            "cpu client configured"
        );

        Ok(Self {
            config,
            #[cfg(feature = "rayon")]
            pool,
        })
    }

    /// Get the parallelism configuration
    pub fn config(&self) -> &ParallelismConfig {
        &self.config
    }

    /// Minimum chunk length for rayon iterators
    #[inline]
    pub fn rayon_min_len(&self) -> usize {
        self.config.min_parallel_len
    }

    /// Whether a kernel producing `len` elements should run in parallel
    #[inline]
    pub fn should_parallelize(&self, len: usize) -> bool {
        cfg!(feature = "rayon")
            && self.config.num_threads != Some(1)
            && len >= self.config.min_parallel_len
    }

    /// Run `f` inside this client's thread pool
    ///
    /// Uses the dedicated pool when one was configured, otherwise runs `f`
    /// directly (rayon calls inside then use the global pool).
    pub fn install_parallelism<T, F>(&self, f: F) -> T
    where
        F: FnOnce() -> T + Send,
        T: Send,
    {
        #[cfg(feature = "rayon")]
        {
            if let Some(pool) = &self.pool {
                return pool.install(f);
            }
        }
        f()
    }
}

impl Default for CpuClient {
    fn default() -> Self {
        Self::new()
    }
}
