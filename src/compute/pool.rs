//! pool.rs
//! Bounded worker pool for fanning pure probes out over a slice of inputs.

use super::error::EngineError;
use rayon::prelude::*;
use rayon::{ThreadPool, ThreadPoolBuilder};
use std::num::NonZeroUsize;

/// Tuning knobs for the engine's worker pool.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EngineConfig {
    /// Worker count. `None` uses the hardware parallelism.
    pub threads: Option<NonZeroUsize>,
    /// Smallest number of inputs handed to a worker as one task.
    pub min_batch: usize,
}

impl Default for EngineConfig {
    fn default() -> Self {
        Self { threads: None, min_batch: 64 }
    }
}

pub struct WorkerPool {
    pool: ThreadPool,
    min_batch: usize,
}

impl WorkerPool {
    pub fn new(config: &EngineConfig) -> Result<Self, EngineError> {
        let threads = config
            .threads
            .or_else(|| std::thread::available_parallelism().ok())
            .map_or(1, NonZeroUsize::get);

        let pool = ThreadPoolBuilder::new()
            .num_threads(threads)
            .thread_name(|i| format!("probe-{}", i))
            .build()
            .map_err(|e| EngineError::WorkerPool(e.to_string()))?;

        Ok(Self { pool, min_batch: config.min_batch.max(1) })
    }

    pub fn threads(&self) -> usize { self.pool.current_num_threads() }

    /// Runs `task` over every input on the pool and blocks until all of them
    /// finish, keeping the `Some` outputs in input order.
    ///
    /// Fan-out splits `inputs` into batches of at least `min_batch` items; fan-in
    /// happens on the calling thread once every batch has joined. A panicking
    /// task propagates to the caller.
    pub fn fan_out<T, R, F>(&self, inputs: &[T], task: F) -> Vec<R>
    where
        T: Sync,
        R: Send,
        F: Fn(&T) -> Option<R> + Sync,
    {
        self.pool.install(|| {
            inputs
                .par_iter()
                .with_min_len(self.min_batch)
                .filter_map(|input| task(input))
                .collect()
        })
    }
}
