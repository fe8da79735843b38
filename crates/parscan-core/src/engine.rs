//! Search coordinator and worker tasks.
//!
//! The coordinator allocates the shared accumulator, dispatches workers as
//! scoped OS threads, blocks on the join barrier, and finalizes the result.
//! Scoped spawning doubles as the cleanup story: when dispatch fails
//! mid-way, leaving the scope joins every already-spawned sibling before
//! any borrowed resource is released, and the accumulator (with its lock)
//! drops with the coordinator's stack frame on every exit path.
//!
//! Earliest-match workers each scan the **full** array and stop at their
//! own first hit; the protected minimum-comparison in the accumulator makes
//! the outcome identical to a sequential scan no matter whose update lands
//! first. This redundant scanning is an explicit simplicity trade-off, not
//! a correctness hazard. All-occurrences workers scan disjoint partitions
//! instead, and the coordinator sorts after the join barrier.

use crate::accumulator::{IndexSetAccumulator, MinIndexAccumulator};
use crate::config::EngineConfig;
use crate::error::{Error, Result};
use crate::partition::partition_range;
use std::thread;

/// Finds the smallest index `i` with `data[i] == target`.
///
/// Spawns `thread_count` workers that each scan the whole array and stop at
/// their own first hit. Returns `Ok(None)` when no element matches — a
/// successful outcome, distinct from the `Err` failure cases.
///
/// The result is identical to `data.iter().position(|v| *v == target)` for
/// every `thread_count`.
///
/// # Examples
///
/// ```rust
/// use parscan_core::find_first_occurrence;
///
/// let data = [1, 5, 3, 7, 5, 9, 2, 5, 8];
/// assert_eq!(find_first_occurrence(&data, 5, 4)?, Some(1));
/// assert_eq!(find_first_occurrence(&data, 42, 4)?, None);
/// # Ok::<(), parscan_core::Error>(())
/// ```
pub fn find_first_occurrence(
    data: &[i64],
    target: i64,
    thread_count: usize,
) -> Result<Option<usize>> {
    if thread_count == 0 {
        return Err(Error::InvalidThreadCount);
    }

    tracing::debug!(
        len = data.len(),
        target,
        workers = thread_count,
        "dispatching earliest-match search"
    );

    let accumulator = MinIndexAccumulator::new();

    thread::scope(|scope| -> Result<()> {
        for worker in 0..thread_count {
            let accumulator = &accumulator;
            thread::Builder::new()
                .name(format!("parscan-first-{worker}"))
                .spawn_scoped(scope, move || {
                    // Local first hit; stop scanning as soon as it is found.
                    if let Some(hit) = data.iter().position(|value| *value == target) {
                        accumulator.offer(hit);
                    }
                })
                .map_err(|source| Error::Spawn { worker, source })?;
        }
        // Scope exit is the join barrier: every spawned worker completes
        // here, on the success path and the spawn-failure path alike.
        Ok(())
    })?;

    let found = accumulator.into_min();
    tracing::trace!(result = ?found, "earliest-match search complete");
    Ok(found)
}

/// Finds every index `i` with `data[i] == target`, sorted ascending.
///
/// Splits `[0, data.len())` into `thread_count` disjoint partitions, one
/// per worker. An empty result is a successful outcome; `Err` is reserved
/// for allocation and spawn failures.
///
/// # Examples
///
/// ```rust
/// use parscan_core::find_all_occurrences;
///
/// let data = [1, 5, 3, 7, 5, 9, 2, 5, 8, 5, 4, 5];
/// assert_eq!(find_all_occurrences(&data, 5, 4)?, vec![1, 4, 7, 9, 11]);
/// # Ok::<(), parscan_core::Error>(())
/// ```
pub fn find_all_occurrences(data: &[i64], target: i64, thread_count: usize) -> Result<Vec<usize>> {
    if thread_count == 0 {
        return Err(Error::InvalidThreadCount);
    }

    tracing::debug!(
        len = data.len(),
        target,
        workers = thread_count,
        "dispatching all-occurrences search"
    );

    // Worst case: every element matches.
    let accumulator = IndexSetAccumulator::with_capacity(data.len())?;
    let partitions = partition_range(data.len(), thread_count);

    thread::scope(|scope| -> Result<()> {
        for (worker, partition) in partitions.iter().copied().enumerate() {
            let accumulator = &accumulator;
            thread::Builder::new()
                .name(format!("parscan-all-{worker}"))
                .spawn_scoped(scope, move || {
                    for (offset, value) in data[partition.range()].iter().enumerate() {
                        if *value == target {
                            accumulator.record(partition.start + offset);
                        }
                    }
                })
                .map_err(|source| Error::Spawn { worker, source })?;
        }
        Ok(())
    })?;

    // Ordering is imposed here and only here, after the join barrier.
    let hits = accumulator.into_sorted();
    tracing::debug!(matches = hits.len(), "all-occurrences search complete");
    Ok(hits)
}

/// Borrowed handle binding an array to a worker-count preset.
///
/// Convenience wrapper over [`find_first_occurrence`] and
/// [`find_all_occurrences`] for callers that run several queries against
/// the same array.
///
/// # Examples
///
/// ```rust
/// use parscan_core::{EngineConfig, SearchEngine};
///
/// let data = [3, 1, 4, 1, 5, 9, 2, 6];
/// let engine = SearchEngine::with_config(&data, &EngineConfig::default());
/// assert_eq!(engine.find_first(1)?, Some(1));
/// assert_eq!(engine.find_all(1)?, vec![1, 3]);
/// # Ok::<(), parscan_core::Error>(())
/// ```
#[derive(Debug, Clone, Copy)]
pub struct SearchEngine<'a> {
    data: &'a [i64],
    workers: usize,
}

impl<'a> SearchEngine<'a> {
    /// Creates an engine with auto-detected worker count.
    #[must_use]
    pub fn new(data: &'a [i64]) -> Self {
        Self::with_config(data, &EngineConfig::default())
    }

    /// Creates an engine from `parscan.toml` / `PARSCAN_*` configuration.
    ///
    /// Loads and validates [`EngineConfig`] from the default sources.
    pub fn from_default_config(data: &'a [i64]) -> Result<Self> {
        let config = EngineConfig::load()?;
        config.validate()?;
        Ok(Self::with_config(data, &config))
    }

    /// Creates an engine with the worker preset from `config`.
    #[must_use]
    pub fn with_config(data: &'a [i64], config: &EngineConfig) -> Self {
        Self::with_workers(data, config.effective_workers())
    }

    /// Creates an engine with an explicit worker count.
    #[must_use]
    pub fn with_workers(data: &'a [i64], workers: usize) -> Self {
        Self { data, workers }
    }

    /// Number of workers dispatched per query.
    #[must_use]
    pub fn workers(&self) -> usize {
        self.workers
    }

    /// Earliest-match query; see [`find_first_occurrence`].
    pub fn find_first(&self, target: i64) -> Result<Option<usize>> {
        find_first_occurrence(self.data, target, self.workers)
    }

    /// All-occurrences query; see [`find_all_occurrences`].
    pub fn find_all(&self, target: i64) -> Result<Vec<usize>> {
        find_all_occurrences(self.data, target, self.workers)
    }
}
