//! Shared accumulators workers report into.
//!
//! Both query modes funnel their findings through a single mutex-guarded
//! accumulator owned by the coordinator:
//!
//! - [`MinIndexAccumulator`] keeps the smallest index offered so far
//!   (earliest-match mode).
//! - [`IndexSetAccumulator`] collects every matching index, unordered until
//!   the coordinator finalizes it (all-occurrences mode).
//!
//! The mutex lives inside the accumulator and drops with it; there is no
//! process-wide lock. Critical sections are a single compare/store or a
//! single push, so workers never hold the lock while scanning. Locking goes
//! through [`crate::sync`], so the same code runs under loom's mocked mutex
//! in the interleaving tests.

use crate::error::{Error, Result};
use crate::sync::{self, Mutex};

/// Tracks the minimum index reported by any worker.
///
/// Starts at "none". Once set, the value only ever decreases: an offer is
/// accepted only when the slot is empty or the candidate is strictly
/// smaller, and the comparison happens under the lock, so a stale read can
/// never overwrite a better minimum.
#[derive(Debug)]
pub struct MinIndexAccumulator {
    best: Mutex<Option<usize>>,
}

impl Default for MinIndexAccumulator {
    fn default() -> Self {
        Self::new()
    }
}

impl MinIndexAccumulator {
    /// Creates an empty accumulator.
    #[must_use]
    pub fn new() -> Self {
        Self {
            best: Mutex::new(None),
        }
    }

    /// Offers a candidate index; keeps it only if it improves the minimum.
    ///
    /// Returns `true` if the candidate was stored.
    pub fn offer(&self, candidate: usize) -> bool {
        let mut best = sync::lock(&self.best);
        match *best {
            Some(current) if current <= candidate => false,
            _ => {
                *best = Some(candidate);
                true
            }
        }
    }

    /// Snapshot of the current minimum, if any worker has reported one.
    #[must_use]
    pub fn current(&self) -> Option<usize> {
        *sync::lock(&self.best)
    }

    /// Consumes the accumulator and returns the final minimum.
    ///
    /// Only meaningful after every worker has been joined.
    #[must_use]
    pub fn into_min(self) -> Option<usize> {
        sync::into_inner(self.best)
    }
}

/// Collects every matching index, in unspecified order.
///
/// The backing storage is reserved up front for the worst case (every
/// element matches), so appends never reallocate while workers hold the
/// lock. Each append is a single push inside the critical section: the
/// logical count is the vector length, so an index can never be lost or
/// double-counted and no two workers can land in the same slot.
#[derive(Debug)]
pub struct IndexSetAccumulator {
    hits: Mutex<Vec<usize>>,
}

impl IndexSetAccumulator {
    /// Creates an accumulator with room for `capacity` hits.
    ///
    /// Fails with [`Error::Allocation`] if the worst-case buffer cannot be
    /// reserved.
    pub fn with_capacity(capacity: usize) -> Result<Self> {
        let mut hits = Vec::new();
        hits.try_reserve_exact(capacity)
            .map_err(|e| Error::Allocation(e.to_string()))?;
        Ok(Self {
            hits: Mutex::new(hits),
        })
    }

    /// Records one matching index.
    pub fn record(&self, index: usize) {
        sync::lock(&self.hits).push(index);
    }

    /// Number of hits recorded so far.
    #[must_use]
    pub fn len(&self) -> usize {
        sync::lock(&self.hits).len()
    }

    /// Returns `true` if no hits have been recorded.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        sync::lock(&self.hits).is_empty()
    }

    /// Unordered snapshot of the hits recorded so far.
    #[must_use]
    pub fn snapshot(&self) -> Vec<usize> {
        sync::lock(&self.hits).clone()
    }

    /// Consumes the accumulator and returns the hits sorted ascending.
    ///
    /// This is the only place ordering is imposed, and it runs strictly
    /// after the join barrier. Indices are unique, so an unstable sort is
    /// equivalent to a stable one here.
    #[must_use]
    pub fn into_sorted(self) -> Vec<usize> {
        let mut hits = sync::into_inner(self.hits);
        hits.sort_unstable();
        hits
    }
}
