//! Work partitioning for all-occurrences searches.
//!
//! Splits the index range `[0, len)` into exactly `workers` contiguous,
//! non-overlapping sub-ranges whose union is the full range. The last
//! partition absorbs the division remainder, so no index is ever dropped.
//!
//! The earliest-match mode does not partition: every one of its workers
//! deliberately scans the full range (see [`crate::engine`]).

use std::ops::Range;

/// A contiguous index range `[start, end)` assigned to one worker.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Partition {
    /// First index covered (inclusive).
    pub start: usize,
    /// One past the last index covered (exclusive).
    pub end: usize,
}

impl Partition {
    /// Number of indices covered by this partition.
    #[must_use]
    pub fn len(&self) -> usize {
        self.end - self.start
    }

    /// Returns `true` if the partition covers no indices.
    ///
    /// Empty partitions are valid: they occur when `workers > len` and the
    /// assigned worker simply performs zero scan iterations.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.start == self.end
    }

    /// The partition as an iterable `Range`.
    #[must_use]
    pub fn range(&self) -> Range<usize> {
        self.start..self.end
    }
}

/// Splits `[0, len)` into exactly `workers` partitions.
///
/// `chunk = len / workers` (integer division); partition `i` covers
/// `[i * chunk, (i + 1) * chunk)` except the last, which runs to `len` and
/// absorbs the remainder. With `workers > len`, trailing partitions are
/// empty.
///
/// # Panics
///
/// Panics if `workers == 0`. Callers validate the worker count at the API
/// boundary before partitioning.
#[must_use]
pub fn partition_range(len: usize, workers: usize) -> Vec<Partition> {
    assert!(workers >= 1, "partition_range requires at least one worker");

    let chunk = len / workers;
    (0..workers)
        .map(|i| Partition {
            start: i * chunk,
            end: if i == workers - 1 { len } else { (i + 1) * chunk },
        })
        .collect()
}
