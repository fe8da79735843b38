//! # `ParScan` Core
//!
//! Deterministic parallel search engine over immutable in-memory integer
//! arrays.
//!
//! `ParScan` answers two questions about a read-only `&[i64]`:
//!
//! - **Earliest match**: the smallest index holding a target value.
//! - **All matches**: every index holding a target value, sorted ascending.
//!
//! Both queries fan out across a caller-chosen number of OS threads and are
//! guaranteed to return exactly what a single-threaded scan would return,
//! independent of scheduling. Workers report findings through a single
//! mutex-guarded accumulator; the coordinator joins all workers before it
//! finalizes, so no ordering between threads is ever observable.
//!
//! ## Quick Start
//!
//! ```rust
//! use parscan_core::{find_all_occurrences, find_first_occurrence};
//!
//! let data = [1, 5, 3, 7, 5, 9, 2, 5, 8];
//!
//! // Earliest match: Ok(None) means "not found", never a failure.
//! let first = find_first_occurrence(&data, 5, 4)?;
//! assert_eq!(first, Some(1));
//!
//! // All matches, ascending.
//! let all = find_all_occurrences(&data, 5, 4)?;
//! assert_eq!(all, vec![1, 4, 7]);
//! # Ok::<(), parscan_core::Error>(())
//! ```
//!
//! ## Concurrency model
//!
//! - The array is borrowed shared and read-only for the whole request; it is
//!   never copied per worker.
//! - The accumulator is the only mutable shared state, and every mutation
//!   happens inside a short critical section (one compare/store or one
//!   append).
//! - The coordinator's single blocking point is the join barrier; results
//!   are finalized (sorted, for all-matches) strictly after it.

#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]
#![allow(clippy::module_name_repetitions)]
#![allow(clippy::missing_errors_doc)]
#![allow(clippy::uninlined_format_args)]

pub mod accumulator;
pub mod config;
#[cfg(test)]
mod config_tests;
pub mod engine;
pub mod error;
#[cfg(test)]
mod error_tests;
pub mod partition;
pub mod sync;

pub use accumulator::{IndexSetAccumulator, MinIndexAccumulator};
pub use config::{ConfigError, EngineConfig, LoggingConfig, SearchConfig};
pub use engine::{find_all_occurrences, find_first_occurrence, SearchEngine};
pub use error::{Error, Result};
pub use partition::{partition_range, Partition};
