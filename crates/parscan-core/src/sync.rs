//! Synchronization primitives with loom support for concurrency testing.
//!
//! Production code locks through `parking_lot`; under the `loom` cfg the
//! same paths compile against loom's mocked mutex so the interleaving tests
//! exercise the real accumulators, not replicas.
//!
//! # Testing with Loom
//!
//! ```bash
//! RUSTFLAGS="--cfg loom" cargo +nightly test --features loom --test loom_tests
//! ```

#[cfg(loom)]
pub use loom::sync::Mutex;

#[cfg(not(loom))]
pub use parking_lot::Mutex;

/// Acquires `mutex` and returns its guard.
///
/// Loom's `lock()` returns a poison-aware `LockResult`; parking_lot returns
/// the guard directly. Poisoning cannot occur here: the only closures run
/// under these locks are accumulator updates, which do not panic.
#[cfg(loom)]
pub fn lock<T>(mutex: &Mutex<T>) -> loom::sync::MutexGuard<'_, T> {
    mutex.lock().expect("accumulator lock poisoned")
}

/// Acquires `mutex` and returns its guard.
#[cfg(not(loom))]
pub fn lock<T>(mutex: &Mutex<T>) -> parking_lot::MutexGuard<'_, T> {
    mutex.lock()
}

/// Consumes `mutex` and returns the guarded value.
#[cfg(loom)]
pub fn into_inner<T>(mutex: Mutex<T>) -> T {
    mutex.into_inner().expect("accumulator lock poisoned")
}

/// Consumes `mutex` and returns the guarded value.
#[cfg(not(loom))]
pub fn into_inner<T>(mutex: Mutex<T>) -> T {
    mutex.into_inner()
}
