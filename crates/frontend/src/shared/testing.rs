//! Native harness for reactive code: a thread-local executor and an owner.

use any_spawner::Executor;
use leptos::prelude::*;

/// Runs `f` under a fresh owner. Effects only run on [`flush`].
pub fn with_owner<T>(f: impl FnOnce(&Owner) -> T) -> T {
    let _ = Executor::init_futures_executor();
    let owner = Owner::new();
    owner.with(|| f(&owner))
}

/// Runs every pending effect on this thread.
pub fn flush() {
    Executor::poll_local();
}
