//! Seam to the external reactive query store.
//!
//! The store caches computed cells by [`QueryKey`] and pushes every new value
//! to the cell's subscribers. Components never poll; they subscribe through
//! [`use_query_value`] and re-render when the value signal changes.

pub mod hooks;
pub mod memory;

pub use hooks::{provide_query_store, use_query_store, use_query_value, QueryStoreContext};
pub use memory::MemoryQueryStore;

use contracts::shared::query::{BalanceQuery, QueryKey};
use serde_json::Value;
use std::sync::Arc;

/// Listener invoked with each new value of a cell
pub type UpdateFn = Arc<dyn Fn(Value) + Send + Sync>;

pub trait QueryStore: Send + Sync {
    /// Last value delivered for `key`, if any.
    fn current(&self, key: &QueryKey) -> Option<Value>;

    /// Register `on_update` for the cell computed by `query`.
    ///
    /// The listener stays registered until the returned handle is dropped.
    fn subscribe(&self, query: &BalanceQuery, on_update: UpdateFn) -> Subscription;
}

/// Live registration with a [`QueryStore`]; unsubscribes on drop.
#[must_use = "dropping a Subscription unsubscribes immediately"]
pub struct Subscription {
    unsubscribe: Option<Box<dyn FnOnce() + Send + Sync>>,
}

impl Subscription {
    pub fn new(unsubscribe: impl FnOnce() + Send + Sync + 'static) -> Self {
        Self {
            unsubscribe: Some(Box::new(unsubscribe)),
        }
    }

    pub fn unsubscribe(mut self) {
        if let Some(f) = self.unsubscribe.take() {
            f();
        }
    }
}

impl Drop for Subscription {
    fn drop(&mut self) {
        if let Some(f) = self.unsubscribe.take() {
            f();
        }
    }
}

impl std::fmt::Debug for Subscription {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Subscription")
            .field("active", &self.unsubscribe.is_some())
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::atomic::{AtomicUsize, Ordering};

    #[test]
    fn test_subscription_runs_teardown_once() {
        let calls = Arc::new(AtomicUsize::new(0));
        let counter = calls.clone();
        let sub = Subscription::new(move || {
            counter.fetch_add(1, Ordering::SeqCst);
        });

        sub.unsubscribe();
        assert_eq!(calls.load(Ordering::SeqCst), 1);
    }

    #[test]
    fn test_subscription_tears_down_on_drop() {
        let calls = Arc::new(AtomicUsize::new(0));
        {
            let counter = calls.clone();
            let _sub = Subscription::new(move || {
                counter.fetch_add(1, Ordering::SeqCst);
            });
        }
        assert_eq!(calls.load(Ordering::SeqCst), 1);
    }

    #[test]
    fn test_debug_reports_activity() {
        let sub = Subscription::new(|| {});
        assert_eq!(format!("{:?}", sub), "Subscription { active: true }");
    }
}
