use super::{QueryStore, Subscription, UpdateFn};
use contracts::shared::query::{BalanceQuery, Query, QueryKey};
use serde_json::Value;
use std::collections::HashMap;
use std::sync::{Arc, Mutex, MutexGuard, PoisonError};

struct Listener {
    id: u64,
    on_update: UpdateFn,
}

#[derive(Default)]
struct StoreInner {
    cells: HashMap<QueryKey, Value>,
    queries: HashMap<QueryKey, Query>,
    listeners: HashMap<QueryKey, Vec<Listener>>,
    next_id: u64,
}

/// In-memory cell cache.
///
/// The data layer that owns the ledger reads [`pending_queries`], computes the
/// cells and hands results back through [`publish`]. Cells outlive their
/// subscribers so a remounted component sees the last value at once.
///
/// [`pending_queries`]: MemoryQueryStore::pending_queries
/// [`publish`]: MemoryQueryStore::publish
#[derive(Clone, Default)]
pub struct MemoryQueryStore {
    inner: Arc<Mutex<StoreInner>>,
}

impl MemoryQueryStore {
    pub fn new() -> Self {
        Self::default()
    }

    fn lock(&self) -> MutexGuard<'_, StoreInner> {
        self.inner.lock().unwrap_or_else(PoisonError::into_inner)
    }

    /// Store a computed value and notify the cell's subscribers.
    pub fn publish(&self, key: &QueryKey, value: Value) {
        // listeners run outside the lock so they may read the store
        let listeners: Vec<UpdateFn> = {
            let mut inner = self.lock();
            inner.cells.insert(key.clone(), value.clone());
            inner
                .listeners
                .get(key)
                .map(|list| list.iter().map(|l| l.on_update.clone()).collect())
                .unwrap_or_default()
        };

        log::debug!("cell {} updated, {} listener(s)", key, listeners.len());
        for on_update in listeners {
            on_update(value.clone());
        }
    }

    /// Drop a cached value, e.g. after the underlying rows changed.
    pub fn invalidate(&self, key: &QueryKey) {
        if self.lock().cells.remove(key).is_some() {
            log::debug!("cell {} invalidated", key);
        }
    }

    /// Query registered for `key` by its subscribers
    pub fn registered_query(&self, key: &QueryKey) -> Option<Query> {
        self.lock().queries.get(key).cloned()
    }

    /// Subscribed cells that have no value yet
    pub fn pending_queries(&self) -> Vec<BalanceQuery> {
        let inner = self.lock();
        let mut pending: Vec<BalanceQuery> = inner
            .queries
            .iter()
            .filter(|(key, _)| !inner.cells.contains_key(*key))
            .map(|(key, query)| BalanceQuery::new(key.clone(), query.clone()))
            .collect();
        pending.sort_by(|a, b| a.key.cmp(&b.key));
        pending
    }

    pub fn subscriber_count(&self, key: &QueryKey) -> usize {
        self.lock().listeners.get(key).map_or(0, Vec::len)
    }

    fn remove_listener(&self, key: &QueryKey, id: u64) {
        let mut inner = self.lock();
        let now_empty = match inner.listeners.get_mut(key) {
            Some(list) => {
                list.retain(|l| l.id != id);
                list.is_empty()
            }
            None => false,
        };
        if now_empty {
            inner.listeners.remove(key);
            inner.queries.remove(key);
        }
        log::debug!("unsubscribed {} from {}", id, key);
    }
}

impl QueryStore for MemoryQueryStore {
    fn current(&self, key: &QueryKey) -> Option<Value> {
        self.lock().cells.get(key).cloned()
    }

    fn subscribe(&self, query: &BalanceQuery, on_update: UpdateFn) -> Subscription {
        let id = {
            let mut inner = self.lock();
            let id = inner.next_id;
            inner.next_id += 1;
            inner
                .queries
                .entry(query.key.clone())
                .or_insert_with(|| query.query.clone());
            inner
                .listeners
                .entry(query.key.clone())
                .or_default()
                .push(Listener { id, on_update });
            id
        };
        log::debug!("subscribed {} to {}", id, query.key);

        let store = self.clone();
        let key = query.key.clone();
        Subscription::new(move || store.remove_listener(&key, id))
    }
}
