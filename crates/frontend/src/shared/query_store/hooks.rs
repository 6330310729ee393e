use super::{QueryStore, Subscription, UpdateFn};
use contracts::shared::query::BalanceQuery;
use leptos::prelude::*;
use serde_json::Value;
use std::sync::Arc;

/// Query store shared with the component tree
#[derive(Clone)]
pub struct QueryStoreContext(pub Arc<dyn QueryStore>);

pub fn provide_query_store(store: Arc<dyn QueryStore>) {
    provide_context(QueryStoreContext(store));
}

pub fn use_query_store() -> Arc<dyn QueryStore> {
    use_context::<QueryStoreContext>()
        .expect("QueryStoreContext not found. Wrap the view with AccountViewProvider.")
        .0
}

/// Current value of the cell described by `query`.
///
/// Whenever `query` changes the previous subscription is dropped before the
/// new one is made; the last one goes away with the owning component.
pub fn use_query_value(query: Signal<BalanceQuery>) -> ReadSignal<Option<Value>> {
    let store = use_query_store();
    let (value, set_value) = signal(None::<Value>);

    Effect::new(move |previous: Option<Subscription>| {
        drop(previous);

        let query = query.get();
        set_value.set(store.current(&query.key));

        let on_update: UpdateFn = Arc::new(move |v| set_value.set(Some(v)));
        store.subscribe(&query, on_update)
    });

    value
}
