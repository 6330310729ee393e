use super::detailed_balance::DetailedBalance;
use super::view_model::{selected_sum_for, selected_value};
use crate::shared::query_store::use_query_value;
use crate::shared::schedules::use_cached_schedules;
use crate::shared::settings::use_balance_settings;
use contracts::domain::a001_account::AccountId;
use contracts::shared::balances::{covered_rows_query, BalanceValue};
use contracts::shared::i18n::BalanceLabel;
use leptos::prelude::*;
use std::collections::BTreeSet;

/// Reactive balance of the selected rows.
///
/// Subscribes to the covered-rows cell, then to the sum over the remaining
/// ids. Both descriptors are memoized so a store update only re-subscribes
/// when the ids actually change.
pub fn use_selected_balance(
    selected_items: Signal<BTreeSet<String>>,
    account: Option<AccountId>,
) -> Signal<Option<BalanceValue>> {
    let schedules = use_cached_schedules();

    let rows_query = Memo::new(move |_| selected_items.with(covered_rows_query));
    let rows = use_query_value(rows_query.into());

    let sum_query = Memo::new(move |_| {
        rows_query.with(|q| {
            rows.with(|v| selected_items.with(|s| selected_sum_for(s, v.as_ref(), &q.key)))
        })
    });
    let direct = use_query_value(sum_query.into());

    Signal::derive(move || {
        schedules.state.with(|state| {
            sum_query.with(|q| {
                direct.with(|d| {
                    selected_items
                        .with(|s| selected_value(state, d.as_ref(), &q.key, s, account.as_ref()))
                })
            })
        })
    })
}

/// Balance of the selected register rows.
///
/// Posted rows are summed by the store, skipping split children whose parent
/// is selected too. Selected previews of upcoming schedule occurrences are
/// projected from the schedules cache. Renders nothing while the cache loads
/// or while neither part is known.
#[component]
pub fn SelectedBalance(
    #[prop(into)]
    selected_items: Signal<BTreeSet<String>>,
    /// Account of the register; `None` for the all-accounts view
    account: Option<AccountId>,
) -> impl IntoView {
    let settings = use_balance_settings();
    let value = use_selected_balance(selected_items, account);

    move || {
        value.get().map(|value| {
            view! {
                <DetailedBalance
                    name=settings.label(BalanceLabel::Selected)
                    balance=Some(value.amount)
                    is_exact=value.is_exact
                />
            }
        })
    }
}
