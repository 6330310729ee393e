use super::detailed_balance::DetailedBalance;
use super::view_model::amount_from_cell;
use crate::shared::query_store::use_query_value;
use crate::shared::settings::use_balance_settings;
use contracts::shared::i18n::BalanceLabel;
use contracts::shared::query::BalanceQuery;
use leptos::prelude::*;

/// Cleared and uncleared parts of the primary balance, side by side.
#[component]
pub fn MoreBalances(
    /// Query of the primary balance; both parts are derived from it
    balance_query: BalanceQuery,
) -> impl IntoView {
    let settings = use_balance_settings();

    let cleared_query = balance_query.cleared(true);
    let uncleared_query = balance_query.cleared(false);
    let cleared_key = cleared_query.key.clone();
    let uncleared_key = uncleared_query.key.clone();

    let cleared = use_query_value(Signal::stored(cleared_query));
    let uncleared = use_query_value(Signal::stored(uncleared_query));

    let cleared_amount = move || cleared.with(|v| amount_from_cell(v.as_ref(), &cleared_key));
    let uncleared_amount =
        move || uncleared.with(|v| amount_from_cell(v.as_ref(), &uncleared_key));

    view! {
        <div class="more-balances" style="display: flex; flex-direction: row; align-items: center;">
            {move || view! {
                <DetailedBalance
                    name=settings.label(BalanceLabel::Cleared)
                    balance=cleared_amount()
                />
            }}
            {move || view! {
                <DetailedBalance
                    name=settings.label(BalanceLabel::Uncleared)
                    balance=uncleared_amount()
                />
            }}
        </div>
    }
}
