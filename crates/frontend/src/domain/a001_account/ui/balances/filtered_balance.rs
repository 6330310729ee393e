use super::detailed_balance::DetailedBalance;
use super::view_model::filtered_amount_or_zero;
use crate::shared::settings::use_balance_settings;
use contracts::shared::i18n::BalanceLabel;
use leptos::prelude::*;

/// Total of the rows matching the register's active filter.
///
/// The amount is computed by the register; no query is issued here.
#[component]
pub fn FilteredBalance(
    #[prop(into)]
    filtered_amount: Signal<Option<i64>>,
) -> impl IntoView {
    let settings = use_balance_settings();

    move || {
        view! {
            <DetailedBalance
                name=settings.label(BalanceLabel::Filtered)
                balance=Some(filtered_amount_or_zero(filtered_amount.get()))
                is_exact=true
            />
        }
    }
}
