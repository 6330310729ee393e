use super::filtered_balance::FilteredBalance;
use super::more_balances::MoreBalances;
use super::selected_balance::SelectedBalance;
use super::view_model::{
    amount_from_cell, chevron_style, chevron_visible, total_class, total_style, visible_sections,
};
use crate::shared::icons::icon;
use crate::shared::query_store::use_query_value;
use crate::shared::selection::use_selected_items;
use crate::shared::settings::use_balance_settings;
use contracts::domain::a001_account::AccountId;
use contracts::shared::query::BalanceQuery;
use leptos::prelude::*;

/// Balance summary of an account register.
///
/// Shows the primary balance as a toggle for the cleared/uncleared
/// breakdown, plus the selected and filtered balances when there is a
/// selection or an active filter. Expansion state belongs to the caller.
#[component]
pub fn Balances(
    /// Cell of the primary balance
    balance_query: BalanceQuery,
    /// Whether the cleared/uncleared breakdown is shown
    #[prop(into)]
    show_extra_balances: Signal<bool>,
    /// Called when the primary balance is clicked
    on_toggle_extra_balances: Callback<()>,
    /// Account of the register; `None` for the all-accounts view
    #[prop(optional)]
    account: Option<AccountId>,
    /// Whether the register has an active filter
    #[prop(into)]
    is_filtered: Signal<bool>,
    /// Total of the filtered rows
    #[prop(into)]
    filtered_amount: Signal<Option<i64>>,
) -> impl IntoView {
    let settings = use_balance_settings();
    let selected_items = use_selected_items();
    let (hovered, set_hovered) = signal(false);

    let total_key = balance_query.key.clone();
    let total_value = use_query_value(Signal::stored(balance_query.clone()));
    let total =
        Signal::derive(move || total_value.with(|v| amount_from_cell(v.as_ref(), &total_key)));

    let sections = Memo::new(move |_| {
        selected_items.with(|items| {
            visible_sections(show_extra_balances.get(), items, is_filtered.get())
        })
    });
    let chevron = move || {
        let shown = sections.get();
        chevron_style(
            shown.more,
            chevron_visible(hovered.get(), shown.selected, shown.more),
        )
    };

    view! {
        <div
            class="balances"
            style="display: flex; flex-direction: row; flex-wrap: wrap; align-items: center; margin-top: -5px; margin-left: -5px;"
        >
            <button
                class="balances__toggle"
                style="background: none; border: none; cursor: pointer; padding: 4px 6px; border-radius: 4px; display: flex; align-items: center;"
                on:click=move |_| request_toggle(&on_toggle_extra_balances)
                on:mouseenter=move |_| set_hovered.set(true)
                on:mouseleave=move |_| set_hovered.set(false)
            >
                <span class=move || total_class(total.get()) style=move || total_style(total.get())>
                    {move || settings.formatter().format_financial(total.get())}
                </span>
                <span class="balances__chevron" style=chevron>
                    {icon("chevron-right")}
                </span>
            </button>

            <Show when=move || sections.get().more>
                <MoreBalances balance_query=balance_query.clone() />
            </Show>

            <Show when=move || sections.get().selected>
                <SelectedBalance selected_items=selected_items account=account />
            </Show>

            <Show when=move || sections.get().filtered>
                <FilteredBalance filtered_amount=filtered_amount />
            </Show>
        </div>
    }
}

/// Expansion is owned by the caller; the toggle only asks for it.
pub fn request_toggle(on_toggle: &Callback<()>) {
    log::debug!("balances: extra balances toggle requested");
    on_toggle.run(());
}
