use super::view_model::balance_text;
use crate::shared::settings::use_balance_settings;
use leptos::prelude::*;
use thaw::{Badge, BadgeAppearance, BadgeColor};

/// Labeled amount in a pill, e.g. `Cleared total: $30.00`.
///
/// Approximate amounts get a `~ ` prefix.
#[component]
pub fn DetailedBalance(
    /// Localized row label
    #[prop(into)]
    name: String,
    /// Amount in minor units; `None` shows as zero
    balance: Option<i64>,
    /// False when the amount includes an averaged range schedule
    #[prop(default = true)]
    is_exact: bool,
) -> impl IntoView {
    let settings = use_balance_settings();
    let text = move || balance_text(&settings.formatter(), balance, is_exact);

    view! {
        <div
            class="detailed-balance"
            style="display: inline-flex; align-items: center; gap: 6px; margin-left: 15px; font-size: 13px; color: var(--color-text-secondary);"
        >
            <span class="detailed-balance__name">{name}</span>
            <Badge appearance=BadgeAppearance::Tint color=BadgeColor::Informative>
                <span class="detailed-balance__amount" style="font-weight: 600;">{text}</span>
            </Badge>
        </div>
    }
}
