use crate::shared::query_store::{provide_query_store, QueryStore};
use crate::shared::schedules::SchedulesContext;
use crate::shared::selection::SelectionContext;
use crate::shared::settings::SettingsContext;
use contracts::shared::settings::BalanceSettings;
use leptos::prelude::*;
use std::sync::Arc;

/// Provides everything the account view reads to its children.
///
/// Hosts that feed schedules or drive the selection pass their own contexts;
/// otherwise fresh ones are created (schedules start out loading).
#[component]
pub fn AccountViewProvider(
    /// Store delivering the balance cells
    store: Arc<dyn QueryStore>,
    #[prop(optional)]
    settings: Option<BalanceSettings>,
    #[prop(optional)]
    schedules: Option<SchedulesContext>,
    #[prop(optional)]
    selection: Option<SelectionContext>,
    children: Children,
) -> impl IntoView {
    provide_query_store(store);
    provide_context(schedules.unwrap_or_default());
    provide_context(selection.unwrap_or_default());
    provide_context(SettingsContext::new(settings.unwrap_or_default()));

    children()
}
