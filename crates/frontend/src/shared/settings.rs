use contracts::shared::format::CurrencyFormatter;
use contracts::shared::i18n::BalanceLabel;
use contracts::shared::settings::BalanceSettings;
use leptos::prelude::*;

/// Display settings of the balance summary
#[derive(Clone, Copy)]
pub struct SettingsContext {
    pub settings: RwSignal<BalanceSettings>,
}

impl SettingsContext {
    pub fn new(settings: BalanceSettings) -> Self {
        Self {
            settings: RwSignal::new(settings),
        }
    }

    pub fn formatter(&self) -> CurrencyFormatter {
        self.settings.with(CurrencyFormatter::from_settings)
    }

    pub fn label(&self, label: BalanceLabel) -> &'static str {
        self.settings.with(|s| label.text(s.locale))
    }
}

pub fn use_balance_settings() -> SettingsContext {
    use_context::<SettingsContext>()
        .expect("SettingsContext not found. Wrap the view with AccountViewProvider.")
}
