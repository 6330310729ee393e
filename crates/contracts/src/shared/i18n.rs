use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Locale {
    #[default]
    En,
    Ru,
}

impl Locale {
    pub fn all() -> Vec<Locale> {
        vec![Locale::En, Locale::Ru]
    }
}

/// Labels of the balance rows
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum BalanceLabel {
    Selected,
    Filtered,
    Cleared,
    Uncleared,
}

impl BalanceLabel {
    pub fn text(&self, locale: Locale) -> &'static str {
        match (locale, self) {
            (Locale::En, BalanceLabel::Selected) => "Selected balance:",
            (Locale::En, BalanceLabel::Filtered) => "Filtered balance:",
            (Locale::En, BalanceLabel::Cleared) => "Cleared total:",
            (Locale::En, BalanceLabel::Uncleared) => "Uncleared total:",
            (Locale::Ru, BalanceLabel::Selected) => "Баланс выбранных:",
            (Locale::Ru, BalanceLabel::Filtered) => "Баланс по фильтру:",
            (Locale::Ru, BalanceLabel::Cleared) => "Итого подтверждённых:",
            (Locale::Ru, BalanceLabel::Uncleared) => "Итого неподтверждённых:",
        }
    }
}
