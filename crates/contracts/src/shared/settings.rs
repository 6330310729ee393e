//! Display settings of the balance summary

use super::format::{NumberFormat, SymbolPosition};
use super::i18n::Locale;
use serde::{Deserialize, Serialize};
use thiserror::Error;

#[derive(Debug, Error)]
pub enum SettingsError {
    #[error("invalid balance settings: {0}")]
    Parse(#[from] toml::de::Error),
    #[error("currency symbol must be at most {max} characters, got {got:?}")]
    SymbolTooLong { max: usize, got: String },
}

const MAX_SYMBOL_CHARS: usize = 4;

/// Settings document used when the host supplies none
pub const DEFAULT_SETTINGS: &str = r#"
locale = "en"
number_format = "comma-dot"
hide_fraction = false
currency_symbol = "$"
symbol_position = "before"
"#;

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct BalanceSettings {
    pub locale: Locale,
    pub number_format: NumberFormat,
    pub hide_fraction: bool,
    pub currency_symbol: String,
    pub symbol_position: SymbolPosition,
}

impl Default for BalanceSettings {
    fn default() -> Self {
        Self {
            locale: Locale::En,
            number_format: NumberFormat::CommaDot,
            hide_fraction: false,
            currency_symbol: "$".to_string(),
            symbol_position: SymbolPosition::Before,
        }
    }
}

impl BalanceSettings {
    /// Parse a TOML settings document; missing keys keep their defaults.
    pub fn from_toml(source: &str) -> Result<Self, SettingsError> {
        let settings: BalanceSettings = toml::from_str(source)?;
        settings.validate()?;
        Ok(settings)
    }

    fn validate(&self) -> Result<(), SettingsError> {
        if self.currency_symbol.chars().count() > MAX_SYMBOL_CHARS {
            return Err(SettingsError::SymbolTooLong {
                max: MAX_SYMBOL_CHARS,
                got: self.currency_symbol.clone(),
            });
        }
        Ok(())
    }
}

/// Settings from the host's document, or the embedded defaults.
pub fn load_settings(source: Option<&str>) -> Result<BalanceSettings, SettingsError> {
    BalanceSettings::from_toml(source.unwrap_or(DEFAULT_SETTINGS))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_settings_load() {
        let settings = load_settings(None).unwrap();
        assert_eq!(settings, BalanceSettings::default());
    }

    #[test]
    fn test_partial_document_keeps_defaults() {
        let settings = BalanceSettings::from_toml(
            r#"
            locale = "ru"
            number_format = "space-comma"
            currency_symbol = "₽"
            symbol_position = "after"
            "#,
        )
        .unwrap();

        assert_eq!(settings.locale, Locale::Ru);
        assert_eq!(settings.number_format, NumberFormat::SpaceComma);
        assert_eq!(settings.symbol_position, SymbolPosition::After);
        assert!(!settings.hide_fraction);
    }

    #[test]
    fn test_unknown_number_format_is_rejected() {
        let err = BalanceSettings::from_toml(r#"number_format = "dot-dot""#).unwrap_err();
        assert!(matches!(err, SettingsError::Parse(_)));
    }

    #[test]
    fn test_long_symbol_is_rejected() {
        let err = BalanceSettings::from_toml(r#"currency_symbol = "dollars""#).unwrap_err();
        assert!(matches!(err, SettingsError::SymbolTooLong { max: 4, .. }));
    }
}
