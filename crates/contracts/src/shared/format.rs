//! Currency formatting of minor-unit amounts

use super::settings::BalanceSettings;
use serde::{Deserialize, Serialize};

/// Digit grouping and decimal separator convention
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum NumberFormat {
    /// 1,234.56
    #[default]
    CommaDot,
    /// 1.234,56
    DotComma,
    /// 1 234,56
    SpaceComma,
    /// 1’234.56
    ApostropheDot,
    /// 1,23,456.78
    CommaDotIn,
}

impl NumberFormat {
    pub fn code(&self) -> &'static str {
        match self {
            NumberFormat::CommaDot => "comma-dot",
            NumberFormat::DotComma => "dot-comma",
            NumberFormat::SpaceComma => "space-comma",
            NumberFormat::ApostropheDot => "apostrophe-dot",
            NumberFormat::CommaDotIn => "comma-dot-in",
        }
    }

    pub fn all() -> Vec<NumberFormat> {
        vec![
            NumberFormat::CommaDot,
            NumberFormat::DotComma,
            NumberFormat::SpaceComma,
            NumberFormat::ApostropheDot,
            NumberFormat::CommaDotIn,
        ]
    }

    fn separators(&self) -> (&'static str, &'static str) {
        match self {
            NumberFormat::CommaDot | NumberFormat::CommaDotIn => (",", "."),
            NumberFormat::DotComma => (".", ","),
            NumberFormat::SpaceComma => (" ", ","),
            NumberFormat::ApostropheDot => ("’", "."),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SymbolPosition {
    #[default]
    Before,
    After,
}

/// Formats amounts of the "financial" value kind
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CurrencyFormatter {
    pub number_format: NumberFormat,
    pub hide_fraction: bool,
    pub symbol: String,
    pub symbol_position: SymbolPosition,
}

impl Default for CurrencyFormatter {
    fn default() -> Self {
        Self::from_settings(&BalanceSettings::default())
    }
}

impl CurrencyFormatter {
    pub fn from_settings(settings: &BalanceSettings) -> Self {
        Self {
            number_format: settings.number_format,
            hide_fraction: settings.hide_fraction,
            symbol: settings.currency_symbol.clone(),
            symbol_position: settings.symbol_position,
        }
    }

    /// Signed number without the currency symbol, e.g. `-1,234.56`.
    pub fn format_number(&self, amount: i64) -> String {
        let (group_sep, decimal_sep) = self.number_format.separators();
        let magnitude = amount.unsigned_abs();

        let (whole, fraction) = if self.hide_fraction {
            ((magnitude + 50) / 100, None)
        } else {
            (magnitude / 100, Some(magnitude % 100))
        };

        let grouped = group_digits(
            &whole.to_string(),
            group_sep,
            self.number_format == NumberFormat::CommaDotIn,
        );
        let sign = if amount < 0 && (whole > 0 || fraction.unwrap_or(0) > 0) {
            "-"
        } else {
            ""
        };

        match fraction {
            Some(cents) => format!("{}{}{}{:02}", sign, grouped, decimal_sep, cents),
            None => format!("{}{}", sign, grouped),
        }
    }

    /// Amount with currency symbol; a missing amount formats as zero.
    pub fn format_financial(&self, amount: Option<i64>) -> String {
        let amount = amount.unwrap_or(0);
        let number = self.format_number(amount);
        if self.symbol.is_empty() {
            return number;
        }

        match self.symbol_position {
            SymbolPosition::After => format!("{} {}", number, self.symbol),
            SymbolPosition::Before => match number.strip_prefix('-') {
                Some(unsigned) => format!("-{}{}", self.symbol, unsigned),
                None => format!("{}{}", self.symbol, number),
            },
        }
    }
}

/// Insert `sep` between digit groups: thousands, or lakh/crore when `indian`.
fn group_digits(digits: &str, sep: &str, indian: bool) -> String {
    let chars: Vec<char> = digits.chars().collect();
    let len = chars.len();
    let mut result = String::new();

    for (i, c) in chars.iter().enumerate() {
        let remaining = len - i;
        if i > 0 {
            let boundary = if indian {
                remaining == 3 || (remaining > 3 && (remaining - 3) % 2 == 0)
            } else {
                remaining % 3 == 0
            };
            if boundary {
                result.push_str(sep);
            }
        }
        result.push(*c);
    }

    result
}
