//! Display decisions of the balance summary, kept free of reactive state.

use crate::shared::schedules::SchedulesState;
use contracts::domain::a001_account::AccountId;
use contracts::shared::balances::{final_ids, selected_balance, selected_sum_query, BalanceValue};
use contracts::shared::format::CurrencyFormatter;
use contracts::shared::query::{decode_amount, decode_row_ids, BalanceQuery, QueryKey};
use serde_json::Value;
use std::collections::BTreeSet;

/// Marker in front of totals that include an averaged range schedule
pub const APPROXIMATE_PREFIX: &str = "~ ";

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BalanceTone {
    Negative,
    Positive,
    Zero,
}

impl BalanceTone {
    /// Unknown amounts are shown in the neutral tone.
    pub fn of(amount: Option<i64>) -> Self {
        match amount {
            Some(a) if a < 0 => BalanceTone::Negative,
            Some(a) if a > 0 => BalanceTone::Positive,
            _ => BalanceTone::Zero,
        }
    }

    pub fn modifier(&self) -> &'static str {
        match self {
            BalanceTone::Negative => "balances__total--negative",
            BalanceTone::Positive => "balances__total--positive",
            BalanceTone::Zero => "balances__total--zero",
        }
    }

    pub fn color(&self) -> &'static str {
        match self {
            BalanceTone::Negative => "var(--color-error-700)",
            BalanceTone::Positive => "var(--color-success-700)",
            BalanceTone::Zero => "var(--color-text-secondary)",
        }
    }
}

pub fn total_class(amount: Option<i64>) -> String {
    format!("balances__total {}", BalanceTone::of(amount).modifier())
}

pub fn total_style(amount: Option<i64>) -> String {
    format!(
        "font-size: 22px; font-weight: 400; color: {};",
        BalanceTone::of(amount).color()
    )
}

/// The chevron shows while the toggle is hovered or there is something
/// beyond the primary total on screen.
pub fn chevron_visible(hovered: bool, has_selection: bool, expanded: bool) -> bool {
    hovered || has_selection || expanded
}

pub fn chevron_style(expanded: bool, visible: bool) -> String {
    format!(
        "display: inline-flex; margin-left: 5px; transition: transform 0.1s, opacity 0.1s; transform: rotate({}deg); opacity: {};",
        if expanded { 90 } else { 0 },
        if visible { 1 } else { 0 },
    )
}

pub fn balance_text(formatter: &CurrencyFormatter, balance: Option<i64>, is_exact: bool) -> String {
    let amount = formatter.format_financial(balance);
    if is_exact {
        amount
    } else {
        format!("{}{}", APPROXIMATE_PREFIX, amount)
    }
}

/// Sections shown next to the primary balance, each on its own condition.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct VisibleSections {
    pub more: bool,
    pub selected: bool,
    pub filtered: bool,
}

pub fn visible_sections(
    expanded: bool,
    selection: &BTreeSet<String>,
    is_filtered: bool,
) -> VisibleSections {
    VisibleSections {
        more: expanded,
        selected: !selection.is_empty(),
        filtered: is_filtered,
    }
}

/// Sum query over the selection minus the rows reported by the covered-rows
/// cell.
pub fn selected_sum_for(
    selection: &BTreeSet<String>,
    rows: Option<&Value>,
    rows_key: &QueryKey,
) -> BalanceQuery {
    let covered = row_ids_from_cell(rows, rows_key);
    selected_sum_query(&final_ids(selection, &covered))
}

/// What the selected balance shows, if anything.
///
/// Nothing while the schedules cache is loading, even if the store already
/// delivered the posted sum.
pub fn selected_value(
    schedules: &SchedulesState,
    direct: Option<&Value>,
    sum_key: &QueryKey,
    selection: &BTreeSet<String>,
    account: Option<&AccountId>,
) -> Option<BalanceValue> {
    if schedules.is_loading {
        return None;
    }
    let direct = amount_from_cell(direct, sum_key);
    selected_balance(direct, selection, &schedules.schedules, account)
}

/// Filtered totals arrive as plain numbers; nothing there means zero.
pub fn filtered_amount_or_zero(amount: Option<i64>) -> i64 {
    amount.unwrap_or(0)
}

/// Amount of an aggregate cell; malformed cells read as unknown.
pub fn amount_from_cell(value: Option<&Value>, key: &QueryKey) -> Option<i64> {
    decode_amount(value).unwrap_or_else(|err| {
        log::warn!("cell {}: {}", key, err);
        None
    })
}

/// Row ids of a projected row-set cell; malformed cells read as empty.
pub fn row_ids_from_cell(value: Option<&Value>, key: &QueryKey) -> Vec<String> {
    decode_row_ids(value).unwrap_or_else(|err| {
        log::warn!("cell {}: {}", key, err);
        Vec::new()
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_tone() {
        assert_eq!(BalanceTone::of(Some(-1)), BalanceTone::Negative);
        assert_eq!(BalanceTone::of(Some(1)), BalanceTone::Positive);
        assert_eq!(BalanceTone::of(Some(0)), BalanceTone::Zero);
        assert_eq!(BalanceTone::of(None), BalanceTone::Zero);
        assert_eq!(total_class(Some(-2500)), "balances__total balances__total--negative");
    }

    #[test]
    fn test_chevron_visibility() {
        assert!(!chevron_visible(false, false, false));
        assert!(chevron_visible(true, false, false));
        assert!(chevron_visible(false, true, false));
        assert!(chevron_visible(false, false, true));
    }

    #[test]
    fn test_chevron_rotation() {
        let expanded = chevron_style(true, true);
        assert!(expanded.contains("rotate(90deg)"));
        assert!(expanded.contains("opacity: 1;"));

        let collapsed = chevron_style(false, false);
        assert!(collapsed.contains("rotate(0deg)"));
        assert!(collapsed.contains("opacity: 0;"));
    }

    #[test]
    fn test_balance_text() {
        let f = CurrencyFormatter::default();
        assert_eq!(balance_text(&f, Some(-2500), true), "-$25.00");
        assert_eq!(balance_text(&f, Some(1500), false), "~ $15.00");
        assert_eq!(balance_text(&f, Some(0), true), "$0.00");
    }

    #[test]
    fn test_filtered_amount_or_zero() {
        assert_eq!(filtered_amount_or_zero(None), 0);
        assert_eq!(filtered_amount_or_zero(Some(0)), 0);
        assert_eq!(filtered_amount_or_zero(Some(-120)), -120);
    }

    fn selection(ids: &[&str]) -> BTreeSet<String> {
        ids.iter().map(|s| s.to_string()).collect()
    }

    #[test]
    fn test_sections_are_independent() {
        let none = BTreeSet::new();
        let some = selection(&["tx1"]);

        assert_eq!(visible_sections(false, &none, false), VisibleSections::default());
        assert_eq!(
            visible_sections(true, &none, false),
            VisibleSections { more: true, selected: false, filtered: false }
        );
        assert_eq!(
            visible_sections(false, &some, false),
            VisibleSections { more: false, selected: true, filtered: false }
        );
        assert_eq!(
            visible_sections(false, &none, true),
            VisibleSections { more: false, selected: false, filtered: true }
        );
        assert_eq!(
            visible_sections(true, &some, true),
            VisibleSections { more: true, selected: true, filtered: true }
        );
    }

    #[test]
    fn test_selected_sum_for_skips_covered_children() {
        let selected = selection(&["parent", "child"]);
        let key = QueryKey::SelectedRows { ids: vec!["child".into(), "parent".into()] };

        let q = selected_sum_for(&selected, Some(&json!([{ "id": "child" }])), &key);
        assert_eq!(q.key, QueryKey::SelectedSum { ids: vec!["parent".into()] });

        // rows not delivered yet: sum over the whole selection
        let q = selected_sum_for(&selected, None, &key);
        assert_eq!(
            q.key,
            QueryKey::SelectedSum { ids: vec!["child".into(), "parent".into()] }
        );
    }

    #[test]
    fn test_selected_value_waits_for_schedules() {
        let selected = selection(&["tx1"]);
        let key = QueryKey::SelectedSum { ids: vec!["tx1".into()] };
        let direct = json!(-2500);

        assert_eq!(
            selected_value(&SchedulesState::loading(), Some(&direct), &key, &selected, None),
            None
        );
        assert_eq!(
            selected_value(&SchedulesState::loaded(vec![]), Some(&direct), &key, &selected, None),
            Some(BalanceValue::exact(-2500))
        );
    }

    #[test]
    fn test_selected_value_unknown_sum_renders_nothing() {
        let selected = selection(&["tx1"]);
        let key = QueryKey::SelectedSum { ids: vec!["tx1".into()] };

        assert_eq!(
            selected_value(&SchedulesState::loaded(vec![]), None, &key, &selected, None),
            None
        );
    }

    #[test]
    fn test_malformed_cells_degrade() {
        let key = QueryKey::named("balance");
        assert_eq!(amount_from_cell(Some(&json!("oops")), &key), None);
        assert_eq!(amount_from_cell(Some(&json!(3000)), &key), Some(3000));
        assert_eq!(row_ids_from_cell(Some(&json!(7)), &key), Vec::<String>::new());
        assert_eq!(
            row_ids_from_cell(Some(&json!([{ "id": "child" }])), &key),
            vec!["child".to_string()]
        );
    }
}
