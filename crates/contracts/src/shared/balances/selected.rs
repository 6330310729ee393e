//! Balance of the rows selected in the register.
//!
//! The selection mixes posted transaction ids and preview ids of upcoming
//! schedule occurrences. Posted rows are summed by the store; previews are
//! projected from the schedules cache here and merged in.

use super::value::BalanceValue;
use crate::domain::a001_account::AccountId;
use crate::domain::a002_schedule::{schedule_id_from_preview, Schedule, ScheduleId};
use crate::shared::query::{BalanceQuery, Filter, Query, QueryKey, SplitsMode};
use std::collections::BTreeSet;

const TRANSACTIONS: &str = "transactions";

/// Selected rows whose parent is selected as well.
///
/// Summing with all splits counts a parent together with its children, so
/// such children must be left out of the sum or they are counted twice.
pub fn covered_rows_query(selection: &BTreeSet<String>) -> BalanceQuery {
    let ids: Vec<String> = selection.iter().cloned().collect();
    let query = Query::table(TRANSACTIONS)
        .filter(Filter::one_of("id", ids.clone()))
        .filter(Filter::one_of("parent_id", ids.clone()))
        .select(["id"]);

    BalanceQuery::new(QueryKey::SelectedRows { ids }, query)
}

/// Selection minus the covered children, in selection order.
pub fn final_ids(selection: &BTreeSet<String>, covered: &[String]) -> Vec<String> {
    let covered: BTreeSet<&str> = covered.iter().map(String::as_str).collect();
    selection
        .iter()
        .filter(|id| !covered.contains(id.as_str()))
        .cloned()
        .collect()
}

pub fn selected_sum_query(final_ids: &[String]) -> BalanceQuery {
    let query = Query::table(TRANSACTIONS)
        .filter(Filter::one_of("id", final_ids.iter().cloned()))
        .options_splits(SplitsMode::All)
        .calculate_sum("amount");

    BalanceQuery::new(
        QueryKey::SelectedSum {
            ids: final_ids.to_vec(),
        },
        query,
    )
}

pub fn preview_schedule_ids(selection: &BTreeSet<String>) -> Vec<ScheduleId> {
    selection
        .iter()
        .filter_map(|id| schedule_id_from_preview(id))
        .collect()
}

/// Projected contribution of the selected schedule previews
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ScheduleProjection {
    /// `None` when no selected preview matched a known schedule
    pub total: Option<i64>,
    pub is_exact: bool,
}

pub fn project_schedules(
    schedules: &[Schedule],
    preview_ids: &[ScheduleId],
    account: Option<&AccountId>,
) -> ScheduleProjection {
    let mut projection = ScheduleProjection {
        total: None,
        is_exact: true,
    };

    for schedule in schedules.iter().filter(|s| preview_ids.contains(&s.id)) {
        if schedule.amount.is_range() {
            projection.is_exact = false;
        }
        let running = projection.total.unwrap_or(0);
        // `None` is the all-accounts view: every occurrence counts positively.
        projection.total = Some(running.saturating_add(schedule.contribution_to(account)));
    }

    projection
}

/// Combine the store's sum with the schedule projection.
///
/// `None` only when both sides are `None`. A missing projection leaves the
/// direct sum as is.
pub fn merge_balances(direct: Option<i64>, scheduled: Option<i64>) -> Option<i64> {
    match (direct, scheduled) {
        (None, None) => None,
        (None, Some(scheduled)) => Some(scheduled),
        (Some(direct), None) => Some(direct),
        (Some(direct), Some(scheduled)) => Some(direct.saturating_add(scheduled)),
    }
}

/// Everything after the store has answered: project the previews and merge.
pub fn selected_balance(
    direct: Option<i64>,
    selection: &BTreeSet<String>,
    schedules: &[Schedule],
    account: Option<&AccountId>,
) -> Option<BalanceValue> {
    let previews = preview_schedule_ids(selection);
    let projection = project_schedules(schedules, &previews, account);

    merge_balances(direct, projection.total).map(|amount| BalanceValue {
        amount,
        is_exact: projection.is_exact,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::a002_schedule::{preview_id, ScheduleAmount};
    use crate::shared::query::Aggregate;

    fn selection(ids: &[&str]) -> BTreeSet<String> {
        ids.iter().map(|s| s.to_string()).collect()
    }

    fn schedule(account: Option<AccountId>, amount: ScheduleAmount) -> Schedule {
        Schedule::new(ScheduleId::new_v4(), account, amount)
    }

    #[test]
    fn test_covered_rows_query_requires_both_id_and_parent() {
        let q = covered_rows_query(&selection(&["parent", "child"]));

        assert_eq!(
            q.query.filters,
            vec![
                Filter::one_of("id", ["child", "parent"]),
                Filter::one_of("parent_id", ["child", "parent"]),
            ]
        );
        assert_eq!(q.query.select, vec!["id".to_string()]);
        assert_eq!(
            q.key,
            QueryKey::SelectedRows {
                ids: vec!["child".into(), "parent".into()]
            }
        );
    }

    #[test]
    fn test_final_ids_drop_covered_children() {
        let selected = selection(&["parent", "child-1", "child-2", "other"]);
        let covered = vec!["child-1".to_string(), "child-2".to_string()];

        assert_eq!(final_ids(&selected, &covered), vec!["other", "parent"]);
    }

    #[test]
    fn test_final_ids_without_covered_rows() {
        let selected = selection(&["tx1"]);
        assert_eq!(final_ids(&selected, &[]), vec!["tx1"]);
    }

    #[test]
    fn test_selected_sum_query_includes_all_splits() {
        let q = selected_sum_query(&["tx1".to_string()]);

        assert_eq!(q.query.splits, SplitsMode::All);
        assert_eq!(
            q.query.calculate,
            Some(Aggregate::Sum {
                field: "amount".into()
            })
        );
        assert_eq!(q.key, QueryKey::SelectedSum { ids: vec!["tx1".into()] });
    }

    #[test]
    fn test_preview_schedule_ids_skip_transactions() {
        let id = ScheduleId::new_v4();
        let selected = selection(&["tx1", &preview_id(&id), "preview/bogus"]);

        assert_eq!(preview_schedule_ids(&selected), vec![id]);
    }

    #[test]
    fn test_projection_signs_and_exactness() {
        let own = AccountId::new_v4();
        let other = AccountId::new_v4();
        let income = schedule(Some(own), ScheduleAmount::Is { amount: 5000 });
        let transfer = schedule(Some(other), ScheduleAmount::Is { amount: 2000 });
        let unselected = schedule(Some(own), ScheduleAmount::IsBetween { num1: 1, num2: 9 });
        let schedules = vec![income.clone(), transfer.clone(), unselected];

        let projection = project_schedules(&schedules, &[income.id, transfer.id], Some(&own));

        assert_eq!(projection.total, Some(3000));
        assert!(projection.is_exact);
    }

    #[test]
    fn test_projection_range_marks_inexact() {
        let own = AccountId::new_v4();
        let bill = schedule(Some(own), ScheduleAmount::IsBetween { num1: 1000, num2: 2000 });

        let projection = project_schedules(&[bill.clone()], &[bill.id], Some(&own));

        assert_eq!(projection.total, Some(1500));
        assert!(!projection.is_exact);
    }

    #[test]
    fn test_projection_all_accounts_view_counts_every_leg_positively() {
        let checking = AccountId::new_v4();
        let savings = AccountId::new_v4();
        let salary = schedule(Some(checking), ScheduleAmount::Is { amount: 5000 });
        let deposit = schedule(Some(savings), ScheduleAmount::Is { amount: -2000 });
        let unassigned = schedule(None, ScheduleAmount::Is { amount: 300 });
        let ids = [salary.id, deposit.id, unassigned.id];
        let schedules = vec![salary, deposit, unassigned];

        // with an account in view the savings leg flips sign
        assert_eq!(project_schedules(&schedules, &ids, Some(&checking)).total, Some(6700));
        // without one, nothing is "another account"
        assert_eq!(project_schedules(&schedules, &ids, None).total, Some(3300));
    }

    #[test]
    fn test_merge_balances_saturates() {
        assert_eq!(merge_balances(Some(i64::MAX), Some(1)), Some(i64::MAX));
    }

    #[test]
    fn test_projection_without_matches() {
        let bill = schedule(None, ScheduleAmount::Is { amount: 100 });
        let projection = project_schedules(&[bill], &[ScheduleId::new_v4()], None);

        assert_eq!(projection.total, None);
        assert!(projection.is_exact);
    }

    #[test]
    fn test_merge_balances() {
        assert_eq!(merge_balances(None, None), None);
        assert_eq!(merge_balances(None, Some(-300)), Some(-300));
        assert_eq!(merge_balances(Some(1000), None), Some(1000));
        assert_eq!(merge_balances(Some(1000), Some(-300)), Some(700));
        assert_eq!(merge_balances(Some(0), None), Some(0));
    }

    #[test]
    fn test_selected_balance_plain_transaction() {
        let value = selected_balance(Some(-2500), &selection(&["tx1"]), &[], None);
        assert_eq!(value, Some(BalanceValue::exact(-2500)));
    }

    #[test]
    fn test_selected_balance_single_range_preview() {
        let own = AccountId::new_v4();
        let bill = schedule(Some(own), ScheduleAmount::IsBetween { num1: 1000, num2: 2000 });
        let selected = selection(&[&preview_id(&bill.id)]);

        let value = selected_balance(None, &selected, &[bill], Some(&own));

        assert_eq!(value, Some(BalanceValue::approximate(1500)));
    }

    #[test]
    fn test_selected_balance_mixes_posted_and_previews() {
        let own = AccountId::new_v4();
        let other = AccountId::new_v4();
        let transfer = schedule(Some(other), ScheduleAmount::Is { amount: 400 });
        let selected = selection(&["tx1", &preview_id(&transfer.id)]);

        let value = selected_balance(Some(-2500), &selected, &[transfer], Some(&own));

        assert_eq!(value, Some(BalanceValue::exact(-2900)));
    }

    #[test]
    fn test_selected_balance_nothing_known() {
        let value = selected_balance(None, &selection(&["tx1"]), &[], None);
        assert_eq!(value, None);
    }
}
