//! Balance arithmetic of the account view.

pub mod selected;
pub mod value;

pub use selected::{
    covered_rows_query, final_ids, merge_balances, preview_schedule_ids, project_schedules,
    selected_balance, selected_sum_query, ScheduleProjection,
};
pub use value::BalanceValue;
