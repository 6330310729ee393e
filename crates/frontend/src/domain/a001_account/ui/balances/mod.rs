//! Balance summary in the header of an account register.

pub mod detailed_balance;
pub mod filtered_balance;
pub mod more_balances;
pub mod selected_balance;
pub mod view;
pub mod view_model;

pub use detailed_balance::DetailedBalance;
pub use filtered_balance::FilteredBalance;
pub use more_balances::MoreBalances;
pub use selected_balance::{use_selected_balance, SelectedBalance};
pub use view::Balances;
