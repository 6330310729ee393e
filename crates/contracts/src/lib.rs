//! Shared data model of the account balance summary: accounts, schedules,
//! query descriptors and the balance arithmetic behind the account view.

pub mod domain;
pub mod shared;
