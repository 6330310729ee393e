pub mod aggregate;

pub use aggregate::AccountId;
