pub mod balances;
pub mod format;
pub mod i18n;
pub mod query;
pub mod settings;
