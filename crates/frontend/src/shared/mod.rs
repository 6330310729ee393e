pub mod icons;
pub mod query_store;
pub mod schedules;
pub mod selection;
pub mod settings;

#[cfg(test)]
pub(crate) mod testing;
