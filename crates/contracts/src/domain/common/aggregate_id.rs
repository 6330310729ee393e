use serde::{de::DeserializeOwned, Serialize};
use std::hash::Hash;

/// Identifier types of the aggregates read by the account view
pub trait AggregateId:
    Clone + Copy + PartialEq + Eq + Hash + Serialize + DeserializeOwned + std::fmt::Debug
{
    /// Render the id in its wire form
    fn as_string(&self) -> String;

    /// Parse the id from its wire form
    fn from_string(s: &str) -> Result<Self, String>;
}

