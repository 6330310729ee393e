use serde::{Deserialize, Serialize};
use std::fmt;

/// Cache key of a reactive cell.
///
/// Keys are compared and hashed structurally, so two derived queries over the
/// same base never collide the way concatenated names can.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum QueryKey {
    /// Caller-named cell, e.g. the running balance of an account register
    Named { name: String },
    /// Base cell restricted to cleared or uncleared rows
    Cleared { base: Box<QueryKey>, cleared: bool },
    /// Selected rows that are split children of another selected row
    SelectedRows { ids: Vec<String> },
    /// Sum over the selected rows left after removing covered children
    SelectedSum { ids: Vec<String> },
}

impl QueryKey {
    pub fn named(name: impl Into<String>) -> Self {
        QueryKey::Named { name: name.into() }
    }

    pub fn cleared(&self, cleared: bool) -> Self {
        QueryKey::Cleared {
            base: Box::new(self.clone()),
            cleared,
        }
    }
}

impl fmt::Display for QueryKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            QueryKey::Named { name } => write!(f, "{}", name),
            QueryKey::Cleared { base, cleared: true } => write!(f, "{}:cleared", base),
            QueryKey::Cleared { base, cleared: false } => write!(f, "{}:uncleared", base),
            QueryKey::SelectedRows { ids } => write!(f, "selected-rows[{}]", ids.len()),
            QueryKey::SelectedSum { ids } => write!(f, "selected-sum[{}]", ids.len()),
        }
    }
}
