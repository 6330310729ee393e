use super::key::QueryKey;
use serde::{Deserialize, Serialize};
use serde_json::Value;

/// Row filter; a query's filters are combined with AND.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "op", rename_all = "snake_case")]
pub enum Filter {
    Eq { field: String, value: Value },
    OneOf { field: String, values: Vec<String> },
}

impl Filter {
    pub fn eq(field: &str, value: impl Into<Value>) -> Self {
        Filter::Eq {
            field: field.to_string(),
            value: value.into(),
        }
    }

    pub fn one_of<I, S>(field: &str, values: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Filter::OneOf {
            field: field.to_string(),
            values: values.into_iter().map(Into::into).collect(),
        }
    }
}

/// How split transactions appear in the result set
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SplitsMode {
    /// Child rows only, parents hidden
    #[default]
    Inline,
    /// Parents with their children nested
    Grouped,
    /// Parents and children as separate rows
    All,
    /// Parents only
    None,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "fn", rename_all = "snake_case")]
pub enum Aggregate {
    Sum { field: String },
}

/// Read descriptor handed to the reactive store
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Query {
    pub table: String,
    #[serde(default)]
    pub filters: Vec<Filter>,
    #[serde(default)]
    pub select: Vec<String>,
    #[serde(default)]
    pub splits: SplitsMode,
    #[serde(default)]
    pub calculate: Option<Aggregate>,
}

impl Query {
    pub fn table(name: &str) -> Self {
        Self {
            table: name.to_string(),
            filters: Vec::new(),
            select: Vec::new(),
            splits: SplitsMode::default(),
            calculate: None,
        }
    }

    pub fn filter(mut self, filter: Filter) -> Self {
        self.filters.push(filter);
        self
    }

    pub fn select<I, S>(mut self, fields: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.select = fields.into_iter().map(Into::into).collect();
        self
    }

    pub fn options_splits(mut self, splits: SplitsMode) -> Self {
        self.splits = splits;
        self
    }

    pub fn calculate_sum(mut self, field: &str) -> Self {
        self.calculate = Some(Aggregate::Sum {
            field: field.to_string(),
        });
        self
    }
}

/// A named cell of the reactive store: the key it is cached under plus the
/// query that computes it.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct BalanceQuery {
    pub key: QueryKey,
    pub query: Query,
}

impl BalanceQuery {
    pub fn new(key: QueryKey, query: Query) -> Self {
        Self { key, query }
    }

    /// Same cell restricted to cleared (`true`) or uncleared (`false`) rows.
    pub fn cleared(&self, cleared: bool) -> Self {
        Self {
            key: self.key.cleared(cleared),
            query: self.query.clone().filter(Filter::eq("cleared", cleared)),
        }
    }
}
