//! Query criteria value objects.
//!
//! A `Criteria` is the filter a repository fetch or a choose dialog is
//! scoped by: a list of field conditions. An empty condition list is not
//! a valid query and callers fall back to their default flow instead of
//! issuing one.

use serde::{Deserialize, Serialize};

/// Comparison operation of a single condition.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum ConditionOperation {
    Equal,
    NotEqual,
    Contain,
    Start,
    GreaterThan,
    LessThan,
}

/// One field filter of a query.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Condition {
    /// Field or business-object alias the condition applies to.
    pub alias: String,
    /// Comparison operation.
    pub operation: ConditionOperation,
    /// Comparison value, stringly typed as on the wire.
    pub value: String,
}

impl Condition {
    pub fn new(
        alias: impl Into<String>,
        operation: ConditionOperation,
        value: impl Into<String>,
    ) -> Self {
        Self {
            alias: alias.into(),
            operation,
            value: value.into(),
        }
    }
}

/// Filter for a repository fetch.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Criteria {
    pub conditions: Vec<Condition>,
}

impl Criteria {
    pub fn new() -> Self {
        Self::default()
    }

    /// Adds a condition, builder style.
    pub fn with_condition(mut self, condition: Condition) -> Self {
        self.conditions.push(condition);
        self
    }

    /// A criteria without conditions does not select anything.
    pub fn is_usable(&self) -> bool {
        !self.conditions.is_empty()
    }
}
