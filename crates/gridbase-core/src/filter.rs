//! Filter conditions and conditional color rules

use std::fmt;

use serde::{Deserialize, Serialize};

use crate::column::ColumnType;
use crate::value::Value;

/// Comparison operator for filter conditions and color rules
///
/// The enum is closed and every evaluator matches it exhaustively, so an
/// operator the pipeline does not understand cannot slip through.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum FilterOperator {
    /// Strict value equality
    Equals,
    /// Strict value inequality
    NotEquals,
    /// Case-insensitive substring match
    Contains,
    /// Negated substring match
    NotContains,
    /// Case-insensitive prefix match
    StartsWith,
    /// Case-insensitive suffix match
    EndsWith,
    /// Cell is missing or the empty string
    IsEmpty,
    /// Cell has a non-empty value
    IsNotEmpty,
    /// Numeric greater-than
    Gt,
    /// Numeric less-than
    Lt,
    /// Numeric greater-or-equal
    Gte,
    /// Numeric less-or-equal
    Lte,
}

impl FilterOperator {
    /// Human-readable label, as shown in the filter builder UI
    pub fn label(&self) -> &'static str {
        match self {
            FilterOperator::Equals => "is",
            FilterOperator::NotEquals => "is not",
            FilterOperator::Contains => "contains",
            FilterOperator::NotContains => "does not contain",
            FilterOperator::StartsWith => "starts with",
            FilterOperator::EndsWith => "ends with",
            FilterOperator::IsEmpty => "is empty",
            FilterOperator::IsNotEmpty => "is not empty",
            FilterOperator::Gt => "is greater than",
            FilterOperator::Lt => "is less than",
            FilterOperator::Gte => "is greater than or equal to",
            FilterOperator::Lte => "is less than or equal to",
        }
    }

    /// Operators the UI should offer for a column type
    ///
    /// Advisory only: evaluation never rejects a condition whose operator
    /// falls outside this set.
    pub fn for_column_type(column_type: ColumnType) -> &'static [FilterOperator] {
        use FilterOperator::*;
        match column_type {
            ColumnType::Text | ColumnType::Email | ColumnType::Url => &[
                Equals, NotEquals, Contains, NotContains, StartsWith, EndsWith, IsEmpty,
                IsNotEmpty,
            ],
            ColumnType::Number => &[Equals, NotEquals, Gt, Lt, Gte, Lte, IsEmpty, IsNotEmpty],
            ColumnType::Date => &[Equals, NotEquals, Gt, Lt, IsEmpty, IsNotEmpty],
            ColumnType::Select | ColumnType::Checkbox => &[Equals, NotEquals, IsEmpty, IsNotEmpty],
        }
    }

    /// Whether the UI would offer this operator for the column type
    pub fn is_valid_for(&self, column_type: ColumnType) -> bool {
        Self::for_column_type(column_type).contains(self)
    }

    /// Whether the operator needs a comparison value (`is empty` does not)
    pub fn takes_value(&self) -> bool {
        !matches!(self, FilterOperator::IsEmpty | FilterOperator::IsNotEmpty)
    }
}

impl fmt::Display for FilterOperator {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.label())
    }
}

/// One filter condition; a view combines its conditions with AND
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FilterCondition {
    /// Unique id within the view
    pub id: String,
    /// Column the condition tests
    pub column_id: String,
    /// Comparison operator
    pub operator: FilterOperator,
    /// Comparison value (ignored by `is empty` / `is not empty`)
    #[serde(default)]
    pub value: Value,
}

/// Partial update for a filter condition
#[derive(Debug, Clone, Default)]
pub struct FilterPatch {
    /// New column
    pub column_id: Option<String>,
    /// New operator
    pub operator: Option<FilterOperator>,
    /// New comparison value
    pub value: Option<Value>,
}

/// A conditional row-coloring rule
///
/// Rule order within a view is precedence order: the first rule whose
/// condition matches a row wins, and later matches are ignored.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ColorRule {
    /// Unique id within the view
    pub id: String,
    /// Column the rule tests
    pub column_id: String,
    /// Comparison operator (a subset of operators is honored at evaluation)
    pub operator: FilterOperator,
    /// Comparison value
    #[serde(default)]
    pub value: Value,
    /// Background color to apply
    pub color: String,
    /// Optional text color to apply
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub text_color: Option<String>,
}

/// Partial update for a color rule
#[derive(Debug, Clone, Default)]
pub struct ColorRulePatch {
    /// New column
    pub column_id: Option<String>,
    /// New operator
    pub operator: Option<FilterOperator>,
    /// New comparison value
    pub value: Option<Value>,
    /// New background color
    pub color: Option<String>,
    /// New text color (`Some(None)` clears it)
    pub text_color: Option<Option<String>>,
}
