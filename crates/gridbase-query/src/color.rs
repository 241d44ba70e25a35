//! Conditional row color resolution

use gridbase_core::{ColorRule, FilterCondition, FilterOperator, Row};

use crate::filter::evaluate_condition;

/// Resolved display color for a row; transient, never persisted
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct RowColor {
    /// Background color, `None` = transparent
    pub background: Option<String>,
    /// Text color, `None` = default
    pub text: Option<String>,
}

impl RowColor {
    /// No coloring at all
    pub fn is_transparent(&self) -> bool {
        self.background.is_none() && self.text.is_none()
    }
}

/// Operators honored by color rules; the rest never match
///
/// Color rules are a first-match dispatch over a practical subset of the
/// filter operators, not an AND-combination like filters.
const COLOR_RULE_OPERATORS: &[FilterOperator] = &[
    FilterOperator::Equals,
    FilterOperator::NotEquals,
    FilterOperator::Contains,
    FilterOperator::Gt,
    FilterOperator::Lt,
    FilterOperator::Gte,
    FilterOperator::Lte,
    FilterOperator::IsEmpty,
    FilterOperator::IsNotEmpty,
];

fn rule_matches(row: &Row, rule: &ColorRule) -> bool {
    if !COLOR_RULE_OPERATORS.contains(&rule.operator) {
        return false;
    }
    let condition = FilterCondition {
        id: rule.id.clone(),
        column_id: rule.column_id.clone(),
        operator: rule.operator,
        value: rule.value.clone(),
    };
    evaluate_condition(row, &condition)
}

/// Resolve the display color for a row
///
/// A manual row color overrides every rule. Otherwise rules are walked in
/// list order and the first match wins; later matches are ignored. No match
/// yields the transparent default.
pub fn resolve_color(row: &Row, rules: &[ColorRule]) -> RowColor {
    if let Some(manual) = &row.manual_color {
        return RowColor {
            background: Some(manual.clone()),
            text: None,
        };
    }
    for rule in rules {
        if rule_matches(row, rule) {
            return RowColor {
                background: Some(rule.color.clone()),
                text: rule.text_color.clone(),
            };
        }
    }
    RowColor::default()
}
