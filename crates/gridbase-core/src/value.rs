//! Cell value types

use std::fmt;

use serde::{Deserialize, Serialize};

/// Represents the value stored in a cell
///
/// Cells hold whatever the user typed; the declared [`crate::ColumnType`]
/// only guides which coercion the evaluators pick, so a `number` column may
/// well contain `Value::Text("5")`. Coercions live on this type
/// ([`Value::as_f64`], [`Value::to_display_string`]) and never panic.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum Value {
    /// Missing cell (a column added after the row, or a cleared cell)
    Empty,

    /// Boolean value (checkbox columns)
    Bool(bool),

    /// Numeric value
    Number(f64),

    /// String value (text, date, select, email, url columns)
    Text(String),
}

impl Value {
    /// Create a new text value
    pub fn text<S: Into<String>>(s: S) -> Self {
        Value::Text(s.into())
    }

    /// True for `Empty` and for the empty string
    ///
    /// This is the "is empty" notion the filter operators use. Note that it
    /// differs from strict equality: `Empty != Text("")`, but both are blank.
    pub fn is_blank(&self) -> bool {
        match self {
            Value::Empty => true,
            Value::Text(s) => s.is_empty(),
            _ => false,
        }
    }

    /// Try to coerce the value to a finite number
    ///
    /// Text is parsed after trimming; booleans coerce to 1/0. Anything that
    /// does not produce a finite number yields `None`, which makes every
    /// ordering comparison against it false.
    pub fn as_f64(&self) -> Option<f64> {
        match self {
            Value::Number(n) if n.is_finite() => Some(*n),
            Value::Bool(b) => Some(if *b { 1.0 } else { 0.0 }),
            Value::Text(s) => match s.trim().parse::<f64>() {
                Ok(n) if n.is_finite() => Some(n),
                _ => None,
            },
            _ => None,
        }
    }

    /// Render the value the way the grid displays it (`Empty` becomes "")
    pub fn to_display_string(&self) -> String {
        match self {
            Value::Empty => String::new(),
            Value::Bool(b) => b.to_string(),
            Value::Number(n) => n.to_string(),
            Value::Text(s) => s.clone(),
        }
    }

    /// Get the type name for error messages
    pub fn type_name(&self) -> &'static str {
        match self {
            Value::Empty => "empty",
            Value::Bool(_) => "bool",
            Value::Number(_) => "number",
            Value::Text(_) => "text",
        }
    }
}

impl Default for Value {
    fn default() -> Self {
        Value::Empty
    }
}

impl fmt::Display for Value {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Value::Empty => Ok(()),
            Value::Bool(b) => write!(f, "{}", b),
            Value::Number(n) => write!(f, "{}", n),
            Value::Text(s) => write!(f, "{}", s),
        }
    }
}

impl From<bool> for Value {
    fn from(b: bool) -> Self {
        Value::Bool(b)
    }
}

impl From<f64> for Value {
    fn from(n: f64) -> Self {
        Value::Number(n)
    }
}

impl From<i32> for Value {
    fn from(n: i32) -> Self {
        Value::Number(n as f64)
    }
}

impl From<i64> for Value {
    fn from(n: i64) -> Self {
        Value::Number(n as f64)
    }
}

impl From<&str> for Value {
    fn from(s: &str) -> Self {
        Value::text(s)
    }
}

impl From<String> for Value {
    fn from(s: String) -> Self {
        Value::Text(s)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_blank_values() {
        assert!(Value::Empty.is_blank());
        assert!(Value::text("").is_blank());
        assert!(!Value::text(" ").is_blank());
        assert!(!Value::Number(0.0).is_blank());
        assert!(!Value::Bool(false).is_blank());
    }

    #[test]
    fn test_strict_equality_distinguishes_empty_and_blank_text() {
        // Both are blank, but equals-style filters must not conflate them
        assert_ne!(Value::Empty, Value::text(""));
        assert_eq!(Value::text("a"), Value::text("a"));
    }

    #[test]
    fn test_as_f64() {
        assert_eq!(Value::Number(42.0).as_f64(), Some(42.0));
        assert_eq!(Value::text(" 29.99 ").as_f64(), Some(29.99));
        assert_eq!(Value::Bool(true).as_f64(), Some(1.0));
        assert_eq!(Value::Bool(false).as_f64(), Some(0.0));
        assert_eq!(Value::text("2024-11-10").as_f64(), None);
        assert_eq!(Value::text("").as_f64(), None);
        assert_eq!(Value::Empty.as_f64(), None);
        assert_eq!(Value::Number(f64::NAN).as_f64(), None);
        assert_eq!(Value::Number(f64::INFINITY).as_f64(), None);
    }

    #[test]
    fn test_display() {
        assert_eq!(Value::Empty.to_display_string(), "");
        assert_eq!(Value::text("Open").to_display_string(), "Open");
        assert_eq!(Value::Number(5.0).to_display_string(), "5");
        assert_eq!(Value::Bool(true).to_display_string(), "true");
    }

    #[test]
    fn test_serde_untagged() {
        let v: Value = serde_json::from_str("\"Open\"").unwrap();
        assert_eq!(v, Value::text("Open"));
        let v: Value = serde_json::from_str("29.99").unwrap();
        assert_eq!(v, Value::Number(29.99));
        let v: Value = serde_json::from_str("true").unwrap();
        assert_eq!(v, Value::Bool(true));
        let v: Value = serde_json::from_str("null").unwrap();
        assert_eq!(v, Value::Empty);
    }
}
