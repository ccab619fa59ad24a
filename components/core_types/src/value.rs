//! Script value representation.
//!
//! The language has exactly three value types: boolean, number and
//! text. Numbers are a single unified f64 type; there is no separate
//! integer representation.

use std::fmt;

/// The inferred type of an expression or storage slot.
///
/// Every expression node carries one of these, assigned at parse time.
/// Operators validate their operand types against it before the
/// combined node is built, so type mismatches fail parsing and never
/// surface during evaluation.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ScriptType {
    /// Boolean (`wahr` / `falsch`)
    Boolean,
    /// Floating point number (`3`, `2,5`)
    Number,
    /// Text literal (`'Test'`)
    Text,
}

impl fmt::Display for ScriptType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ScriptType::Boolean => write!(f, "boolean"),
            ScriptType::Number => write!(f, "number"),
            ScriptType::Text => write!(f, "text"),
        }
    }
}

/// Represents any script value.
///
/// # Examples
///
/// ```
/// use core_types::{ScriptType, Value};
///
/// let flag = Value::Boolean(true);
/// assert_eq!(flag.script_type(), ScriptType::Boolean);
/// assert_eq!(flag.to_string(), "wahr");
/// ```
#[derive(Debug, Clone, PartialEq)]
pub enum Value {
    /// Boolean value
    Boolean(bool),
    /// Number value (IEEE 754 double precision)
    Number(f64),
    /// Text value
    Text(String),
}

impl Value {
    /// Returns the [`ScriptType`] this value belongs to.
    pub fn script_type(&self) -> ScriptType {
        match self {
            Value::Boolean(_) => ScriptType::Boolean,
            Value::Number(_) => ScriptType::Number,
            Value::Text(_) => ScriptType::Text,
        }
    }

    /// Returns the initial value a storage slot of the given type holds
    /// before the first assignment in an invocation.
    pub fn default_for(script_type: ScriptType) -> Value {
        match script_type {
            ScriptType::Boolean => Value::Boolean(false),
            ScriptType::Number => Value::Number(0.0),
            ScriptType::Text => Value::Text(String::new()),
        }
    }

    /// Returns the boolean payload, if this is a boolean value.
    pub fn as_boolean(&self) -> Option<bool> {
        match self {
            Value::Boolean(b) => Some(*b),
            _ => None,
        }
    }

    /// Returns the number payload, if this is a number value.
    pub fn as_number(&self) -> Option<f64> {
        match self {
            Value::Number(n) => Some(*n),
            _ => None,
        }
    }

    /// Returns the text payload, if this is a text value.
    pub fn as_text(&self) -> Option<&str> {
        match self {
            Value::Text(s) => Some(s),
            _ => None,
        }
    }
}

impl fmt::Display for Value {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Value::Boolean(true) => write!(f, "wahr"),
            Value::Boolean(false) => write!(f, "falsch"),
            Value::Number(n) => write!(f, "{}", n),
            Value::Text(s) => write!(f, "{}", s),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_script_type_of_values() {
        assert_eq!(Value::Boolean(true).script_type(), ScriptType::Boolean);
        assert_eq!(Value::Number(1.5).script_type(), ScriptType::Number);
        assert_eq!(
            Value::Text("abc".to_string()).script_type(),
            ScriptType::Text
        );
    }

    #[test]
    fn test_default_values_per_type() {
        assert_eq!(
            Value::default_for(ScriptType::Boolean),
            Value::Boolean(false)
        );
        assert_eq!(Value::default_for(ScriptType::Number), Value::Number(0.0));
        assert_eq!(
            Value::default_for(ScriptType::Text),
            Value::Text(String::new())
        );
    }

    #[test]
    fn test_accessors() {
        assert_eq!(Value::Boolean(true).as_boolean(), Some(true));
        assert_eq!(Value::Boolean(true).as_number(), None);
        assert_eq!(Value::Number(2.5).as_number(), Some(2.5));
        assert_eq!(Value::Text("x".to_string()).as_text(), Some("x"));
    }

    #[test]
    fn test_display_uses_language_keywords() {
        assert_eq!(Value::Boolean(true).to_string(), "wahr");
        assert_eq!(Value::Boolean(false).to_string(), "falsch");
        assert_eq!(Value::Number(7.0).to_string(), "7");
    }

    #[test]
    fn test_script_type_display() {
        assert_eq!(ScriptType::Boolean.to_string(), "boolean");
        assert_eq!(ScriptType::Number.to_string(), "number");
        assert_eq!(ScriptType::Text.to_string(), "text");
    }
}
