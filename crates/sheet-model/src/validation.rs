//! Validation rules attached to fields
//!
//! Rules are plain data so the library can define them once, but they are
//! never written to storage: `TableField::validation` is `#[serde(skip)]`
//! and gets re-attached from the parameter library on load.

use regex::Regex;
use serde::{Deserialize, Serialize};

use crate::FieldValue;

/// A checkable constraint over a raw field value
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "rule", rename_all = "snake_case")]
pub enum ValidationRule {
    /// Value must be present and not the empty string
    NonEmpty,
    /// Numeric value within an inclusive range
    Range {
        #[serde(default)]
        min: Option<f64>,
        #[serde(default)]
        max: Option<f64>,
    },
    /// Numeric value strictly greater than zero
    Positive,
    /// Value must be one of the listed options
    OneOf(Vec<String>),
    /// Text value must match the regex
    Pattern(String),
    /// Text value at most this many characters
    MaxLength(usize),
}

impl ValidationRule {
    /// Check a value against the rule. `None` (no value yet) passes every
    /// rule except `NonEmpty`; requiredness is tracked separately.
    pub fn check(&self, value: Option<&FieldValue>) -> bool {
        match self {
            ValidationRule::NonEmpty => value.is_some_and(|v| !v.is_blank()),
            ValidationRule::Range { min, max } => match value.and_then(FieldValue::as_number) {
                Some(n) => min.map_or(true, |m| n >= m) && max.map_or(true, |m| n <= m),
                None => value.is_none(),
            },
            ValidationRule::Positive => match value.and_then(FieldValue::as_number) {
                Some(n) => n > 0.0,
                None => value.is_none(),
            },
            ValidationRule::OneOf(options) => match value {
                None => true,
                Some(FieldValue::Text(s)) => s.is_empty() || options.iter().any(|o| o == s),
                Some(FieldValue::List(items)) => {
                    items.iter().all(|i| options.iter().any(|o| o == i))
                }
                Some(_) => false,
            },
            ValidationRule::Pattern(pattern) => match value.and_then(FieldValue::as_text) {
                Some("") | None => true,
                Some(text) => Regex::new(pattern).map(|re| re.is_match(text)).unwrap_or(true),
            },
            ValidationRule::MaxLength(max) => match value.and_then(FieldValue::as_text) {
                Some(text) => text.chars().count() <= *max,
                None => true,
            },
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_range_check() {
        let rule = ValidationRule::Range {
            min: Some(0.0),
            max: Some(14.0),
        };
        assert!(rule.check(Some(&FieldValue::Number(7.2))));
        assert!(rule.check(Some(&FieldValue::Text("6.5".into()))));
        assert!(!rule.check(Some(&FieldValue::Number(15.0))));
        assert!(rule.check(None));
    }

    #[test]
    fn test_one_of_accepts_list_subset() {
        let rule = ValidationRule::OneOf(vec!["a".into(), "b".into(), "c".into()]);
        assert!(rule.check(Some(&FieldValue::List(vec!["a".into(), "c".into()]))));
        assert!(!rule.check(Some(&FieldValue::List(vec!["a".into(), "z".into()]))));
        assert!(rule.check(Some(&FieldValue::Text(String::new()))));
    }

    #[test]
    fn test_non_empty() {
        assert!(!ValidationRule::NonEmpty.check(None));
        assert!(!ValidationRule::NonEmpty.check(Some(&FieldValue::Text(String::new()))));
        assert!(ValidationRule::NonEmpty.check(Some(&FieldValue::Number(0.0))));
    }

    #[test]
    fn test_pattern_ignores_blank() {
        let rule = ValidationRule::Pattern("^[A-Z]{2}-\\d+$".into());
        assert!(rule.check(Some(&FieldValue::Text("PT-104".into()))));
        assert!(!rule.check(Some(&FieldValue::Text("pt104".into()))));
        assert!(rule.check(Some(&FieldValue::Text(String::new()))));
    }
}
