//! Field value, type, provenance and importance enums

use serde::{Deserialize, Serialize};

/// Types of fields in a technical sheet
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum FieldType {
    /// Free text input
    Text,
    /// Plain numeric input
    Number,
    /// Numeric input carrying a measurement unit
    UnitValue,
    /// Single choice from fixed options
    Select,
    /// Multiple choices / tags
    MultiSelect,
    /// Yes/no toggle
    Boolean,
}

impl Default for FieldType {
    fn default() -> Self {
        FieldType::Text
    }
}

/// Provenance of a field value
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum FieldSource {
    /// Entered by a person
    Manual,
    /// Supplied by the AI agent
    Agent,
    /// Derived from other fields
    Calculated,
    /// Pulled from an external system
    Imported,
}

impl Default for FieldSource {
    fn default() -> Self {
        FieldSource::Manual
    }
}

impl FieldSource {
    pub fn as_str(&self) -> &'static str {
        match self {
            FieldSource::Manual => "manual",
            FieldSource::Agent => "agent",
            FieldSource::Calculated => "calculated",
            FieldSource::Imported => "imported",
        }
    }
}

/// Engineering importance of a parameter
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Importance {
    Critical,
    Important,
    Optional,
}

impl Default for Importance {
    fn default() -> Self {
        Importance::Optional
    }
}

/// A field value as entered or computed
///
/// Untagged so the persisted JSON stays the natural shape: a string, a
/// number, a list of strings, or a boolean.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum FieldValue {
    Flag(bool),
    Number(f64),
    Text(String),
    List(Vec<String>),
}

impl FieldValue {
    /// The completion rule: only the empty string counts as "not filled".
    /// An empty tag list, `0` and `false` are all deliberate entries.
    pub fn is_blank(&self) -> bool {
        matches!(self, FieldValue::Text(s) if s.is_empty())
    }

    pub fn as_number(&self) -> Option<f64> {
        match self {
            FieldValue::Number(n) => Some(*n),
            // Unit-valued fields entered as text still parse ("25", "25.4")
            FieldValue::Text(s) => s.trim().parse().ok(),
            _ => None,
        }
    }

    pub fn as_text(&self) -> Option<&str> {
        match self {
            FieldValue::Text(s) => Some(s),
            _ => None,
        }
    }

    /// Display form used by summary exports
    pub fn display(&self) -> String {
        match self {
            FieldValue::Flag(b) => b.to_string(),
            FieldValue::Number(n) => n.to_string(),
            FieldValue::Text(s) => s.clone(),
            FieldValue::List(items) => items.join(", "),
        }
    }
}

impl From<&str> for FieldValue {
    fn from(s: &str) -> Self {
        FieldValue::Text(s.to_string())
    }
}

impl From<String> for FieldValue {
    fn from(s: String) -> Self {
        FieldValue::Text(s)
    }
}

impl From<f64> for FieldValue {
    fn from(n: f64) -> Self {
        FieldValue::Number(n)
    }
}

impl From<bool> for FieldValue {
    fn from(b: bool) -> Self {
        FieldValue::Flag(b)
    }
}

impl From<Vec<String>> for FieldValue {
    fn from(items: Vec<String>) -> Self {
        FieldValue::List(items)
    }
}
