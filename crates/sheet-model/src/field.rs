//! Table field - a single typed data point in a section

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::{FieldSource, FieldType, FieldValue, Importance, ValidationRule};

/// Visibility gate: the field is only relevant when another field in the
/// same document holds the given value.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Conditional {
    /// Id of the controlling field
    pub field: String,
    /// Value the controlling field must hold
    pub value: String,
}

/// A single field of the working document
///
/// Metadata members (`label`, `field_type`, `options`, `units`,
/// `validation`, ...) are derived from the parameter library for
/// library-backed fields and must never be hand-edited; custom fields
/// (ids unknown to the library) carry their own metadata permanently.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TableField {
    /// Field identifier; equals a library parameter id for library-backed
    /// fields, free-form for custom fields
    pub id: String,

    /// Human-readable label
    pub label: String,

    #[serde(default)]
    pub field_type: FieldType,

    /// The user-entered or computed value; `None` means not filled yet
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub value: Option<FieldValue>,

    /// Selected measurement unit
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub unit: Option<String>,

    /// Units the field may be expressed in
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub units: Vec<String>,

    /// Options for select/multi-select fields
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub options: Vec<String>,

    #[serde(default)]
    pub source: FieldSource,

    #[serde(default)]
    pub required: bool,

    #[serde(default)]
    pub importance: Importance,

    /// Never serialized; re-attached from the library on load
    #[serde(skip)]
    pub validation: Option<ValidationRule>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub validation_message: Option<String>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub placeholder: Option<String>,

    #[serde(default)]
    pub multiline: bool,

    /// Value proposed by the agent, pending user confirmation
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub suggested_value: Option<FieldValue>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub notes: Option<String>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub last_updated_at: Option<DateTime<Utc>>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub last_updated_by: Option<String>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub conditional: Option<Conditional>,
}

impl TableField {
    /// A bare field with the given id and label; everything else default
    pub fn new(id: impl Into<String>, label: impl Into<String>) -> Self {
        TableField {
            id: id.into(),
            label: label.into(),
            field_type: FieldType::default(),
            value: None,
            unit: None,
            units: Vec::new(),
            options: Vec::new(),
            source: FieldSource::default(),
            required: false,
            importance: Importance::default(),
            validation: None,
            validation_message: None,
            description: None,
            placeholder: None,
            multiline: false,
            suggested_value: None,
            notes: None,
            last_updated_at: None,
            last_updated_by: None,
            conditional: None,
        }
    }

    /// Whether the field counts towards completion
    pub fn is_completed(&self) -> bool {
        self.value.as_ref().is_some_and(|v| !v.is_blank())
    }

    /// Check the current value against the attached rule, if any
    pub fn is_valid(&self) -> bool {
        self.validation
            .as_ref()
            .map_or(true, |rule| rule.check(self.value.as_ref()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_completion_rule() {
        let mut field = TableField::new("ph", "pH");
        assert!(!field.is_completed());

        field.value = Some(FieldValue::Text(String::new()));
        assert!(!field.is_completed());

        field.value = Some(FieldValue::Number(0.0));
        assert!(field.is_completed());
    }

    #[test]
    fn test_validation_not_serialized() {
        let mut field = TableField::new("ph", "pH");
        field.validation = Some(ValidationRule::Range {
            min: Some(0.0),
            max: Some(14.0),
        });

        let json = serde_json::to_string(&field).unwrap();
        assert!(!json.contains("validation\""));

        let back: TableField = serde_json::from_str(&json).unwrap();
        assert!(back.validation.is_none());
    }

    #[test]
    fn test_no_rule_is_valid() {
        let field = TableField::new("notes", "Notes");
        assert!(field.is_valid());
    }
}
