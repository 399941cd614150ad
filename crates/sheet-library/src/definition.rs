//! Parameter definition - one immutable library entry

use serde::{Deserialize, Serialize};

use sheet_model::{FieldSource, FieldType, Importance, TableField, ValidationRule};

/// Complete metadata for one technical-sheet parameter
///
/// Keyed by `id`; defined once at process start, never mutated.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct ParameterDefinition {
    pub id: String,
    pub label: String,

    #[serde(default)]
    pub field_type: FieldType,

    /// Unit pre-selected when the field is first materialized
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub default_unit: Option<String>,

    /// Units the parameter may be expressed in, in display order
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub available_units: Vec<String>,

    /// Options for select/multi-select parameters, in display order
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub options: Vec<String>,

    #[serde(default)]
    pub required: bool,

    #[serde(default)]
    pub importance: Importance,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub validation: Option<ValidationRule>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub validation_message: Option<String>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub placeholder: Option<String>,

    #[serde(default)]
    pub multiline: bool,
}

impl ParameterDefinition {
    /// Materialize a working field from this definition: empty value,
    /// manual source, all metadata attached.
    pub fn instantiate(&self) -> TableField {
        TableField {
            id: self.id.clone(),
            label: self.label.clone(),
            field_type: self.field_type,
            value: None,
            unit: self.default_unit.clone(),
            units: self.available_units.clone(),
            options: self.options.clone(),
            source: FieldSource::Manual,
            required: self.required,
            importance: self.importance,
            validation: self.validation.clone(),
            validation_message: self.validation_message.clone(),
            description: self.description.clone(),
            placeholder: self.placeholder.clone(),
            multiline: self.multiline,
            suggested_value: None,
            notes: None,
            last_updated_at: None,
            last_updated_by: None,
            conditional: None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use sheet_model::FieldValue;

    #[test]
    fn test_instantiate_starts_empty() {
        let def = ParameterDefinition {
            id: "ph_influent".into(),
            label: "Influent pH".into(),
            field_type: FieldType::UnitValue,
            default_unit: Some("pH".into()),
            required: true,
            importance: Importance::Critical,
            validation: Some(ValidationRule::Range {
                min: Some(0.0),
                max: Some(14.0),
            }),
            ..Default::default()
        };

        let field = def.instantiate();
        assert_eq!(field.id, "ph_influent");
        assert_eq!(field.value, None::<FieldValue>);
        assert_eq!(field.source, FieldSource::Manual);
        assert_eq!(field.unit.as_deref(), Some("pH"));
        assert!(field.validation.is_some());
    }
}
