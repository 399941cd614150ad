//! Rehydration - re-attaching library metadata after storage round-trips
//!
//! The persisted document is exactly the `Vec<TableSection>` JSON shape,
//! minus `validation` (rules do not serialize). On load, every
//! library-backed field gets its metadata rebuilt from the parameter
//! library; user-entered state is carried over untouched. Fields the
//! library does not know (custom or legacy ids) pass through unchanged —
//! dropping them would lose user data.

use sheet_library::{ParameterDefinition, ParameterLibrary};
use sheet_model::{TableField, TableSection};

/// Rebuild derived metadata for every library-backed field while
/// preserving user-entered state. Idempotent: metadata is fully determined
/// by the field id, and values are fixed points under the merge.
pub fn rehydrate_sections(
    sections: &[TableSection],
    library: &ParameterLibrary,
) -> Vec<TableSection> {
    sections
        .iter()
        .map(|section| TableSection {
            id: section.id.clone(),
            title: section.title.clone(),
            description: section.description.clone(),
            fields: section
                .fields
                .iter()
                .map(|field| match library.get(&field.id) {
                    Some(definition) => merge_field(field, definition),
                    // Custom/legacy field: the library knows nothing about
                    // it, so its stored metadata is authoritative.
                    None => field.clone(),
                })
                .collect(),
            notes: section.notes.clone(),
            allow_custom_fields: section.allow_custom_fields,
        })
        .collect()
}

/// The metadata/value merge for one field. Metadata comes strictly from
/// the definition; value-bearing state comes strictly from the stored
/// field. The stored unit survives if set, otherwise the library default
/// applies; the unit list is always the library's.
fn merge_field(stored: &TableField, definition: &ParameterDefinition) -> TableField {
    TableField {
        id: stored.id.clone(),
        label: definition.label.clone(),
        field_type: definition.field_type,
        value: stored.value.clone(),
        unit: stored.unit.clone().or_else(|| definition.default_unit.clone()),
        units: definition.available_units.clone(),
        options: definition.options.clone(),
        source: stored.source,
        required: definition.required,
        importance: definition.importance,
        validation: definition.validation.clone(),
        validation_message: definition.validation_message.clone(),
        description: definition.description.clone(),
        placeholder: definition.placeholder.clone(),
        multiline: definition.multiline,
        suggested_value: stored.suggested_value.clone(),
        notes: stored.notes.clone(),
        last_updated_at: stored.last_updated_at,
        last_updated_by: stored.last_updated_by.clone(),
        conditional: stored.conditional.clone(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::Utc;
    use pretty_assertions::assert_eq;
    use sheet_model::{FieldSource, FieldValue};
    use sheet_templates::{build_document, TemplateRegistry};

    fn loaded_document() -> (Vec<TableSection>, ParameterLibrary) {
        let library = ParameterLibrary::builtin();
        let registry = TemplateRegistry::new();
        let mut sections = build_document(registry.base(), &library).unwrap();

        {
            let field = sections[2].field_mut("bod_influent").unwrap();
            field.value = Some(FieldValue::Number(320.0));
            field.source = FieldSource::Agent;
            field.notes = Some("from lab report".into());
            field.last_updated_at = Some(Utc::now());
            field.last_updated_by = Some("vsalinas".into());
        }

        // Simulate the JSON round-trip that strips validation rules
        let json = serde_json::to_string(&sections).unwrap();
        let stored: Vec<TableSection> = serde_json::from_str(&json).unwrap();
        assert!(stored[2].field("bod_influent").unwrap().validation.is_none());

        (stored, library)
    }

    #[test]
    fn test_metadata_restored_state_preserved() {
        let (stored, library) = loaded_document();
        let rehydrated = rehydrate_sections(&stored, &library);

        let field = rehydrated[2].field("bod_influent").unwrap();
        assert!(field.validation.is_some());
        assert_eq!(field.value, Some(FieldValue::Number(320.0)));
        assert_eq!(field.source, FieldSource::Agent);
        assert_eq!(field.notes.as_deref(), Some("from lab report"));
        assert_eq!(
            field.last_updated_at,
            stored[2].field("bod_influent").unwrap().last_updated_at
        );
        assert_eq!(field.last_updated_by.as_deref(), Some("vsalinas"));
    }

    #[test]
    fn test_idempotent() {
        let (stored, library) = loaded_document();
        let once = rehydrate_sections(&stored, &library);
        let twice = rehydrate_sections(&once, &library);
        assert_eq!(once, twice);
    }

    #[test]
    fn test_custom_field_passes_through() {
        let (mut stored, library) = loaded_document();
        let mut custom = sheet_model::TableField::new("client_internal_code", "Client Code");
        custom.value = Some(FieldValue::Text("XK-9".into()));
        custom.placeholder = Some("kept as stored".into());
        stored[0].fields.push(custom.clone());

        let rehydrated = rehydrate_sections(&stored, &library);
        assert_eq!(rehydrated[0].field("client_internal_code"), Some(&custom));
    }

    #[test]
    fn test_stored_unit_wins_over_default() {
        let (mut stored, library) = loaded_document();
        {
            let field = stored[1].field_mut("flow_daily").unwrap();
            field.unit = Some("L/s".into());
        }
        let rehydrated = rehydrate_sections(&stored, &library);
        let field = rehydrated[1].field("flow_daily").unwrap();
        assert_eq!(field.unit.as_deref(), Some("L/s"));
        // but the unit list is always the library's
        assert_eq!(field.units, library.get("flow_daily").unwrap().available_units);
    }

    #[test]
    fn test_missing_unit_adopts_library_default() {
        let (mut stored, library) = loaded_document();
        {
            let field = stored[1].field_mut("flow_daily").unwrap();
            field.unit = None;
        }
        let rehydrated = rehydrate_sections(&stored, &library);
        assert_eq!(
            rehydrated[1].field("flow_daily").unwrap().unit.as_deref(),
            Some("m3/d")
        );
    }

    #[test]
    fn test_stale_metadata_is_overwritten() {
        let (mut stored, library) = loaded_document();
        {
            let field = stored[2].field_mut("bod_influent").unwrap();
            field.label = "Hand-edited label".into();
            field.required = false;
        }
        let rehydrated = rehydrate_sections(&stored, &library);
        let field = rehydrated[2].field("bod_influent").unwrap();
        assert_eq!(field.label, "Influent BOD5");
        assert!(field.required);
    }
}
