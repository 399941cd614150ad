//! Version snapshots - checkpointing the document with a change log

use chrono::Utc;
use uuid::Uuid;

use sheet_model::{FieldChange, FieldSource, TableSection, TechnicalDataVersion};

/// Checkpoint the document. The snapshot is a full copy of `current`;
/// `changes` lists every field whose value differs from `previous`
/// (fields absent from the previous snapshot count as changed when they
/// now hold a value). The result is immutable by contract.
#[allow(clippy::too_many_arguments)]
pub fn snapshot_version(
    project_id: impl Into<String>,
    version_label: impl Into<String>,
    created_by: Option<&str>,
    source: FieldSource,
    previous: Option<&[TableSection]>,
    current: &[TableSection],
    notes: Option<&str>,
) -> TechnicalDataVersion {
    let now = Utc::now();
    let mut changes = Vec::new();

    // Field ids are only unique within a section, so the previous value
    // must come from the matching section, never from a document-wide scan.
    for section in current {
        let previous_section =
            previous.and_then(|sections| sections.iter().find(|s| s.id == section.id));
        for field in &section.fields {
            let previous_value = previous_section
                .and_then(|s| s.field(&field.id))
                .and_then(|f| f.value.clone());
            if previous_value != field.value {
                changes.push(FieldChange {
                    field_id: field.id.clone(),
                    previous_value,
                    new_value: field.value.clone(),
                    changed_by: created_by.map(str::to_string),
                    changed_at: now,
                });
            }
        }
    }

    TechnicalDataVersion {
        id: Uuid::new_v4(),
        project_id: project_id.into(),
        version_label: version_label.into(),
        created_at: now,
        created_by: created_by.map(str::to_string),
        source,
        snapshot: current.to_vec(),
        changes,
        notes: notes.map(str::to_string),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{apply_update, FieldUpdate};
    use sheet_library::ParameterLibrary;
    use sheet_model::FieldValue;
    use sheet_templates::{build_document, TemplateRegistry};

    #[test]
    fn test_changes_against_previous() {
        let library = ParameterLibrary::builtin();
        let registry = TemplateRegistry::new();
        let before = build_document(registry.base(), &library).unwrap();
        let after = apply_update(&before, &FieldUpdate::new("flows", "flow_daily", 200.0));

        let version = snapshot_version(
            "prj-17",
            "v2",
            Some("engineer"),
            FieldSource::Manual,
            Some(&before),
            &after,
            None,
        );

        assert_eq!(version.changes.len(), 1);
        let change = &version.changes[0];
        assert_eq!(change.field_id, "flow_daily");
        assert_eq!(change.previous_value, None);
        assert_eq!(change.new_value, Some(FieldValue::Number(200.0)));
        assert_eq!(version.snapshot, after);
    }

    #[test]
    fn test_duplicate_field_id_diffs_within_its_own_section() {
        // Templates may reference the same parameter in two sections, so
        // the previous value has to come from the matching section.
        use sheet_model::{TableField, TableSection};

        let doc = |a: f64, b: f64| {
            let mut first = TableSection::new("a", "A");
            let mut field = TableField::new("flow_daily", "Daily Flow");
            field.value = Some(FieldValue::Number(a));
            first.fields.push(field);

            let mut second = TableSection::new("b", "B");
            let mut field = TableField::new("flow_daily", "Daily Flow");
            field.value = Some(FieldValue::Number(b));
            second.fields.push(field);

            vec![first, second]
        };

        let before = doc(1.0, 2.0);
        let after = doc(1.0, 3.0);

        let version = snapshot_version(
            "prj-17",
            "v2",
            None,
            FieldSource::Manual,
            Some(&before),
            &after,
            None,
        );

        assert_eq!(version.changes.len(), 1);
        let change = &version.changes[0];
        assert_eq!(change.field_id, "flow_daily");
        assert_eq!(change.previous_value, Some(FieldValue::Number(2.0)));
        assert_eq!(change.new_value, Some(FieldValue::Number(3.0)));
    }

    #[test]
    fn test_first_version_lists_filled_fields_only() {
        let library = ParameterLibrary::builtin();
        let registry = TemplateRegistry::new();
        let doc = build_document(registry.base(), &library).unwrap();
        let doc = apply_update(&doc, &FieldUpdate::new("general", "project_name", "P"));

        let version =
            snapshot_version("prj-17", "v1", None, FieldSource::Manual, None, &doc, None);
        assert_eq!(version.changes.len(), 1);
        assert_eq!(version.changes[0].field_id, "project_name");
    }
}
