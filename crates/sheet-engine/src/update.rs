//! Field mutation - pure, non-mutating document updates

use chrono::Utc;
use serde::{Deserialize, Serialize};
use tracing::warn;

use sheet_model::{FieldSource, FieldValue, TableSection};

/// One edit addressed at a single field
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FieldUpdate {
    pub section_id: String,
    pub field_id: String,

    /// The new value; `None` clears the field
    pub value: Option<FieldValue>,

    /// Replace the selected unit when given
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub unit: Option<String>,

    /// Replace the provenance when given
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub source: Option<FieldSource>,

    /// Replace the notes when given
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub notes: Option<String>,

    /// Recorded on the field's audit stamp when given
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub updated_by: Option<String>,
}

impl FieldUpdate {
    pub fn new(
        section_id: impl Into<String>,
        field_id: impl Into<String>,
        value: impl Into<FieldValue>,
    ) -> Self {
        FieldUpdate {
            section_id: section_id.into(),
            field_id: field_id.into(),
            value: Some(value.into()),
            unit: None,
            source: None,
            notes: None,
            updated_by: None,
        }
    }

    pub fn with_source(mut self, source: FieldSource) -> Self {
        self.source = Some(source);
        self
    }

    pub fn with_unit(mut self, unit: impl Into<String>) -> Self {
        self.unit = Some(unit.into());
        self
    }

    pub fn by(mut self, user: impl Into<String>) -> Self {
        self.updated_by = Some(user.into());
        self
    }
}

/// Apply one update, returning a new document. An unknown section or
/// field id is a no-op: the document comes back unchanged and the miss is
/// logged at warn level so a typo'd id stays observable. This leniency is
/// the uniform policy for every mutation path.
pub fn apply_update(sections: &[TableSection], update: &FieldUpdate) -> Vec<TableSection> {
    let mut next: Vec<TableSection> = sections.to_vec();

    let Some(section) = next.iter_mut().find(|s| s.id == update.section_id) else {
        warn!(
            section_id = %update.section_id,
            field_id = %update.field_id,
            "update targets unknown section; ignoring"
        );
        return next;
    };
    let Some(field) = section.field_mut(&update.field_id) else {
        warn!(
            section_id = %update.section_id,
            field_id = %update.field_id,
            "update targets unknown field; ignoring"
        );
        return next;
    };

    field.value = update.value.clone();
    if let Some(unit) = &update.unit {
        field.unit = Some(unit.clone());
    }
    if let Some(source) = update.source {
        field.source = source;
    }
    if let Some(notes) = &update.notes {
        field.notes = Some(notes.clone());
    }
    field.last_updated_at = Some(Utc::now());
    if let Some(user) = &update.updated_by {
        field.last_updated_by = Some(user.clone());
    }

    next
}

/// Fold a batch of updates left to right; later updates to the same field
/// win. Unknown targets inside the batch are skipped, never abort it.
pub fn apply_updates(sections: &[TableSection], updates: &[FieldUpdate]) -> Vec<TableSection> {
    updates
        .iter()
        .fold(sections.to_vec(), |doc, update| apply_update(&doc, update))
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;
    use sheet_library::ParameterLibrary;
    use sheet_templates::{build_document, TemplateRegistry};

    fn document() -> Vec<TableSection> {
        let library = ParameterLibrary::builtin();
        let registry = TemplateRegistry::new();
        build_document(registry.base(), &library).unwrap()
    }

    #[test]
    fn test_update_changes_only_target() {
        let before = document();
        let after = apply_update(
            &before,
            &FieldUpdate::new("flows", "flow_daily", 450.0).with_unit("m3/d"),
        );

        // every other field in every section is strictly equal
        for (section_before, section_after) in before.iter().zip(&after) {
            for (field_before, field_after) in
                section_before.fields.iter().zip(&section_after.fields)
            {
                if field_before.id == "flow_daily" {
                    assert_eq!(field_after.value, Some(FieldValue::Number(450.0)));
                    assert!(field_after.last_updated_at.is_some());
                } else {
                    assert_eq!(field_before, field_after);
                }
            }
        }
        // input untouched
        assert!(before[1].field("flow_daily").unwrap().value.is_none());
    }

    #[test]
    fn test_unknown_target_is_noop() {
        let before = document();
        let after = apply_update(&before, &FieldUpdate::new("flows", "no_such_field", 1.0));
        assert_eq!(before, after);

        let after = apply_update(&before, &FieldUpdate::new("no_such_section", "flow_daily", 1.0));
        assert_eq!(before, after);
    }

    #[test]
    fn test_later_update_wins() {
        let doc = document();
        let updates = vec![
            FieldUpdate::new("flows", "flow_daily", 100.0),
            FieldUpdate::new("flows", "peak_factor", 2.5),
            FieldUpdate::new("flows", "flow_daily", 250.0),
        ];
        let after = apply_updates(&doc, &updates);
        let flows = &after[1];
        assert_eq!(
            flows.field("flow_daily").unwrap().value,
            Some(FieldValue::Number(250.0))
        );
        assert_eq!(
            flows.field("peak_factor").unwrap().value,
            Some(FieldValue::Number(2.5))
        );
    }

    #[test]
    fn test_optional_parts_only_overwrite_when_given() {
        let doc = document();
        let seeded = apply_update(
            &doc,
            &FieldUpdate::new("flows", "flow_daily", 100.0)
                .with_source(FieldSource::Imported)
                .by("importer"),
        );
        // A later plain value edit keeps source and author semantics
        let after = apply_update(&seeded, &FieldUpdate::new("flows", "flow_daily", 120.0));
        let field = after[1].field("flow_daily").unwrap();
        assert_eq!(field.source, FieldSource::Imported);
        assert_eq!(field.last_updated_by.as_deref(), Some("importer"));
    }

    #[test]
    fn test_clearing_a_value() {
        let doc = document();
        let filled = apply_update(&doc, &FieldUpdate::new("flows", "flow_daily", 100.0));
        let cleared = apply_update(
            &filled,
            &FieldUpdate {
                value: None,
                ..FieldUpdate::new("flows", "flow_daily", 0.0)
            },
        );
        assert!(cleared[1].field("flow_daily").unwrap().value.is_none());
    }
}
