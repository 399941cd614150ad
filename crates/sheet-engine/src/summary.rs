//! Projections of the document for export and the agent boundary

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

use sheet_model::{FieldSource, Importance, TableSection};

use crate::normalize_parameter_name;

/// One flat row of the document, for exports and the proposal prompt
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SummaryRow {
    pub section_id: String,
    pub section_title: String,
    pub field_id: String,
    pub label: String,
    pub value: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub unit: Option<String>,
    pub source: FieldSource,
    pub importance: Importance,
    pub required: bool,
}

/// Flatten the document into rows, completed fields only, document order.
pub fn sections_to_summary_rows(sections: &[TableSection]) -> Vec<SummaryRow> {
    sections
        .iter()
        .flat_map(|section| {
            section
                .fields
                .iter()
                .filter(|f| f.is_completed())
                .map(|field| SummaryRow {
                    section_id: section.id.clone(),
                    section_title: section.title.clone(),
                    field_id: field.id.clone(),
                    label: field.label.clone(),
                    value: field.value.as_ref().map(|v| v.display()).unwrap_or_default(),
                    unit: field.unit.clone(),
                    source: field.source,
                    importance: field.importance,
                    required: field.required,
                })
        })
        .collect()
}

/// A numeric field projected for the compliance/agent boundary
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TargetField {
    /// Canonical parameter key (see [`normalize_parameter_name`])
    pub name: String,
    pub value: f64,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub unit: Option<String>,
}

/// Project every numeric-valued field as a named target. Keys are
/// normalized so the agent's targets and the sheet's values meet on the
/// same vocabulary; the caller filters to the sections it cares about.
pub fn sections_to_target_fields(sections: &[TableSection]) -> Vec<TargetField> {
    sections
        .iter()
        .flat_map(|section| section.fields.iter())
        .filter_map(|field| {
            let value = field.value.as_ref()?.as_number()?;
            Some(TargetField {
                name: normalize_parameter_name(&field.id),
                value,
                unit: field.unit.clone(),
            })
        })
        .collect()
}

/// Completed-field counts per provenance
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct SourceBreakdown {
    pub manual: usize,
    pub agent: usize,
    pub calculated: usize,
    pub imported: usize,
}

impl SourceBreakdown {
    pub fn total(&self) -> usize {
        self.manual + self.agent + self.calculated + self.imported
    }

    /// As a map, for display layers that iterate sources
    pub fn as_map(&self) -> BTreeMap<&'static str, usize> {
        BTreeMap::from([
            ("manual", self.manual),
            ("agent", self.agent),
            ("calculated", self.calculated),
            ("imported", self.imported),
        ])
    }
}

pub fn source_breakdown(sections: &[TableSection]) -> SourceBreakdown {
    let mut breakdown = SourceBreakdown::default();
    for field in sections.iter().flat_map(|s| s.fields.iter()) {
        if !field.is_completed() {
            continue;
        }
        match field.source {
            FieldSource::Manual => breakdown.manual += 1,
            FieldSource::Agent => breakdown.agent += 1,
            FieldSource::Calculated => breakdown.calculated += 1,
            FieldSource::Imported => breakdown.imported += 1,
        }
    }
    breakdown
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{apply_update, apply_updates, FieldUpdate};
    use sheet_library::ParameterLibrary;
    use sheet_templates::{build_document, TemplateRegistry};

    fn document() -> Vec<TableSection> {
        let library = ParameterLibrary::builtin();
        let registry = TemplateRegistry::new();
        build_document(registry.base(), &library).unwrap()
    }

    #[test]
    fn test_summary_rows_only_completed() {
        let doc = apply_update(
            &document(),
            &FieldUpdate::new("general", "project_name", "North WWTP"),
        );
        let rows = sections_to_summary_rows(&doc);
        assert_eq!(rows.len(), 1);
        assert_eq!(rows[0].field_id, "project_name");
        assert_eq!(rows[0].value, "North WWTP");
        assert_eq!(rows[0].section_title, "Project Data");
    }

    #[test]
    fn test_target_fields_normalize_names() {
        let doc = apply_updates(
            &document(),
            &[
                FieldUpdate::new("effluent_targets", "bod_effluent", 30.0),
                FieldUpdate::new("effluent_targets", "tss_effluent", 40.0),
                FieldUpdate::new("general", "project_name", "not numeric"),
            ],
        );
        let targets = sections_to_target_fields(&doc);
        let names: Vec<_> = targets.iter().map(|t| t.name.as_str()).collect();
        assert!(names.contains(&"BOD"));
        assert!(names.contains(&"TSS"));
        assert!(!names.iter().any(|n| n.contains("PROJECT")));
    }

    #[test]
    fn test_source_breakdown_counts() {
        use sheet_model::FieldSource;
        let doc = apply_updates(
            &document(),
            &[
                FieldUpdate::new("general", "project_name", "P"),
                FieldUpdate::new("flows", "flow_daily", 100.0).with_source(FieldSource::Agent),
                FieldUpdate::new("flows", "peak_factor", 2.0).with_source(FieldSource::Agent),
            ],
        );
        let breakdown = source_breakdown(&doc);
        assert_eq!(breakdown.manual, 1);
        assert_eq!(breakdown.agent, 2);
        assert_eq!(breakdown.total(), 3);
        assert_eq!(breakdown.as_map()["agent"], 2);
    }
}
