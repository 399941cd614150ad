//! Derived flow/volume values
//!
//! Three entered fields drive the hydraulic sizing numbers the dashboard
//! shows: average daily flow, operating hours and peak factor. The
//! derived fields are ordinary fields in the document (so they persist
//! and rehydrate like everything else) with `source = Calculated`.

use sheet_model::{find_field, FieldSource, TableSection};

use crate::FieldUpdate;

fn round2(value: f64) -> f64 {
    (value * 100.0).round() / 100.0
}

fn section_of<'a>(sections: &'a [TableSection], field_id: &str) -> Option<&'a str> {
    sections
        .iter()
        .find(|s| s.field(field_id).is_some())
        .map(|s| s.id.as_str())
}

fn numeric(sections: &[TableSection], field_id: &str) -> Option<f64> {
    find_field(sections, field_id)?.value.as_ref()?.as_number()
}

/// Compute the derived flow/volume updates the current inputs allow:
///
/// - `flow_average` = `flow_daily` / `operating_hours`
/// - `flow_peak`    = `flow_average` × `peak_factor`
/// - `volume_monthly` = `flow_daily` × 30
///
/// Only emits an update when the inputs it needs are present and the
/// target field exists in this document. Apply the result with
/// [`crate::apply_updates`].
pub fn calculate_derived_values(sections: &[TableSection]) -> Vec<FieldUpdate> {
    let mut updates = Vec::new();

    let flow_daily = numeric(sections, "flow_daily");
    let operating_hours = numeric(sections, "operating_hours").filter(|h| *h > 0.0);
    let peak_factor = numeric(sections, "peak_factor");

    let mut push = |field_id: &str, value: f64, unit: &str| {
        if let Some(section_id) = section_of(sections, field_id) {
            updates.push(
                FieldUpdate::new(section_id, field_id, round2(value))
                    .with_unit(unit)
                    .with_source(FieldSource::Calculated),
            );
        }
    };

    let flow_average = match (flow_daily, operating_hours) {
        (Some(daily), Some(hours)) => {
            let average = daily / hours;
            push("flow_average", average, "m3/h");
            Some(average)
        }
        _ => None,
    };

    if let (Some(average), Some(factor)) = (flow_average, peak_factor) {
        push("flow_peak", average * factor, "m3/h");
    }

    if let Some(daily) = flow_daily {
        push("volume_monthly", daily * 30.0, "m3/month");
    }

    updates
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{apply_updates, FieldUpdate};
    use sheet_model::FieldValue;
    use sheet_library::ParameterLibrary;
    use sheet_templates::{SheetTemplate, TemplateRegistry};

    fn document_with_derived_fields() -> Vec<TableSection> {
        let library = ParameterLibrary::builtin();
        let yaml = r#"
id: hydraulics
name: Hydraulics
sections:
  - id: flows
    title: Flow Data
    parameter_ids:
      - flow_daily
      - operating_hours
      - peak_factor
      - flow_average
      - flow_peak
      - volume_monthly
"#;
        let template = SheetTemplate::from_yaml_str(yaml).unwrap();
        sheet_templates::build_document(&template, &library).unwrap()
    }

    #[test]
    fn test_full_derivation() {
        let doc = apply_updates(
            &document_with_derived_fields(),
            &[
                FieldUpdate::new("flows", "flow_daily", 480.0),
                FieldUpdate::new("flows", "operating_hours", 16.0),
                FieldUpdate::new("flows", "peak_factor", 2.5),
            ],
        );

        let derived = calculate_derived_values(&doc);
        let doc = apply_updates(&doc, &derived);

        let get = |id: &str| doc[0].field(id).unwrap();
        assert_eq!(get("flow_average").value, Some(FieldValue::Number(30.0)));
        assert_eq!(get("flow_peak").value, Some(FieldValue::Number(75.0)));
        assert_eq!(get("volume_monthly").value, Some(FieldValue::Number(14400.0)));
        assert_eq!(get("flow_average").source, FieldSource::Calculated);
    }

    #[test]
    fn test_partial_inputs_partial_outputs() {
        let doc = apply_updates(
            &document_with_derived_fields(),
            &[FieldUpdate::new("flows", "flow_daily", 480.0)],
        );
        let derived = calculate_derived_values(&doc);
        let ids: Vec<_> = derived.iter().map(|u| u.field_id.as_str()).collect();
        assert_eq!(ids, vec!["volume_monthly"]);
    }

    #[test]
    fn test_no_inputs_no_updates() {
        assert!(calculate_derived_values(&document_with_derived_fields()).is_empty());
    }

    #[test]
    fn test_missing_target_fields_skipped() {
        // The base template has the inputs but not the derived fields
        let library = ParameterLibrary::builtin();
        let registry = TemplateRegistry::new();
        let doc = sheet_templates::build_document(registry.base(), &library).unwrap();
        let doc = apply_updates(
            &doc,
            &[
                FieldUpdate::new("flows", "flow_daily", 100.0),
                FieldUpdate::new("flows", "operating_hours", 10.0),
            ],
        );
        let derived = calculate_derived_values(&doc);
        assert!(derived.is_empty());
    }

    #[test]
    fn test_zero_hours_never_divides() {
        let doc = apply_updates(
            &document_with_derived_fields(),
            &[
                FieldUpdate::new("flows", "flow_daily", 480.0),
                FieldUpdate::new("flows", "operating_hours", 0.0),
            ],
        );
        let derived = calculate_derived_values(&doc);
        assert!(derived.iter().all(|u| u.field_id != "flow_average"));
    }
}
