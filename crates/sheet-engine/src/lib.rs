//! Sheet Engine
//!
//! The synchronous transformation pipeline over a technical-sheet
//! document. Every operation here is a pure function over an
//! immutable-by-convention `Vec<TableSection>`: each edit produces a new
//! document value the caller retains, so there is no shared mutable state
//! and no locking. The only async boundary in the system (persistence)
//! lives in `sheet-store`.
//!
//! Pipeline: template resolution + parameter library →
//! [`create_initial_technical_sheet_data`] → (persisted externally) →
//! [`rehydrate_sections`] on load → [`apply_update`] on every edit →
//! completion/compliance/projection reads.

mod completion;
mod compliance;
mod derived;
mod rehydrate;
mod summary;
mod update;
mod version;

pub use completion::{overall_completion, section_completion, CompletionStats};
pub use compliance::{
    check_compliance, normalize_parameter_name, ComplianceReport, ComplianceStatus,
    ParameterCompliance,
};
pub use derived::calculate_derived_values;
pub use rehydrate::rehydrate_sections;
pub use summary::{
    sections_to_summary_rows, sections_to_target_fields, source_breakdown, SourceBreakdown,
    SummaryRow, TargetField,
};
pub use update::{apply_update, apply_updates, FieldUpdate};
pub use version::snapshot_version;

use sheet_library::ParameterLibrary;
use sheet_model::TableSection;
use sheet_templates::{build_document, BuildError, TemplateRegistry};

/// Entry point for a new project: resolve the template for the project's
/// sector/subsector and materialize it into an empty working document.
pub fn create_initial_technical_sheet_data(
    sector: Option<&str>,
    subsector: Option<&str>,
    registry: &TemplateRegistry,
    library: &ParameterLibrary,
) -> Result<Vec<TableSection>, BuildError> {
    let template = registry.resolve(sector, subsector);
    build_document(template, library)
}
