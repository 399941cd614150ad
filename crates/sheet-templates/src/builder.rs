//! Document builder - template × library → working sections
//!
//! A template only references parameter ids; the builder joins those
//! references against the library and materializes empty working fields.
//! A reference the library cannot satisfy is template/library drift and is
//! surfaced as a diagnostic, never silently dropped.

use thiserror::Error;

use sheet_library::ParameterLibrary;
use sheet_model::TableSection;

use crate::SheetTemplate;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum BuildError {
    /// The template references a parameter id the library does not define
    #[error("template '{template_id}' references unknown parameter '{parameter_id}' in section '{section_id}'")]
    UnknownParameter {
        template_id: String,
        section_id: String,
        parameter_id: String,
    },

    /// No template with this id is registered
    #[error("unknown template '{template_id}'")]
    UnknownTemplate { template_id: String },
}

impl BuildError {
    pub fn code(&self) -> &'static str {
        match self {
            Self::UnknownParameter { .. } => "UNKNOWN_PARAMETER",
            Self::UnknownTemplate { .. } => "UNKNOWN_TEMPLATE",
        }
    }
}

/// Materialize a template into the working document: every referenced
/// parameter becomes a field with empty value and manual source. Section
/// and field order follow the template exactly.
pub fn build_document(
    template: &SheetTemplate,
    library: &ParameterLibrary,
) -> Result<Vec<TableSection>, BuildError> {
    let mut sections = Vec::with_capacity(template.sections.len());
    for spec in &template.sections {
        let mut section = TableSection::new(spec.id.clone(), spec.title.clone());
        section.description = spec.description.clone();
        section.allow_custom_fields = spec.allow_custom_fields;
        section.fields.reserve(spec.parameter_ids.len());

        for parameter_id in &spec.parameter_ids {
            let definition =
                library
                    .get(parameter_id)
                    .ok_or_else(|| BuildError::UnknownParameter {
                        template_id: template.id.clone(),
                        section_id: spec.id.clone(),
                        parameter_id: parameter_id.clone(),
                    })?;
            section.fields.push(definition.instantiate());
        }
        sections.push(section);
    }
    Ok(sections)
}

/// Build a document from a template chosen by id rather than by
/// sector resolution, for the "start from this template" flow.
pub fn apply_template(
    template_id: &str,
    registry: &crate::TemplateRegistry,
    library: &ParameterLibrary,
) -> Result<Vec<TableSection>, BuildError> {
    let template = registry
        .get(template_id)
        .ok_or_else(|| BuildError::UnknownTemplate {
            template_id: template_id.to_string(),
        })?;
    build_document(template, library)
}

/// Report every drifted reference in a template, for startup checks
pub fn check_template(template: &SheetTemplate, library: &ParameterLibrary) -> Vec<BuildError> {
    template
        .sections
        .iter()
        .flat_map(|spec| {
            spec.parameter_ids
                .iter()
                .filter(|id| !library.contains(id))
                .map(|id| BuildError::UnknownParameter {
                    template_id: template.id.clone(),
                    section_id: spec.id.clone(),
                    parameter_id: id.clone(),
                })
        })
        .collect()
}
