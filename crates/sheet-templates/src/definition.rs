//! Template definitions
//!
//! Static configuration, either built in code or loaded from YAML files.
//! Templates are resolved on demand into working sections; they are never
//! stored with project data.

use serde::{Deserialize, Serialize};
use thiserror::Error;

#[derive(Debug, Error)]
pub enum TemplateError {
    #[error("failed to parse template YAML: {0}")]
    Yaml(#[from] serde_yaml::Error),

    #[error("template '{template_id}' has no sections")]
    NoSections { template_id: String },

    #[error("template '{template_id}' repeats section id '{section_id}'")]
    DuplicateSection {
        template_id: String,
        section_id: String,
    },
}

/// One section of a template: a section header plus the parameter ids to
/// pull from the library, in display order.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SectionSpec {
    pub id: String,
    pub title: String,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,

    pub parameter_ids: Vec<String>,

    #[serde(default)]
    pub allow_custom_fields: bool,
}

/// A named bundle of sections recommended for a sector/subsector
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SheetTemplate {
    pub id: String,
    pub name: String,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,

    /// Sector this template matches; `None` only for the base template
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub sector: Option<String>,

    /// Subsector constraint; `None` makes the template the sector generic
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub subsector: Option<String>,

    pub sections: Vec<SectionSpec>,
}

impl SheetTemplate {
    /// Parse a single template from YAML and check its structure
    pub fn from_yaml_str(yaml: &str) -> Result<Self, TemplateError> {
        let template: SheetTemplate = serde_yaml::from_str(yaml)?;
        template.validate()?;
        Ok(template)
    }

    fn validate(&self) -> Result<(), TemplateError> {
        if self.sections.is_empty() {
            return Err(TemplateError::NoSections {
                template_id: self.id.clone(),
            });
        }
        for (i, section) in self.sections.iter().enumerate() {
            if self.sections[..i].iter().any(|s| s.id == section.id) {
                return Err(TemplateError::DuplicateSection {
                    template_id: self.id.clone(),
                    section_id: section.id.clone(),
                });
            }
        }
        Ok(())
    }

    /// Total number of fields the template will materialize
    pub fn field_count(&self) -> usize {
        self.sections.iter().map(|s| s.parameter_ids.len()).sum()
    }
}
