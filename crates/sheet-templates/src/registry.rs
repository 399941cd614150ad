//! Template registry and priority-ordered resolution

use tracing::debug;

use crate::{builtins, SheetTemplate, TemplateError};

/// One strategy in the resolution chain
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MatchStrategy {
    /// Template whose sector and subsector both match
    ExactSectorSubsector,
    /// Template for the sector with no subsector constraint
    SectorGeneric,
    /// First template registered for the sector, subsector ignored
    FirstForSector,
    /// The base template; matches unconditionally
    Base,
}

/// The fixed resolution order. `Base` is terminal, so resolution can never
/// come up empty.
pub const RESOLUTION_ORDER: [MatchStrategy; 4] = [
    MatchStrategy::ExactSectorSubsector,
    MatchStrategy::SectorGeneric,
    MatchStrategy::FirstForSector,
    MatchStrategy::Base,
];

impl MatchStrategy {
    /// Try this strategy against the registry; deterministic, no side
    /// effects. Registration order breaks ties for `FirstForSector`.
    pub fn try_match<'a>(
        &self,
        registry: &'a TemplateRegistry,
        sector: Option<&str>,
        subsector: Option<&str>,
    ) -> Option<&'a SheetTemplate> {
        match self {
            MatchStrategy::ExactSectorSubsector => {
                let (sector, subsector) = (sector?, subsector?);
                registry.templates.iter().find(|t| {
                    t.sector.as_deref() == Some(sector) && t.subsector.as_deref() == Some(subsector)
                })
            }
            MatchStrategy::SectorGeneric => {
                let sector = sector?;
                registry
                    .templates
                    .iter()
                    .find(|t| t.sector.as_deref() == Some(sector) && t.subsector.is_none())
            }
            MatchStrategy::FirstForSector => {
                let sector = sector?;
                registry
                    .templates
                    .iter()
                    .find(|t| t.sector.as_deref() == Some(sector))
            }
            MatchStrategy::Base => Some(&registry.base),
        }
    }
}

/// Registry of sheet templates for the process lifetime
///
/// The base template is held apart from the registered list so it can
/// never be shadowed or removed; every other template is matched in
/// registration order.
#[derive(Debug, Clone)]
pub struct TemplateRegistry {
    base: SheetTemplate,
    templates: Vec<SheetTemplate>,
}

impl TemplateRegistry {
    /// Registry with the built-in sector templates
    pub fn new() -> Self {
        let mut registry = Self::empty();
        for template in builtins::sector_templates() {
            registry.register(template);
        }
        registry
    }

    /// Registry holding only the base template
    pub fn empty() -> Self {
        TemplateRegistry {
            base: builtins::base_template(),
            templates: Vec::new(),
        }
    }

    /// Register a template; later registrations rank after earlier ones
    pub fn register(&mut self, template: SheetTemplate) {
        self.templates.push(template);
    }

    /// Register a template parsed from YAML
    pub fn register_yaml(&mut self, yaml: &str) -> Result<(), TemplateError> {
        self.register(SheetTemplate::from_yaml_str(yaml)?);
        Ok(())
    }

    /// Look up a template by id (the base template included)
    pub fn get(&self, template_id: &str) -> Option<&SheetTemplate> {
        if self.base.id == template_id {
            return Some(&self.base);
        }
        self.templates.iter().find(|t| t.id == template_id)
    }

    pub fn base(&self) -> &SheetTemplate {
        &self.base
    }

    pub fn list(&self) -> impl Iterator<Item = &SheetTemplate> {
        std::iter::once(&self.base).chain(self.templates.iter())
    }

    /// Select the template for a project. Tries each strategy of
    /// [`RESOLUTION_ORDER`] in turn; total, deterministic, side-effect-free.
    pub fn resolve(&self, sector: Option<&str>, subsector: Option<&str>) -> &SheetTemplate {
        for strategy in RESOLUTION_ORDER {
            if let Some(template) = strategy.try_match(self, sector, subsector) {
                debug!(
                    template_id = %template.id,
                    ?strategy,
                    sector = sector.unwrap_or("-"),
                    subsector = subsector.unwrap_or("-"),
                    "resolved sheet template"
                );
                return template;
            }
        }
        // RESOLUTION_ORDER ends with Base, which always matches
        unreachable!("resolution chain is terminated by the base strategy")
    }
}

impl Default for TemplateRegistry {
    fn default() -> Self {
        Self::new()
    }
}
