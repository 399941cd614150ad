//! Parameter library - id-keyed catalogue with lookup

use std::collections::HashMap;

use crate::ParameterDefinition;

/// The canonical, read-only catalogue of parameter definitions
///
/// Iteration order is registration order, so `ids()` is stable across
/// runs and catalogue listings keep their grouping.
#[derive(Debug, Clone, Default)]
pub struct ParameterLibrary {
    parameters: HashMap<String, ParameterDefinition>,
    order: Vec<String>,
}

impl ParameterLibrary {
    /// The full built-in water-treatment catalogue
    pub fn builtin() -> Self {
        let mut library = Self::default();
        crate::catalogue::register_builtins(&mut library);
        library
    }

    pub fn get(&self, parameter_id: &str) -> Option<&ParameterDefinition> {
        self.parameters.get(parameter_id)
    }

    pub fn contains(&self, parameter_id: &str) -> bool {
        self.parameters.contains_key(parameter_id)
    }

    pub fn len(&self) -> usize {
        self.parameters.len()
    }

    pub fn is_empty(&self) -> bool {
        self.parameters.is_empty()
    }

    /// Parameter ids in registration order
    pub fn ids(&self) -> impl Iterator<Item = &str> {
        self.order.iter().map(String::as_str)
    }

    pub(crate) fn register(&mut self, definition: ParameterDefinition) {
        let id = definition.id.clone();
        if self.parameters.insert(id.clone(), definition).is_none() {
            self.order.push(id);
        }
    }
}
