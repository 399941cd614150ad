//! Sheet Templates
//!
//! Named, composable bundles of section/field-id references, selectable by
//! project sector/subsector. A template never stores field metadata: it
//! only references parameter ids, and the document builder resolves those
//! against the parameter library when a project is created.
//!
//! Resolution is an explicit priority chain (exact sector/subsector →
//! sector generic → first registered for sector → base), so the fallback
//! order is testable on its own rather than inferred from string
//! comparisons inside a selection function.

mod builder;
mod builtins;
mod definition;
mod registry;

pub use builder::{apply_template, build_document, check_template, BuildError};
pub use definition::{SectionSpec, SheetTemplate, TemplateError};
pub use registry::{MatchStrategy, TemplateRegistry, RESOLUTION_ORDER};
