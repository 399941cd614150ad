//! Technical Sheet Document Model
//!
//! The working document a project edits: ordered sections of typed fields,
//! plus the immutable version snapshots taken when a sheet is checkpointed.
//!
//! Two layers are deliberately kept apart:
//! - **value-bearing state** (`value`, `unit`, `source`, `notes`, audit
//!   stamps) — owned by the editing session, always serialized;
//! - **derived metadata** (`label`, `field_type`, `validation`, `options`,
//!   `units`, ...) — reconstructible from the parameter library given the
//!   field id alone. `validation` does not serialize at all, which is why
//!   a loaded document must be rehydrated before use.

mod field;
mod section;
mod validation;
mod value;
mod version;

pub use field::{Conditional, TableField};
pub use section::{find_field, TableSection};
pub use validation::ValidationRule;
pub use value::{FieldSource, FieldType, FieldValue, Importance};
pub use version::{FieldChange, TechnicalDataVersion};
