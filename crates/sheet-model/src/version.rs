//! Version snapshots of the technical sheet

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::{FieldSource, FieldValue, TableSection};

/// One field-level difference between two snapshots
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FieldChange {
    pub field_id: String,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub previous_value: Option<FieldValue>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub new_value: Option<FieldValue>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub changed_by: Option<String>,

    pub changed_at: DateTime<Utc>,
}

/// An immutable checkpoint of the whole document
///
/// Created whenever the sheet is explicitly versioned (before applying an
/// agent proposal, on milestone sign-off, ...). Never mutated afterwards.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TechnicalDataVersion {
    pub id: Uuid,
    pub project_id: String,
    pub version_label: String,
    pub created_at: DateTime<Utc>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub created_by: Option<String>,

    #[serde(default)]
    pub source: FieldSource,

    pub snapshot: Vec<TableSection>,

    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub changes: Vec<FieldChange>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub notes: Option<String>,
}
