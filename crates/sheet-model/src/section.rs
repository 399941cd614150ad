//! Table section - an ordered, named group of fields

use serde::{Deserialize, Serialize};

use crate::TableField;

/// A named group of related fields within the technical sheet
///
/// Section order and field order are display order; every transformation
/// over a document must preserve both.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TableSection {
    pub id: String,
    pub title: String,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,

    pub fields: Vec<TableField>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub notes: Option<String>,

    #[serde(default)]
    pub allow_custom_fields: bool,
}

impl TableSection {
    pub fn new(id: impl Into<String>, title: impl Into<String>) -> Self {
        TableSection {
            id: id.into(),
            title: title.into(),
            description: None,
            fields: Vec::new(),
            notes: None,
            allow_custom_fields: false,
        }
    }

    pub fn field(&self, field_id: &str) -> Option<&TableField> {
        self.fields.iter().find(|f| f.id == field_id)
    }

    pub fn field_mut(&mut self, field_id: &str) -> Option<&mut TableField> {
        self.fields.iter_mut().find(|f| f.id == field_id)
    }
}

/// Look up a field anywhere in the document
pub fn find_field<'a>(sections: &'a [TableSection], field_id: &str) -> Option<&'a TableField> {
    sections.iter().find_map(|s| s.field(field_id))
}
