//! Exportable field names and their types.

use serde::{Deserialize, Serialize};

/// A field name together with its indexed type.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FieldTypeMapping {
    /// Field name.
    pub name: String,

    /// Indexed type, e.g. `date` or `string`.
    #[serde(rename = "type")]
    pub field_type: String,
}

impl FieldTypeMapping {
    /// Pair a field name with its type.
    pub fn new(name: impl Into<String>, field_type: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            field_type: field_type.into(),
        }
    }
}

/// Source of the exportable fields for the current view.
pub trait FieldTypesProvider {
    /// All exportable fields, in display order.
    fn all(&self) -> &[FieldTypeMapping];

    /// Field names only, in display order.
    fn field_names(&self) -> Vec<&str> {
        self.all().iter().map(|f| f.name.as_str()).collect()
    }
}

impl FieldTypesProvider for [FieldTypeMapping] {
    fn all(&self) -> &[FieldTypeMapping] {
        self
    }
}

impl FieldTypesProvider for Vec<FieldTypeMapping> {
    fn all(&self) -> &[FieldTypeMapping] {
        self
    }
}
