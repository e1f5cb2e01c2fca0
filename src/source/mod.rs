//! View document input.
//!
//! A view document bundles the view snapshot with the exportable fields of
//! that view:
//!
//! ```json
//! { "view": { "id": "...", "type": "SEARCH", "search": {...}, "state": [...] },
//!   "fields": [ { "name": "timestamp", "type": "date" } ] }
//! ```
//!
//! It can be read from a file or, with the path `-`, from stdin.

use crate::model::error::InputError;
use crate::model::{FieldTypeMapping, FieldTypesProvider, View};
use serde::{Deserialize, Serialize};
use std::io::Read;
use std::path::Path;
use tracing::debug;

/// Path that selects stdin instead of a file.
pub const STDIN_PATH: &str = "-";

/// A view snapshot plus its exportable fields.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ViewDocument {
    /// The view to export from.
    pub view: View,

    /// Field-types store contents.
    #[serde(default)]
    pub fields: Vec<FieldTypeMapping>,
}

impl FieldTypesProvider for ViewDocument {
    fn all(&self) -> &[FieldTypeMapping] {
        &self.fields
    }
}

/// Parse a view document from a JSON string.
///
/// # Errors
///
/// Returns `InputError::InvalidJson` if the JSON is malformed or does not
/// match the view schema (including unknown view types and empty ids).
pub fn parse_view_document(json: &str) -> Result<ViewDocument, InputError> {
    serde_json::from_str(json).map_err(|e| InputError::InvalidJson {
        message: e.to_string(),
    })
}

/// Read and parse a view document from any reader.
///
/// # Errors
///
/// Returns `InputError::Io` for read failures and `InputError::InvalidJson`
/// for malformed documents.
pub fn read_view_document(mut reader: impl Read) -> Result<ViewDocument, InputError> {
    let mut contents = String::new();
    reader.read_to_string(&mut contents)?;
    parse_view_document(&contents)
}

/// Load a view document from `path`, or from stdin when `path` is `-`.
///
/// # Errors
///
/// Returns `InputError::FileNotFound` if the file does not exist, plus the
/// errors of [`read_view_document`].
pub fn load_view_document(path: &Path) -> Result<ViewDocument, InputError> {
    if path.as_os_str() == STDIN_PATH {
        debug!("Reading view document from stdin");
        return read_view_document(std::io::stdin().lock());
    }

    if !path.exists() {
        return Err(InputError::FileNotFound {
            path: path.to_path_buf(),
        });
    }

    debug!(path = %path.display(), "Reading view document");
    let file = std::fs::File::open(path)?;
    read_view_document(std::io::BufReader::new(file))
}
