//! Export payload assembly and dispatch.

use super::resolver::resolve_search_type;
use super::trigger::ExportTrigger;
use crate::model::{
    ExportError, Query, QueryString, SortConfig, StreamId, TimeRange, View, ViewType, Widget,
};
use serde::{Deserialize, Serialize};
use tracing::{debug, info};

/// A field chosen for export.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SelectedField {
    /// Field name as known to the field-types store.
    pub field: String,
}

impl SelectedField {
    /// Wrap a field name.
    pub fn new(field: impl Into<String>) -> Self {
        Self {
            field: field.into(),
        }
    }
}

/// Wire shape of an export request.
///
/// Query context is only present for unscoped exports; absent members are
/// omitted from the serialized form.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ExportPayload {
    /// Exported column names, in selection order.
    pub fields_in_order: Vec<String>,

    /// Sort entries, in selection order.
    pub sort: Vec<SortConfig>,

    /// Time range of the sole query (unscoped exports only).
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub timerange: Option<TimeRange>,

    /// Query string of the sole query (unscoped exports only).
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub query_string: Option<QueryString>,

    /// Streams the sole query filters on (unscoped exports only).
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub streams: Option<Vec<StreamId>>,
}

impl ExportPayload {
    /// Payload from the selected settings. Order is kept and duplicates are not removed.
    pub fn new(fields: &[SelectedField], sort: &[SortConfig]) -> Self {
        Self {
            fields_in_order: fields.iter().map(|f| f.field.clone()).collect(),
            sort: sort.to_vec(),
            timerange: None,
            query_string: None,
            streams: None,
        }
    }

    /// Merge the context of `query` for an unscoped export.
    pub fn with_query(self, query: &Query) -> Self {
        Self {
            timerange: Some(query.timerange.clone()),
            query_string: Some(query.query.clone()),
            streams: Some(query.stream_ids()),
            ..self
        }
    }
}

/// Assemble the payload for the current selection and hand it to `trigger`.
///
/// Dashboards always export the selected widget's search type. Searches must
/// have exactly one query; they export the selected widget's search type when
/// one resolves and every message of the query otherwise.
///
/// # Errors
///
/// - [`ExportError::DashboardRequiresWidget`] for a dashboard without a resolvable search type
/// - [`ExportError::SingleQueryRequired`] for a search with zero or several queries
pub fn start_export<T: ExportTrigger + ?Sized>(
    view: &View,
    selected_widget: Option<&Widget>,
    selected_fields: &[SelectedField],
    selected_sort: &[SortConfig],
    trigger: &mut T,
) -> Result<(), ExportError> {
    let payload = ExportPayload::new(selected_fields, selected_sort);
    let search_type = resolve_search_type(view, selected_widget);

    match view.view_type {
        ViewType::Dashboard => {
            let search_type = search_type.ok_or(ExportError::DashboardRequiresWidget)?;
            info!(
                view_id = %view.id,
                search_type_id = %search_type.id,
                fields = payload.fields_in_order.len(),
                "Starting dashboard widget export"
            );
            trigger.export_search_type_messages(payload, &view.search.id, &search_type.id);
        }
        ViewType::Search => {
            let query = match view.search.queries.as_slice() {
                [query] => query,
                queries => {
                    return Err(ExportError::SingleQueryRequired {
                        count: queries.len(),
                    })
                }
            };

            if let Some(search_type) = search_type {
                info!(
                    view_id = %view.id,
                    search_type_id = %search_type.id,
                    fields = payload.fields_in_order.len(),
                    "Starting search widget export"
                );
                trigger.export_search_type_messages(payload, &view.search.id, &search_type.id);
            } else {
                let payload = payload.with_query(query);
                debug!(query_id = %query.id, streams = ?payload.streams, "Merged query context");
                info!(
                    view_id = %view.id,
                    fields = payload.fields_in_order.len(),
                    "Starting export of all messages"
                );
                trigger.export_all_messages(payload);
            }
        }
    }

    Ok(())
}

#[cfg(test)]
#[path = "payload_tests.rs"]
mod tests;
