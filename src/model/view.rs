//! View, search and query types.
//!
//! These are read-only snapshots of view state loaded from outside. The
//! export logic selects from and reshapes them; it never mutates them.

use super::identifiers::{QueryId, SearchId, SearchTypeId, StreamId, ViewId, WidgetId};
use super::widget::Widget;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::collections::HashMap;
use tracing::warn;

/// Filter type marking a stream restriction.
pub const STREAM_FILTER_TYPE: &str = "stream";

/// Kind of view. Search is ad-hoc, Dashboard is a saved multi-query layout.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum ViewType {
    /// Ad-hoc search with a single query.
    Search,
    /// Saved layout of several queries.
    Dashboard,
}

/// A saved or ad-hoc arrangement of queries and widgets.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct View {
    /// View id.
    pub id: ViewId,

    /// Search or dashboard.
    #[serde(rename = "type")]
    pub view_type: ViewType,

    /// Search the view executes.
    pub search: Search,

    /// Per-query view states, in query order.
    #[serde(default)]
    pub state: Vec<ViewState>,
}

/// The search backing a view.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Search {
    /// Search id, addressed by scoped exports.
    pub id: SearchId,

    /// Queries of the search, in order.
    #[serde(default)]
    pub queries: Vec<Query>,
}

/// Widgets and their bookkeeping for a single query.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ViewState {
    /// Query this state belongs to.
    pub query_id: Option<QueryId>,

    /// All widgets of the state, message tables or not.
    #[serde(default)]
    pub widgets: Vec<Widget>,

    /// User-assigned titles.
    #[serde(default)]
    pub titles: Titles,

    /// Which search type backs each widget.
    #[serde(default)]
    pub widget_mapping: HashMap<WidgetId, SearchTypeId>,
}

/// User-assigned titles, grouped by entity kind.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Titles {
    /// Widget titles by widget id.
    #[serde(default)]
    pub widget: HashMap<WidgetId, String>,
}

/// A single query of a search.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Query {
    /// Query id.
    pub id: QueryId,

    /// Time range searched.
    pub timerange: TimeRange,

    /// Query string; empty elasticsearch query when absent.
    #[serde(default)]
    pub query: QueryString,

    /// Filter tree, holding the stream restriction if any.
    #[serde(default)]
    pub filter: Option<Filter>,

    /// Result sets the query produces.
    #[serde(default)]
    pub search_types: Vec<SearchType>,
}

impl Query {
    /// Stream ids this query is restricted to (empty when unfiltered).
    pub fn stream_ids(&self) -> Vec<StreamId> {
        self.filter
            .as_ref()
            .map(Filter::stream_ids)
            .unwrap_or_default()
    }
}

/// Time range of a query.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "lowercase")]
pub enum TimeRange {
    /// The last `range` seconds.
    Relative {
        /// Length in seconds.
        range: u64,
    },
    /// A fixed interval.
    Absolute {
        /// Start (inclusive).
        from: DateTime<Utc>,
        /// End.
        to: DateTime<Utc>,
    },
    /// A natural-language range such as "last week".
    Keyword {
        /// The range as typed.
        keyword: String,
    },
}

/// Query string together with its query language.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct QueryString {
    /// Query language, e.g. `elasticsearch`.
    #[serde(rename = "type")]
    pub query_type: String,

    /// The query text.
    #[serde(default)]
    pub query_string: String,
}

impl QueryString {
    /// An elasticsearch query string.
    pub fn elasticsearch(query_string: impl Into<String>) -> Self {
        Self {
            query_type: "elasticsearch".to_string(),
            query_string: query_string.into(),
        }
    }
}

impl Default for QueryString {
    fn default() -> Self {
        Self::elasticsearch("")
    }
}

/// Query filter tree.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Filter {
    /// Node type, e.g. `or` or [`STREAM_FILTER_TYPE`].
    #[serde(rename = "type")]
    pub filter_type: String,

    /// Referenced entity id; a stream id for stream nodes.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub id: Option<String>,

    /// Child nodes.
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub filters: Vec<Filter>,
}

impl Filter {
    /// Ids of the direct child filters of type `stream`, in order.
    ///
    /// Stream children without an id, or with an empty one, are skipped with a
    /// warning; the export then covers fewer streams than the query names.
    pub fn stream_ids(&self) -> Vec<StreamId> {
        self.filters
            .iter()
            .filter(|f| f.filter_type == STREAM_FILTER_TYPE)
            .filter_map(|f| match f.id.as_deref().map(StreamId::new) {
                Some(Ok(id)) => Some(id),
                Some(Err(err)) => {
                    warn!(error = %err, "Skipping stream filter with invalid id");
                    None
                }
                None => {
                    warn!("Skipping stream filter without id");
                    None
                }
            })
            .collect()
    }
}

/// A named query execution producing a result set.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SearchType {
    /// Search type id, the target of widget mappings.
    pub id: SearchTypeId,

    /// Result kind, e.g. `messages`.
    #[serde(rename = "type")]
    pub search_type: String,
}
