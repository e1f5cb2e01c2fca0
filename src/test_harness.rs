//! View fixtures for unit tests.
//!
//! Builds small in-memory views without going through JSON, so tests can state
//! exactly which widgets, titles and search types exist.

use crate::model::{
    Direction, Filter, Query, QueryId, QueryString, Search, SearchId, SearchType, SearchTypeId,
    SortConfig, TimeRange, View, ViewId, ViewState, ViewType, Widget, WidgetConfig, WidgetId,
};

/// Message table widget with the given fields and sort.
pub fn message_widget(id: &str, fields: &[&str], sort: &[(&str, Direction)]) -> Widget {
    Widget {
        id: WidgetId::new(id).expect("fixture widget id"),
        widget_type: "messages".to_string(),
        config: WidgetConfig {
            fields: fields.iter().map(|f| f.to_string()).collect(),
            sort: sort
                .iter()
                .map(|(field, direction)| SortConfig::new(*field, *direction))
                .collect(),
        },
    }
}

/// Widget of an arbitrary type with an empty config.
pub fn widget(id: &str, widget_type: &str) -> Widget {
    Widget {
        id: WidgetId::new(id).expect("fixture widget id"),
        widget_type: widget_type.to_string(),
        config: WidgetConfig::default(),
    }
}

/// Query over the last five minutes with one `messages` search type per id.
pub fn query(id: &str, search_type_ids: &[&str]) -> Query {
    Query {
        id: QueryId::new(id).expect("fixture query id"),
        timerange: TimeRange::Relative { range: 300 },
        query: QueryString::elasticsearch("source:example.org"),
        filter: None,
        search_types: search_type_ids
            .iter()
            .map(|st| SearchType {
                id: SearchTypeId::new(*st).expect("fixture search type id"),
                search_type: "messages".to_string(),
            })
            .collect(),
    }
}

/// `or` filter over the given stream ids.
pub fn stream_filter(stream_ids: &[&str]) -> Filter {
    Filter {
        filter_type: "or".to_string(),
        id: None,
        filters: stream_ids
            .iter()
            .map(|id| Filter {
                filter_type: "stream".to_string(),
                id: Some(id.to_string()),
                filters: Vec::new(),
            })
            .collect(),
    }
}

/// Incremental builder for test views.
pub struct ViewFixture {
    view: View,
}

impl ViewFixture {
    pub fn new(view_type: ViewType) -> Self {
        Self {
            view: View {
                id: ViewId::new("view-1").expect("fixture view id"),
                view_type,
                search: Search {
                    id: SearchId::new("search-1").expect("fixture search id"),
                    queries: Vec::new(),
                },
                state: Vec::new(),
            },
        }
    }

    pub fn search() -> Self {
        Self::new(ViewType::Search)
    }

    pub fn dashboard() -> Self {
        Self::new(ViewType::Dashboard)
    }

    /// Append a query to the search.
    pub fn with_query(mut self, query: Query) -> Self {
        self.view.search.queries.push(query);
        self
    }

    /// Start a new view state for `query_id`; later widgets land in it.
    pub fn with_state(mut self, query_id: &str) -> Self {
        self.view.state.push(ViewState {
            query_id: Some(QueryId::new(query_id).expect("fixture query id")),
            ..ViewState::default()
        });
        self
    }

    /// Add a widget backed by `search_type_id` to the latest view state.
    pub fn with_widget(mut self, widget: Widget, search_type_id: &str) -> Self {
        let state = self.current_state();
        state.widget_mapping.insert(
            widget.id.clone(),
            SearchTypeId::new(search_type_id).expect("fixture search type id"),
        );
        state.widgets.push(widget);
        self
    }

    /// Add a widget without any search type mapping.
    pub fn with_unmapped_widget(mut self, widget: Widget) -> Self {
        self.current_state().widgets.push(widget);
        self
    }

    /// Title a widget in the latest view state.
    pub fn with_title(mut self, widget_id: &str, title: &str) -> Self {
        self.current_state().titles.widget.insert(
            WidgetId::new(widget_id).expect("fixture widget id"),
            title.to_string(),
        );
        self
    }

    pub fn build(self) -> View {
        self.view
    }

    fn current_state(&mut self) -> &mut ViewState {
        if self.view.state.is_empty() {
            self.view.state.push(ViewState::default());
        }
        let last = self.view.state.len() - 1;
        &mut self.view.state[last]
    }
}
