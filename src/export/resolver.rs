//! Widget and search-type resolution over a view snapshot.
//!
//! Each function builds its maps fresh from the borrowed view. Nothing is
//! cached between calls.

use crate::model::{SearchType, SearchTypeId, View, Widget, WidgetId};
use std::collections::HashMap;
use tracing::debug;

/// Label used for message tables the user never titled.
pub const UNTITLED_WIDGET_LABEL: &str = "Message table without title";

/// A selectable entry of the widget picker.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct WidgetOption {
    /// Widget title, or [`UNTITLED_WIDGET_LABEL`].
    pub label: String,
    /// Widget the entry selects.
    pub widget_id: WidgetId,
}

/// Message-table widgets across all view states.
///
/// Order follows first appearance. A widget id repeated in a later state
/// replaces the earlier widget but keeps its position.
pub fn message_widgets(view: &View) -> Vec<&Widget> {
    let mut widgets: Vec<&Widget> = Vec::new();
    let mut positions: HashMap<&WidgetId, usize> = HashMap::new();

    for widget in view
        .state
        .iter()
        .flat_map(|state| state.widgets.iter())
        .filter(|widget| widget.is_message_table())
    {
        match positions.get(&widget.id) {
            Some(&idx) => widgets[idx] = widget,
            None => {
                positions.insert(&widget.id, widgets.len());
                widgets.push(widget);
            }
        }
    }

    widgets
}

/// Union of widget titles across all view states. Later states win.
pub fn widget_titles(view: &View) -> HashMap<WidgetId, String> {
    view.state
        .iter()
        .flat_map(|state| state.titles.widget.iter())
        .map(|(id, title)| (id.clone(), title.clone()))
        .collect()
}

/// Picker entry for a widget, falling back to [`UNTITLED_WIDGET_LABEL`].
pub fn widget_option(widget: &Widget, titles: &HashMap<WidgetId, String>) -> WidgetOption {
    let label = titles
        .get(&widget.id)
        .filter(|title| !title.is_empty())
        .cloned()
        .unwrap_or_else(|| UNTITLED_WIDGET_LABEL.to_string());

    WidgetOption {
        label,
        widget_id: widget.id.clone(),
    }
}

/// Union of widget → search type mappings across all view states.
fn widget_mapping(view: &View) -> HashMap<&WidgetId, &SearchTypeId> {
    view.state
        .iter()
        .flat_map(|state| state.widget_mapping.iter())
        .collect()
}

/// Find the search type whose result set backs `selected_widget`.
///
/// Returns `None` when no widget is selected, the widget is unmapped, or the
/// mapped id matches no search type of any query. Callers decide whether that
/// is an error.
pub fn resolve_search_type<'v>(
    view: &'v View,
    selected_widget: Option<&Widget>,
) -> Option<&'v SearchType> {
    let widget = selected_widget?;
    let mapping = widget_mapping(view);
    let Some(search_type_id) = mapping.get(&widget.id) else {
        debug!(widget_id = %widget.id, "Widget has no search type mapping");
        return None;
    };

    let resolved = view
        .search
        .queries
        .iter()
        .flat_map(|query| query.search_types.iter())
        .find(|search_type| &search_type.id == *search_type_id);

    if resolved.is_none() {
        debug!(
            widget_id = %widget.id,
            search_type_id = %search_type_id,
            "Mapped search type not found in search"
        );
    }

    resolved
}

#[cfg(test)]
#[path = "resolver_tests.rs"]
mod tests;
