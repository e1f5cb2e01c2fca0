//! Export strategy selection by view kind.
//!
//! Searches can export every message of their single query, so a widget is
//! optional. Dashboards have no "export all" and always need a widget.

use crate::model::{ViewType, Widget, WidgetId};

/// Display and enablement policy of the export dialog for one view kind.
///
/// "Single widget mode" means the dialog was opened for one fixed widget
/// and the user cannot pick another.
pub trait ExportStrategy: Send + Sync {
    /// Dialog title.
    fn title(&self) -> &'static str;

    /// Widget preselected when the dialog opens.
    fn initial_widget<'a>(
        &self,
        widgets: &[&'a Widget],
        fixed_widget_id: Option<&WidgetId>,
    ) -> Option<&'a Widget>;

    /// Whether the widget picker is shown instead of the export settings.
    fn should_show_widget_selection(
        &self,
        single_widget_mode: bool,
        selected_widget: Option<&Widget>,
        widgets: &[&Widget],
    ) -> bool;

    /// Whether the user may go back and pick a different widget.
    fn should_allow_reselection(
        &self,
        single_widget_mode: bool,
        showing_selection: bool,
        widgets: &[&Widget],
    ) -> bool;

    /// Whether the download action is enabled.
    fn should_enable_download(
        &self,
        showing_selection: bool,
        selected_widget: Option<&Widget>,
    ) -> bool;
}

fn find_widget<'a>(widgets: &[&'a Widget], id: &WidgetId) -> Option<&'a Widget> {
    widgets.iter().copied().find(|widget| &widget.id == id)
}

/// Strategy for ad-hoc searches.
#[derive(Debug, Clone, Copy, Default)]
pub struct SearchExportStrategy;

impl ExportStrategy for SearchExportStrategy {
    fn title(&self) -> &'static str {
        "Export all search results"
    }

    fn initial_widget<'a>(
        &self,
        widgets: &[&'a Widget],
        fixed_widget_id: Option<&WidgetId>,
    ) -> Option<&'a Widget> {
        match fixed_widget_id {
            Some(id) => find_widget(widgets, id),
            None => match widgets {
                [only] => Some(*only),
                _ => None,
            },
        }
    }

    fn should_show_widget_selection(
        &self,
        single_widget_mode: bool,
        selected_widget: Option<&Widget>,
        widgets: &[&Widget],
    ) -> bool {
        !single_widget_mode && selected_widget.is_none() && widgets.len() > 1
    }

    fn should_allow_reselection(
        &self,
        single_widget_mode: bool,
        showing_selection: bool,
        widgets: &[&Widget],
    ) -> bool {
        !single_widget_mode && !showing_selection && widgets.len() > 1
    }

    fn should_enable_download(
        &self,
        showing_selection: bool,
        _selected_widget: Option<&Widget>,
    ) -> bool {
        // Zero widgets still allows exporting all messages.
        !showing_selection
    }
}

/// Strategy for saved dashboards.
#[derive(Debug, Clone, Copy, Default)]
pub struct DashboardExportStrategy;

impl ExportStrategy for DashboardExportStrategy {
    fn title(&self) -> &'static str {
        "Export message table search results"
    }

    fn initial_widget<'a>(
        &self,
        widgets: &[&'a Widget],
        fixed_widget_id: Option<&WidgetId>,
    ) -> Option<&'a Widget> {
        // A sole widget is never preselected on dashboards.
        fixed_widget_id.and_then(|id| find_widget(widgets, id))
    }

    fn should_show_widget_selection(
        &self,
        single_widget_mode: bool,
        selected_widget: Option<&Widget>,
        _widgets: &[&Widget],
    ) -> bool {
        !single_widget_mode && selected_widget.is_none()
    }

    fn should_allow_reselection(
        &self,
        single_widget_mode: bool,
        showing_selection: bool,
        _widgets: &[&Widget],
    ) -> bool {
        !single_widget_mode && !showing_selection
    }

    fn should_enable_download(
        &self,
        _showing_selection: bool,
        selected_widget: Option<&Widget>,
    ) -> bool {
        selected_widget.is_some()
    }
}

/// Strategy for a view kind.
pub fn strategy_for(view_type: ViewType) -> &'static dyn ExportStrategy {
    match view_type {
        ViewType::Search => &SearchExportStrategy,
        ViewType::Dashboard => &DashboardExportStrategy,
    }
}
