//! State for the CSV export dialog.

use crate::export::{
    message_widgets, start_export, strategy_for, widget_option, widget_titles, ExportStrategy,
    ExportTrigger, SelectedField, WidgetOption,
};
use crate::model::{Direction, ExportError, SortConfig, View, ViewType, Widget, WidgetId};
use std::collections::HashMap;
use tracing::{debug, warn};

/// Download hint for browsers that accept credentials embedded in the URL.
pub const INFO_TEXT_CREDENTIALS_IN_URL: &str =
    "Please right click the download link below and choose \"Save Link As...\" to download the CSV file.";

/// Download hint for browsers that prompt for credentials.
pub const INFO_TEXT_PROMPT_FOR_CREDENTIALS: &str = "Please click the download link below. Your browser may ask for your username and password to download the CSV file.";

/// Hint shown above the export settings.
pub fn info_text(credentials_in_url_supported: bool) -> &'static str {
    if credentials_in_url_supported {
        INFO_TEXT_CREDENTIALS_IN_URL
    } else {
        INFO_TEXT_PROMPT_FOR_CREDENTIALS
    }
}

/// Selection state of one open export dialog.
///
/// Holds its own snapshot of the view's message widgets and titles, taken
/// when the dialog opens. Flags are derived through the view kind's
/// [`ExportStrategy`] on every call, so they always agree with the selection.
#[derive(Debug, Clone)]
pub struct ExportModalState {
    view_type: ViewType,

    /// Set when the dialog was opened for one specific widget.
    fixed_widget_id: Option<WidgetId>,

    widgets: Vec<Widget>,
    titles: HashMap<WidgetId, String>,

    selected_widget: Option<Widget>,
    selected_fields: Vec<SelectedField>,
    selected_sort: Vec<SortConfig>,
}

impl ExportModalState {
    /// Open the dialog for `view`.
    ///
    /// The strategy picks the initial widget; its fields and sort seed the
    /// settings. Without a widget, `default_fields` are used and sort is empty.
    pub fn open(view: &View, fixed_widget_id: Option<WidgetId>, default_fields: &[String]) -> Self {
        let strategy = strategy_for(view.view_type);
        let widgets = message_widgets(view);
        let initial = strategy
            .initial_widget(&widgets, fixed_widget_id.as_ref())
            .cloned();

        if let (Some(id), None) = (&fixed_widget_id, &initial) {
            warn!(widget_id = %id, "Fixed widget is not a message table of this view");
        }

        let (selected_fields, selected_sort) = match &initial {
            Some(widget) => settings_of(widget),
            None => (
                default_fields.iter().map(SelectedField::new).collect(),
                Vec::new(),
            ),
        };

        debug!(
            view_id = %view.id,
            view_type = ?view.view_type,
            widgets = widgets.len(),
            initial_widget = ?initial.as_ref().map(|w| w.id.as_str()),
            "Opened export dialog"
        );

        Self {
            view_type: view.view_type,
            widgets: widgets.into_iter().cloned().collect(),
            titles: widget_titles(view),
            fixed_widget_id,
            selected_widget: initial,
            selected_fields,
            selected_sort,
        }
    }

    fn strategy(&self) -> &'static dyn ExportStrategy {
        strategy_for(self.view_type)
    }

    fn widget_refs(&self) -> Vec<&Widget> {
        self.widgets.iter().collect()
    }

    /// Dialog title.
    pub fn title(&self) -> &'static str {
        self.strategy().title()
    }

    /// Whether the dialog was opened for one fixed widget.
    pub fn is_single_widget_mode(&self) -> bool {
        self.fixed_widget_id.is_some()
    }

    /// Whether the widget picker is showing.
    pub fn show_widget_selection(&self) -> bool {
        self.strategy().should_show_widget_selection(
            self.is_single_widget_mode(),
            self.selected_widget.as_ref(),
            &self.widget_refs(),
        )
    }

    /// Whether "select a different message table" is offered.
    pub fn allow_reselection(&self) -> bool {
        self.strategy().should_allow_reselection(
            self.is_single_widget_mode(),
            self.show_widget_selection(),
            &self.widget_refs(),
        )
    }

    /// Whether the download action is enabled.
    pub fn download_enabled(&self) -> bool {
        self.strategy()
            .should_enable_download(self.show_widget_selection(), self.selected_widget.as_ref())
    }

    /// Picker entries for all message widgets.
    pub fn widget_options(&self) -> Vec<WidgetOption> {
        self.widgets
            .iter()
            .map(|widget| widget_option(widget, &self.titles))
            .collect()
    }

    /// Widget whose settings were adopted, if any.
    pub fn selected_widget(&self) -> Option<&Widget> {
        self.selected_widget.as_ref()
    }

    /// Fields to export, in order.
    pub fn selected_fields(&self) -> &[SelectedField] {
        &self.selected_fields
    }

    /// Sort entries, in priority order.
    pub fn selected_sort(&self) -> &[SortConfig] {
        &self.selected_sort
    }

    /// Select a widget and adopt its fields and sort.
    ///
    /// # Errors
    ///
    /// [`ExportError::WidgetSelectionLocked`] if the dialog was opened for a fixed widget,
    /// [`ExportError::UnknownWidget`] if `id` is not a message widget of the view.
    pub fn select_widget(&mut self, id: &WidgetId) -> Result<(), ExportError> {
        if let Some(fixed) = &self.fixed_widget_id {
            warn!(widget_id = %id, fixed_widget_id = %fixed, "Rejected selection in fixed-widget dialog");
            return Err(ExportError::WidgetSelectionLocked {
                fixed: fixed.clone(),
            });
        }

        let widget = self
            .widgets
            .iter()
            .find(|widget| &widget.id == id)
            .cloned()
            .ok_or_else(|| ExportError::UnknownWidget { id: id.clone() })?;

        let (fields, sort) = settings_of(&widget);
        self.selected_fields = fields;
        self.selected_sort = sort;
        self.selected_widget = Some(widget);
        debug!(widget_id = %id, "Applied widget export settings");
        Ok(())
    }

    /// Drop the selected widget so the picker is shown again.
    ///
    /// Fields and sort are kept until another widget is selected.
    ///
    /// # Errors
    ///
    /// [`ExportError::ReselectionNotAllowed`] unless [`Self::allow_reselection`] holds.
    /// The selection is left unchanged in that case.
    pub fn reset_widget_selection(&mut self) -> Result<(), ExportError> {
        if !self.allow_reselection() {
            return Err(ExportError::ReselectionNotAllowed);
        }
        self.selected_widget = None;
        Ok(())
    }

    /// Replace the exported fields, keeping the given order.
    pub fn select_fields<I, S>(&mut self, names: I)
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.selected_fields = names.into_iter().map(SelectedField::new).collect();
    }

    /// Replace the sort entries.
    pub fn set_sort(&mut self, sort: Vec<SortConfig>) {
        self.selected_sort = sort;
    }

    /// Apply `direction` to every sort entry.
    pub fn set_sort_direction(&mut self, direction: Direction) {
        self.selected_sort = self
            .selected_sort
            .iter()
            .map(|sort| sort.with_direction(direction))
            .collect();
    }

    /// Direction shown in the direction picker (that of the first sort entry).
    pub fn sort_direction(&self) -> Option<Direction> {
        self.selected_sort.first().map(|sort| sort.direction)
    }

    /// Start the export with the current selection.
    ///
    /// # Errors
    ///
    /// [`ExportError::DownloadDisabled`] while the strategy keeps download
    /// disabled; otherwise whatever [`start_export`] returns.
    pub fn start_download<T: ExportTrigger + ?Sized>(
        &self,
        view: &View,
        trigger: &mut T,
    ) -> Result<(), ExportError> {
        if !self.download_enabled() {
            return Err(ExportError::DownloadDisabled);
        }

        start_export(
            view,
            self.selected_widget.as_ref(),
            &self.selected_fields,
            &self.selected_sort,
            trigger,
        )
    }
}

fn settings_of(widget: &Widget) -> (Vec<SelectedField>, Vec<SortConfig>) {
    (
        widget
            .config
            .fields
            .iter()
            .map(SelectedField::new)
            .collect(),
        widget.config.sort.clone(),
    )
}

#[cfg(test)]
#[path = "export_modal_tests.rs"]
mod tests;
