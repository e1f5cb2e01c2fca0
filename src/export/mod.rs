//! CSV export core (pure, apart from the trigger seam).
//!
//! - [`strategy`] decides what the export dialog shows and enables per view kind
//! - [`resolver`] finds message widgets, their titles and backing search types
//! - [`payload`] assembles the wire payload and dispatches it
//! - [`trigger`] is the boundary to whatever performs the download

pub mod payload;
pub mod resolver;
pub mod strategy;
pub mod trigger;

pub use payload::{start_export, ExportPayload, SelectedField};
pub use resolver::{
    message_widgets, resolve_search_type, widget_option, widget_titles, WidgetOption,
    UNTITLED_WIDGET_LABEL,
};
pub use strategy::{strategy_for, DashboardExportStrategy, ExportStrategy, SearchExportStrategy};
pub use trigger::{ExportRequest, ExportTrigger};
