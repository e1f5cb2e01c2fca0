//! Error types for searchexport.
//!
//! This module defines a hierarchical error taxonomy using `thiserror` for structured error
//! handling. Errors compose cleanly via `?` and `From` conversions.
//!
//! # Error Hierarchy
//!
//! - [`AppError`] - Top-level error returned by the command-line shell
//!   - [`InputError`] - View document reading failures (file not found, IO, malformed JSON)
//!   - [`ExportError`] - Usage errors raised by the export core
//!   - [`ConfigError`] - Config file read/parse failures
//!   - [`LoggingError`] - Tracing subscriber initialization failures
//!   - `std::io::Error` - Failures writing results to stdout
//!
//! # Recovery Strategy
//!
//! Export errors are **fatal to the current export attempt only**. The modal state that
//! produced them is left untouched so the caller can adjust the selection and retry.
//! Nothing in the export core retries on its own, and the dispatch performed by an
//! [`ExportTrigger`](crate::export::ExportTrigger) is outside this error domain.

use crate::config::ConfigError;
use crate::logging::LoggingError;
use crate::model::identifiers::WidgetId;
use std::path::PathBuf;
use thiserror::Error;

/// Top-level application error encompassing all failure modes.
///
/// All domain-specific error types convert to `AppError` via `From`, so the binary can
/// propagate everything with `?`.
#[derive(Debug, Error)]
pub enum AppError {
    /// Failed to read or decode the view document.
    #[error("Failed to read input: {0}")]
    Input(#[from] InputError),

    /// The export could not be started with the current selection.
    #[error("Export failed: {0}")]
    Export(#[from] ExportError),

    /// Config file exists but could not be used.
    #[error("Configuration error: {0}")]
    Config(#[from] ConfigError),

    /// Tracing could not be initialized.
    #[error("Logging error: {0}")]
    Logging(#[from] LoggingError),

    /// Writing results failed.
    #[error("Output error: {0}")]
    Output(#[from] std::io::Error),
}

/// Usage errors raised while preparing or starting an export.
///
/// None of these is recovered internally. Each one aborts the current export attempt
/// and is surfaced to the caller unchanged.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ExportError {
    /// A dashboard export was attempted without a resolvable search type.
    ///
    /// Dashboards have no notion of "export all messages": the export must be scoped to
    /// the result set of one message table. This occurs when no widget is selected, or
    /// when the selected widget has no search type in the view's widget mapping.
    #[error("CSV exports on a dashboard require a selected widget")]
    DashboardRequiresWidget,

    /// A search export was attempted against a view without exactly one query.
    ///
    /// # Examples
    ///
    /// ```
    /// use searchexport::model::error::ExportError;
    ///
    /// let err = ExportError::SingleQueryRequired { count: 2 };
    /// assert!(err.to_string().contains("single query"));
    /// assert!(err.to_string().contains("found 2"));
    /// ```
    #[error("Searches must only have a single query (found {count})")]
    SingleQueryRequired {
        /// Number of queries the search actually has.
        count: usize,
    },

    /// A widget id was selected that is not a message table of the view.
    #[error("Widget {id} is not a message table of this view")]
    UnknownWidget {
        /// The rejected widget id.
        id: WidgetId,
    },

    /// Download was requested while the strategy keeps it disabled.
    ///
    /// For searches this means the widget picker is still showing. For dashboards it
    /// means no widget has been selected yet.
    #[error("Download is not enabled until the export settings are complete")]
    DownloadDisabled,

    /// A different widget was selected in a dialog opened for one fixed widget.
    #[error("Export is fixed to widget {fixed}; no other widget can be selected")]
    WidgetSelectionLocked {
        /// The widget the dialog was opened for.
        fixed: WidgetId,
    },

    /// The widget selection was reset while the strategy does not offer reselection.
    ///
    /// This covers fixed-widget dialogs, searches with a sole message table, and
    /// dialogs where the picker is already showing.
    #[error("Selecting a different message table is not available here")]
    ReselectionNotAllowed,
}

/// Errors encountered when reading the view document.
#[derive(Debug, Error)]
pub enum InputError {
    /// The specified view file does not exist.
    ///
    /// # Examples
    ///
    /// ```
    /// use std::path::PathBuf;
    /// use searchexport::model::error::InputError;
    ///
    /// let err = InputError::FileNotFound {
    ///     path: PathBuf::from("/tmp/missing-view.json")
    /// };
    /// assert!(err.to_string().contains("/tmp/missing-view.json"));
    /// ```
    #[error("File not found: {path}")]
    FileNotFound {
        /// The path that was attempted.
        path: PathBuf,
    },

    /// Generic I/O error reading the input.
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// The document is not valid JSON or does not match the view schema.
    ///
    /// `message` is the `serde_json` error text; it carries line and column.
    #[error("Invalid view document: {message}")]
    InvalidJson {
        /// Parser error description.
        message: String,
    },
}
