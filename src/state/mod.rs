//! Dialog state (pure).
//!
//! All state transitions are pure functions testable without a UI.

pub mod export_modal;

// Re-export for convenience
pub use export_modal::{info_text, ExportModalState};
