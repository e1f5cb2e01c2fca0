//! Domain model types (pure).
//!
//! All types in this module are pure data with smart constructors.

pub mod error;
pub mod field_types;
pub mod identifiers;
pub mod view;
pub mod widget;

// Re-export for convenience
pub use error::{AppError, ExportError, InputError};
pub use field_types::{FieldTypeMapping, FieldTypesProvider};
pub use identifiers::{
    InvalidIdentifier, QueryId, SearchId, SearchTypeId, StreamId, ViewId, WidgetId,
};
pub use view::{
    Filter, Query, QueryString, Search, SearchType, TimeRange, Titles, View, ViewState, ViewType,
};
pub use widget::{Direction, SortConfig, Widget, WidgetConfig};
