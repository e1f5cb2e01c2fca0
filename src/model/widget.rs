//! Widget and sort configuration types.

use super::identifiers::WidgetId;
use serde::{Deserialize, Serialize};

/// Widget type of message tables, the only exportable widgets.
pub const MESSAGES_WIDGET_TYPE: &str = "messages";

/// Sort direction.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Direction {
    /// Smallest first.
    Ascending,
    /// Largest first.
    Descending,
}

impl Direction {
    /// Parse the short forms accepted on the command line.
    ///
    /// Accepts `asc`/`desc` as well as the full names, case-insensitively.
    pub fn parse(s: &str) -> Option<Self> {
        match s.to_ascii_lowercase().as_str() {
            "asc" | "ascending" => Some(Direction::Ascending),
            "desc" | "descending" => Some(Direction::Descending),
            _ => None,
        }
    }
}

/// A single (field, direction) sort spec.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SortConfig {
    /// Field to sort by.
    pub field: String,
    /// Sort direction for `field`.
    pub direction: Direction,
}

impl SortConfig {
    /// Sort spec for `field`.
    pub fn new(field: impl Into<String>, direction: Direction) -> Self {
        Self {
            field: field.into(),
            direction,
        }
    }

    /// Copy of this sort spec with a different direction.
    pub fn with_direction(&self, direction: Direction) -> Self {
        Self {
            field: self.field.clone(),
            direction,
        }
    }
}

/// Message table settings relevant to an export.
///
/// Other widget types carry different configs; unknown keys are ignored and
/// missing lists default to empty.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct WidgetConfig {
    /// Displayed field names, in column order.
    #[serde(default)]
    pub fields: Vec<String>,

    /// Sort specs, in priority order.
    #[serde(default)]
    pub sort: Vec<SortConfig>,
}

/// A configurable visualization bound to a search type result.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Widget {
    /// Widget id, unique within the view.
    pub id: WidgetId,

    /// Widget type; message tables are [`MESSAGES_WIDGET_TYPE`].
    #[serde(rename = "type")]
    pub widget_type: String,

    /// Export-relevant settings.
    #[serde(default)]
    pub config: WidgetConfig,
}

impl Widget {
    /// Whether this widget is a message table (the only exportable kind).
    pub fn is_message_table(&self) -> bool {
        self.widget_type == MESSAGES_WIDGET_TYPE
    }
}
