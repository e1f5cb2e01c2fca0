//! The seam to whatever actually performs the download.
//!
//! The export core calls a trigger and forgets about it: no completion
//! tracking, no retries. Transport and authentication live behind the trait.

use super::payload::ExportPayload;
use crate::model::{SearchId, SearchTypeId};
use serde::{Deserialize, Serialize};

/// Receiver of dispatched export requests.
pub trait ExportTrigger {
    /// Export the messages of one search type result set.
    fn export_search_type_messages(
        &mut self,
        payload: ExportPayload,
        search_id: &SearchId,
        search_type_id: &SearchTypeId,
    );

    /// Export all messages matching an unscoped payload.
    fn export_all_messages(&mut self, payload: ExportPayload);
}

/// One dispatched export request.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum ExportRequest {
    /// Scoped to a search type of a search.
    SearchType {
        /// Search owning the search type.
        search_id: SearchId,
        /// Result set to export.
        search_type_id: SearchTypeId,
        /// Fields and sort only.
        payload: ExportPayload,
    },
    /// Every message of a search.
    AllMessages {
        /// Fields and sort plus the sole query's context.
        payload: ExportPayload,
    },
}

impl ExportRequest {
    /// The payload, whichever kind of request this is.
    pub fn payload(&self) -> &ExportPayload {
        match self {
            ExportRequest::SearchType { payload, .. } | ExportRequest::AllMessages { payload } => {
                payload
            }
        }
    }
}

/// Records requests instead of sending them.
impl ExportTrigger for Vec<ExportRequest> {
    fn export_search_type_messages(
        &mut self,
        payload: ExportPayload,
        search_id: &SearchId,
        search_type_id: &SearchTypeId,
    ) {
        self.push(ExportRequest::SearchType {
            search_id: search_id.clone(),
            search_type_id: search_type_id.clone(),
            payload,
        });
    }

    fn export_all_messages(&mut self, payload: ExportPayload) {
        self.push(ExportRequest::AllMessages { payload });
    }
}
