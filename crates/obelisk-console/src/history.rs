/*
[INPUT]:  ObeliskClient and explicit refresh requests
[OUTPUT]: Ordered snapshot of prior task outcomes
[POS]:    Presentation-facing layer - pull-only history viewer
[UPDATE]: When the tasks_all contract or display ordering changes
*/

use obelisk_adapter::{ObeliskClient, Result, TaskRecord};
use std::sync::Arc;

/// Pull-only viewer over the service's task history. Independent of
/// the poller: no timer, no state machine.
#[derive(Debug)]
pub struct HistoryViewer {
    client: Arc<ObeliskClient>,
    entries: Vec<TaskRecord>,
}

impl HistoryViewer {
    pub fn new(client: Arc<ObeliskClient>) -> Self {
        Self {
            client,
            entries: Vec::new(),
        }
    }

    /// The currently displayed snapshot, in fetch order
    pub fn entries(&self) -> &[TaskRecord] {
        &self.entries
    }

    /// Fetch the full history mapping and replace the displayed list
    /// wholesale. Keys only key the mapping; the list keeps the map's
    /// iteration order, so an unchanged backing set yields an
    /// identical list on every refresh.
    pub async fn refresh(&mut self) -> Result<&[TaskRecord]> {
        let records = self.client.list_all_tasks().await?;
        self.entries = records.into_values().collect();
        tracing::debug!(count = self.entries.len(), "history refreshed");
        Ok(&self.entries)
    }
}
