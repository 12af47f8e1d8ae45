use crate::shared::infrastructure::intent_outbox::{DomainOutbox, OutboxError, OutboxRow};
use std::collections::HashSet;
use tokio::sync::Mutex;

/// Keeps enqueued rows in memory. A row is identified by the stream
/// position that produced it; enqueueing the same position twice fails.
#[derive(Default)]
pub struct InMemoryDomainOutbox {
    rows: Mutex<Vec<OutboxRow>>,
    seen: Mutex<HashSet<(String, i64, String)>>,
    is_offline: bool,
}

impl InMemoryDomainOutbox {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn toggle_offline(&mut self) {
        self.is_offline = !self.is_offline;
    }

    pub async fn rows(&self) -> Vec<OutboxRow> {
        self.rows.lock().await.clone()
    }

    pub async fn event_types(&self) -> Vec<String> {
        self.rows
            .lock()
            .await
            .iter()
            .map(|row| row.event_type.clone())
            .collect()
    }
}

#[async_trait::async_trait]
impl DomainOutbox for InMemoryDomainOutbox {
    async fn enqueue(&self, row: OutboxRow) -> Result<(), OutboxError> {
        if self.is_offline {
            return Err(OutboxError::Transient("Outbox offline".into()));
        }
        let key = (
            row.stream_id.clone(),
            row.stream_version,
            row.event_type.clone(),
        );
        {
            let mut seen = self.seen.lock().await;
            if !seen.insert(key) {
                return Err(OutboxError::Duplicate {
                    stream_id: row.stream_id,
                    stream_version: row.stream_version,
                });
            }
        }
        self.rows.lock().await.push(row);
        Ok(())
    }
}
