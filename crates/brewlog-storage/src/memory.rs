//! Session-local log store.

use tokio::sync::Mutex;
use uuid::Uuid;

use brewlog_core::models::pairing::{PairingDraft, PairingRecord};

use crate::error::StoreError;
use crate::store::{BoxFuture, LogStore, pick_high_rated};

/// In-memory pairing log. Contents are lost when the owning process ends.
///
/// There is no blob backend behind this store: a draft's image, if any, is
/// discarded, and `image_key` is always `None` on the records it returns.
#[derive(Default)]
pub struct MemoryStore {
    records: Mutex<Vec<PairingRecord>>,
}

impl MemoryStore {
    pub fn new() -> Self {
        Self::default()
    }
}

impl LogStore for MemoryStore {
    fn append(&self, draft: PairingDraft) -> BoxFuture<'_, Result<PairingRecord, StoreError>> {
        Box::pin(async move {
            draft.validate()?;

            let mut draft = draft;
            draft.image = None;
            let record = draft.into_record(Uuid::new_v4(), jiff::Timestamp::now(), None);

            let mut records = self.records.lock().await;
            records.insert(0, record.clone());
            Ok(record)
        })
    }

    fn list(&self) -> BoxFuture<'_, Result<Vec<PairingRecord>, StoreError>> {
        Box::pin(async move {
            // Appends go to the front, so the vec is already newest-first.
            Ok(self.records.lock().await.clone())
        })
    }

    fn remove(&self, id: Uuid) -> BoxFuture<'_, Result<(), StoreError>> {
        Box::pin(async move {
            let mut records = self.records.lock().await;
            match records.iter().position(|r| r.id == id) {
                Some(index) => {
                    records.remove(index);
                    Ok(())
                }
                None => Err(StoreError::NotFound { id }),
            }
        })
    }

    fn pick_random_high_rated(
        &self,
        min_rating: u8,
    ) -> BoxFuture<'_, Result<Option<PairingRecord>, StoreError>> {
        Box::pin(async move {
            let records = self.records.lock().await.clone();
            Ok(pick_high_rated(records, min_rating))
        })
    }
}
