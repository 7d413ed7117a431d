//! The log store trait and its durable S3-backed implementation.
//!
//! One JSON object per record under `pairings/{id}.json`. Listing reads every
//! record fresh and sorts by the embedded timestamp, so independent writers
//! need no coordination: records are never updated in place, and the stored
//! timestamps decide cross-writer order.

use std::future::Future;
use std::pin::Pin;

use aws_sdk_s3::Client;
use rand::seq::SliceRandom;
use tracing::info;
use uuid::Uuid;

use brewlog_core::models::pairing::{PairingDraft, PairingRecord};
use brewlog_core::s3_keys;

use crate::error::{StorageError, StoreError};
use crate::images;
use crate::objects;

pub(crate) type BoxFuture<'a, T> = Pin<Box<dyn Future<Output = T> + Send + 'a>>;

/// The append-only pairing log.
///
/// The caller owns a store instance and picks its lifecycle at construction:
/// [`MemoryStore`](crate::memory::MemoryStore) for a session-local log,
/// [`S3LogStore`] for the shared durable one.
///
/// Methods return boxed futures for dyn compatibility.
pub trait LogStore: Send + Sync {
    /// Validate and store a submission, assigning its id and timestamp.
    ///
    /// Rejects the draft without any side effect on validation failure.
    /// On success the new record is returned by subsequent [`list`](Self::list)
    /// calls, ordered first.
    fn append(&self, draft: PairingDraft) -> BoxFuture<'_, Result<PairingRecord, StoreError>>;

    /// Every record, newest first. Reads fresh on every call.
    fn list(&self) -> BoxFuture<'_, Result<Vec<PairingRecord>, StoreError>>;

    /// Delete one record, and its stored image, by id.
    fn remove(&self, id: Uuid) -> BoxFuture<'_, Result<(), StoreError>>;

    /// Uniform-random record with `rating >= min_rating`, or `None` when no
    /// record qualifies at call time.
    fn pick_random_high_rated(
        &self,
        min_rating: u8,
    ) -> BoxFuture<'_, Result<Option<PairingRecord>, StoreError>>;
}

/// Uniform choice among sufficiently rated records. Shared by both stores.
pub(crate) fn pick_high_rated(
    records: Vec<PairingRecord>,
    min_rating: u8,
) -> Option<PairingRecord> {
    let eligible: Vec<PairingRecord> = records
        .into_iter()
        .filter(|r| r.rating.is_some_and(|rating| rating >= min_rating))
        .collect();
    eligible.choose(&mut rand::thread_rng()).cloned()
}

/// Durable, multi-client pairing log backed by S3.
pub struct S3LogStore {
    s3: Client,
    bucket: String,
}

impl S3LogStore {
    pub fn new(s3: Client, bucket: impl Into<String>) -> Self {
        Self {
            s3,
            bucket: bucket.into(),
        }
    }

    async fn load_all(&self) -> Result<Vec<PairingRecord>, StoreError> {
        let keys = objects::list_objects(&self.s3, &self.bucket, s3_keys::PAIRINGS_PREFIX).await?;

        let mut records = Vec::with_capacity(keys.len());
        for key in &keys {
            let output = objects::get_object(&self.s3, &self.bucket, key).await?;
            let record: PairingRecord = serde_json::from_slice(&output.body)?;
            records.push(record);
        }

        records.sort_by(|a, b| b.created_at.cmp(&a.created_at));
        Ok(records)
    }
}

impl LogStore for S3LogStore {
    fn append(&self, draft: PairingDraft) -> BoxFuture<'_, Result<PairingRecord, StoreError>> {
        Box::pin(async move {
            draft.validate()?;

            let id = Uuid::new_v4();
            let created_at = jiff::Timestamp::now();

            // Image goes first. An insert failure after this point leaves an
            // orphaned blob; reconciling it is out of scope.
            let mut draft = draft;
            let image_key = match draft.image.take() {
                Some(image) => {
                    Some(images::upload_image(&self.s3, &self.bucket, id, &image).await?)
                }
                None => None,
            };

            let record = draft.into_record(id, created_at, image_key);
            let key = s3_keys::pairing(record.id);
            let body = serde_json::to_vec(&record)?;
            objects::put_object(&self.s3, &self.bucket, &key, body, Some("application/json"))
                .await?;

            info!(id = %record.id, style = %record.coffee_style, "pairing appended");
            Ok(record)
        })
    }

    fn list(&self) -> BoxFuture<'_, Result<Vec<PairingRecord>, StoreError>> {
        Box::pin(self.load_all())
    }

    fn remove(&self, id: Uuid) -> BoxFuture<'_, Result<(), StoreError>> {
        Box::pin(async move {
            let key = s3_keys::pairing(id);

            // S3 DeleteObject succeeds on missing keys, so check existence
            // explicitly to report NotFound.
            objects::get_object(&self.s3, &self.bucket, &key)
                .await
                .map_err(|e| match e {
                    StorageError::NotFound { .. } => StoreError::NotFound { id },
                    other => StoreError::Storage(other),
                })?;

            objects::delete_object(&self.s3, &self.bucket, &key).await?;
            objects::delete_objects_by_prefix(
                &self.s3,
                &self.bucket,
                &s3_keys::pairing_images_prefix(id),
            )
            .await?;

            info!(id = %id, "pairing removed");
            Ok(())
        })
    }

    fn pick_random_high_rated(
        &self,
        min_rating: u8,
    ) -> BoxFuture<'_, Result<Option<PairingRecord>, StoreError>> {
        Box::pin(async move {
            let records = self.load_all().await?;
            Ok(pick_high_rated(records, min_rating))
        })
    }
}
