//! Image pass-through to the blob backend.

use aws_sdk_s3::Client;
use std::time::Duration;
use tracing::debug;
use uuid::Uuid;

use brewlog_core::models::pairing::ImageUpload;
use brewlog_core::s3_keys;

use crate::error::StorageError;
use crate::objects;

/// Store an attached image, returning the key the record will carry.
pub async fn upload_image(
    client: &Client,
    bucket: &str,
    record_id: Uuid,
    image: &ImageUpload,
) -> Result<String, StorageError> {
    let key = s3_keys::pairing_image(record_id, &image.filename);
    objects::put_object(
        client,
        bucket,
        &key,
        image.bytes.clone(),
        Some(&image.content_type),
    )
    .await?;
    debug!(key = %key, size = image.bytes.len(), "image uploaded");
    Ok(key)
}

/// Presigned GET URL so the presentation layer can display a stored image
/// without holding credentials.
pub async fn presign_image_url(
    client: &Client,
    bucket: &str,
    key: &str,
    expires_in: Duration,
) -> Result<String, StorageError> {
    objects::presign_get(client, bucket, key, expires_in).await
}
