//! S3 key/path conventions.
//!
//! Pure string functions — no AWS SDK dependency. These define the canonical
//! layout of objects in the brewlog bucket.

use uuid::Uuid;

pub const PAIRINGS_PREFIX: &str = "pairings/";

pub fn pairing(id: Uuid) -> String {
    format!("pairings/{id}.json")
}

pub fn pairing_image(id: Uuid, filename: &str) -> String {
    format!("images/{id}/{filename}")
}

pub fn pairing_images_prefix(id: Uuid) -> String {
    format!("images/{id}/")
}
