use serde::{Deserialize, Serialize};
use ts_rs::TS;
use uuid::Uuid;

use crate::error::ValidationError;

/// Flavor-weight preference narrowing a style's suggestion list.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, TS)]
#[serde(rename_all = "snake_case")]
#[ts(export)]
pub enum Intensity {
    Light,
    Rich,
}

impl Intensity {
    /// The wire/CSV spelling, matching the serde representation.
    pub fn as_str(self) -> &'static str {
        match self {
            Intensity::Light => "light",
            Intensity::Rich => "rich",
        }
    }
}

/// One logged coffee-and-sweet pairing. Never mutated after creation,
/// only deleted as a whole.
#[derive(Debug, Clone, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct PairingRecord {
    pub id: Uuid,
    pub created_at: jiff::Timestamp,
    /// Catalog key or whatever the user typed — deliberately not validated
    /// against the catalog.
    pub coffee_style: String,
    pub sweet_name: String,
    pub volume_preference: Option<Intensity>,
    /// 1..=5 when present.
    pub rating: Option<u8>,
    pub comment: Option<String>,
    /// Key of the stored image in the blob backend.
    pub image_key: Option<String>,
}

/// Image bytes attached to a submission, uploaded at append time.
#[derive(Debug, Clone)]
pub struct ImageUpload {
    pub filename: String,
    pub content_type: String,
    pub bytes: Vec<u8>,
}

/// An unvalidated submission, as collected by the presentation layer.
#[derive(Debug, Clone, Default)]
pub struct PairingDraft {
    pub coffee_style: String,
    pub sweet_name: String,
    pub volume_preference: Option<Intensity>,
    pub rating: Option<u8>,
    pub comment: Option<String>,
    pub image: Option<ImageUpload>,
}

impl PairingDraft {
    /// Check the submission before any side effect takes place.
    pub fn validate(&self) -> Result<(), ValidationError> {
        if self.sweet_name.is_empty() {
            return Err(ValidationError::EmptySweetName);
        }
        if let Some(rating) = self.rating
            && !(1..=5).contains(&rating)
        {
            return Err(ValidationError::RatingOutOfRange(rating));
        }
        Ok(())
    }

    /// Promote the draft to a stored record with its assigned identity.
    pub fn into_record(
        self,
        id: Uuid,
        created_at: jiff::Timestamp,
        image_key: Option<String>,
    ) -> PairingRecord {
        PairingRecord {
            id,
            created_at,
            coffee_style: self.coffee_style,
            sweet_name: self.sweet_name,
            volume_preference: self.volume_preference,
            rating: self.rating,
            comment: self.comment,
            image_key,
        }
    }
}
