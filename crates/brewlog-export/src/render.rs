//! Delimited-text rendering of a log snapshot.

use csv::WriterBuilder;
use tracing::debug;

use brewlog_core::models::pairing::{Intensity, PairingRecord};

use crate::error::ExportError;

/// Suggested filename for the downloaded snapshot.
pub const DOWNLOAD_FILENAME: &str = "pairing_log.csv";

const HEADER: &[&str] = &[
    "id",
    "created_at",
    "coffee_style",
    "sweet_name",
    "volume_preference",
    "rating",
    "comment",
    "image_key",
];

/// Render records, in the order given, as CSV bytes: one header row plus one
/// row per record. Optional fields render as empty cells.
pub fn write_csv(records: &[PairingRecord]) -> Result<Vec<u8>, ExportError> {
    let mut buf = Vec::new();
    {
        let mut writer = WriterBuilder::new().from_writer(&mut buf);
        writer.write_record(HEADER)?;

        for record in records {
            writer.write_record([
                record.id.to_string(),
                record.created_at.to_string(),
                record.coffee_style.clone(),
                record.sweet_name.clone(),
                record
                    .volume_preference
                    .map(Intensity::as_str)
                    .unwrap_or_default()
                    .to_string(),
                record.rating.map(|r| r.to_string()).unwrap_or_default(),
                record.comment.clone().unwrap_or_default(),
                record.image_key.clone().unwrap_or_default(),
            ])?;
        }

        writer.flush()?;
    }

    debug!(rows = records.len(), bytes = buf.len(), "log exported");
    Ok(buf)
}
