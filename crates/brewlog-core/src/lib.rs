//! brewlog-core
//!
//! Pure domain types, S3 key conventions, and log statistics.
//! No AWS SDK dependency — this is the shared vocabulary of the brewlog system.

pub mod error;
pub mod models;
pub mod s3_keys;
pub mod stats;
