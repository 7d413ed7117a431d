//! brewlog-storage
//!
//! The pairing log store. S3 object plumbing plus the [`store::LogStore`]
//! implementations the presentation layer appends to and lists from.

pub mod client;
pub mod error;
pub mod images;
pub mod memory;
pub mod objects;
pub mod store;
