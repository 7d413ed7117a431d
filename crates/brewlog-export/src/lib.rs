//! brewlog-export
//!
//! CSV snapshot of the pairing log, offered for download. Pure formatting —
//! there is no parsing counterpart.

pub mod error;
pub mod render;
