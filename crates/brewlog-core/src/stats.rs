//! One-shot summaries over a log snapshot.
//!
//! These operate on the result of a `list()` call; nothing is cached or
//! incrementally maintained.

use std::collections::BTreeMap;

use serde::Serialize;
use ts_rs::TS;

use crate::models::pairing::PairingRecord;

/// How often one coffee style appears in the log.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, TS)]
#[ts(export)]
pub struct StyleCount {
    pub coffee_style: String,
    pub count: usize,
}

/// The most frequently logged style, or `None` for an empty log.
///
/// Ties are broken toward the lexicographically later style name; the
/// presentation layer treats the winner as informational only.
pub fn most_frequent_style(records: &[PairingRecord]) -> Option<StyleCount> {
    let mut counts: BTreeMap<&str, usize> = BTreeMap::new();
    for record in records {
        *counts.entry(record.coffee_style.as_str()).or_default() += 1;
    }

    counts
        .into_iter()
        .max_by_key(|&(_, count)| count)
        .map(|(style, count)| StyleCount {
            coffee_style: style.to_string(),
            count,
        })
}

/// Mean rating per style, over rated records only. Styles whose records
/// carry no rating do not appear.
pub fn mean_rating_by_style(records: &[PairingRecord]) -> BTreeMap<String, f64> {
    let mut sums: BTreeMap<&str, (u32, u32)> = BTreeMap::new();
    for record in records {
        if let Some(rating) = record.rating {
            let entry = sums.entry(record.coffee_style.as_str()).or_default();
            entry.0 += u32::from(rating);
            entry.1 += 1;
        }
    }

    sums.into_iter()
        .map(|(style, (sum, n))| (style.to_string(), f64::from(sum) / f64::from(n)))
        .collect()
}
