use uuid::Uuid;

use brewlog_core::models::pairing::PairingRecord;
use brewlog_core::stats::{mean_rating_by_style, most_frequent_style};

fn record(style: &str, rating: Option<u8>) -> PairingRecord {
    PairingRecord {
        id: Uuid::new_v4(),
        created_at: jiff::Timestamp::now(),
        coffee_style: style.to_string(),
        sweet_name: "Biscotti".to_string(),
        volume_preference: None,
        rating,
        comment: None,
        image_key: None,
    }
}

#[test]
fn empty_log_has_no_frequent_style() {
    assert_eq!(most_frequent_style(&[]), None);
    assert!(mean_rating_by_style(&[]).is_empty());
}

#[test]
fn most_frequent_style_counts_all_records() {
    let records = vec![
        record("espresso", Some(4)),
        record("dark_roast", None),
        record("espresso", None),
        record("light_roast", Some(2)),
    ];

    let top = most_frequent_style(&records).unwrap();
    assert_eq!(top.coffee_style, "espresso");
    assert_eq!(top.count, 2);
}

#[test]
fn mean_rating_skips_unrated_records() {
    let records = vec![
        record("espresso", Some(5)),
        record("espresso", Some(4)),
        record("espresso", None),
        record("dark_roast", None),
    ];

    let means = mean_rating_by_style(&records);
    assert_eq!(means.len(), 1);
    assert_eq!(means["espresso"], 4.5);
}
