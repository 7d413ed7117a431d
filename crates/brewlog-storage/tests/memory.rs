use brewlog_core::models::pairing::{ImageUpload, Intensity, PairingDraft};
use brewlog_storage::error::StoreError;
use brewlog_storage::memory::MemoryStore;
use brewlog_storage::store::LogStore;

fn draft(sweet_name: &str) -> PairingDraft {
    PairingDraft {
        coffee_style: "dark_roast".to_string(),
        sweet_name: sweet_name.to_string(),
        ..PairingDraft::default()
    }
}

#[tokio::test]
async fn append_then_list_returns_the_record_first() {
    let store = MemoryStore::new();

    store.append(draft("Cheesecake")).await.unwrap();
    store.append(draft("Tiramisu")).await.unwrap();

    let records = store.list().await.unwrap();
    assert_eq!(records.len(), 2);
    assert_eq!(records[0].sweet_name, "Tiramisu");
    assert_eq!(records[1].sweet_name, "Cheesecake");
    assert!(records[0].created_at >= records[1].created_at);
}

#[tokio::test]
async fn empty_sweet_name_is_rejected_without_side_effects() {
    let store = MemoryStore::new();

    let err = store.append(draft("")).await.unwrap_err();
    assert!(matches!(err, StoreError::Validation(_)));
    assert!(store.list().await.unwrap().is_empty());
}

#[tokio::test]
async fn out_of_range_rating_is_rejected() {
    let store = MemoryStore::new();

    let mut d = draft("Brownie");
    d.rating = Some(6);
    let err = store.append(d).await.unwrap_err();
    assert!(matches!(err, StoreError::Validation(_)));
    assert!(store.list().await.unwrap().is_empty());
}

#[tokio::test]
async fn dark_roast_tiramisu_submission_round_trips() {
    let store = MemoryStore::new();

    let record = store
        .append(PairingDraft {
            coffee_style: "Dark Roast".to_string(),
            sweet_name: "Tiramisu".to_string(),
            volume_preference: Some(Intensity::Rich),
            rating: Some(5),
            comment: Some("great match".to_string()),
            image: None,
        })
        .await
        .unwrap();

    assert_eq!(record.coffee_style, "Dark Roast");
    assert_eq!(record.sweet_name, "Tiramisu");
    assert_eq!(record.rating, Some(5));
    assert_eq!(record.comment.as_deref(), Some("great match"));

    let records = store.list().await.unwrap();
    assert_eq!(records.len(), 1);
    assert_eq!(records[0].id, record.id);
    assert_eq!(records[0].created_at, record.created_at);
}

#[tokio::test]
async fn remove_drops_the_record_for_good() {
    let store = MemoryStore::new();

    let keep = store.append(draft("Scone")).await.unwrap();
    let gone = store.append(draft("Waffles")).await.unwrap();

    store.remove(gone.id).await.unwrap();

    let records = store.list().await.unwrap();
    assert_eq!(records.len(), 1);
    assert_eq!(records[0].id, keep.id);

    // A second remove of the same id is NotFound, not a silent success.
    let err = store.remove(gone.id).await.unwrap_err();
    assert!(matches!(err, StoreError::NotFound { id } if id == gone.id));
}

#[tokio::test]
async fn remove_unknown_id_is_not_found() {
    let store = MemoryStore::new();
    let err = store.remove(uuid::Uuid::new_v4()).await.unwrap_err();
    assert!(matches!(err, StoreError::NotFound { .. }));
}

#[tokio::test]
async fn random_pick_respects_the_rating_floor() {
    let store = MemoryStore::new();

    let mut low = draft("Pretzels");
    low.rating = Some(2);
    store.append(low).await.unwrap();

    let mut unrated = draft("Castella");
    unrated.rating = None;
    store.append(unrated).await.unwrap();

    let mut high = draft("Fondant au chocolat");
    high.rating = Some(5);
    let high = store.append(high).await.unwrap();

    for _ in 0..20 {
        let picked = store.pick_random_high_rated(4).await.unwrap().unwrap();
        assert_eq!(picked.id, high.id);
        assert!(picked.rating.unwrap() >= 4);
    }
}

#[tokio::test]
async fn random_pick_is_empty_when_nothing_qualifies() {
    let store = MemoryStore::new();

    let mut d = draft("Madeleine");
    d.rating = Some(3);
    store.append(d).await.unwrap();

    assert!(store.pick_random_high_rated(4).await.unwrap().is_none());
}

#[tokio::test]
async fn session_store_discards_image_uploads() {
    let store = MemoryStore::new();

    let mut d = draft("Apple pie");
    d.image = Some(ImageUpload {
        filename: "pie.jpg".to_string(),
        content_type: "image/jpeg".to_string(),
        bytes: vec![0xff, 0xd8],
    });

    let record = store.append(d).await.unwrap();
    assert_eq!(record.image_key, None);
}
