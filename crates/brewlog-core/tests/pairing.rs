use uuid::Uuid;

use brewlog_core::error::ValidationError;
use brewlog_core::models::pairing::{Intensity, PairingDraft};

fn draft(sweet_name: &str) -> PairingDraft {
    PairingDraft {
        coffee_style: "dark_roast".to_string(),
        sweet_name: sweet_name.to_string(),
        ..PairingDraft::default()
    }
}

#[test]
fn empty_sweet_name_is_rejected() {
    assert_eq!(
        draft("").validate(),
        Err(ValidationError::EmptySweetName)
    );
}

#[test]
fn rating_must_be_between_one_and_five() {
    for rating in [0, 6, 200] {
        let mut d = draft("Tiramisu");
        d.rating = Some(rating);
        assert_eq!(
            d.validate(),
            Err(ValidationError::RatingOutOfRange(rating))
        );
    }

    for rating in 1..=5 {
        let mut d = draft("Tiramisu");
        d.rating = Some(rating);
        assert_eq!(d.validate(), Ok(()));
    }
}

#[test]
fn free_typed_style_passes_validation() {
    // The style field is not checked against the catalog.
    let mut d = draft("Baklava");
    d.coffee_style = "turkish coffee".to_string();
    assert_eq!(d.validate(), Ok(()));
}

#[test]
fn into_record_carries_every_field() {
    let d = PairingDraft {
        coffee_style: "dark_roast".to_string(),
        sweet_name: "Tiramisu".to_string(),
        volume_preference: Some(Intensity::Rich),
        rating: Some(5),
        comment: Some("great match".to_string()),
        image: None,
    };

    let id = Uuid::new_v4();
    let now = jiff::Timestamp::now();
    let record = d.into_record(id, now, Some("images/x/tiramisu.jpg".to_string()));

    assert_eq!(record.id, id);
    assert_eq!(record.created_at, now);
    assert_eq!(record.coffee_style, "dark_roast");
    assert_eq!(record.sweet_name, "Tiramisu");
    assert_eq!(record.volume_preference, Some(Intensity::Rich));
    assert_eq!(record.rating, Some(5));
    assert_eq!(record.comment.as_deref(), Some("great match"));
    assert_eq!(record.image_key.as_deref(), Some("images/x/tiramisu.jpg"));
}
