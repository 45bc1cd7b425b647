use super::*;
use serde_json::json;

#[test]
fn phrase_beats_single_word() {
    assert_eq!(
        AccommodationLevel::classify("Junior Suite Deluxe"),
        AccommodationLevel::JuniorSuite
    );
}

#[test]
fn studio_room_is_rooms() {
    assert_eq!(AccommodationLevel::classify("studio room"), AccommodationLevel::Rooms);
    assert_eq!(AccommodationLevel::classify("Studio"), AccommodationLevel::Studio);
}

#[test]
fn empty_and_absent_are_other() {
    assert_eq!(AccommodationLevel::classify(""), AccommodationLevel::Other);
    assert_eq!(AccommodationLevel::classify("   "), AccommodationLevel::Other);
    assert_eq!(AccommodationLevel::classify_value(None), AccommodationLevel::Other);
    assert_eq!(
        AccommodationLevel::classify_value(Some(&json!(null))),
        AccommodationLevel::Other
    );
    assert_eq!(
        AccommodationLevel::classify_value(Some(&json!(3))),
        AccommodationLevel::Other
    );
}

#[test]
fn italian_descriptions() {
    let cases = [
        ("Camera Matrimoniale con Vista", AccommodationLevel::Rooms),
        ("Appartamento con 2 camere da letto", AccommodationLevel::Apartment),
        ("Villetta con giardino", AccommodationLevel::Villa),
        ("Castello", AccommodationLevel::Villa),
        ("Depandance", AccommodationLevel::Dependence),
        ("Dependance Superior", AccommodationLevel::Dependence),
    ];
    for (input, expected) in cases {
        assert_eq!(
            AccommodationLevel::classify(input),
            expected,
            "'{}' should classify as {:?}",
            input,
            expected
        );
    }
}

#[test]
fn word_anywhere_falls_back() {
    assert_eq!(AccommodationLevel::classify("Deluxe Suite"), AccommodationLevel::Suite);
    assert_eq!(
        AccommodationLevel::classify("Superior Double Room"),
        AccommodationLevel::Rooms
    );
    assert_eq!(
        AccommodationLevel::classify("Bed in 6-Bed Dormitory"),
        AccommodationLevel::Dormitory
    );
}

#[test]
fn unknown_text_is_other() {
    assert_eq!(AccommodationLevel::classify("Tenda glamping"), AccommodationLevel::Other);
}

#[test]
fn stored_names_round_trip() {
    for &level in AccommodationLevel::all() {
        let parsed: AccommodationLevel = level.as_str().parse().unwrap();
        assert_eq!(parsed, level);
    }
    assert!("Castle".parse::<AccommodationLevel>().is_err());
}

#[test]
fn serializes_as_display_name() {
    let v = serde_json::to_value(AccommodationLevel::JuniorSuite).unwrap();
    assert_eq!(v, json!("Junior Suite"));
}
