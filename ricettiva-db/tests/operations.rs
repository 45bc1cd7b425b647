use ricettiva_catalog::{BookingRef, City, DocumentId};
use ricettiva_db::*;
use serde_json::json;

#[test]
fn document_ids_are_24_hex_and_unique() {
    let a = new_document_id();
    let b = new_document_id();
    assert_eq!(a.as_str().len(), 24);
    assert!(a.as_str().chars().all(|c| c.is_ascii_hexdigit()));
    assert_ne!(a, b);
}

#[test]
fn insert_and_fetch_document() {
    let conn = open_memory().unwrap();
    let body = json!({"name": "Hotel Duomo", "booking_id": 123, "stars": 4});
    let id = insert_document(&conn, "Properties_HTL", &body).unwrap();

    assert_eq!(get_document(&conn, &id).unwrap(), Some(body));
    assert_eq!(count_documents(&conn, "Properties_HTL").unwrap(), 1);
    assert_eq!(count_documents(&conn, "Properties_APT").unwrap(), 0);
}

#[test]
fn non_object_body_is_refused() {
    let conn = open_memory().unwrap();
    let err = insert_document(&conn, "Rooms", &json!([1, 2])).unwrap_err();
    assert!(matches!(err, OperationError::NotAnObject { .. }));
}

#[test]
fn find_by_booking_id_is_per_collection() {
    let conn = open_memory().unwrap();
    let id = insert_document(&conn, "Properties_APT", &json!({"booking_id": 7})).unwrap();

    assert_eq!(find_by_booking_id(&conn, "Properties_APT", 7).unwrap(), Some(id));
    assert_eq!(find_by_booking_id(&conn, "Properties_HTL", 7).unwrap(), None);
    assert_eq!(find_by_booking_id(&conn, "Properties_APT", 8).unwrap(), None);
}

#[test]
fn booking_refs_in_insertion_order() {
    let conn = open_memory().unwrap();
    let a = insert_document(&conn, "Properties_HTL", &json!({"booking_id": 2})).unwrap();
    let b = insert_document(&conn, "Properties_HTL", &json!({"booking_id": 1})).unwrap();
    insert_document(&conn, "Properties_HTL", &json!({"name": "no id"})).unwrap();

    let refs = booking_refs(&conn, "Properties_HTL").unwrap();
    assert_eq!(refs, vec![BookingRef::new(2, a), BookingRef::new(1, b)]);
}

#[test]
fn find_city_by_name() {
    let conn = open_memory().unwrap();
    let city = City {
        name: "Milano".to_string(),
        region: Some("Lombardia".to_string()),
    };
    let id = insert_record(&conn, "Cities", &city).unwrap();

    assert_eq!(find_city_id(&conn, "Milano").unwrap(), Some(id));
    assert_eq!(find_city_id(&conn, "Milan").unwrap(), None);
}

#[test]
fn purge_only_touches_named_collection() {
    let conn = open_memory().unwrap();
    insert_document(&conn, "Rooms", &json!({"roomName": "Doppia"})).unwrap();
    insert_document(&conn, "Rooms", &json!({"roomName": "Singola"})).unwrap();
    let review = insert_document(&conn, "Reviews", &json!({"Vote": 9.0})).unwrap();

    assert_eq!(purge_collection(&conn, "Rooms").unwrap(), 2);
    assert_eq!(count_documents(&conn, "Rooms").unwrap(), 0);
    assert!(get_document(&conn, &review).unwrap().is_some());
    assert_eq!(purge_collection(&conn, "Rooms").unwrap(), 0);
}

#[test]
fn missing_document_is_none() {
    let conn = open_memory().unwrap();
    let missing = DocumentId::from("000000000000000000000000");
    assert_eq!(get_document(&conn, &missing).unwrap(), None);
}
