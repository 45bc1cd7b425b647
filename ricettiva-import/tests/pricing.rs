use ricettiva_catalog::{PropertyCategory, PropertyTypeEntry, PropertyTypeTable, RejectReason};
use ricettiva_core::RawRecord;
use ricettiva_db::*;
use ricettiva_import::*;
use serde_json::json;

fn record(value: serde_json::Value) -> RawRecord {
    match value {
        serde_json::Value::Object(map) => map,
        other => panic!("expected object, got {other}"),
    }
}

fn bar_row(tipologia: &str, accomodation: &str) -> RawRecord {
    record(json!({
        "id": "100",
        "Nome": "Hotel Duomo",
        "Città": "Milano",
        "Tipologia": tipologia,
        "Stelle": 4,
        "CheckIn": "2025-03-10",
        "CheckOut": "2025-03-12",
        "Destinazione": "Milano",
        "TIN": "72",
        "SearchRank": 3,
        "SearchPage": "1",
        "CancellationPolicy": "Cancellazione gratuita",
        "Trattamento": "Colazione inclusa",
        "AccomodationType": accomodation,
        "Occupazione": 2,
        "TariffaTOT": "€ 240,00",
        "TariffaGG": "120",
        "IsAnOffer": false,
        "DataRicerca": "2025-03-01",
    }))
}

// ── BAR ─────────────────────────────────────────────────────────────────────

#[test]
fn bar_rows_partition_and_classify() {
    let conn = open_memory().unwrap();
    let htl = insert_document(&conn, "Properties_HTL", &json!({"booking_id": 100})).unwrap();
    let records = vec![
        bar_row("Hotel", "Junior Suite Deluxe"),
        bar_row("Bed & Breakfast", "Camera Matrimoniale"),
    ];

    let report = import_bar(&conn, &records, &ImportOptions::default(), None).unwrap();
    assert_eq!(report.stats.success, 2);

    let hotels = list_documents(&conn, "BAR_HTL").unwrap();
    let doc = &hotels[0].1;
    assert_eq!(doc["AccomodationLevel"], json!("Junior Suite"));
    assert_eq!(doc["PriceTot"], json!(240.0));
    assert_eq!(doc["PriceNight"], json!(120.0));
    assert_eq!(doc["DemandPressure"], json!(72));
    assert_eq!(doc["IsOffer"], json!(false));
    assert_eq!(doc["CheckIn"], json!("2025-03-10T00:00:00"));
    assert_eq!(doc["FullDateSearch"], json!("2025-03-01T00:00:00"));
    assert_eq!(doc["PropertyId"], json!(htl.as_str()));
    assert!(doc.get("OfferTitle").is_none());

    let apartments = list_documents(&conn, "BAR_APT").unwrap();
    assert_eq!(apartments[0].1["AccomodationLevel"], json!("Rooms"));
}

#[test]
fn bar_keeps_rows_without_stored_property() {
    let conn = open_memory().unwrap();
    let report =
        import_bar(&conn, &[bar_row("Hotel", "Suite")], &ImportOptions::default(), None).unwrap();
    assert_eq!(report.stats.success, 1);
    let doc = &list_documents(&conn, "BAR_HTL").unwrap()[0].1;
    assert!(doc.get("PropertyId").is_none());
}

#[test]
fn bar_requires_city_and_name() {
    let conn = open_memory().unwrap();
    let mut row = bar_row("Hotel", "Suite");
    row.insert("Città".to_string(), json!(""));
    let report = import_bar(&conn, &[row], &ImportOptions::default(), None).unwrap();
    assert_eq!(report.rejections[0].reason, RejectReason::Incomplete);
}

#[test]
fn bar_uses_seeded_property_types() {
    let conn = open_memory().unwrap();
    let table = PropertyTypeTable::new(vec![PropertyTypeEntry {
        code: 208,
        name: "Bed & Breakfast".to_string(),
        category: PropertyCategory::Htl,
    }]);
    seed_property_types(&conn, &table).unwrap();

    let records = vec![bar_row("Bed & Breakfast", "Camera")];
    import_bar(&conn, &records, &ImportOptions::default(), None).unwrap();
    assert_eq!(count_documents(&conn, "BAR_HTL").unwrap(), 1);
}

// ── Full prices ─────────────────────────────────────────────────────────────

fn full_price(unique_id: i64, kind: &str) -> RawRecord {
    record(json!({
        "uniqueId": unique_id,
        "Type": kind,
        "Stars": "3",
        "Destination": "Roma",
        "CheckIn": "2025-04-01",
        "CheckOut": "2025-04-03",
        "AccomodationType": "Appartamento con vista",
        "Occupancy": "2 adults, 1 child",
        "PriceTot": "310,50",
        "IsOffer": "true",
        "DateSearch": "2025-03-20 08:00:00",
    }))
}

#[test]
fn full_prices_use_listed_occupancy() {
    let conn = open_memory().unwrap();
    let records = vec![full_price(1, "Appartamenti"), full_price(2, "Resort")];

    let report = import_full_prices(&conn, &records, &ImportOptions::default(), None).unwrap();
    assert_eq!(report.stats.success, 2);

    let doc = &list_documents(&conn, "FullPrices_APT").unwrap()[0].1;
    assert_eq!(doc["uniqueId"], json!(1));
    assert_eq!(doc["OccupancyAdult"], json!(2));
    assert_eq!(doc["OccupancyKid"], json!(1));
    assert_eq!(doc["AccomodationLevel"], json!("Apartment"));
    assert_eq!(doc["PriceTot"], json!(310.5));
    assert_eq!(doc["IsOffer"], json!(true));
    assert_eq!(doc["DateSearch"], json!("2025-03-20T08:00:00"));
    assert!(doc.get("PropertyId").is_none());

    assert_eq!(count_documents(&conn, "FullPrices_HTL").unwrap(), 1);
}

#[test]
fn full_prices_reject_unresolved_reference() {
    let conn = open_memory().unwrap();
    let mut row = full_price(3, "Hotel");
    row.insert("PropertyId".to_string(), json!(555));
    let report = import_full_prices(&conn, &[row], &ImportOptions::default(), None).unwrap();
    assert_eq!(report.rejections[0].reason, RejectReason::UnresolvedProperty(555));
    assert_eq!(report.stats.unresolved, 1);
}

#[test]
fn full_prices_treat_blank_reference_as_absent() {
    let conn = open_memory().unwrap();
    let mut row = full_price(9, "Hotel");
    row.insert("PropertyId".to_string(), json!(""));
    let mut padded = full_price(10, "Hotel");
    padded.insert("PropertyId".to_string(), json!("  "));

    let report =
        import_full_prices(&conn, &[row, padded], &ImportOptions::default(), None).unwrap();
    assert_eq!(report.stats.success, 2);
    assert!(report.rejections.is_empty());

    for (_, doc) in list_documents(&conn, "FullPrices_HTL").unwrap() {
        assert!(doc.get("PropertyId").is_none());
    }
}
