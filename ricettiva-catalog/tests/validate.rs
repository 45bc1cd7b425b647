use chrono::NaiveDate;
use ricettiva_catalog::*;
use ricettiva_core::{MonthNames, RawRecord};
use serde_json::json;

fn record(value: serde_json::Value) -> RawRecord {
    match value {
        serde_json::Value::Object(map) => map,
        other => panic!("expected object, got {other}"),
    }
}

#[test]
fn required_readers_collect_errors() {
    let raw = record(json!({
        "Nome": "Hotel Duomo",
        "Stelle": "quattro",
        "Latitudine": "45,46",
    }));
    let mut r = FieldReader::new(&raw);
    assert_eq!(r.text("Nome"), "Hotel Duomo");
    assert_eq!(r.int("Stelle"), 0);
    assert_eq!(r.float("Latitudine"), 45.46);
    assert_eq!(r.text("Indirizzo"), "");

    let errors = r.finish(()).unwrap_err();
    assert_eq!(
        errors,
        vec![
            FieldError {
                field: "Stelle",
                problem: FieldProblem::Unparseable("'quattro'".to_string()),
            },
            FieldError {
                field: "Indirizzo",
                problem: FieldProblem::Missing,
            },
        ]
    );
}

#[test]
fn blank_strings_count_as_missing() {
    let raw = record(json!({"Nome": "   ", "Zona": ""}));
    let mut r = FieldReader::new(&raw);
    assert!(!r.has("Nome"));
    assert_eq!(r.opt_text("Zona"), None);
    r.text("Nome");
    assert_eq!(r.errors()[0].problem, FieldProblem::Missing);
}

#[test]
fn optional_readers_never_fail() {
    let raw = record(json!({"Camere": "molte", "Posti": 12}));
    let r = FieldReader::new(&raw);
    assert_eq!(r.opt_int("Camere"), None);
    assert_eq!(r.opt_int("Posti"), Some(12));
    assert_eq!(r.opt_float("Assente"), None);
    assert!(r.errors().is_empty());
    assert_eq!(r.finish(7), Ok(7));
}

#[test]
fn lenient_float_reads_free_text() {
    let raw = record(json!({"DistanzaCentro": "1,2 km dal centro"}));
    let mut r = FieldReader::new(&raw);
    assert_eq!(r.float_lenient("DistanzaCentro"), 1.2);
    assert!(r.errors().is_empty());
}

#[test]
fn dates_use_month_table() {
    let raw = record(json!({"Data": "marzo 2023", "Check": "2023-07-01"}));
    let mut r = FieldReader::new(&raw);
    let expected = NaiveDate::from_ymd_opt(2023, 3, 1)
        .unwrap()
        .and_hms_opt(0, 0, 0)
        .unwrap();
    assert_eq!(r.date("Data"), expected);
    assert!(r.opt_date("Check").is_some());

    let english = MonthNames::english();
    let r = FieldReader::new(&raw).with_months(&english);
    assert_eq!(r.opt_date("Data"), None);
}

#[test]
fn flags_and_lists() {
    let raw = record(json!({
        "Offerta": "si",
        "Disponibile": false,
        "Descrizione": ["Vista mare", "  ", "Balcone"],
        "Letto": "1 letto matrimoniale",
    }));
    let r = FieldReader::new(&raw);
    assert!(r.flag("Offerta"));
    assert!(!r.flag("Disponibile"));
    assert!(!r.flag("Assente"));
    assert_eq!(r.opt_flag("Disponibile"), Some(false));
    assert_eq!(r.opt_flag("Assente"), None);
    assert_eq!(r.text_list("Descrizione"), vec!["Vista mare", "Balcone"]);
    assert_eq!(r.text_list("Letto"), vec!["1 letto matrimoniale"]);
    assert!(r.text_list("Assente").is_empty());
}

#[test]
fn require_records_missing_derived_value() {
    let raw = record(json!({}));
    let mut r = FieldReader::new(&raw);
    let id: DocumentId = r.require("PropertyId", None);
    assert_eq!(id, DocumentId::default());
    let rejection = r.finish_as(EntityKind::Room, id).unwrap_err();
    assert_eq!(rejection.entity, EntityKind::Room);
    assert!(matches!(rejection.reason, RejectReason::Invalid(ref e) if e[0].field == "PropertyId"));
    assert!(!rejection.is_unresolved());
}

#[test]
fn rejection_keeps_raw_and_formats() {
    let raw = record(json!({"IdBooking": 99}));
    let rejection = Rejection::new(
        EntityKind::Review,
        RejectReason::UnresolvedProperty(99),
        &raw,
    );
    assert!(rejection.is_unresolved());
    assert_eq!(rejection.raw, raw);
    assert_eq!(
        rejection.to_string(),
        "review rejected: unresolved booking id 99"
    );

    let invalid = RejectReason::Invalid(vec![
        FieldError {
            field: "Nome",
            problem: FieldProblem::Missing,
        },
        FieldError {
            field: "Stelle",
            problem: FieldProblem::Unparseable("'x'".to_string()),
        },
    ]);
    assert_eq!(
        invalid.to_string(),
        "invalid fields: Nome: missing, Stelle: could not parse 'x'"
    );
}

#[test]
fn collections_per_partition() {
    assert_eq!(
        EntityKind::Property.collection(PropertyCategory::Htl),
        "Properties_HTL"
    );
    assert_eq!(EntityKind::Bar.collection(PropertyCategory::Apt), "BAR_APT");
    assert_eq!(
        EntityKind::FullPrice.collection(PropertyCategory::Htl),
        "FullPrices_HTL"
    );
    assert_eq!(EntityKind::Room.collection(PropertyCategory::Htl), "Rooms");
    assert!(EntityKind::is_known_collection("Reputation_KPI_Table"));
    assert!(!EntityKind::is_known_collection("Platforms"));
    assert_eq!(EntityKind::all_collections().len(), 11);
}

#[test]
fn optional_fields_absent_from_documents() {
    let kpi = ReputationKpi {
        wifi_score: None,
        quality_price_score: Some(8.5),
        position_score: None,
        clean_score: None,
        comfort_score: None,
        service_score: None,
        staff_score: None,
        reviews: None,
        score: Some(9.0),
        valuation: None,
        full_date_search: NaiveDate::from_ymd_opt(2023, 5, 1)
            .unwrap()
            .and_hms_opt(10, 30, 0)
            .unwrap(),
        date_search: NaiveDate::from_ymd_opt(2023, 5, 1)
            .unwrap()
            .and_hms_opt(0, 0, 0)
            .unwrap(),
        property_id: DocumentId::from("abc"),
    };
    let doc = serde_json::to_value(&kpi).unwrap();
    let obj = doc.as_object().unwrap();
    assert!(!obj.contains_key("WifiScore"));
    assert!(!obj.contains_key("Reviews"));
    assert_eq!(obj["QPScore"], json!(8.5));
    assert_eq!(obj["PropertyId"], json!("abc"));
    assert_eq!(obj["FullDateSearch"], json!("2023-05-01T10:30:00"));
}
