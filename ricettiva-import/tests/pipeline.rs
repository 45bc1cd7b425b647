use std::cell::RefCell;

use ricettiva_catalog::{
    EntityKind, FieldReader, PropertyCategory, PropertyTypeTable, RejectReason, Rejection,
};
use ricettiva_core::RawRecord;
use ricettiva_db::*;
use ricettiva_import::*;
use serde_json::json;
use tempfile::TempDir;

fn record(value: serde_json::Value) -> RawRecord {
    match value {
        serde_json::Value::Object(map) => map,
        other => panic!("expected object, got {other}"),
    }
}

// ── Batch transform ─────────────────────────────────────────────────────────

fn read_stars(raw: &RawRecord) -> Result<i64, Rejection> {
    let mut r = FieldReader::new(raw);
    let stars = r.int("Stelle");
    r.finish_as(EntityKind::Property, stars)
}

#[test]
fn batch_keeps_input_order_for_both_sides() {
    let records: Vec<RawRecord> = [
        json!({"Stelle": 1}),
        json!({"Stelle": "x"}),
        json!({"Stelle": "3"}),
        json!({}),
        json!({"Stelle": 5}),
        json!({"Stelle": null, "tag": "last-bad"}),
    ]
    .into_iter()
    .map(record)
    .collect();

    let outcome = transform_batch(&records, read_stars);
    // N = 6, K = 3
    assert_eq!(outcome.accepted, vec![1, 3, 5]);
    assert_eq!(outcome.rejections.len(), 3);
    assert_eq!(outcome.rejections[0].raw, records[1]);
    assert_eq!(outcome.rejections[1].raw, records[3]);
    assert_eq!(outcome.rejections[2].raw, records[5]);
}

#[test]
fn empty_batch() {
    let outcome = transform_batch(&[], read_stars);
    assert!(outcome.accepted.is_empty());
    assert!(outcome.rejections.is_empty());
}

// ── Progress ────────────────────────────────────────────────────────────────

#[derive(Default)]
struct RecordingProgress {
    events: RefCell<Vec<String>>,
}

impl ImportProgress for RecordingProgress {
    fn on_record(&self, current: usize, total: usize) {
        self.events.borrow_mut().push(format!("{current}/{total}"));
    }
    fn on_phase(&self, message: &str) {
        self.events.borrow_mut().push(format!("phase: {message}"));
    }
    fn on_complete(&self, _message: &str) {
        self.events.borrow_mut().push("done".to_string());
    }
}

#[test]
fn progress_sees_every_accepted_record() {
    let conn = open_memory().unwrap();
    let records: Vec<RawRecord> = [json!({"City": "Milan"}), json!({}), json!({"City": "Roma"})]
        .into_iter()
        .map(record)
        .collect();

    let progress = RecordingProgress::default();
    let report = seed_cities(&conn, &records, Some(&progress)).unwrap();
    assert_eq!(report.stats.success, 2);
    assert_eq!(
        *progress.events.borrow(),
        vec![
            "phase: Importing 3 city records".to_string(),
            "1/2".to_string(),
            "2/2".to_string(),
            "done".to_string(),
        ]
    );
}

// ── Seeds ───────────────────────────────────────────────────────────────────

#[test]
fn seed_cities_translates_and_dedupes() {
    let conn = open_memory().unwrap();
    let records: Vec<RawRecord> = [
        json!({"City": "Milan", "Region": "Lombardia"}),
        json!({"Città": "Milano"}),
        json!({"Città": "Napoli", "Regione": "Campania"}),
        json!({"Region": "Lazio"}),
    ]
    .into_iter()
    .map(record)
    .collect();

    let report = seed_cities(&conn, &records, None).unwrap();
    assert_eq!(report.stats.success, 2);
    assert_eq!(report.stats.duplicates, 1);
    assert_eq!(report.stats.errors, 1);
    assert!(matches!(report.rejections[0].reason, RejectReason::Invalid(_)));

    let milano = find_city_id(&conn, "Milano").unwrap().unwrap();
    let doc = get_document(&conn, &milano).unwrap().unwrap();
    assert_eq!(doc, json!({"City": "Milano", "Region": "Lombardia"}));
}

#[test]
fn seed_property_types_once() {
    let conn = open_memory().unwrap();
    let table = PropertyTypeTable::builtin();

    let first = seed_property_types(&conn, &table).unwrap();
    assert_eq!(first.stats.success, 17);
    let second = seed_property_types(&conn, &table).unwrap();
    assert_eq!(second.stats.success, 0);
    assert_eq!(second.stats.duplicates, 17);
    assert_eq!(count_documents(&conn, "Property_Types").unwrap(), 17);

    let stored = load_property_types(&conn).unwrap();
    assert_eq!(stored.classify_value(Some(&json!(204))), PropertyCategory::Htl);
}

// ── Records and skipped log ─────────────────────────────────────────────────

#[test]
fn load_records_from_file() {
    let tmp = TempDir::new().unwrap();
    let path = tmp.path().join("rooms.json");
    std::fs::write(&path, r#"[{"roomName": "Doppia"}, {"roomName": "Singola"}]"#).unwrap();

    let records = load_records(&path).unwrap();
    assert_eq!(records.len(), 2);
    assert_eq!(records[1]["roomName"], json!("Singola"));
}

#[test]
fn load_records_rejects_bad_shapes() {
    let tmp = TempDir::new().unwrap();
    let object = tmp.path().join("object.json");
    std::fs::write(&object, r#"{"roomName": "Doppia"}"#).unwrap();
    assert!(matches!(load_records(&object), Err(ImportError::Format { .. })));

    let scalars = tmp.path().join("scalars.json");
    std::fs::write(&scalars, "[1, 2]").unwrap();
    assert!(matches!(load_records(&scalars), Err(ImportError::Format { .. })));

    let broken = tmp.path().join("broken.json");
    std::fs::write(&broken, "[{").unwrap();
    assert!(matches!(load_records(&broken), Err(ImportError::Json(_))));

    let missing = tmp.path().join("missing.json");
    assert!(matches!(load_records(&missing), Err(ImportError::Io { .. })));
}

#[test]
fn skipped_log_appends_json_lines() {
    let tmp = TempDir::new().unwrap();
    let path = tmp.path().join("skipped.jsonl");
    let raw = record(json!({"Nome": "Hotel Duomo"}));
    let rejection = Rejection::new(EntityKind::Property, RejectReason::Incomplete, &raw);

    {
        let mut log = SkippedLog::open(&path).unwrap();
        log.write_all([&rejection, &rejection]).unwrap();
        log.flush().unwrap();
        assert_eq!(log.written(), 2);
    }
    {
        let mut log = SkippedLog::open(&path).unwrap();
        log.write(&rejection).unwrap();
        log.flush().unwrap();
    }

    let contents = std::fs::read_to_string(&path).unwrap();
    let lines: Vec<serde_json::Value> = contents
        .lines()
        .map(|l| serde_json::from_str(l).unwrap())
        .collect();
    assert_eq!(lines.len(), 3);
    assert_eq!(
        lines[0],
        json!({
            "entity": "property",
            "reason": "incomplete record",
            "record": {"Nome": "Hotel Duomo"},
        })
    );
}
