use ricettiva_catalog::{
    PropertyCategory, TypeKey, YamlError, load_month_names, load_property_types, load_reference,
};
use std::fs;
use std::path::Path;
use tempfile::TempDir;

fn write_yaml(dir: &Path, name: &str, content: &str) {
    fs::write(dir.join(name), content).unwrap();
}

#[test]
fn load_property_types_from_yaml() {
    let tmp = TempDir::new().unwrap();
    write_yaml(
        tmp.path(),
        "property_types.yaml",
        r#"
- code: 204
  name: Hotel
  category: HTL
- propertyIDs: 301
  property_name: Glamping
  category: APT
"#,
    );

    let table = load_property_types(&tmp.path().join("property_types.yaml")).unwrap();
    assert_eq!(table.len(), 2);
    assert_eq!(table.classify(TypeKey::Name("Hotel")), PropertyCategory::Htl);
    assert_eq!(table.classify(TypeKey::Code(301)), PropertyCategory::Apt);
    // not in the loaded table, so not known
    assert!(table.lookup(TypeKey::Name("Motel")).is_none());
}

#[test]
fn bad_category_is_parse_error() {
    let tmp = TempDir::new().unwrap();
    write_yaml(
        tmp.path(),
        "property_types.yaml",
        "- code: 1\n  name: Tenda\n  category: CAMP\n",
    );
    let err = load_property_types(&tmp.path().join("property_types.yaml")).unwrap_err();
    assert!(matches!(err, YamlError::Parse { .. }));
}

#[test]
fn load_months_requires_twelve() {
    let tmp = TempDir::new().unwrap();
    write_yaml(tmp.path(), "months.yaml", "- janvier\n- février\n");
    let err = load_month_names(&tmp.path().join("months.yaml")).unwrap_err();
    assert!(matches!(err, YamlError::MonthCount { found: 2, .. }));
}

#[test]
fn load_months_from_yaml() {
    let tmp = TempDir::new().unwrap();
    write_yaml(
        tmp.path(),
        "months.yaml",
        r#"
- janvier
- février
- mars
- avril
- mai
- juin
- juillet
- août
- septembre
- octobre
- novembre
- décembre
"#,
    );
    let months = load_month_names(&tmp.path().join("months.yaml")).unwrap();
    assert_eq!(months.month_number("Juillet"), Some(7));
}

#[test]
fn reference_dir_falls_back_to_builtins() {
    let tmp = TempDir::new().unwrap();
    let data = load_reference(tmp.path()).unwrap();
    assert_eq!(data.property_types.len(), 17);
    assert_eq!(data.months.month_number("gennaio"), Some(1));
}

#[test]
fn missing_reference_dir_is_error() {
    let tmp = TempDir::new().unwrap();
    let err = load_reference(&tmp.path().join("nope")).unwrap_err();
    assert!(matches!(err, YamlError::DirNotFound(_)));
}
