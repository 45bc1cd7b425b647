//! YAML loading for curated reference data.
//!
//! The built-in tables cover the known feeds; a reference directory can
//! replace them without a rebuild:
//! ```text
//! reference_dir/
//!   property_types.yaml   # list of {code, name, category}
//!   months.yaml           # list of 12 month names, January first
//! ```

use std::path::Path;

use ricettiva_core::MonthNames;
use thiserror::Error;

use crate::property_types::{PropertyTypeEntry, PropertyTypeTable};

#[derive(Debug, Error)]
pub enum YamlError {
    #[error("I/O error reading {path}: {source}")]
    Io {
        path: String,
        source: std::io::Error,
    },
    #[error("YAML parse error in {path}: {source}")]
    Parse {
        path: String,
        source: serde_yml::Error,
    },
    #[error("{path}: expected 12 month names, found {found}")]
    MonthCount { path: String, found: usize },
    #[error("Directory not found: {0}")]
    DirNotFound(String),
}

/// Reference tables used by a run.
#[derive(Debug, Clone, Default)]
pub struct ReferenceData {
    pub property_types: PropertyTypeTable,
    pub months: MonthNames,
}

fn read_yaml<T: serde::de::DeserializeOwned>(path: &Path) -> Result<T, YamlError> {
    let contents = std::fs::read_to_string(path).map_err(|e| YamlError::Io {
        path: path.display().to_string(),
        source: e,
    })?;
    serde_yml::from_str(&contents).map_err(|e| YamlError::Parse {
        path: path.display().to_string(),
        source: e,
    })
}

/// Load a property-type table from a YAML list.
pub fn load_property_types(path: &Path) -> Result<PropertyTypeTable, YamlError> {
    let entries: Vec<PropertyTypeEntry> = read_yaml(path)?;
    Ok(PropertyTypeTable::new(entries))
}

/// Load a month-name table from a YAML list of twelve names.
pub fn load_month_names(path: &Path) -> Result<MonthNames, YamlError> {
    let names: Vec<String> = read_yaml(path)?;
    let found = names.len();
    let refs: Vec<&str> = names.iter().map(String::as_str).collect();
    let array: [&str; 12] = refs.try_into().map_err(|_| YamlError::MonthCount {
        path: path.display().to_string(),
        found,
    })?;
    Ok(MonthNames::new(array))
}

/// Load whatever reference files exist in `dir`, falling back to built-ins.
pub fn load_reference(dir: &Path) -> Result<ReferenceData, YamlError> {
    if !dir.is_dir() {
        return Err(YamlError::DirNotFound(dir.display().to_string()));
    }

    let mut data = ReferenceData::default();

    let types_path = dir.join("property_types.yaml");
    if types_path.exists() {
        data.property_types = load_property_types(&types_path)?;
        log::debug!(
            "Loaded {} property types from {}",
            data.property_types.len(),
            types_path.display()
        );
    }

    let months_path = dir.join("months.yaml");
    if months_path.exists() {
        data.months = load_month_names(&months_path)?;
    }

    Ok(data)
}
