//! Structure types and the HTL/APT partition decision.
//!
//! A structure type ("Hotel", "Bed & Breakfast", code 204, ...) maps to one of
//! two categories. The category picks the collection a property, BAR entry or
//! full-price entry is written to. Unknown types land in APT.

use serde::{Deserialize, Serialize};
use serde_json::Value;

/// Hotel-like (`HTL`) or apartment-like (`APT`) accommodation.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub enum PropertyCategory {
    #[serde(rename = "HTL")]
    Htl,
    #[serde(rename = "APT")]
    #[default]
    Apt,
}

impl PropertyCategory {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Htl => "HTL",
            Self::Apt => "APT",
        }
    }
}

impl std::fmt::Display for PropertyCategory {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// One row of the structure-type reference table.
///
/// Serialized with the `Property_Types` collection's field names; YAML files
/// may use the shorter `code` / `name` aliases.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PropertyTypeEntry {
    #[serde(rename = "propertyIDs", alias = "code")]
    pub code: i64,
    #[serde(rename = "property_name", alias = "name")]
    pub name: String,
    pub category: PropertyCategory,
}

/// How a record identifies its structure type.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TypeKey<'a> {
    Name(&'a str),
    Code(i64),
}

/// Read-only lookup from structure type to category.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PropertyTypeTable {
    entries: Vec<PropertyTypeEntry>,
}

impl PropertyTypeTable {
    pub fn new(entries: Vec<PropertyTypeEntry>) -> Self {
        Self { entries }
    }

    /// The structure types known to the booking feeds.
    pub fn builtin() -> Self {
        use PropertyCategory::{Apt, Htl};
        let rows: &[(i64, &str, PropertyCategory)] = &[
            (201, "Appartamenti", Apt),
            (204, "Hotel", Htl),
            (208, "Bed & Breakfast", Apt),
            (220, "Case vacanze", Apt),
            (216, "Affittacamere", Apt),
            (213, "Ville", Apt),
            (223, "Case di campagna", Apt),
            (203, "Ostelli", Apt),
            (210, "Agriturismi", Apt),
            (228, "Chalet", Apt),
            (222, "Alloggi in famiglia/Homestays", Apt),
            (224, "Campeggi di lusso", Apt),
            (212, "Villaggi turistici", Htl),
            (205, "Motel", Htl),
            (206, "Resort", Htl),
            (219, "Residence", Htl),
            (218, "Locande", Htl),
        ];
        Self::new(
            rows.iter()
                .map(|&(code, name, category)| PropertyTypeEntry {
                    code,
                    name: name.to_string(),
                    category,
                })
                .collect(),
        )
    }

    pub fn entries(&self) -> &[PropertyTypeEntry] {
        &self.entries
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Find the entry for a key. Names compare trimmed and case-insensitively.
    pub fn lookup(&self, key: TypeKey<'_>) -> Option<&PropertyTypeEntry> {
        match key {
            TypeKey::Code(code) => self.entries.iter().find(|e| e.code == code),
            TypeKey::Name(name) => {
                let name = name.trim();
                self.entries
                    .iter()
                    .find(|e| e.name.eq_ignore_ascii_case(name))
            }
        }
    }

    /// Category for a key, `Apt` when the type is unknown.
    ///
    /// ```
    /// use ricettiva_catalog::{PropertyCategory, PropertyTypeTable, TypeKey};
    ///
    /// let table = PropertyTypeTable::builtin();
    /// assert_eq!(table.classify(TypeKey::Name("Hotel")), PropertyCategory::Htl);
    /// assert_eq!(table.classify(TypeKey::Code(204)), PropertyCategory::Htl);
    /// assert_eq!(table.classify(TypeKey::Name("Unknown Type")), PropertyCategory::Apt);
    /// ```
    pub fn classify(&self, key: TypeKey<'_>) -> PropertyCategory {
        match self.lookup(key) {
            Some(entry) => entry.category,
            None => {
                log::debug!("Unknown structure type {:?}, defaulting to APT", key);
                PropertyCategory::Apt
            }
        }
    }

    /// Classify a raw `Tipologia`/`Type` value.
    ///
    /// Numbers are codes, strings are names; a numeric string that matches no
    /// name is tried as a code. Anything else is `Apt`.
    pub fn classify_value(&self, value: Option<&Value>) -> PropertyCategory {
        match value {
            Some(Value::Number(n)) => match n.as_i64() {
                Some(code) => self.classify(TypeKey::Code(code)),
                None => PropertyCategory::Apt,
            },
            Some(Value::String(s)) => {
                if let Some(entry) = self.lookup(TypeKey::Name(s)) {
                    return entry.category;
                }
                match s.trim().parse::<i64>() {
                    Ok(code) => self.classify(TypeKey::Code(code)),
                    Err(_) => self.classify(TypeKey::Name(s)),
                }
            }
            _ => PropertyCategory::Apt,
        }
    }
}

impl Default for PropertyTypeTable {
    fn default() -> Self {
        Self::builtin()
    }
}
