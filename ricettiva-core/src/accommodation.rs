/// Coarse accommodation category derived from free-text accommodation types.
///
/// Feeds describe the bookable unit in free text ("Camera Matrimoniale con
/// vista", "Junior Suite Deluxe", "Apartment with Balcony"). This enum is the
/// fixed set of levels those descriptions collapse to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum AccommodationLevel {
    Rooms,
    JuniorSuite,
    Suite,
    Apartment,
    Villa,
    Dependence,
    Studio,
    Bungalow,
    Dormitory,
    #[default]
    Other,
}

/// All levels in declaration order.
const ALL_LEVELS: &[AccommodationLevel] = &[
    AccommodationLevel::Rooms,
    AccommodationLevel::JuniorSuite,
    AccommodationLevel::Suite,
    AccommodationLevel::Apartment,
    AccommodationLevel::Villa,
    AccommodationLevel::Dependence,
    AccommodationLevel::Studio,
    AccommodationLevel::Bungalow,
    AccommodationLevel::Dormitory,
    AccommodationLevel::Other,
];

/// Phrase lookup, keys lower-case. Multi-word phrases win over their last word
/// because prefixes are tried longest first.
fn lookup(phrase: &str) -> Option<AccommodationLevel> {
    use AccommodationLevel::*;
    let level = match phrase {
        "camera" | "camere" | "room" | "rooms" | "studio room" => Rooms,
        "junior suite" => JuniorSuite,
        "suite" => Suite,
        "appartamento" | "appartamenti" | "apartment" | "apartments" => Apartment,
        "villa" | "ville" | "villetta" | "castello" | "castelli" | "castelletto" | "chalet" => {
            Villa
        }
        "depandance" | "dependance" => Dependence,
        "studio" => Studio,
        "bungalow" => Bungalow,
        "dormitory" => Dormitory,
        _ => return None,
    };
    Some(level)
}

impl AccommodationLevel {
    pub fn all() -> &'static [AccommodationLevel] {
        ALL_LEVELS
    }

    /// Display name, also the stored value.
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Rooms => "Rooms",
            Self::JuniorSuite => "Junior Suite",
            Self::Suite => "Suite",
            Self::Apartment => "Apartment",
            Self::Villa => "Villa",
            Self::Dependence => "Dependence",
            Self::Studio => "Studio",
            Self::Bungalow => "Bungalow",
            Self::Dormitory => "Dormitory",
            Self::Other => "Other",
        }
    }

    /// Classify a free-text accommodation type.
    ///
    /// The longest leading phrase that is a known key wins; failing that, the
    /// first known single word anywhere in the text; failing that, `Other`.
    ///
    /// ```
    /// use ricettiva_core::AccommodationLevel;
    ///
    /// assert_eq!(AccommodationLevel::classify("Junior Suite Deluxe"), AccommodationLevel::JuniorSuite);
    /// assert_eq!(AccommodationLevel::classify("studio room"), AccommodationLevel::Rooms);
    /// assert_eq!(AccommodationLevel::classify("Deluxe Suite"), AccommodationLevel::Suite);
    /// assert_eq!(AccommodationLevel::classify(""), AccommodationLevel::Other);
    /// ```
    pub fn classify(text: &str) -> Self {
        let lower = text.to_lowercase();
        let words: Vec<&str> = lower.split_whitespace().collect();

        for n in (1..=words.len()).rev() {
            if let Some(level) = lookup(&words[..n].join(" ")) {
                return level;
            }
        }

        words
            .iter()
            .find_map(|w| lookup(w))
            .unwrap_or(Self::Other)
    }

    /// Classify a raw field value; absent and non-string values are `Other`.
    pub fn classify_value(value: Option<&serde_json::Value>) -> Self {
        match value {
            Some(serde_json::Value::String(s)) => Self::classify(s),
            _ => Self::Other,
        }
    }
}

impl std::fmt::Display for AccommodationLevel {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Error returned when a string is not a known accommodation level name.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("unknown accommodation level: {0}")]
pub struct AccommodationLevelParseError(pub String);

impl std::str::FromStr for AccommodationLevel {
    type Err = AccommodationLevelParseError;

    /// Parse a stored level name (case-insensitive), not free text.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        ALL_LEVELS
            .iter()
            .copied()
            .find(|level| level.as_str().eq_ignore_ascii_case(s.trim()))
            .ok_or_else(|| AccommodationLevelParseError(s.to_string()))
    }
}

impl serde::Serialize for AccommodationLevel {
    fn serialize<S: serde::Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(self.as_str())
    }
}

impl<'de> serde::Deserialize<'de> for AccommodationLevel {
    fn deserialize<D: serde::Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let s = String::deserialize(deserializer)?;
        s.parse().map_err(serde::de::Error::custom)
    }
}

#[cfg(test)]
#[path = "tests/accommodation_tests.rs"]
mod tests;
