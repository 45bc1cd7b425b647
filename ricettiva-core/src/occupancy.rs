//! Guest occupancy extraction.
//!
//! Two feed shapes exist and are kept apart:
//! - room inventory describes occupancy inline ("2 Adulti 1 Bambino") with a
//!   separate numeric `Occupazione` field as fallback;
//! - price snapshots carry a comma-separated summary ("2 adults, 1 child").

use std::sync::LazyLock;

use regex::Regex;

static ADULTS_TAG: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"(?i)(\d+)\s*adult[oi]").expect("valid adults pattern"));
static CHILDREN_TAG: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"(?i)(\d+)\s*bambin[oi]").expect("valid children pattern"));

/// Adult and child counts for a bookable unit.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct Occupancy {
    pub adults: u32,
    pub children: u32,
}

impl Occupancy {
    pub fn new(adults: u32, children: u32) -> Self {
        Self { adults, children }
    }

    pub fn adults_only(adults: u32) -> Self {
        Self::new(adults, 0)
    }
}

fn capture_count(re: &Regex, text: &str) -> Option<u32> {
    re.captures(text)
        .and_then(|c| c.get(1))
        .and_then(|m| m.as_str().parse().ok())
}

/// Read inline "N Adulti" / "N Bambino" tags.
///
/// Returns `None` when there is no adult tag; a missing child tag means zero children.
pub fn parse_tagged(text: &str) -> Option<Occupancy> {
    let adults = capture_count(&ADULTS_TAG, text)?;
    let children = capture_count(&CHILDREN_TAG, text).unwrap_or(0);
    Some(Occupancy::new(adults, children))
}

/// Occupancy from inline tags, or `fallback` adults and no children.
///
/// ```
/// use ricettiva_core::{Occupancy, extract_tagged};
///
/// assert_eq!(extract_tagged("2 Adulti 1 Bambino", 4), Occupancy::new(2, 1));
/// assert_eq!(extract_tagged("3 Adulti", 4), Occupancy::new(3, 0));
/// assert_eq!(extract_tagged("", 4), Occupancy::new(4, 0));
/// ```
pub fn extract_tagged(text: &str, fallback: u32) -> Occupancy {
    parse_tagged(text).unwrap_or(Occupancy::adults_only(fallback))
}

/// Leading unsigned integer of a trimmed segment, if any.
fn leading_count(segment: &str) -> Option<u32> {
    let digits: String = segment
        .trim_start()
        .chars()
        .take_while(|c| c.is_ascii_digit())
        .collect();
    digits.parse().ok()
}

/// Occupancy from a comma-separated summary: adults first, children second.
///
/// ```
/// use ricettiva_core::{Occupancy, extract_listed};
///
/// assert_eq!(extract_listed("2 adults, 1 child"), Occupancy::new(2, 1));
/// assert_eq!(extract_listed("2 adults"), Occupancy::new(2, 0));
/// ```
pub fn extract_listed(text: &str) -> Occupancy {
    let mut segments = text.split(',');
    let adults = segments.next().and_then(leading_count).unwrap_or(0);
    let children = segments.next().and_then(leading_count).unwrap_or(0);
    Occupancy::new(adults, children)
}
