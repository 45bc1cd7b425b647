//! Tolerant scalar parsers for source-feed values.
//!
//! Source exports mix numbers, numeric strings with comma decimals, verbose
//! score strings ("Punteggio di 8,0") and Italian month names. Every parser
//! here returns `None` on anything it cannot read; deciding whether a missing
//! value invalidates a record is the validator's job.

use std::sync::LazyLock;

use chrono::{NaiveDate, NaiveDateTime};
use regex::Regex;
use serde_json::Value;

/// Verbose prefixes some feeds put in front of numeric scores.
const FLOAT_PREFIXES: &[&str] = &["Punteggio di ", "Score of "];

/// First signed decimal run anywhere in a string.
static FIRST_NUMBER: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"[-+]?(?:\d*\.\d+|\d+)").expect("valid number pattern"));

/// Returns `true` for values that count as "not provided": null and the empty string.
fn is_blank(val: &Value) -> bool {
    match val {
        Value::Null => true,
        Value::String(s) => s.trim().is_empty(),
        _ => false,
    }
}

/// Parse an integer from a JSON value.
///
/// Integral numbers are returned as-is and fractional numbers are truncated
/// toward zero; numbers outside the `i64` range are absent. Strings are
/// trimmed and parsed base-10 with an optional sign.
///
/// ```
/// use ricettiva_core::parse_int;
/// use serde_json::json;
///
/// assert_eq!(parse_int(&json!("42")), Some(42));
/// assert_eq!(parse_int(&json!(7)), Some(7));
/// assert_eq!(parse_int(&json!("")), None);
/// assert_eq!(parse_int(&json!("4 stelle")), None);
/// ```
pub fn parse_int(val: &Value) -> Option<i64> {
    if is_blank(val) {
        return None;
    }
    match val {
        Value::Number(n) => n.as_i64().or_else(|| {
            n.as_f64()
                .filter(|f| *f >= i64::MIN as f64 && *f < i64::MAX as f64)
                .map(|f| f.trunc() as i64)
        }),
        Value::String(s) => s.trim().parse::<i64>().ok(),
        _ => None,
    }
}

/// Parse a float from a JSON value, accepting comma decimals and verbose score prefixes.
///
/// ```
/// use ricettiva_core::parse_float;
/// use serde_json::json;
///
/// assert_eq!(parse_float(&json!("8,5")), Some(8.5));
/// assert_eq!(parse_float(&json!("Punteggio di 8,0")), Some(8.0));
/// assert_eq!(parse_float(&json!(null)), None);
/// ```
pub fn parse_float(val: &Value) -> Option<f64> {
    if is_blank(val) {
        return None;
    }
    match val {
        Value::Number(n) => n.as_f64(),
        Value::String(s) => {
            let mut s = s.trim();
            for prefix in FLOAT_PREFIXES {
                if let Some(rest) = s.strip_prefix(prefix) {
                    s = rest.trim();
                    break;
                }
            }
            s.replace(',', ".")
                .parse::<f64>()
                .ok()
                .filter(|f| f.is_finite())
        }
        _ => None,
    }
}

/// Permissive float parser: pulls the first number out of free text.
///
/// Used for fields like `DistanzaCentro` whose values read "150 m dal centro"
/// or "1,2 km".
pub fn parse_float_lenient(val: &Value) -> Option<f64> {
    if is_blank(val) {
        return None;
    }
    match val {
        Value::Number(n) => n.as_f64(),
        Value::String(s) => {
            let normalized = s.replace(',', ".");
            FIRST_NUMBER
                .find(&normalized)
                .and_then(|m| m.as_str().parse::<f64>().ok())
        }
        _ => None,
    }
}

/// Interpret a source flag the way the feeds use it.
///
/// `true`, non-zero numbers and non-empty strings are set; `"false"`, `"0"`
/// and `"no"` (any case) are not.
pub fn parse_flag(val: &Value) -> bool {
    match val {
        Value::Bool(b) => *b,
        Value::Number(n) => n.as_f64().is_some_and(|f| f != 0.0),
        Value::String(s) => {
            let s = s.trim();
            !s.is_empty()
                && !s.eq_ignore_ascii_case("false")
                && !s.eq_ignore_ascii_case("no")
                && s != "0"
        }
        _ => false,
    }
}

/// Trimmed, non-empty text from a string or number value.
pub fn text(val: &Value) -> Option<String> {
    match val {
        Value::String(s) => {
            let s = s.trim();
            (!s.is_empty()).then(|| s.to_string())
        }
        Value::Number(n) => Some(n.to_string()),
        _ => None,
    }
}

// ── Dates ───────────────────────────────────────────────────────────────────

/// Month names used by the "month-name year" date form, January first.
///
/// Passed explicitly to [`parse_date_with`] so date parsing never depends on
/// the process locale.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MonthNames {
    names: [String; 12],
}

impl MonthNames {
    pub fn new(names: [&str; 12]) -> Self {
        Self {
            names: names.map(|n| n.to_lowercase()),
        }
    }

    pub fn italian() -> Self {
        Self::new([
            "gennaio",
            "febbraio",
            "marzo",
            "aprile",
            "maggio",
            "giugno",
            "luglio",
            "agosto",
            "settembre",
            "ottobre",
            "novembre",
            "dicembre",
        ])
    }

    pub fn english() -> Self {
        Self::new([
            "january",
            "february",
            "march",
            "april",
            "may",
            "june",
            "july",
            "august",
            "september",
            "october",
            "november",
            "december",
        ])
    }

    /// 1-based month number for a name, compared case-insensitively.
    pub fn month_number(&self, name: &str) -> Option<u32> {
        let lower = name.trim().to_lowercase();
        self.names
            .iter()
            .position(|n| *n == lower)
            .map(|i| i as u32 + 1)
    }
}

impl Default for MonthNames {
    fn default() -> Self {
        Self::italian()
    }
}

/// Shared Italian month table, the default for every feed.
pub static ITALIAN_MONTHS: LazyLock<MonthNames> = LazyLock::new(MonthNames::italian);

/// Parse a date using the Italian month table. See [`parse_date_with`].
pub fn parse_date(val: &Value) -> Option<NaiveDateTime> {
    parse_date_with(val, &ITALIAN_MONTHS)
}

/// Parse a date or datetime from a JSON string.
///
/// Tried in order:
/// 1. `YYYY-MM-DD` (midnight)
/// 2. ISO datetime, `T` or space separated (kept as-is)
/// 3. `"<month> <year>"` against `months`, e.g. "gennaio 2025" (first of the month)
pub fn parse_date_with(val: &Value, months: &MonthNames) -> Option<NaiveDateTime> {
    let s = match val {
        Value::String(s) => s.trim(),
        _ => return None,
    };
    if s.is_empty() {
        return None;
    }

    if let Ok(date) = NaiveDate::parse_from_str(s, "%Y-%m-%d") {
        return date.and_hms_opt(0, 0, 0);
    }
    if let Ok(dt) = s.parse::<NaiveDateTime>() {
        return Some(dt);
    }
    if let Ok(dt) = NaiveDateTime::parse_from_str(s, "%Y-%m-%d %H:%M:%S") {
        return Some(dt);
    }

    let mut parts = s.split_whitespace();
    let (month, year) = match (parts.next(), parts.next(), parts.next()) {
        (Some(m), Some(y), None) => (m, y),
        _ => return None,
    };
    let month = months.month_number(month)?;
    let year = year.parse::<i32>().ok()?;
    NaiveDate::from_ymd_opt(year, month, 1)?.and_hms_opt(0, 0, 0)
}

#[cfg(test)]
#[path = "tests/parse_tests.rs"]
mod tests;
