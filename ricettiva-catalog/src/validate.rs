//! Record validation: raw source record in, typed document or rejection out.
//!
//! A [`FieldReader`] reads fields through the scalar parsers in
//! `ricettiva-core`. Required reads that come back empty are recorded as
//! [`FieldError`]s and a placeholder default is returned so the caller can keep
//! assembling; [`FieldReader::finish`] then throws the placeholder record away
//! if anything was recorded. Optional reads never record errors.

use chrono::NaiveDateTime;
use ricettiva_core::{MonthNames, RawRecord, parse};
use serde_json::Value;
use thiserror::Error;

use crate::types::EntityKind;

// ── Field errors ────────────────────────────────────────────────────────────

/// What was wrong with a required field.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum FieldProblem {
    #[error("missing")]
    Missing,
    #[error("could not parse {0}")]
    Unparseable(String),
}

/// A required field that failed to read.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("{field}: {problem}")]
pub struct FieldError {
    pub field: &'static str,
    pub problem: FieldProblem,
}

// ── Rejections ──────────────────────────────────────────────────────────────

/// Why a record was not accepted.
#[derive(Debug, Clone, PartialEq)]
pub enum RejectReason {
    /// Lacks the fields a record of this kind is recognised by (e.g. `Nome`, `Città`).
    Incomplete,
    /// One or more required fields missing or unparseable.
    Invalid(Vec<FieldError>),
    /// No property reference on a record that needs one.
    MissingPropertyRef,
    /// The referenced booking id is not among the stored properties.
    UnresolvedProperty(i64),
    /// City name (after translation) not found in the `Cities` collection.
    UnknownCity(String),
}

impl std::fmt::Display for RejectReason {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Incomplete => write!(f, "incomplete record"),
            Self::Invalid(errors) => {
                write!(f, "invalid fields: ")?;
                for (i, e) in errors.iter().enumerate() {
                    if i > 0 {
                        write!(f, ", ")?;
                    }
                    write!(f, "{e}")?;
                }
                Ok(())
            }
            Self::MissingPropertyRef => write!(f, "no property reference"),
            Self::UnresolvedProperty(id) => write!(f, "unresolved booking id {id}"),
            Self::UnknownCity(name) => write!(f, "unknown city '{name}'"),
        }
    }
}

/// A rejected record, with the raw input kept for the skipped-records log.
#[derive(Debug, Clone, PartialEq, Error)]
#[error("{entity} rejected: {reason}")]
pub struct Rejection {
    pub entity: EntityKind,
    pub reason: RejectReason,
    pub raw: RawRecord,
}

impl Rejection {
    pub fn new(entity: EntityKind, reason: RejectReason, raw: &RawRecord) -> Self {
        Self {
            entity,
            reason,
            raw: raw.clone(),
        }
    }

    /// Whether this rejection is a foreign-key miss rather than bad data.
    pub fn is_unresolved(&self) -> bool {
        matches!(
            self.reason,
            RejectReason::UnresolvedProperty(_) | RejectReason::MissingPropertyRef
        )
    }
}

// ── Field reader ────────────────────────────────────────────────────────────

fn is_blank(val: &Value) -> bool {
    match val {
        Value::Null => true,
        Value::String(s) => s.trim().is_empty(),
        _ => false,
    }
}

fn describe(val: &Value) -> String {
    match val {
        Value::String(s) => format!("'{s}'"),
        other => other.to_string(),
    }
}

/// Typed, error-collecting access to one raw record.
pub struct FieldReader<'a> {
    raw: &'a RawRecord,
    months: &'a MonthNames,
    errors: Vec<FieldError>,
}

impl<'a> FieldReader<'a> {
    pub fn new(raw: &'a RawRecord) -> Self {
        Self {
            raw,
            months: &parse::ITALIAN_MONTHS,
            errors: Vec::new(),
        }
    }

    /// Use a different month table for "month year" dates.
    pub fn with_months(mut self, months: &'a MonthNames) -> Self {
        self.months = months;
        self
    }

    pub fn raw(&self) -> &'a RawRecord {
        self.raw
    }

    /// The field's value, if present and not null or blank.
    pub fn value(&self, key: &str) -> Option<&'a Value> {
        self.raw.get(key).filter(|v| !is_blank(v))
    }

    pub fn has(&self, key: &str) -> bool {
        self.value(key).is_some()
    }

    fn required<T: Default>(&mut self, key: &'static str, parse: impl Fn(&Value) -> Option<T>) -> T {
        let problem = match self.value(key) {
            None => FieldProblem::Missing,
            Some(v) => match parse(v) {
                Some(parsed) => return parsed,
                None => FieldProblem::Unparseable(describe(v)),
            },
        };
        self.errors.push(FieldError {
            field: key,
            problem,
        });
        T::default()
    }

    fn optional<T>(&self, key: &str, parse: impl Fn(&Value) -> Option<T>) -> Option<T> {
        self.value(key).and_then(parse)
    }

    pub fn text(&mut self, key: &'static str) -> String {
        self.required(key, parse::text)
    }

    pub fn opt_text(&self, key: &str) -> Option<String> {
        self.optional(key, parse::text)
    }

    pub fn int(&mut self, key: &'static str) -> i64 {
        self.required(key, parse::parse_int)
    }

    pub fn opt_int(&self, key: &str) -> Option<i64> {
        self.optional(key, parse::parse_int)
    }

    pub fn float(&mut self, key: &'static str) -> f64 {
        self.required(key, parse::parse_float)
    }

    pub fn opt_float(&self, key: &str) -> Option<f64> {
        self.optional(key, parse::parse_float)
    }

    /// Required float pulled out of free text ("150 m dal centro").
    pub fn float_lenient(&mut self, key: &'static str) -> f64 {
        self.required(key, parse::parse_float_lenient)
    }

    pub fn opt_float_lenient(&self, key: &str) -> Option<f64> {
        self.optional(key, parse::parse_float_lenient)
    }

    pub fn date(&mut self, key: &'static str) -> NaiveDateTime {
        let months = self.months;
        self.required(key, |v| parse::parse_date_with(v, months))
    }

    pub fn opt_date(&self, key: &str) -> Option<NaiveDateTime> {
        self.optional(key, |v| parse::parse_date_with(v, self.months))
    }

    /// Flag fields default to unset when absent.
    pub fn flag(&self, key: &str) -> bool {
        self.raw.get(key).is_some_and(parse::parse_flag)
    }

    pub fn opt_flag(&self, key: &str) -> Option<bool> {
        self.raw
            .get(key)
            .filter(|v| !v.is_null())
            .map(parse::parse_flag)
    }

    /// A list of strings; a lone string becomes a one-element list.
    pub fn text_list(&self, key: &str) -> Vec<String> {
        match self.raw.get(key) {
            Some(Value::Array(items)) => items.iter().filter_map(parse::text).collect(),
            Some(v) => parse::text(v).into_iter().collect(),
            None => Vec::new(),
        }
    }

    /// Require a derived value (a resolved reference, a computed field).
    pub fn require<T: Default>(&mut self, field: &'static str, value: Option<T>) -> T {
        match value {
            Some(v) => v,
            None => {
                self.errors.push(FieldError {
                    field,
                    problem: FieldProblem::Missing,
                });
                T::default()
            }
        }
    }

    pub fn errors(&self) -> &[FieldError] {
        &self.errors
    }

    /// Hand back `record` if every required read succeeded.
    pub fn finish<T>(self, record: T) -> Result<T, Vec<FieldError>> {
        if self.errors.is_empty() {
            Ok(record)
        } else {
            Err(self.errors)
        }
    }

    /// Like [`finish`](Self::finish), wrapping failures in a [`Rejection`].
    pub fn finish_as<T>(self, entity: EntityKind, record: T) -> Result<T, Rejection> {
        let raw = self.raw;
        self.finish(record)
            .map_err(|errors| Rejection::new(entity, RejectReason::Invalid(errors), raw))
    }
}
