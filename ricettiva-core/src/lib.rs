//! Field-level transforms shared by every import job.
//!
//! Everything in this crate is pure: scalar parsers that degrade to `None`
//! instead of failing, the accommodation-level classifier, occupancy
//! extraction and city-name translation. None of it touches the store or
//! the file system.

pub mod accommodation;
pub mod city;
pub mod occupancy;
pub mod parse;

pub use accommodation::{AccommodationLevel, AccommodationLevelParseError};
pub use city::translate_city;
pub use occupancy::{Occupancy, extract_listed, extract_tagged, parse_tagged};
pub use parse::{
    ITALIAN_MONTHS, MonthNames, parse_date, parse_date_with, parse_flag, parse_float,
    parse_float_lenient, parse_int, text,
};

/// A single decoded source record: field name to JSON value.
pub type RawRecord = serde_json::Map<String, serde_json::Value>;
