//! Normalized record types, validation, and cross-record lookups.
//!
//! This crate defines what a stored document looks like for every entity kind
//! the import jobs produce, the validator that turns a raw source record into
//! one of those documents (or a typed rejection), the booking-id resolver used
//! for property foreign keys, and the property-type table that decides the
//! HTL/APT partition. It has no database dependency; `ricettiva-db` persists
//! what this crate builds.

pub mod booking;
pub mod property_types;
pub mod types;
pub mod validate;
pub mod yaml;

pub use booking::{BookingCollision, BookingIdMap, BookingRef};
pub use property_types::{PropertyCategory, PropertyTypeEntry, PropertyTypeTable, TypeKey};
pub use types::*;
pub use validate::{FieldError, FieldProblem, FieldReader, RejectReason, Rejection};
pub use yaml::{ReferenceData, YamlError, load_month_names, load_property_types, load_reference};
