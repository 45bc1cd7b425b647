//! Import drivers: JSON exports into the document store.
//!
//! One driver per data category. Each loads its lookups (booking id map,
//! cities, structure types) once, transforms the whole batch with the
//! validators from `ricettiva-catalog`, then inserts what was accepted and
//! tallies the rest. Rejected records are returned with the report so the
//! caller can write them to a [`SkippedLog`].

pub mod bar;
pub mod batch;
pub mod full_prices;
pub mod lookup;
pub mod progress;
pub mod properties;
pub mod records;
pub mod reputation;
pub mod reviews;
pub mod rooms;
pub mod seed;
pub mod store;

pub use bar::{BarImporter, import_bar};
pub use batch::{
    BatchOutcome, DuplicateKey, ImportError, ImportOptions, ImportReport, ImportStats, Importer,
    Planned, plan_batch, run_import, transform_batch,
};
pub use full_prices::{FullPriceImporter, import_full_prices};
pub use lookup::{CityIndex, load_booking_map, resolve_property};
pub use progress::{ImportProgress, LogProgress, SilentProgress};
pub use properties::{PropertyImporter, import_properties};
pub use records::{SkippedLog, load_records};
pub use reputation::{ReputationImporter, import_reputation};
pub use reviews::{ReviewImporter, import_reviews};
pub use rooms::{RoomImporter, import_rooms};
pub use seed::{CityImporter, seed_cities, seed_property_types};
pub use store::DocumentStore;
