//! Booking identifier → stored property id resolution.
//!
//! Dependent feeds (rooms, reviews, reputation, prices) reference a property
//! by the upstream booking id. The map is built once per run from the two
//! property partitions and only read afterwards.

use std::collections::HashMap;

use serde_json::Value;
use thiserror::Error;

use crate::types::DocumentId;

/// A stored property's booking id and document id.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BookingRef {
    pub booking_id: i64,
    pub id: DocumentId,
}

impl BookingRef {
    pub fn new(booking_id: i64, id: impl Into<DocumentId>) -> Self {
        Self {
            booking_id,
            id: id.into(),
        }
    }
}

/// The same booking id is stored under two different documents.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("booking id {booking_id} maps to both {first} and {second}")]
pub struct BookingCollision {
    pub booking_id: i64,
    pub first: DocumentId,
    pub second: DocumentId,
}

/// Immutable booking id → document id lookup.
#[derive(Debug, Clone, Default)]
pub struct BookingIdMap {
    map: HashMap<i64, DocumentId>,
    collisions: usize,
}

impl BookingIdMap {
    /// Build from the HTL partition, then the APT partition.
    ///
    /// On a repeated booking id the later entry wins; each collision is logged
    /// and counted in [`collisions`](Self::collisions).
    pub fn build<H, A>(hotels: H, apartments: A) -> Self
    where
        H: IntoIterator<Item = BookingRef>,
        A: IntoIterator<Item = BookingRef>,
    {
        let mut out = Self::default();
        for r in hotels.into_iter().chain(apartments) {
            if let Some(previous) = out.map.insert(r.booking_id, r.id.clone()) {
                if previous != r.id {
                    log::warn!(
                        "Booking id {} stored twice ({} and {}); keeping {}",
                        r.booking_id,
                        previous,
                        r.id,
                        r.id,
                    );
                    out.collisions += 1;
                }
            }
        }
        out
    }

    /// Like [`build`](Self::build) but fails when a booking id appears in both
    /// partitions under different documents.
    ///
    /// A repeat inside one partition is not a collision here: the later entry
    /// wins and is counted, as in `build`.
    pub fn build_strict<H, A>(hotels: H, apartments: A) -> Result<Self, BookingCollision>
    where
        H: IntoIterator<Item = BookingRef>,
        A: IntoIterator<Item = BookingRef>,
    {
        let mut out = Self::build(hotels, Vec::new());
        let apartments = Self::build(Vec::new(), apartments);
        for (booking_id, id) in apartments.map {
            match out.map.get(&booking_id) {
                Some(existing) if *existing != id => {
                    return Err(BookingCollision {
                        booking_id,
                        first: existing.clone(),
                        second: id,
                    });
                }
                _ => {
                    out.map.insert(booking_id, id);
                }
            }
        }
        out.collisions += apartments.collisions;
        Ok(out)
    }

    /// Look up a booking id. A miss is normal: the property was never imported.
    pub fn resolve(&self, booking_id: i64) -> Option<&DocumentId> {
        self.map.get(&booking_id)
    }

    /// Resolve a raw reference after normalizing it to an integer.
    pub fn resolve_value(&self, raw: &Value) -> Option<&DocumentId> {
        ricettiva_core::parse_int(raw).and_then(|id| self.resolve(id))
    }

    pub fn len(&self) -> usize {
        self.map.len()
    }

    pub fn is_empty(&self) -> bool {
        self.map.is_empty()
    }

    /// Number of booking ids seen more than once while building.
    pub fn collisions(&self) -> usize {
        self.collisions
    }
}
