//! Room inventory → `Rooms`.

use ricettiva_catalog::{BookingIdMap, EntityKind, FieldReader, PropertyCategory, Rejection, Room};
use ricettiva_core::{MonthNames, RawRecord, extract_tagged, parse_tagged};

use crate::batch::{ImportError, ImportOptions, ImportReport, Importer, Planned, run_import};
use crate::lookup::{load_booking_map, resolve_property};
use crate::progress::ImportProgress;
use crate::store::DocumentStore;

pub struct RoomImporter {
    bookings: BookingIdMap,
    months: MonthNames,
}

impl RoomImporter {
    pub fn new(store: &dyn DocumentStore, options: &ImportOptions) -> Result<Self, ImportError> {
        Ok(Self {
            bookings: load_booking_map(store, options.strict_booking_ids)?,
            months: options.months.clone(),
        })
    }
}

/// Occupancy from the inline tags in `AccomodationType`, falling back to
/// `Occupazione` for the adult count.
fn room_occupancy(r: &FieldReader<'_>) -> (Option<u32>, Option<u32>) {
    let Some(description) = r.opt_text("AccomodationType") else {
        return (None, None);
    };
    let fallback = r.opt_int("Occupazione").and_then(|n| u32::try_from(n).ok());
    let occupancy = match fallback {
        Some(n) => Some(extract_tagged(&description, n)),
        None => parse_tagged(&description),
    };
    match occupancy {
        Some(o) => (Some(o.adults), Some(o.children)),
        None => (None, None),
    }
}

impl Importer for RoomImporter {
    type Record = Room;

    fn entity(&self) -> EntityKind {
        EntityKind::Room
    }

    fn plan(&self, raw: &RawRecord) -> Result<Planned<Room>, Rejection> {
        let property_id = resolve_property(&self.bookings, raw, "PropertyId", EntityKind::Room)?;

        let mut r = FieldReader::new(raw).with_months(&self.months);
        let (occupancy_adult, occupancy_kid) = room_occupancy(&r);
        let room = Room {
            unique_room_id: r.opt_text("uniqueRoomId"),
            room_name: r.text("roomName"),
            room_desc: r.text_list("roomDesc"),
            room_size: r.opt_int("roomSize"),
            has_inventory: r.flag("hasInventory"),
            occupancy_adult,
            occupancy_kid,
            bed_desc: r.opt_text("BedDesc"),
            main_type: r.text("MainType"),
            sub_type: r.text("SubType"),
            full_date_search: r.date("FullDateSearch"),
            quantity: r.opt_int("Quantity"),
            property_id,
        };
        let room = r.finish_as(EntityKind::Room, room)?;
        Ok(Planned::new(
            EntityKind::Room.collection(PropertyCategory::default()),
            room,
        ))
    }
}

/// Import room inventory, linking each room to its property by booking id.
pub fn import_rooms(
    store: &dyn DocumentStore,
    records: &[RawRecord],
    options: &ImportOptions,
    progress: Option<&dyn ImportProgress>,
) -> Result<ImportReport, ImportError> {
    let importer = RoomImporter::new(store, options)?;
    run_import(store, &importer, records, progress)
}
