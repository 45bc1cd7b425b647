//! Stored document types.
//!
//! Field names on the wire follow the existing collections (`booking_id`,
//! `distanceCentre`, `PropertyId`, ...), so every struct renames explicitly.
//! Optional fields are skipped when `None`: documents are sparse, never null.

use chrono::NaiveDateTime;
use ricettiva_core::AccommodationLevel;
use serde::{Deserialize, Serialize};

use crate::property_types::PropertyCategory;

// ── Identifiers ─────────────────────────────────────────────────────────────

/// Opaque identifier the store assigns to a document on insert.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Default, Serialize, Deserialize)]
#[serde(transparent)]
pub struct DocumentId(pub String);

impl DocumentId {
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl From<String> for DocumentId {
    fn from(s: String) -> Self {
        Self(s)
    }
}

impl From<&str> for DocumentId {
    fn from(s: &str) -> Self {
        Self(s.to_string())
    }
}

impl std::fmt::Display for DocumentId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.0)
    }
}

// ── Entity kinds and collections ────────────────────────────────────────────

/// Every kind of document the import jobs write.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum EntityKind {
    Property,
    Room,
    Review,
    ReputationKpi,
    Bar,
    FullPrice,
    PropertyType,
    City,
}

/// Every collection name, partitioned kinds expanded.
const ALL_COLLECTIONS: &[&str] = &[
    "Cities",
    "Property_Types",
    "Properties_HTL",
    "Properties_APT",
    "Rooms",
    "Reviews",
    "Reputation_KPI_Table",
    "BAR_HTL",
    "BAR_APT",
    "FullPrices_HTL",
    "FullPrices_APT",
];

impl EntityKind {
    /// Whether documents of this kind are split into HTL/APT collections.
    pub fn is_partitioned(&self) -> bool {
        matches!(self, Self::Property | Self::Bar | Self::FullPrice)
    }

    /// Target collection. `category` only matters for partitioned kinds.
    pub fn collection(&self, category: PropertyCategory) -> &'static str {
        use PropertyCategory::{Apt, Htl};
        match (self, category) {
            (Self::Property, Htl) => "Properties_HTL",
            (Self::Property, Apt) => "Properties_APT",
            (Self::Bar, Htl) => "BAR_HTL",
            (Self::Bar, Apt) => "BAR_APT",
            (Self::FullPrice, Htl) => "FullPrices_HTL",
            (Self::FullPrice, Apt) => "FullPrices_APT",
            (Self::Room, _) => "Rooms",
            (Self::Review, _) => "Reviews",
            (Self::ReputationKpi, _) => "Reputation_KPI_Table",
            (Self::PropertyType, _) => "Property_Types",
            (Self::City, _) => "Cities",
        }
    }

    pub fn all_collections() -> &'static [&'static str] {
        ALL_COLLECTIONS
    }

    pub fn is_known_collection(name: &str) -> bool {
        ALL_COLLECTIONS.contains(&name)
    }

    pub fn name(&self) -> &'static str {
        match self {
            Self::Property => "property",
            Self::Room => "room",
            Self::Review => "review",
            Self::ReputationKpi => "reputation KPI",
            Self::Bar => "BAR entry",
            Self::FullPrice => "full-price entry",
            Self::PropertyType => "property type",
            Self::City => "city",
        }
    }
}

impl std::fmt::Display for EntityKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.name())
    }
}

// ── Reference documents ─────────────────────────────────────────────────────

/// A city in the `Cities` collection, keyed by its Italian name.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct City {
    #[serde(rename = "City")]
    pub name: String,
    #[serde(rename = "Region", default, skip_serializing_if = "Option::is_none")]
    pub region: Option<String>,
}

// ── Property ────────────────────────────────────────────────────────────────

/// A hotel or apartment listing.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Property {
    pub name: String,
    pub booking_id: i64,
    pub type_structure: String,
    pub stars: i64,
    pub city: String,
    pub address: String,
    #[serde(rename = "distanceCentre")]
    pub distance_centre: f64,
    pub url: String,
    pub latitude: f64,
    pub longitude: f64,
    #[serde(rename = "CirCin")]
    pub cir_cin: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub zone: Option<String>,
    #[serde(rename = "roomsNum", default, skip_serializing_if = "Option::is_none")]
    pub rooms_num: Option<i64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub seasonality: Option<String>,
    #[serde(rename = "totalAccomTypes", default, skip_serializing_if = "Option::is_none")]
    pub total_accom_types: Option<i64>,
    #[serde(rename = "bedsNum", default, skip_serializing_if = "Option::is_none")]
    pub beds_num: Option<i64>,
    #[serde(rename = "cityId")]
    pub city_id: DocumentId,
}

// ── Room ────────────────────────────────────────────────────────────────────

/// One room type of a property, from the room inventory feed.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Room {
    #[serde(rename = "uniqueRoomId", default, skip_serializing_if = "Option::is_none")]
    pub unique_room_id: Option<String>,
    #[serde(rename = "roomName")]
    pub room_name: String,
    #[serde(rename = "roomDesc", default)]
    pub room_desc: Vec<String>,
    #[serde(rename = "roomSize", default, skip_serializing_if = "Option::is_none")]
    pub room_size: Option<i64>,
    #[serde(rename = "hasInventory")]
    pub has_inventory: bool,
    #[serde(rename = "OccupancyAdult", default, skip_serializing_if = "Option::is_none")]
    pub occupancy_adult: Option<u32>,
    #[serde(rename = "OccupancyKid", default, skip_serializing_if = "Option::is_none")]
    pub occupancy_kid: Option<u32>,
    #[serde(rename = "BedDesc", default, skip_serializing_if = "Option::is_none")]
    pub bed_desc: Option<String>,
    #[serde(rename = "MainType")]
    pub main_type: String,
    #[serde(rename = "SubType")]
    pub sub_type: String,
    #[serde(rename = "FullDateSearch")]
    pub full_date_search: NaiveDateTime,
    #[serde(rename = "Quantity", default, skip_serializing_if = "Option::is_none")]
    pub quantity: Option<i64>,
    #[serde(rename = "PropertyId")]
    pub property_id: DocumentId,
}

// ── Review ──────────────────────────────────────────────────────────────────

/// A guest review of a property.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Review {
    #[serde(rename = "Name")]
    pub name: String,
    #[serde(rename = "Type")]
    pub property_type: String,
    #[serde(rename = "Destination")]
    pub destination: String,
    #[serde(rename = "Stars")]
    pub stars: i64,
    #[serde(rename = "NameReviewer")]
    pub reviewer_name: String,
    #[serde(rename = "Nationality")]
    pub nationality: String,
    #[serde(rename = "TypeRoom")]
    pub room_type: String,
    /// Length of stay, nights.
    #[serde(rename = "LOS")]
    pub length_of_stay: i64,
    #[serde(rename = "StayingDate")]
    pub staying_date: NaiveDateTime,
    #[serde(rename = "TypeClient")]
    pub client_type: String,
    #[serde(rename = "Vote")]
    pub vote: f64,
    #[serde(rename = "TitleReview")]
    pub title: String,
    #[serde(rename = "Positive", default, skip_serializing_if = "Option::is_none")]
    pub positive: Option<String>,
    #[serde(rename = "Negative", default, skip_serializing_if = "Option::is_none")]
    pub negative: Option<String>,
    #[serde(rename = "PropertyId")]
    pub property_id: DocumentId,
    #[serde(rename = "CityId")]
    pub city_id: DocumentId,
}

// ── Reputation ──────────────────────────────────────────────────────────────

/// Per-property reputation scores from a search snapshot.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ReputationKpi {
    #[serde(rename = "WifiScore", default, skip_serializing_if = "Option::is_none")]
    pub wifi_score: Option<String>,
    #[serde(rename = "QPScore", default, skip_serializing_if = "Option::is_none")]
    pub quality_price_score: Option<f64>,
    #[serde(rename = "PositionScore", default, skip_serializing_if = "Option::is_none")]
    pub position_score: Option<f64>,
    #[serde(rename = "CleanScore", default, skip_serializing_if = "Option::is_none")]
    pub clean_score: Option<f64>,
    #[serde(rename = "ComfortScore", default, skip_serializing_if = "Option::is_none")]
    pub comfort_score: Option<f64>,
    #[serde(rename = "ServiceScore", default, skip_serializing_if = "Option::is_none")]
    pub service_score: Option<f64>,
    #[serde(rename = "StaffScore", default, skip_serializing_if = "Option::is_none")]
    pub staff_score: Option<f64>,
    #[serde(rename = "Reviews", default, skip_serializing_if = "Option::is_none")]
    pub reviews: Option<i64>,
    #[serde(rename = "Score", default, skip_serializing_if = "Option::is_none")]
    pub score: Option<f64>,
    #[serde(rename = "Valuation", default, skip_serializing_if = "Option::is_none")]
    pub valuation: Option<String>,
    #[serde(rename = "FullDateSearch")]
    pub full_date_search: NaiveDateTime,
    #[serde(rename = "DateSearch")]
    pub date_search: NaiveDateTime,
    #[serde(rename = "PropertyId")]
    pub property_id: DocumentId,
}

// ── Pricing ─────────────────────────────────────────────────────────────────

/// A Best-Available-Rate snapshot for one search result.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct BarEntry {
    #[serde(rename = "Type")]
    pub property_type: String,
    #[serde(rename = "Stars")]
    pub stars: i64,
    #[serde(rename = "CheckIn")]
    pub check_in: NaiveDateTime,
    #[serde(rename = "CheckOut")]
    pub check_out: NaiveDateTime,
    #[serde(rename = "Destination")]
    pub destination: String,
    #[serde(rename = "DemandPressure", default, skip_serializing_if = "Option::is_none")]
    pub demand_pressure: Option<i64>,
    #[serde(rename = "SearchRank")]
    pub search_rank: i64,
    #[serde(rename = "SearchPage")]
    pub search_page: i64,
    #[serde(rename = "CancellationPolicy")]
    pub cancellation_policy: String,
    #[serde(rename = "Treatment")]
    pub treatment: String,
    #[serde(rename = "AccomodationType")]
    pub accommodation_type: String,
    #[serde(rename = "AccomodationLevel")]
    pub accommodation_level: AccommodationLevel,
    #[serde(rename = "Occupation")]
    pub occupation: i64,
    #[serde(rename = "PriceTot")]
    pub price_total: f64,
    #[serde(rename = "PriceNight")]
    pub price_night: f64,
    #[serde(rename = "IsOffer")]
    pub is_offer: bool,
    #[serde(rename = "OfferDiscountValue", default, skip_serializing_if = "Option::is_none")]
    pub offer_discount_value: Option<f64>,
    #[serde(rename = "OfferDiscountPercent", default, skip_serializing_if = "Option::is_none")]
    pub offer_discount_percent: Option<f64>,
    #[serde(rename = "OfferTitle", default, skip_serializing_if = "Option::is_none")]
    pub offer_title: Option<String>,
    #[serde(rename = "OfferDesc", default, skip_serializing_if = "Option::is_none")]
    pub offer_desc: Option<String>,
    #[serde(rename = "ESG_Rating", default, skip_serializing_if = "Option::is_none")]
    pub esg_rating: Option<String>,
    #[serde(rename = "ESG_Score", default, skip_serializing_if = "Option::is_none")]
    pub esg_score: Option<String>,
    #[serde(rename = "RoomsBARLeft", default, skip_serializing_if = "Option::is_none")]
    pub rooms_bar_left: Option<i64>,
    #[serde(rename = "DateSearch")]
    pub date_search: NaiveDateTime,
    #[serde(rename = "FullDateSearch")]
    pub full_date_search: NaiveDateTime,
    #[serde(rename = "PropertyId", default, skip_serializing_if = "Option::is_none")]
    pub property_id: Option<DocumentId>,
}

/// A full price-list snapshot, every rate offered for a search.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FullPriceEntry {
    #[serde(rename = "uniqueId")]
    pub unique_id: i64,
    #[serde(rename = "Type")]
    pub property_type: String,
    #[serde(rename = "Stars")]
    pub stars: i64,
    #[serde(rename = "Destination")]
    pub destination: String,
    #[serde(rename = "CheckIn")]
    pub check_in: NaiveDateTime,
    #[serde(rename = "CheckOut")]
    pub check_out: NaiveDateTime,
    #[serde(rename = "DemandPressure", default, skip_serializing_if = "Option::is_none")]
    pub demand_pressure: Option<String>,
    #[serde(rename = "SearchRank", default, skip_serializing_if = "Option::is_none")]
    pub search_rank: Option<i64>,
    #[serde(rename = "SearchPage", default, skip_serializing_if = "Option::is_none")]
    pub search_page: Option<i64>,
    #[serde(rename = "AccomodationType", default, skip_serializing_if = "Option::is_none")]
    pub accommodation_type: Option<String>,
    #[serde(rename = "CancellationPolicy", default, skip_serializing_if = "Option::is_none")]
    pub cancellation_policy: Option<String>,
    #[serde(rename = "Treatment", default, skip_serializing_if = "Option::is_none")]
    pub treatment: Option<String>,
    #[serde(rename = "AccomodationLevel", default, skip_serializing_if = "Option::is_none")]
    pub accommodation_level: Option<AccommodationLevel>,
    #[serde(rename = "OccupancyAdult", default, skip_serializing_if = "Option::is_none")]
    pub occupancy_adult: Option<u32>,
    #[serde(rename = "OccupancyKid", default, skip_serializing_if = "Option::is_none")]
    pub occupancy_kid: Option<u32>,
    #[serde(rename = "PriceTot", default, skip_serializing_if = "Option::is_none")]
    pub price_total: Option<f64>,
    #[serde(rename = "PriceNight", default, skip_serializing_if = "Option::is_none")]
    pub price_night: Option<f64>,
    #[serde(rename = "MinimumStay", default, skip_serializing_if = "Option::is_none")]
    pub minimum_stay: Option<i64>,
    #[serde(rename = "RoomLeft", default, skip_serializing_if = "Option::is_none")]
    pub rooms_left: Option<i64>,
    #[serde(rename = "IsOffer", default, skip_serializing_if = "Option::is_none")]
    pub is_offer: Option<bool>,
    #[serde(rename = "OfferDiscountValue", default, skip_serializing_if = "Option::is_none")]
    pub offer_discount_value: Option<f64>,
    #[serde(rename = "OfferDiscountPercent", default, skip_serializing_if = "Option::is_none")]
    pub offer_discount_percent: Option<f64>,
    #[serde(rename = "OfferTitle", default, skip_serializing_if = "Option::is_none")]
    pub offer_title: Option<String>,
    #[serde(rename = "OfferDesc", default, skip_serializing_if = "Option::is_none")]
    pub offer_desc: Option<String>,
    #[serde(rename = "MainType", default, skip_serializing_if = "Option::is_none")]
    pub main_type: Option<String>,
    #[serde(rename = "subType", default, skip_serializing_if = "Option::is_none")]
    pub sub_type: Option<String>,
    #[serde(rename = "ESG_Rating", default, skip_serializing_if = "Option::is_none")]
    pub esg_rating: Option<String>,
    #[serde(rename = "ESG_Score", default, skip_serializing_if = "Option::is_none")]
    pub esg_score: Option<String>,
    #[serde(rename = "DateSearch", default, skip_serializing_if = "Option::is_none")]
    pub date_search: Option<NaiveDateTime>,
    #[serde(rename = "PropertyId", default, skip_serializing_if = "Option::is_none")]
    pub property_id: Option<DocumentId>,
}
