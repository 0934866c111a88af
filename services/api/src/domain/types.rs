//! Domain types shared by use-cases, repositories, and handlers.

use std::collections::BTreeMap;

use bytes::Bytes;
use chrono::{DateTime, NaiveDate, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use emlak_domain::role::Role;

// ── User ─────────────────────────────────────────────────────────────────────

/// Staff account. `password_hash` never leaves the domain layer — response
/// shaping strips it.
#[derive(Debug, Clone)]
pub struct User {
    pub id: Uuid,
    pub name: String,
    pub surname: String,
    pub email: String,
    pub image: String,
    pub phonenumber: i64,
    pub password_hash: String,
    pub role: Role,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

/// Partial profile update; `None` fields are left untouched.
#[derive(Debug, Clone, Default)]
pub struct UserPatch {
    pub name: Option<String>,
    pub surname: Option<String>,
    pub email: Option<String>,
    pub phonenumber: Option<i64>,
}

impl UserPatch {
    pub fn is_empty(&self) -> bool {
        self.name.is_none()
            && self.surname.is_none()
            && self.email.is_none()
            && self.phonenumber.is_none()
    }
}

// ── Property ─────────────────────────────────────────────────────────────────

/// GeoJSON-style point carried inside the location sub-object.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct GeoPoint {
    #[serde(rename = "type", default = "default_point_type")]
    pub kind: String,
    /// `[lon, lat]` in WGS84 degrees.
    pub coordinates: [f64; 2],
}

fn default_point_type() -> String {
    "Point".to_owned()
}

impl GeoPoint {
    pub fn new(lon: f64, lat: f64) -> Self {
        Self {
            kind: default_point_type(),
            coordinates: [lon, lat],
        }
    }

    pub fn lon(&self) -> f64 {
        self.coordinates[0]
    }

    pub fn lat(&self) -> f64 {
        self.coordinates[1]
    }
}

/// Listing location exactly as submitted and served on the wire.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Location {
    pub city: String,
    pub district: String,
    pub neighborhood: String,
    pub geo: GeoPoint,
}

/// Chosen feature values keyed by taxonomy category.
pub type SelectedFeatures = BTreeMap<String, Vec<String>>;

/// Listing record.
#[derive(Debug, Clone)]
pub struct Property {
    pub id: Uuid,
    pub title: String,
    pub description: String,
    pub price: i64,
    pub gross: i32,
    pub net: i32,
    pub number_of_room: String,
    pub building_age: i32,
    pub floor: i32,
    pub number_of_floors: i32,
    pub heating: String,
    pub number_of_bathrooms: i32,
    pub kitchen: String,
    pub balcony: i32,
    pub lift: String,
    pub parking: String,
    pub furnished: String,
    pub availability: String,
    pub dues: i64,
    pub eligible_for_loan: String,
    pub title_deed_status: String,
    pub images: Vec<String>,
    pub location: Location,
    pub property_type: String,
    pub listing_type: String,
    pub sub_type: Option<String>,
    pub selected_features: SelectedFeatures,
    pub user_id: Option<Uuid>,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

/// Flat AND-combined listing filters. `None` fields do not constrain.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct PropertyFilter {
    pub city: Option<String>,
    pub district: Option<String>,
    pub neighborhood: Option<String>,
    pub property_type: Option<String>,
    pub listing_type: Option<String>,
    pub sub_type: Option<String>,
    pub number_of_room: Option<String>,
    pub heating: Option<String>,
    pub kitchen: Option<String>,
    pub lift: Option<String>,
    pub parking: Option<String>,
    pub furnished: Option<String>,
    pub availability: Option<String>,
    pub eligible_for_loan: Option<String>,
    pub title_deed_status: Option<String>,
    pub price: Option<i64>,
    pub gross: Option<i32>,
    pub net: Option<i32>,
    pub building_age: Option<i32>,
    pub floor: Option<i32>,
    pub number_of_floors: Option<i32>,
    pub number_of_bathrooms: Option<i32>,
    pub balcony: Option<i32>,
    pub dues: Option<i64>,
    pub min_price: Option<i64>,
    pub max_price: Option<i64>,
    pub min_net: Option<i32>,
    pub max_net: Option<i32>,
}

/// Partial listing update; `None` fields are left untouched.
#[derive(Debug, Clone, Default)]
pub struct PropertyPatch {
    pub title: Option<String>,
    pub description: Option<String>,
    pub price: Option<i64>,
    pub gross: Option<i32>,
    pub net: Option<i32>,
    pub number_of_room: Option<String>,
    pub building_age: Option<i32>,
    pub floor: Option<i32>,
    pub number_of_floors: Option<i32>,
    pub heating: Option<String>,
    pub number_of_bathrooms: Option<i32>,
    pub kitchen: Option<String>,
    pub balcony: Option<i32>,
    pub lift: Option<String>,
    pub parking: Option<String>,
    pub furnished: Option<String>,
    pub availability: Option<String>,
    pub dues: Option<i64>,
    pub eligible_for_loan: Option<String>,
    pub title_deed_status: Option<String>,
    pub images: Option<Vec<String>>,
    pub location: Option<Location>,
    pub property_type: Option<String>,
    pub listing_type: Option<String>,
    pub sub_type: Option<String>,
    pub selected_features: Option<SelectedFeatures>,
}

/// Raw counts backing the listing-type share chart.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct KindCounts {
    pub total: i64,
    pub daire: i64,
    pub villa: i64,
    pub dukkan: i64,
    pub arsa: i64,
}

// ── FeatureOption ────────────────────────────────────────────────────────────

/// One entry of the listing feature taxonomy.
#[derive(Debug, Clone)]
pub struct FeatureOption {
    pub id: Uuid,
    pub category: String,
    pub value: String,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

// ── Message ──────────────────────────────────────────────────────────────────

/// Contact-form message.
#[derive(Debug, Clone)]
pub struct Message {
    pub id: Uuid,
    pub name: String,
    pub surname: String,
    pub email: String,
    pub phone: String,
    pub message: String,
    pub isread: bool,
    pub created_at: DateTime<Utc>,
}

// ── ClientIntake ─────────────────────────────────────────────────────────────

/// Prospective-client lead.
#[derive(Debug, Clone)]
pub struct ClientIntake {
    pub id: Uuid,
    pub name: String,
    pub phone: String,
    pub description: String,
    pub created_at: DateTime<Utc>,
}

/// Partial lead update; `None` fields are left untouched.
#[derive(Debug, Clone, Default)]
pub struct ClientIntakePatch {
    pub name: Option<String>,
    pub phone: Option<String>,
    pub description: Option<String>,
}

impl ClientIntakePatch {
    pub fn is_empty(&self) -> bool {
        self.name.is_none() && self.phone.is_none() && self.description.is_none()
    }
}

// ── TrackView ────────────────────────────────────────────────────────────────

/// Daily page-view counter.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TrackView {
    pub id: Uuid,
    pub date: NaiveDate,
    pub views: i64,
}

// ── Uploads ──────────────────────────────────────────────────────────────────

/// An image file lifted out of a multipart request.
#[derive(Debug, Clone)]
pub struct ImageUpload {
    pub filename: String,
    pub content_type: String,
    pub bytes: Bytes,
}
