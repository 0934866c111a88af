use sea_orm::entity::prelude::*;

/// Listing record.
///
/// Nested documents from the legacy store are kept as JSONB: `images` is a
/// list of public URLs, `selected_features` a map of feature category to
/// chosen values. The location sub-object is flattened into scalar columns
/// so filters and the geo query stay plain SQL; `lon`/`lat` carry the
/// geo point (WGS84 degrees) behind a composite index.
///
/// `user_id` is a loose reference to the owning account — listings survive
/// owner deletion, enrichment then yields `user: null`.
#[derive(Clone, Debug, PartialEq, DeriveEntityModel)]
#[sea_orm(table_name = "properties")]
pub struct Model {
    #[sea_orm(primary_key, auto_increment = false)]
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
    #[sea_orm(column_type = "JsonBinary")]
    pub images: Json,
    pub city: String,
    pub district: String,
    pub neighborhood: String,
    pub lon: f64,
    pub lat: f64,
    pub property_type: String,
    pub listing_type: String,
    pub sub_type: Option<String>,
    #[sea_orm(column_type = "JsonBinary")]
    pub selected_features: Json,
    pub user_id: Option<Uuid>,
    pub created_at: chrono::DateTime<chrono::Utc>,
    pub updated_at: chrono::DateTime<chrono::Utc>,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {}

impl ActiveModelBehavior for ActiveModel {}
