use axum::{
    Json,
    extract::{Multipart, Path, Query, RawQuery, State},
    http::StatusCode,
    response::IntoResponse,
};
use chrono::Datelike;
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use emlak_auth_types::identity::Identity;

use crate::domain::repository::ImageStorePort;
use crate::domain::types::{Location, Property, PropertyFilter, PropertyPatch, SelectedFeatures};
use crate::error::ApiError;
use crate::handlers::form::MultipartForm;
use crate::handlers::require_admin;
use crate::handlers::user::UserResponse;
use crate::state::AppState;
use crate::usecase::property::{
    CountPropertiesUseCase, CreatePropertyInput, CreatePropertyUseCase, DeletePropertyUseCase,
    GetPropertyUseCase, ListPropertiesUseCase, NearbyPropertiesUseCase, PieChartUseCase,
    PropertyWithOwner, QueryPropertiesUseCase, RecentPropertiesUseCase, SetPropertyOwnerUseCase,
    UpdatePropertyInput, UpdatePropertyUseCase, YearListingsUseCase,
};

// ── Response shape ───────────────────────────────────────────────────────────

/// Listing shaped for output. `user` is absent for ownerless listings and
/// `null` when the owner account no longer exists.
#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
pub struct PropertyResponse {
    pub id: String,
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
    pub user_id: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub user: Option<Option<UserResponse>>,
    #[serde(serialize_with = "emlak_core::serde::to_rfc3339_ms")]
    pub created_at: chrono::DateTime<chrono::Utc>,
    #[serde(serialize_with = "emlak_core::serde::to_rfc3339_ms")]
    pub updated_at: chrono::DateTime<chrono::Utc>,
}

impl From<Property> for PropertyResponse {
    fn from(p: Property) -> Self {
        Self {
            id: p.id.to_string(),
            title: p.title,
            description: p.description,
            price: p.price,
            gross: p.gross,
            net: p.net,
            number_of_room: p.number_of_room,
            building_age: p.building_age,
            floor: p.floor,
            number_of_floors: p.number_of_floors,
            heating: p.heating,
            number_of_bathrooms: p.number_of_bathrooms,
            kitchen: p.kitchen,
            balcony: p.balcony,
            lift: p.lift,
            parking: p.parking,
            furnished: p.furnished,
            availability: p.availability,
            dues: p.dues,
            eligible_for_loan: p.eligible_for_loan,
            title_deed_status: p.title_deed_status,
            images: p.images,
            location: p.location,
            property_type: p.property_type,
            listing_type: p.listing_type,
            sub_type: p.sub_type,
            selected_features: p.selected_features,
            user_id: p.user_id.map(|id| id.to_string()),
            user: None,
            created_at: p.created_at,
            updated_at: p.updated_at,
        }
    }
}

impl From<PropertyWithOwner> for PropertyResponse {
    fn from(enriched: PropertyWithOwner) -> Self {
        let owner = enriched.owner;
        let mut response = Self::from(enriched.property);
        response.user = owner.map(|o| o.map(UserResponse::from));
        response
    }
}

// ── POST /properties ─────────────────────────────────────────────────────────

pub async fn create_property(
    _identity: Identity,
    State(state): State<AppState>,
    mut multipart: Multipart,
) -> Result<impl IntoResponse, ApiError> {
    let form = MultipartForm::read(&mut multipart, &["images"]).await?;

    let location: Location = form
        .json("location")?
        .ok_or_else(|| ApiError::InvalidInput("missing field: location".to_owned()))?;
    let selected_features: SelectedFeatures = form.json("selectedFeatures")?.unwrap_or_default();
    let user_id = form
        .get("userId")
        .map(|v| {
            v.parse::<Uuid>()
                .map_err(|_| ApiError::InvalidInput("invalid userId".to_owned()))
        })
        .transpose()?;

    let uploads = form
        .files
        .iter()
        .map(|file| state.storage.upload_image(file, true));
    let images = futures::future::try_join_all(uploads).await?;

    let usecase = CreatePropertyUseCase {
        repo: state.property_repo(),
    };
    let property = usecase
        .execute(CreatePropertyInput {
            title: form.require("title")?.to_owned(),
            description: form.require("description")?.to_owned(),
            price: form.require_i64("price")?,
            gross: form.require_i32("gross")?,
            net: form.require_i32("net")?,
            number_of_room: form.require("numberOfRoom")?.to_owned(),
            building_age: form.require_i32("buildingAge")?,
            floor: form.require_i32("floor")?,
            number_of_floors: form.require_i32("numberOfFloors")?,
            heating: form.require("heating")?.to_owned(),
            number_of_bathrooms: form.require_i32("numberOfBathrooms")?,
            kitchen: form.require("kitchen")?.to_owned(),
            balcony: form.require_i32("balcony")?,
            lift: form.require("lift")?.to_owned(),
            parking: form.require("parking")?.to_owned(),
            furnished: form.require("furnished")?.to_owned(),
            availability: form.require("availability")?.to_owned(),
            dues: form.require_i64("dues")?,
            eligible_for_loan: form.require("eligibleForLoan")?.to_owned(),
            title_deed_status: form.require("titleDeedStatus")?.to_owned(),
            images,
            location,
            property_type: form.require("propertyType")?.to_owned(),
            listing_type: form.require("listingType")?.to_owned(),
            sub_type: form.get("subType").map(str::to_owned),
            selected_features,
            user_id,
        })
        .await?;

    Ok((StatusCode::CREATED, Json(PropertyResponse::from(property))))
}

// ── GET /properties ──────────────────────────────────────────────────────────

pub async fn list_properties(
    State(state): State<AppState>,
) -> Result<Json<Vec<PropertyResponse>>, ApiError> {
    let usecase = ListPropertiesUseCase {
        repo: state.property_repo(),
        users: state.user_repo(),
    };
    let listings = usecase.execute().await?;
    Ok(Json(
        listings.into_iter().map(PropertyResponse::from).collect(),
    ))
}

// ── GET /properties/query ────────────────────────────────────────────────────

#[derive(Deserialize, Default)]
#[serde(rename_all = "camelCase")]
pub struct PropertyQuery {
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

impl From<PropertyQuery> for PropertyFilter {
    fn from(q: PropertyQuery) -> Self {
        Self {
            city: q.city,
            district: q.district,
            neighborhood: q.neighborhood,
            property_type: q.property_type,
            listing_type: q.listing_type,
            sub_type: q.sub_type,
            number_of_room: q.number_of_room,
            heating: q.heating,
            kitchen: q.kitchen,
            lift: q.lift,
            parking: q.parking,
            furnished: q.furnished,
            availability: q.availability,
            eligible_for_loan: q.eligible_for_loan,
            title_deed_status: q.title_deed_status,
            price: q.price,
            gross: q.gross,
            net: q.net,
            building_age: q.building_age,
            floor: q.floor,
            number_of_floors: q.number_of_floors,
            number_of_bathrooms: q.number_of_bathrooms,
            balcony: q.balcony,
            dues: q.dues,
            min_price: q.min_price,
            max_price: q.max_price,
            min_net: q.min_net,
            max_net: q.max_net,
        }
    }
}

pub async fn query_properties(
    State(state): State<AppState>,
    RawQuery(raw_query): RawQuery,
) -> Result<Json<Vec<PropertyResponse>>, ApiError> {
    let query: PropertyQuery = raw_query
        .as_deref()
        .map(serde_qs::from_str)
        .transpose()
        .map_err(|_| ApiError::InvalidInput("invalid query string".to_owned()))?
        .unwrap_or_default();

    let usecase = QueryPropertiesUseCase {
        repo: state.property_repo(),
    };
    let listings = usecase.execute(query.into()).await?;
    Ok(Json(
        listings.into_iter().map(PropertyResponse::from).collect(),
    ))
}

// ── GET /properties/near ─────────────────────────────────────────────────────

#[derive(Deserialize)]
pub struct NearQuery {
    pub lon: f64,
    pub lat: f64,
    /// Radius in meters.
    pub distance: f64,
}

pub async fn near_properties(
    State(state): State<AppState>,
    Query(query): Query<NearQuery>,
) -> Result<Json<Vec<PropertyResponse>>, ApiError> {
    let usecase = NearbyPropertiesUseCase {
        repo: state.property_repo(),
    };
    let listings = usecase
        .execute(query.lon, query.lat, query.distance)
        .await?;
    Ok(Json(
        listings.into_iter().map(PropertyResponse::from).collect(),
    ))
}

// ── GET /properties/lastsix ──────────────────────────────────────────────────

pub async fn last_six_properties(
    State(state): State<AppState>,
) -> Result<Json<Vec<PropertyResponse>>, ApiError> {
    let usecase = RecentPropertiesUseCase {
        repo: state.property_repo(),
        users: state.user_repo(),
    };
    let listings = usecase.execute().await?;
    Ok(Json(
        listings.into_iter().map(PropertyResponse::from).collect(),
    ))
}

// ── GET /properties/count ────────────────────────────────────────────────────

#[derive(Serialize)]
pub struct CountResponse {
    pub total: u64,
}

pub async fn count_properties(
    State(state): State<AppState>,
) -> Result<Json<CountResponse>, ApiError> {
    let usecase = CountPropertiesUseCase {
        repo: state.property_repo(),
    };
    let total = usecase.execute().await?;
    Ok(Json(CountResponse { total }))
}

// ── GET /properties/yearlistings ─────────────────────────────────────────────

#[derive(Serialize)]
pub struct MonthCountResponse {
    pub month: String,
    pub count: i64,
}

pub async fn year_listings(
    State(state): State<AppState>,
) -> Result<Json<Vec<MonthCountResponse>>, ApiError> {
    let usecase = YearListingsUseCase {
        repo: state.property_repo(),
    };
    let series = usecase.execute(chrono::Utc::now().year()).await?;
    Ok(Json(
        series
            .into_iter()
            .map(|b| MonthCountResponse {
                month: b.month,
                count: b.total,
            })
            .collect(),
    ))
}

// ── GET /properties/piechart ─────────────────────────────────────────────────

#[derive(Serialize)]
pub struct PieSliceResponse {
    pub name: &'static str,
    pub value: f64,
    pub color: &'static str,
}

pub async fn pie_chart(
    State(state): State<AppState>,
) -> Result<Json<Vec<PieSliceResponse>>, ApiError> {
    let usecase = PieChartUseCase {
        repo: state.property_repo(),
    };
    let slices = usecase.execute().await?;
    Ok(Json(
        slices
            .into_iter()
            .map(|s| PieSliceResponse {
                name: s.name,
                value: s.value,
                color: s.color,
            })
            .collect(),
    ))
}

// ── GET /properties/{id} ─────────────────────────────────────────────────────

pub async fn get_property(
    State(state): State<AppState>,
    Path(property_id): Path<Uuid>,
) -> Result<Json<PropertyResponse>, ApiError> {
    let usecase = GetPropertyUseCase {
        repo: state.property_repo(),
        users: state.user_repo(),
    };
    let listing = usecase.execute(property_id).await?;
    Ok(Json(listing.into()))
}

// ── PUT /properties/{id} ─────────────────────────────────────────────────────

pub async fn update_property(
    _identity: Identity,
    State(state): State<AppState>,
    Path(property_id): Path<Uuid>,
    mut multipart: Multipart,
) -> Result<Json<PropertyResponse>, ApiError> {
    let form = MultipartForm::read(&mut multipart, &["newImages"]).await?;

    let kept_images: Option<Vec<String>> = form.json("existingImageUrls")?;
    let location: Option<Location> = form.json("location")?;
    let selected_features: Option<SelectedFeatures> = form.json("selectedFeatures")?;

    let uploads = form
        .files
        .iter()
        .map(|file| state.storage.upload_image(file, true));
    let new_images = futures::future::try_join_all(uploads).await?;

    let patch = PropertyPatch {
        title: form.get("title").map(str::to_owned),
        description: form.get("description").map(str::to_owned),
        price: form.parse_i64("price")?,
        gross: form.parse_i32("gross")?,
        net: form.parse_i32("net")?,
        number_of_room: form.get("numberOfRoom").map(str::to_owned),
        building_age: form.parse_i32("buildingAge")?,
        floor: form.parse_i32("floor")?,
        number_of_floors: form.parse_i32("numberOfFloors")?,
        heating: form.get("heating").map(str::to_owned),
        number_of_bathrooms: form.parse_i32("numberOfBathrooms")?,
        kitchen: form.get("kitchen").map(str::to_owned),
        balcony: form.parse_i32("balcony")?,
        lift: form.get("lift").map(str::to_owned),
        parking: form.get("parking").map(str::to_owned),
        furnished: form.get("furnished").map(str::to_owned),
        availability: form.get("availability").map(str::to_owned),
        dues: form.parse_i64("dues")?,
        eligible_for_loan: form.get("eligibleForLoan").map(str::to_owned),
        title_deed_status: form.get("titleDeedStatus").map(str::to_owned),
        images: None,
        location,
        property_type: form.get("propertyType").map(str::to_owned),
        listing_type: form.get("listingType").map(str::to_owned),
        sub_type: form.get("subType").map(str::to_owned),
        selected_features,
    };

    let usecase = UpdatePropertyUseCase {
        repo: state.property_repo(),
    };
    let property = usecase
        .execute(
            property_id,
            UpdatePropertyInput {
                patch,
                kept_images,
                new_images,
            },
        )
        .await?;
    Ok(Json(property.into()))
}

// ── PATCH /properties/{id} ───────────────────────────────────────────────────

#[derive(Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SetOwnerRequest {
    pub user_id: Uuid,
}

pub async fn set_property_owner(
    identity: Identity,
    State(state): State<AppState>,
    Path(property_id): Path<Uuid>,
    Json(body): Json<SetOwnerRequest>,
) -> Result<Json<PropertyResponse>, ApiError> {
    require_admin(&identity)?;
    let usecase = SetPropertyOwnerUseCase {
        repo: state.property_repo(),
    };
    let property = usecase.execute(property_id, body.user_id).await?;
    Ok(Json(property.into()))
}

// ── DELETE /properties/{id} ──────────────────────────────────────────────────

pub async fn delete_property(
    _identity: Identity,
    State(state): State<AppState>,
    Path(property_id): Path<Uuid>,
) -> Result<StatusCode, ApiError> {
    let usecase = DeletePropertyUseCase {
        repo: state.property_repo(),
    };
    usecase.execute(property_id).await?;
    Ok(StatusCode::NO_CONTENT)
}
