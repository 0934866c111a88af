use std::collections::HashMap;

use anyhow::Context as _;
use chrono::{NaiveDate, Utc};
use sea_orm::{
    ActiveModelTrait, ActiveValue::Set, ColumnTrait, Condition, ConnectionTrait,
    DatabaseConnection, EntityTrait, FromQueryResult, PaginatorTrait, QueryFilter, QueryOrder,
    QuerySelect, Statement,
};
use uuid::Uuid;

use emlak_api_schema::{client_intakes, feature_options, messages, properties, track_views, users};
use emlak_domain::role::Role;

use crate::domain::repository::{
    ClientIntakeRepository, FeatureOptionRepository, MessageRepository, PropertyRepository,
    TrackViewRepository, UserRepository,
};
use crate::domain::types::{
    ClientIntake, ClientIntakePatch, FeatureOption, GeoPoint, KindCounts, Location, Message,
    Property, PropertyFilter, PropertyPatch, TrackView, User, UserPatch,
};
use crate::error::ApiError;

// ── User repository ──────────────────────────────────────────────────────────

#[derive(Clone)]
pub struct DbUserRepository {
    pub db: DatabaseConnection,
}

impl UserRepository for DbUserRepository {
    async fn find_by_id(&self, id: Uuid) -> Result<Option<User>, ApiError> {
        let model = users::Entity::find_by_id(id)
            .one(&self.db)
            .await
            .context("find user by id")?;
        Ok(model.map(user_from_model))
    }

    async fn find_by_email(&self, email: &str) -> Result<Option<User>, ApiError> {
        let model = users::Entity::find()
            .filter(users::Column::Email.eq(email))
            .one(&self.db)
            .await
            .context("find user by email")?;
        Ok(model.map(user_from_model))
    }

    async fn list(&self) -> Result<Vec<User>, ApiError> {
        let models = users::Entity::find()
            .all(&self.db)
            .await
            .context("list users")?;
        Ok(models.into_iter().map(user_from_model).collect())
    }

    async fn list_by_ids(&self, ids: &[Uuid]) -> Result<Vec<User>, ApiError> {
        let models = users::Entity::find()
            .filter(users::Column::Id.is_in(ids.iter().copied()))
            .all(&self.db)
            .await
            .context("list users by ids")?;
        Ok(models.into_iter().map(user_from_model).collect())
    }

    async fn create(&self, user: &User) -> Result<(), ApiError> {
        users::ActiveModel {
            id: Set(user.id),
            name: Set(user.name.clone()),
            surname: Set(user.surname.clone()),
            email: Set(user.email.clone()),
            image: Set(user.image.clone()),
            phonenumber: Set(user.phonenumber),
            password: Set(user.password_hash.clone()),
            role: Set(user.role.as_i16()),
            created_at: Set(user.created_at),
            updated_at: Set(user.updated_at),
        }
        .insert(&self.db)
        .await
        .context("create user")?;
        Ok(())
    }

    async fn update_profile(&self, id: Uuid, patch: &UserPatch) -> Result<(), ApiError> {
        let mut am = users::ActiveModel {
            id: Set(id),
            ..Default::default()
        };
        if let Some(name) = &patch.name {
            am.name = Set(name.clone());
        }
        if let Some(surname) = &patch.surname {
            am.surname = Set(surname.clone());
        }
        if let Some(email) = &patch.email {
            am.email = Set(email.clone());
        }
        if let Some(phonenumber) = patch.phonenumber {
            am.phonenumber = Set(phonenumber);
        }
        am.updated_at = Set(Utc::now());
        am.update(&self.db).await.context("update user profile")?;
        Ok(())
    }

    async fn update_password(&self, id: Uuid, password_hash: &str) -> Result<(), ApiError> {
        users::ActiveModel {
            id: Set(id),
            password: Set(password_hash.to_owned()),
            updated_at: Set(Utc::now()),
            ..Default::default()
        }
        .update(&self.db)
        .await
        .context("update user password")?;
        Ok(())
    }

    async fn update_image(&self, id: Uuid, image_url: &str) -> Result<(), ApiError> {
        users::ActiveModel {
            id: Set(id),
            image: Set(image_url.to_owned()),
            updated_at: Set(Utc::now()),
            ..Default::default()
        }
        .update(&self.db)
        .await
        .context("update user image")?;
        Ok(())
    }

    async fn delete(&self, id: Uuid) -> Result<bool, ApiError> {
        let result = users::Entity::delete_many()
            .filter(users::Column::Id.eq(id))
            .exec(&self.db)
            .await
            .context("delete user")?;
        Ok(result.rows_affected > 0)
    }
}

fn user_from_model(model: users::Model) -> User {
    User {
        id: model.id,
        name: model.name,
        surname: model.surname,
        email: model.email,
        image: model.image,
        phonenumber: model.phonenumber,
        password_hash: model.password,
        role: Role::from_i16(model.role).unwrap_or(Role::Member),
        created_at: model.created_at,
        updated_at: model.updated_at,
    }
}

// ── Property repository ──────────────────────────────────────────────────────

#[derive(Clone)]
pub struct DbPropertyRepository {
    pub db: DatabaseConnection,
}

/// Translate the flat filter into an AND-combined condition.
fn filter_condition(filter: &PropertyFilter) -> Condition {
    let mut cond = Condition::all();
    if let Some(v) = &filter.city {
        cond = cond.add(properties::Column::City.eq(v.clone()));
    }
    if let Some(v) = &filter.district {
        cond = cond.add(properties::Column::District.eq(v.clone()));
    }
    if let Some(v) = &filter.neighborhood {
        cond = cond.add(properties::Column::Neighborhood.eq(v.clone()));
    }
    if let Some(v) = &filter.property_type {
        cond = cond.add(properties::Column::PropertyType.eq(v.clone()));
    }
    if let Some(v) = &filter.listing_type {
        cond = cond.add(properties::Column::ListingType.eq(v.clone()));
    }
    if let Some(v) = &filter.sub_type {
        cond = cond.add(properties::Column::SubType.eq(v.clone()));
    }
    if let Some(v) = &filter.number_of_room {
        cond = cond.add(properties::Column::NumberOfRoom.eq(v.clone()));
    }
    if let Some(v) = &filter.heating {
        cond = cond.add(properties::Column::Heating.eq(v.clone()));
    }
    if let Some(v) = &filter.kitchen {
        cond = cond.add(properties::Column::Kitchen.eq(v.clone()));
    }
    if let Some(v) = &filter.lift {
        cond = cond.add(properties::Column::Lift.eq(v.clone()));
    }
    if let Some(v) = &filter.parking {
        cond = cond.add(properties::Column::Parking.eq(v.clone()));
    }
    if let Some(v) = &filter.furnished {
        cond = cond.add(properties::Column::Furnished.eq(v.clone()));
    }
    if let Some(v) = &filter.availability {
        cond = cond.add(properties::Column::Availability.eq(v.clone()));
    }
    if let Some(v) = &filter.eligible_for_loan {
        cond = cond.add(properties::Column::EligibleForLoan.eq(v.clone()));
    }
    if let Some(v) = &filter.title_deed_status {
        cond = cond.add(properties::Column::TitleDeedStatus.eq(v.clone()));
    }
    if let Some(v) = filter.price {
        cond = cond.add(properties::Column::Price.eq(v));
    }
    if let Some(v) = filter.gross {
        cond = cond.add(properties::Column::Gross.eq(v));
    }
    if let Some(v) = filter.net {
        cond = cond.add(properties::Column::Net.eq(v));
    }
    if let Some(v) = filter.building_age {
        cond = cond.add(properties::Column::BuildingAge.eq(v));
    }
    if let Some(v) = filter.floor {
        cond = cond.add(properties::Column::Floor.eq(v));
    }
    if let Some(v) = filter.number_of_floors {
        cond = cond.add(properties::Column::NumberOfFloors.eq(v));
    }
    if let Some(v) = filter.number_of_bathrooms {
        cond = cond.add(properties::Column::NumberOfBathrooms.eq(v));
    }
    if let Some(v) = filter.balcony {
        cond = cond.add(properties::Column::Balcony.eq(v));
    }
    if let Some(v) = filter.dues {
        cond = cond.add(properties::Column::Dues.eq(v));
    }
    if let Some(v) = filter.min_price {
        cond = cond.add(properties::Column::Price.gte(v));
    }
    if let Some(v) = filter.max_price {
        cond = cond.add(properties::Column::Price.lte(v));
    }
    if let Some(v) = filter.min_net {
        cond = cond.add(properties::Column::Net.gte(v));
    }
    if let Some(v) = filter.max_net {
        cond = cond.add(properties::Column::Net.lte(v));
    }
    cond
}

impl PropertyRepository for DbPropertyRepository {
    async fn create(&self, property: &Property) -> Result<(), ApiError> {
        properties::ActiveModel {
            id: Set(property.id),
            title: Set(property.title.clone()),
            description: Set(property.description.clone()),
            price: Set(property.price),
            gross: Set(property.gross),
            net: Set(property.net),
            number_of_room: Set(property.number_of_room.clone()),
            building_age: Set(property.building_age),
            floor: Set(property.floor),
            number_of_floors: Set(property.number_of_floors),
            heating: Set(property.heating.clone()),
            number_of_bathrooms: Set(property.number_of_bathrooms),
            kitchen: Set(property.kitchen.clone()),
            balcony: Set(property.balcony),
            lift: Set(property.lift.clone()),
            parking: Set(property.parking.clone()),
            furnished: Set(property.furnished.clone()),
            availability: Set(property.availability.clone()),
            dues: Set(property.dues),
            eligible_for_loan: Set(property.eligible_for_loan.clone()),
            title_deed_status: Set(property.title_deed_status.clone()),
            images: Set(serde_json::to_value(&property.images).context("serialize images")?),
            city: Set(property.location.city.clone()),
            district: Set(property.location.district.clone()),
            neighborhood: Set(property.location.neighborhood.clone()),
            lon: Set(property.location.geo.lon()),
            lat: Set(property.location.geo.lat()),
            property_type: Set(property.property_type.clone()),
            listing_type: Set(property.listing_type.clone()),
            sub_type: Set(property.sub_type.clone()),
            selected_features: Set(serde_json::to_value(&property.selected_features)
                .context("serialize selected features")?),
            user_id: Set(property.user_id),
            created_at: Set(property.created_at),
            updated_at: Set(property.updated_at),
        }
        .insert(&self.db)
        .await
        .context("create property")?;
        Ok(())
    }

    async fn find_by_id(&self, id: Uuid) -> Result<Option<Property>, ApiError> {
        let model = properties::Entity::find_by_id(id)
            .one(&self.db)
            .await
            .context("find property by id")?;
        Ok(model.map(property_from_model))
    }

    async fn list(&self, filter: &PropertyFilter) -> Result<Vec<Property>, ApiError> {
        let models = properties::Entity::find()
            .filter(filter_condition(filter))
            .all(&self.db)
            .await
            .context("list properties")?;
        Ok(models.into_iter().map(property_from_model).collect())
    }

    async fn list_recent(&self, limit: u64) -> Result<Vec<Property>, ApiError> {
        let models = properties::Entity::find()
            .order_by_desc(properties::Column::CreatedAt)
            .limit(limit)
            .all(&self.db)
            .await
            .context("list recent properties")?;
        Ok(models.into_iter().map(property_from_model).collect())
    }

    async fn list_near(
        &self,
        lon: f64,
        lat: f64,
        distance: f64,
    ) -> Result<Vec<Property>, ApiError> {
        // Great-circle (haversine) distance in meters. The latitude band in
        // the inner WHERE narrows candidates through the (lat, lon) index;
        // the exact distance filter and ordering run on the survivors.
        let sql = r#"
            SELECT id FROM (
                SELECT id,
                    2 * 6371000 * asin(sqrt(
                        pow(sin(radians($2 - lat) / 2), 2)
                        + cos(radians($2)) * cos(radians(lat))
                        * pow(sin(radians($1 - lon) / 2), 2)
                    )) AS distance
                FROM properties
                WHERE lat BETWEEN $2 - degrees($3 / 6371000)
                          AND $2 + degrees($3 / 6371000)
            ) AS candidates
            WHERE distance <= $3
            ORDER BY distance
        "#;

        #[derive(FromQueryResult)]
        struct NearRow {
            id: Uuid,
        }

        let rows = NearRow::find_by_statement(Statement::from_sql_and_values(
            self.db.get_database_backend(),
            sql,
            [lon.into(), lat.into(), distance.into()],
        ))
        .all(&self.db)
        .await
        .context("list properties near point")?;

        let ids: Vec<Uuid> = rows.into_iter().map(|r| r.id).collect();
        if ids.is_empty() {
            return Ok(vec![]);
        }

        let models = properties::Entity::find()
            .filter(properties::Column::Id.is_in(ids.iter().copied()))
            .all(&self.db)
            .await
            .context("fetch nearby properties")?;

        // Restore nearest-first order from the distance query.
        let order: HashMap<Uuid, usize> =
            ids.iter().enumerate().map(|(i, id)| (*id, i)).collect();
        let mut list: Vec<Property> = models.into_iter().map(property_from_model).collect();
        list.sort_by_key(|p| order.get(&p.id).copied().unwrap_or(usize::MAX));
        Ok(list)
    }

    async fn count(&self) -> Result<u64, ApiError> {
        let total = properties::Entity::find()
            .count(&self.db)
            .await
            .context("count properties")?;
        Ok(total)
    }

    async fn count_by_kind(&self) -> Result<KindCounts, ApiError> {
        let sql = r#"
            SELECT COUNT(*)::bigint AS total,
                COUNT(*) FILTER (WHERE lower(sub_type) = 'daire')::bigint AS daire,
                COUNT(*) FILTER (WHERE lower(sub_type) = 'villa')::bigint AS villa,
                COUNT(*) FILTER (WHERE lower(sub_type) = 'dükkan')::bigint AS dukkan,
                COUNT(*) FILTER (WHERE lower(property_type) = 'arsa')::bigint AS arsa
            FROM properties
        "#;

        #[derive(FromQueryResult)]
        struct KindRow {
            total: i64,
            daire: i64,
            villa: i64,
            dukkan: i64,
            arsa: i64,
        }

        let row = KindRow::find_by_statement(Statement::from_string(
            self.db.get_database_backend(),
            sql,
        ))
        .one(&self.db)
        .await
        .context("count properties by kind")?
        .context("kind counts aggregation returned no row")?;

        Ok(KindCounts {
            total: row.total,
            daire: row.daire,
            villa: row.villa,
            dukkan: row.dukkan,
            arsa: row.arsa,
        })
    }

    async fn monthly_created(&self, year: i32) -> Result<Vec<(String, i64)>, ApiError> {
        let start = NaiveDate::from_ymd_opt(year, 1, 1)
            .context("invalid year")?
            .and_hms_opt(0, 0, 0)
            .context("invalid year start")?
            .and_utc();
        let end = NaiveDate::from_ymd_opt(year + 1, 1, 1)
            .context("invalid year")?
            .and_hms_opt(0, 0, 0)
            .context("invalid year end")?
            .and_utc();

        let sql = r#"
            SELECT to_char(created_at, 'YYYY-MM') AS month, COUNT(*)::bigint AS total
            FROM properties
            WHERE created_at >= $1 AND created_at < $2
            GROUP BY 1
            ORDER BY 1
        "#;

        let rows = MonthRow::find_by_statement(Statement::from_sql_and_values(
            self.db.get_database_backend(),
            sql,
            [start.into(), end.into()],
        ))
        .all(&self.db)
        .await
        .context("aggregate monthly listings")?;

        Ok(rows.into_iter().map(|r| (r.month, r.total)).collect())
    }

    async fn update(&self, id: Uuid, patch: &PropertyPatch) -> Result<(), ApiError> {
        let mut am = properties::ActiveModel {
            id: Set(id),
            ..Default::default()
        };
        if let Some(v) = &patch.title {
            am.title = Set(v.clone());
        }
        if let Some(v) = &patch.description {
            am.description = Set(v.clone());
        }
        if let Some(v) = patch.price {
            am.price = Set(v);
        }
        if let Some(v) = patch.gross {
            am.gross = Set(v);
        }
        if let Some(v) = patch.net {
            am.net = Set(v);
        }
        if let Some(v) = &patch.number_of_room {
            am.number_of_room = Set(v.clone());
        }
        if let Some(v) = patch.building_age {
            am.building_age = Set(v);
        }
        if let Some(v) = patch.floor {
            am.floor = Set(v);
        }
        if let Some(v) = patch.number_of_floors {
            am.number_of_floors = Set(v);
        }
        if let Some(v) = &patch.heating {
            am.heating = Set(v.clone());
        }
        if let Some(v) = patch.number_of_bathrooms {
            am.number_of_bathrooms = Set(v);
        }
        if let Some(v) = &patch.kitchen {
            am.kitchen = Set(v.clone());
        }
        if let Some(v) = patch.balcony {
            am.balcony = Set(v);
        }
        if let Some(v) = &patch.lift {
            am.lift = Set(v.clone());
        }
        if let Some(v) = &patch.parking {
            am.parking = Set(v.clone());
        }
        if let Some(v) = &patch.furnished {
            am.furnished = Set(v.clone());
        }
        if let Some(v) = &patch.availability {
            am.availability = Set(v.clone());
        }
        if let Some(v) = patch.dues {
            am.dues = Set(v);
        }
        if let Some(v) = &patch.eligible_for_loan {
            am.eligible_for_loan = Set(v.clone());
        }
        if let Some(v) = &patch.title_deed_status {
            am.title_deed_status = Set(v.clone());
        }
        if let Some(v) = &patch.images {
            am.images = Set(serde_json::to_value(v).context("serialize images")?);
        }
        if let Some(location) = &patch.location {
            am.city = Set(location.city.clone());
            am.district = Set(location.district.clone());
            am.neighborhood = Set(location.neighborhood.clone());
            am.lon = Set(location.geo.lon());
            am.lat = Set(location.geo.lat());
        }
        if let Some(v) = &patch.property_type {
            am.property_type = Set(v.clone());
        }
        if let Some(v) = &patch.listing_type {
            am.listing_type = Set(v.clone());
        }
        if let Some(v) = &patch.sub_type {
            am.sub_type = Set(Some(v.clone()));
        }
        if let Some(v) = &patch.selected_features {
            am.selected_features =
                Set(serde_json::to_value(v).context("serialize selected features")?);
        }
        am.updated_at = Set(Utc::now());
        am.update(&self.db).await.context("update property")?;
        Ok(())
    }

    async fn set_owner(&self, id: Uuid, user_id: Uuid) -> Result<(), ApiError> {
        properties::ActiveModel {
            id: Set(id),
            user_id: Set(Some(user_id)),
            updated_at: Set(Utc::now()),
            ..Default::default()
        }
        .update(&self.db)
        .await
        .context("set property owner")?;
        Ok(())
    }

    async fn delete(&self, id: Uuid) -> Result<bool, ApiError> {
        let result = properties::Entity::delete_many()
            .filter(properties::Column::Id.eq(id))
            .exec(&self.db)
            .await
            .context("delete property")?;
        Ok(result.rows_affected > 0)
    }
}

#[derive(FromQueryResult)]
struct MonthRow {
    month: String,
    total: i64,
}

fn property_from_model(model: properties::Model) -> Property {
    Property {
        id: model.id,
        title: model.title,
        description: model.description,
        price: model.price,
        gross: model.gross,
        net: model.net,
        number_of_room: model.number_of_room,
        building_age: model.building_age,
        floor: model.floor,
        number_of_floors: model.number_of_floors,
        heating: model.heating,
        number_of_bathrooms: model.number_of_bathrooms,
        kitchen: model.kitchen,
        balcony: model.balcony,
        lift: model.lift,
        parking: model.parking,
        furnished: model.furnished,
        availability: model.availability,
        dues: model.dues,
        eligible_for_loan: model.eligible_for_loan,
        title_deed_status: model.title_deed_status,
        images: serde_json::from_value(model.images).unwrap_or_default(),
        location: Location {
            city: model.city,
            district: model.district,
            neighborhood: model.neighborhood,
            geo: GeoPoint::new(model.lon, model.lat),
        },
        property_type: model.property_type,
        listing_type: model.listing_type,
        sub_type: model.sub_type,
        selected_features: serde_json::from_value(model.selected_features).unwrap_or_default(),
        user_id: model.user_id,
        created_at: model.created_at,
        updated_at: model.updated_at,
    }
}

// ── FeatureOption repository ─────────────────────────────────────────────────

#[derive(Clone)]
pub struct DbFeatureOptionRepository {
    pub db: DatabaseConnection,
}

impl FeatureOptionRepository for DbFeatureOptionRepository {
    async fn create(&self, option: &FeatureOption) -> Result<(), ApiError> {
        feature_options::ActiveModel {
            id: Set(option.id),
            category: Set(option.category.clone()),
            value: Set(option.value.clone()),
            created_at: Set(option.created_at),
            updated_at: Set(option.updated_at),
        }
        .insert(&self.db)
        .await
        .context("create feature option")?;
        Ok(())
    }

    async fn list(&self) -> Result<Vec<FeatureOption>, ApiError> {
        let models = feature_options::Entity::find()
            .order_by_asc(feature_options::Column::CreatedAt)
            .all(&self.db)
            .await
            .context("list feature options")?;
        Ok(models.into_iter().map(feature_option_from_model).collect())
    }

    async fn find_by_id(&self, id: Uuid) -> Result<Option<FeatureOption>, ApiError> {
        let model = feature_options::Entity::find_by_id(id)
            .one(&self.db)
            .await
            .context("find feature option by id")?;
        Ok(model.map(feature_option_from_model))
    }

    async fn find_by_pair(
        &self,
        category: &str,
        value: &str,
    ) -> Result<Option<FeatureOption>, ApiError> {
        let model = feature_options::Entity::find()
            .filter(feature_options::Column::Category.eq(category))
            .filter(feature_options::Column::Value.eq(value))
            .one(&self.db)
            .await
            .context("find feature option by pair")?;
        Ok(model.map(feature_option_from_model))
    }

    async fn update(
        &self,
        id: Uuid,
        category: Option<&str>,
        value: Option<&str>,
    ) -> Result<(), ApiError> {
        let mut am = feature_options::ActiveModel {
            id: Set(id),
            ..Default::default()
        };
        if let Some(category) = category {
            am.category = Set(category.to_owned());
        }
        if let Some(value) = value {
            am.value = Set(value.to_owned());
        }
        am.updated_at = Set(Utc::now());
        am.update(&self.db).await.context("update feature option")?;
        Ok(())
    }

    async fn delete(&self, id: Uuid) -> Result<bool, ApiError> {
        let result = feature_options::Entity::delete_many()
            .filter(feature_options::Column::Id.eq(id))
            .exec(&self.db)
            .await
            .context("delete feature option")?;
        Ok(result.rows_affected > 0)
    }
}

fn feature_option_from_model(model: feature_options::Model) -> FeatureOption {
    FeatureOption {
        id: model.id,
        category: model.category,
        value: model.value,
        created_at: model.created_at,
        updated_at: model.updated_at,
    }
}

// ── Message repository ───────────────────────────────────────────────────────

#[derive(Clone)]
pub struct DbMessageRepository {
    pub db: DatabaseConnection,
}

impl MessageRepository for DbMessageRepository {
    async fn create(&self, message: &Message) -> Result<(), ApiError> {
        messages::ActiveModel {
            id: Set(message.id),
            name: Set(message.name.clone()),
            surname: Set(message.surname.clone()),
            email: Set(message.email.clone()),
            phone: Set(message.phone.clone()),
            message: Set(message.message.clone()),
            isread: Set(message.isread),
            created_at: Set(message.created_at),
        }
        .insert(&self.db)
        .await
        .context("create message")?;
        Ok(())
    }

    async fn list(&self) -> Result<Vec<Message>, ApiError> {
        let models = messages::Entity::find()
            .order_by_desc(messages::Column::CreatedAt)
            .all(&self.db)
            .await
            .context("list messages")?;
        Ok(models.into_iter().map(message_from_model).collect())
    }

    async fn find_by_id(&self, id: Uuid) -> Result<Option<Message>, ApiError> {
        let model = messages::Entity::find_by_id(id)
            .one(&self.db)
            .await
            .context("find message by id")?;
        Ok(model.map(message_from_model))
    }

    async fn mark_read(&self, id: Uuid) -> Result<(), ApiError> {
        messages::ActiveModel {
            id: Set(id),
            isread: Set(true),
            ..Default::default()
        }
        .update(&self.db)
        .await
        .context("mark message read")?;
        Ok(())
    }

    async fn delete(&self, id: Uuid) -> Result<bool, ApiError> {
        let result = messages::Entity::delete_many()
            .filter(messages::Column::Id.eq(id))
            .exec(&self.db)
            .await
            .context("delete message")?;
        Ok(result.rows_affected > 0)
    }
}

fn message_from_model(model: messages::Model) -> Message {
    Message {
        id: model.id,
        name: model.name,
        surname: model.surname,
        email: model.email,
        phone: model.phone,
        message: model.message,
        isread: model.isread,
        created_at: model.created_at,
    }
}

// ── ClientIntake repository ──────────────────────────────────────────────────

#[derive(Clone)]
pub struct DbClientIntakeRepository {
    pub db: DatabaseConnection,
}

impl ClientIntakeRepository for DbClientIntakeRepository {
    async fn create(&self, intake: &ClientIntake) -> Result<(), ApiError> {
        client_intakes::ActiveModel {
            id: Set(intake.id),
            name: Set(intake.name.clone()),
            phone: Set(intake.phone.clone()),
            description: Set(intake.description.clone()),
            created_at: Set(intake.created_at),
        }
        .insert(&self.db)
        .await
        .context("create client intake")?;
        Ok(())
    }

    async fn list(&self) -> Result<Vec<ClientIntake>, ApiError> {
        let models = client_intakes::Entity::find()
            .order_by_desc(client_intakes::Column::CreatedAt)
            .all(&self.db)
            .await
            .context("list client intakes")?;
        Ok(models.into_iter().map(client_intake_from_model).collect())
    }

    async fn find_by_id(&self, id: Uuid) -> Result<Option<ClientIntake>, ApiError> {
        let model = client_intakes::Entity::find_by_id(id)
            .one(&self.db)
            .await
            .context("find client intake by id")?;
        Ok(model.map(client_intake_from_model))
    }

    async fn update(&self, id: Uuid, patch: &ClientIntakePatch) -> Result<(), ApiError> {
        let mut am = client_intakes::ActiveModel {
            id: Set(id),
            ..Default::default()
        };
        if let Some(name) = &patch.name {
            am.name = Set(name.clone());
        }
        if let Some(phone) = &patch.phone {
            am.phone = Set(phone.clone());
        }
        if let Some(description) = &patch.description {
            am.description = Set(description.clone());
        }
        am.update(&self.db).await.context("update client intake")?;
        Ok(())
    }

    async fn delete(&self, id: Uuid) -> Result<bool, ApiError> {
        let result = client_intakes::Entity::delete_many()
            .filter(client_intakes::Column::Id.eq(id))
            .exec(&self.db)
            .await
            .context("delete client intake")?;
        Ok(result.rows_affected > 0)
    }
}

fn client_intake_from_model(model: client_intakes::Model) -> ClientIntake {
    ClientIntake {
        id: model.id,
        name: model.name,
        phone: model.phone,
        description: model.description,
        created_at: model.created_at,
    }
}

// ── TrackView repository ─────────────────────────────────────────────────────

#[derive(Clone)]
pub struct DbTrackViewRepository {
    pub db: DatabaseConnection,
}

impl TrackViewRepository for DbTrackViewRepository {
    async fn increment(&self, date: NaiveDate) -> Result<TrackView, ApiError> {
        use sea_orm::sea_query::{Expr, OnConflict};

        // Single atomic upsert — the unique index on `date` guarantees one
        // row per day even under concurrent calls.
        track_views::Entity::insert(track_views::ActiveModel {
            id: Set(Uuid::now_v7()),
            date: Set(date),
            views: Set(1),
        })
        .on_conflict(
            OnConflict::column(track_views::Column::Date)
                .value(
                    track_views::Column::Views,
                    Expr::col((track_views::Entity, track_views::Column::Views)).add(1),
                )
                .to_owned(),
        )
        .exec_without_returning(&self.db)
        .await
        .context("increment daily views")?;

        let model = track_views::Entity::find()
            .filter(track_views::Column::Date.eq(date))
            .one(&self.db)
            .await
            .context("fetch daily views")?
            .context("daily view row missing after increment")?;

        Ok(track_view_from_model(model))
    }

    async fn monthly_views(&self, year: i32) -> Result<Vec<(String, i64)>, ApiError> {
        let start = NaiveDate::from_ymd_opt(year, 1, 1).context("invalid year")?;
        let end = NaiveDate::from_ymd_opt(year + 1, 1, 1).context("invalid year")?;

        let sql = r#"
            SELECT to_char(date, 'YYYY-MM') AS month, SUM(views)::bigint AS total
            FROM track_views
            WHERE date >= $1 AND date < $2
            GROUP BY 1
            ORDER BY 1
        "#;

        let rows = MonthRow::find_by_statement(Statement::from_sql_and_values(
            self.db.get_database_backend(),
            sql,
            [start.into(), end.into()],
        ))
        .all(&self.db)
        .await
        .context("aggregate monthly views")?;

        Ok(rows.into_iter().map(|r| (r.month, r.total)).collect())
    }

    async fn month_total(&self, year: i32, month: u32) -> Result<i64, ApiError> {
        let start = NaiveDate::from_ymd_opt(year, month, 1).context("invalid month")?;
        let end = if month == 12 {
            NaiveDate::from_ymd_opt(year + 1, 1, 1).context("invalid month")?
        } else {
            NaiveDate::from_ymd_opt(year, month + 1, 1).context("invalid month")?
        };

        let sql = r#"
            SELECT COALESCE(SUM(views), 0)::bigint AS total
            FROM track_views
            WHERE date >= $1 AND date < $2
        "#;

        #[derive(FromQueryResult)]
        struct TotalRow {
            total: i64,
        }

        let row = TotalRow::find_by_statement(Statement::from_sql_and_values(
            self.db.get_database_backend(),
            sql,
            [start.into(), end.into()],
        ))
        .one(&self.db)
        .await
        .context("aggregate month views")?
        .context("month views aggregation returned no row")?;

        Ok(row.total)
    }
}

fn track_view_from_model(model: track_views::Model) -> TrackView {
    TrackView {
        id: model.id,
        date: model.date,
        views: model.views,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use sea_orm::{DatabaseBackend, QueryTrait};

    fn build_sql(filter: &PropertyFilter) -> String {
        properties::Entity::find()
            .filter(filter_condition(filter))
            .build(DatabaseBackend::Postgres)
            .to_string()
    }

    #[test]
    fn empty_filter_adds_no_constraints() {
        let sql = build_sql(&PropertyFilter::default());
        assert!(!sql.contains("WHERE"), "unexpected WHERE in: {sql}");
    }

    #[test]
    fn location_filters_constrain_location_columns() {
        let filter = PropertyFilter {
            city: Some("İstanbul".into()),
            district: Some("Kadıköy".into()),
            ..Default::default()
        };
        let sql = build_sql(&filter);
        assert!(sql.contains(r#""city" = 'İstanbul'"#), "{sql}");
        assert!(sql.contains(r#""district" = 'Kadıköy'"#), "{sql}");
        assert!(sql.contains(" AND "), "{sql}");
    }

    #[test]
    fn range_filters_become_inclusive_bounds() {
        let filter = PropertyFilter {
            min_price: Some(1_000_000),
            max_price: Some(5_000_000),
            min_net: Some(80),
            max_net: Some(200),
            ..Default::default()
        };
        let sql = build_sql(&filter);
        assert!(sql.contains(r#""price" >= 1000000"#), "{sql}");
        assert!(sql.contains(r#""price" <= 5000000"#), "{sql}");
        assert!(sql.contains(r#""net" >= 80"#), "{sql}");
        assert!(sql.contains(r#""net" <= 200"#), "{sql}");
    }

    #[test]
    fn numeric_attributes_filter_by_equality() {
        let filter = PropertyFilter {
            building_age: Some(5),
            number_of_bathrooms: Some(2),
            ..Default::default()
        };
        let sql = build_sql(&filter);
        assert!(sql.contains(r#""building_age" = 5"#), "{sql}");
        assert!(sql.contains(r#""number_of_bathrooms" = 2"#), "{sql}");
    }
}
