use std::collections::BTreeMap;
use std::sync::Mutex;

use chrono::{NaiveDate, Utc};
use uuid::Uuid;

use emlak_api::domain::repository::{
    FeatureOptionRepository, MessageRepository, PropertyRepository, TrackViewRepository,
    UserRepository,
};
use emlak_api::domain::types::{
    FeatureOption, GeoPoint, KindCounts, Location, Message, Property, PropertyFilter,
    PropertyPatch, TrackView, User, UserPatch,
};
use emlak_api::error::ApiError;
use emlak_domain::role::Role;

pub const TEST_JWT_SECRET: &str = "test-jwt-secret-for-integration-tests";

// ── MockUserRepo ─────────────────────────────────────────────────────────────

pub struct MockUserRepo {
    pub users: Mutex<Vec<User>>,
}

impl MockUserRepo {
    pub fn with(users: Vec<User>) -> Self {
        Self {
            users: Mutex::new(users),
        }
    }

    pub fn empty() -> Self {
        Self::with(vec![])
    }
}

impl UserRepository for MockUserRepo {
    async fn find_by_id(&self, id: Uuid) -> Result<Option<User>, ApiError> {
        Ok(self
            .users
            .lock()
            .unwrap()
            .iter()
            .find(|u| u.id == id)
            .cloned())
    }
    async fn find_by_email(&self, email: &str) -> Result<Option<User>, ApiError> {
        Ok(self
            .users
            .lock()
            .unwrap()
            .iter()
            .find(|u| u.email == email)
            .cloned())
    }
    async fn list(&self) -> Result<Vec<User>, ApiError> {
        Ok(self.users.lock().unwrap().clone())
    }
    async fn list_by_ids(&self, ids: &[Uuid]) -> Result<Vec<User>, ApiError> {
        Ok(self
            .users
            .lock()
            .unwrap()
            .iter()
            .filter(|u| ids.contains(&u.id))
            .cloned()
            .collect())
    }
    async fn create(&self, user: &User) -> Result<(), ApiError> {
        self.users.lock().unwrap().push(user.clone());
        Ok(())
    }
    async fn update_profile(&self, id: Uuid, patch: &UserPatch) -> Result<(), ApiError> {
        let mut users = self.users.lock().unwrap();
        if let Some(u) = users.iter_mut().find(|u| u.id == id) {
            if let Some(name) = &patch.name {
                u.name = name.clone();
            }
            if let Some(surname) = &patch.surname {
                u.surname = surname.clone();
            }
            if let Some(email) = &patch.email {
                u.email = email.clone();
            }
            if let Some(phonenumber) = patch.phonenumber {
                u.phonenumber = phonenumber;
            }
            u.updated_at = Utc::now();
        }
        Ok(())
    }
    async fn update_password(&self, id: Uuid, password_hash: &str) -> Result<(), ApiError> {
        let mut users = self.users.lock().unwrap();
        if let Some(u) = users.iter_mut().find(|u| u.id == id) {
            u.password_hash = password_hash.to_owned();
        }
        Ok(())
    }
    async fn update_image(&self, id: Uuid, image_url: &str) -> Result<(), ApiError> {
        let mut users = self.users.lock().unwrap();
        if let Some(u) = users.iter_mut().find(|u| u.id == id) {
            u.image = image_url.to_owned();
        }
        Ok(())
    }
    async fn delete(&self, id: Uuid) -> Result<bool, ApiError> {
        let mut users = self.users.lock().unwrap();
        let before = users.len();
        users.retain(|u| u.id != id);
        Ok(users.len() < before)
    }
}

// ── MockPropertyRepo ─────────────────────────────────────────────────────────

pub struct MockPropertyRepo {
    pub properties: Mutex<Vec<Property>>,
    pub monthly: Vec<(String, i64)>,
}

impl MockPropertyRepo {
    pub fn with(properties: Vec<Property>) -> Self {
        Self {
            properties: Mutex::new(properties),
            monthly: vec![],
        }
    }

    pub fn empty() -> Self {
        Self::with(vec![])
    }

    pub fn with_monthly(monthly: Vec<(String, i64)>) -> Self {
        Self {
            properties: Mutex::new(vec![]),
            monthly,
        }
    }
}

impl PropertyRepository for MockPropertyRepo {
    async fn create(&self, property: &Property) -> Result<(), ApiError> {
        self.properties.lock().unwrap().push(property.clone());
        Ok(())
    }
    async fn find_by_id(&self, id: Uuid) -> Result<Option<Property>, ApiError> {
        Ok(self
            .properties
            .lock()
            .unwrap()
            .iter()
            .find(|p| p.id == id)
            .cloned())
    }
    async fn list(&self, _filter: &PropertyFilter) -> Result<Vec<Property>, ApiError> {
        Ok(self.properties.lock().unwrap().clone())
    }
    async fn list_recent(&self, limit: u64) -> Result<Vec<Property>, ApiError> {
        let mut all = self.properties.lock().unwrap().clone();
        all.sort_by(|a, b| b.created_at.cmp(&a.created_at));
        all.truncate(limit as usize);
        Ok(all)
    }
    async fn list_near(
        &self,
        _lon: f64,
        _lat: f64,
        _distance: f64,
    ) -> Result<Vec<Property>, ApiError> {
        Ok(self.properties.lock().unwrap().clone())
    }
    async fn count(&self) -> Result<u64, ApiError> {
        Ok(self.properties.lock().unwrap().len() as u64)
    }
    async fn count_by_kind(&self) -> Result<KindCounts, ApiError> {
        let properties = self.properties.lock().unwrap();
        let eq = |field: Option<&str>, expected: &str| {
            field.is_some_and(|v| v.eq_ignore_ascii_case(expected))
        };
        Ok(KindCounts {
            total: properties.len() as i64,
            daire: properties
                .iter()
                .filter(|p| eq(p.sub_type.as_deref(), "daire"))
                .count() as i64,
            villa: properties
                .iter()
                .filter(|p| eq(p.sub_type.as_deref(), "villa"))
                .count() as i64,
            dukkan: properties
                .iter()
                .filter(|p| eq(p.sub_type.as_deref(), "dükkan"))
                .count() as i64,
            arsa: properties
                .iter()
                .filter(|p| p.property_type.eq_ignore_ascii_case("arsa"))
                .count() as i64,
        })
    }
    async fn monthly_created(&self, _year: i32) -> Result<Vec<(String, i64)>, ApiError> {
        Ok(self.monthly.clone())
    }
    async fn update(&self, id: Uuid, patch: &PropertyPatch) -> Result<(), ApiError> {
        let mut properties = self.properties.lock().unwrap();
        if let Some(p) = properties.iter_mut().find(|p| p.id == id) {
            if let Some(v) = &patch.title {
                p.title = v.clone();
            }
            if let Some(v) = &patch.description {
                p.description = v.clone();
            }
            if let Some(v) = patch.price {
                p.price = v;
            }
            if let Some(v) = patch.gross {
                p.gross = v;
            }
            if let Some(v) = patch.net {
                p.net = v;
            }
            if let Some(v) = &patch.number_of_room {
                p.number_of_room = v.clone();
            }
            if let Some(v) = patch.building_age {
                p.building_age = v;
            }
            if let Some(v) = patch.floor {
                p.floor = v;
            }
            if let Some(v) = patch.number_of_floors {
                p.number_of_floors = v;
            }
            if let Some(v) = &patch.heating {
                p.heating = v.clone();
            }
            if let Some(v) = patch.number_of_bathrooms {
                p.number_of_bathrooms = v;
            }
            if let Some(v) = &patch.kitchen {
                p.kitchen = v.clone();
            }
            if let Some(v) = patch.balcony {
                p.balcony = v;
            }
            if let Some(v) = &patch.lift {
                p.lift = v.clone();
            }
            if let Some(v) = &patch.parking {
                p.parking = v.clone();
            }
            if let Some(v) = &patch.furnished {
                p.furnished = v.clone();
            }
            if let Some(v) = &patch.availability {
                p.availability = v.clone();
            }
            if let Some(v) = patch.dues {
                p.dues = v;
            }
            if let Some(v) = &patch.eligible_for_loan {
                p.eligible_for_loan = v.clone();
            }
            if let Some(v) = &patch.title_deed_status {
                p.title_deed_status = v.clone();
            }
            if let Some(v) = &patch.images {
                p.images = v.clone();
            }
            if let Some(v) = &patch.location {
                p.location = v.clone();
            }
            if let Some(v) = &patch.property_type {
                p.property_type = v.clone();
            }
            if let Some(v) = &patch.listing_type {
                p.listing_type = v.clone();
            }
            if let Some(v) = &patch.sub_type {
                p.sub_type = Some(v.clone());
            }
            if let Some(v) = &patch.selected_features {
                p.selected_features = v.clone();
            }
            p.updated_at = Utc::now();
        }
        Ok(())
    }
    async fn set_owner(&self, id: Uuid, user_id: Uuid) -> Result<(), ApiError> {
        let mut properties = self.properties.lock().unwrap();
        if let Some(p) = properties.iter_mut().find(|p| p.id == id) {
            p.user_id = Some(user_id);
        }
        Ok(())
    }
    async fn delete(&self, id: Uuid) -> Result<bool, ApiError> {
        let mut properties = self.properties.lock().unwrap();
        let before = properties.len();
        properties.retain(|p| p.id != id);
        Ok(properties.len() < before)
    }
}

// ── MockFeatureOptionRepo ────────────────────────────────────────────────────

pub struct MockFeatureOptionRepo {
    pub options: Mutex<Vec<FeatureOption>>,
}

impl MockFeatureOptionRepo {
    pub fn with(options: Vec<FeatureOption>) -> Self {
        Self {
            options: Mutex::new(options),
        }
    }

    pub fn empty() -> Self {
        Self::with(vec![])
    }
}

impl FeatureOptionRepository for MockFeatureOptionRepo {
    async fn create(&self, option: &FeatureOption) -> Result<(), ApiError> {
        self.options.lock().unwrap().push(option.clone());
        Ok(())
    }
    async fn list(&self) -> Result<Vec<FeatureOption>, ApiError> {
        Ok(self.options.lock().unwrap().clone())
    }
    async fn find_by_id(&self, id: Uuid) -> Result<Option<FeatureOption>, ApiError> {
        Ok(self
            .options
            .lock()
            .unwrap()
            .iter()
            .find(|o| o.id == id)
            .cloned())
    }
    async fn find_by_pair(
        &self,
        category: &str,
        value: &str,
    ) -> Result<Option<FeatureOption>, ApiError> {
        Ok(self
            .options
            .lock()
            .unwrap()
            .iter()
            .find(|o| o.category == category && o.value == value)
            .cloned())
    }
    async fn update(
        &self,
        id: Uuid,
        category: Option<&str>,
        value: Option<&str>,
    ) -> Result<(), ApiError> {
        let mut options = self.options.lock().unwrap();
        if let Some(o) = options.iter_mut().find(|o| o.id == id) {
            if let Some(category) = category {
                o.category = category.to_owned();
            }
            if let Some(value) = value {
                o.value = value.to_owned();
            }
            o.updated_at = Utc::now();
        }
        Ok(())
    }
    async fn delete(&self, id: Uuid) -> Result<bool, ApiError> {
        let mut options = self.options.lock().unwrap();
        let before = options.len();
        options.retain(|o| o.id != id);
        Ok(options.len() < before)
    }
}

// ── MockMessageRepo ──────────────────────────────────────────────────────────

pub struct MockMessageRepo {
    pub messages: Mutex<Vec<Message>>,
}

impl MockMessageRepo {
    pub fn with(messages: Vec<Message>) -> Self {
        Self {
            messages: Mutex::new(messages),
        }
    }

    pub fn empty() -> Self {
        Self::with(vec![])
    }
}

impl MessageRepository for MockMessageRepo {
    async fn create(&self, message: &Message) -> Result<(), ApiError> {
        self.messages.lock().unwrap().push(message.clone());
        Ok(())
    }
    async fn list(&self) -> Result<Vec<Message>, ApiError> {
        Ok(self.messages.lock().unwrap().clone())
    }
    async fn find_by_id(&self, id: Uuid) -> Result<Option<Message>, ApiError> {
        Ok(self
            .messages
            .lock()
            .unwrap()
            .iter()
            .find(|m| m.id == id)
            .cloned())
    }
    async fn mark_read(&self, id: Uuid) -> Result<(), ApiError> {
        let mut messages = self.messages.lock().unwrap();
        if let Some(m) = messages.iter_mut().find(|m| m.id == id) {
            m.isread = true;
        }
        Ok(())
    }
    async fn delete(&self, id: Uuid) -> Result<bool, ApiError> {
        let mut messages = self.messages.lock().unwrap();
        let before = messages.len();
        messages.retain(|m| m.id != id);
        Ok(messages.len() < before)
    }
}

// ── MockTrackViewRepo ────────────────────────────────────────────────────────

pub struct MockTrackViewRepo {
    pub rows: Mutex<Vec<TrackView>>,
}

impl MockTrackViewRepo {
    pub fn empty() -> Self {
        Self {
            rows: Mutex::new(vec![]),
        }
    }
}

impl TrackViewRepository for MockTrackViewRepo {
    async fn increment(&self, date: NaiveDate) -> Result<TrackView, ApiError> {
        let mut rows = self.rows.lock().unwrap();
        if let Some(row) = rows.iter_mut().find(|r| r.date == date) {
            row.views += 1;
            return Ok(row.clone());
        }
        let row = TrackView {
            id: Uuid::now_v7(),
            date,
            views: 1,
        };
        rows.push(row.clone());
        Ok(row)
    }
    async fn monthly_views(&self, year: i32) -> Result<Vec<(String, i64)>, ApiError> {
        let rows = self.rows.lock().unwrap();
        let mut by_month: BTreeMap<String, i64> = BTreeMap::new();
        for row in rows.iter() {
            let month = row.date.format("%Y-%m").to_string();
            if month.starts_with(&year.to_string()) {
                *by_month.entry(month).or_default() += row.views;
            }
        }
        Ok(by_month.into_iter().collect())
    }
    async fn month_total(&self, year: i32, month: u32) -> Result<i64, ApiError> {
        let prefix = format!("{year}-{month:02}");
        let rows = self.rows.lock().unwrap();
        Ok(rows
            .iter()
            .filter(|r| r.date.format("%Y-%m").to_string() == prefix)
            .map(|r| r.views)
            .sum())
    }
}

// ── Fixtures ─────────────────────────────────────────────────────────────────

pub fn test_user(email: &str, role: Role) -> User {
    let now = Utc::now();
    User {
        id: Uuid::now_v7(),
        name: "Derya".to_owned(),
        surname: "Akgün".to_owned(),
        email: email.to_owned(),
        image: String::new(),
        phonenumber: 5368100880,
        password_hash: bcrypt::hash("parola42", 4).unwrap(),
        role,
        created_at: now,
        updated_at: now,
    }
}

pub fn test_property(title: &str) -> Property {
    let now = Utc::now();
    Property {
        id: Uuid::now_v7(),
        title: title.to_owned(),
        description: "Moda sahiline yürüme mesafesinde".to_owned(),
        price: 4_500_000,
        gross: 120,
        net: 95,
        number_of_room: "3+1".to_owned(),
        building_age: 12,
        floor: 3,
        number_of_floors: 6,
        heating: "Doğalgaz".to_owned(),
        number_of_bathrooms: 2,
        kitchen: "Kapalı".to_owned(),
        balcony: 1,
        lift: "Var".to_owned(),
        parking: "Açık Otopark".to_owned(),
        furnished: "Hayır".to_owned(),
        availability: "Boş".to_owned(),
        dues: 850,
        eligible_for_loan: "Evet".to_owned(),
        title_deed_status: "Kat Mülkiyetli".to_owned(),
        images: vec!["https://cdn.example.com/listing-1.jpg".to_owned()],
        location: Location {
            city: "İstanbul".to_owned(),
            district: "Kadıköy".to_owned(),
            neighborhood: "Moda".to_owned(),
            geo: GeoPoint::new(29.025, 40.984),
        },
        property_type: "Konut".to_owned(),
        listing_type: "Satılık".to_owned(),
        sub_type: Some("Daire".to_owned()),
        selected_features: BTreeMap::from([(
            "İç Özellikler".to_owned(),
            vec!["Klima".to_owned(), "Ankastre".to_owned()],
        )]),
        user_id: None,
        created_at: now,
        updated_at: now,
    }
}

pub fn test_feature_option(category: &str, value: &str) -> FeatureOption {
    let now = Utc::now();
    FeatureOption {
        id: Uuid::now_v7(),
        category: category.to_owned(),
        value: value.to_owned(),
        created_at: now,
        updated_at: now,
    }
}

pub fn test_message() -> Message {
    Message {
        id: Uuid::now_v7(),
        name: "Mehmet".to_owned(),
        surname: "Demir".to_owned(),
        email: "mehmet@example.com".to_owned(),
        phone: "05321112233".to_owned(),
        message: "Moda'daki ilan hakkında bilgi almak istiyorum.".to_owned(),
        isread: false,
        created_at: Utc::now(),
    }
}
