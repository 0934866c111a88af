#![allow(async_fn_in_trait)]

use chrono::NaiveDate;
use uuid::Uuid;

use crate::domain::types::{
    ClientIntake, ClientIntakePatch, FeatureOption, ImageUpload, KindCounts, Message, Property,
    PropertyFilter, PropertyPatch, TrackView, User, UserPatch,
};
use crate::error::ApiError;

/// Repository for staff accounts.
pub trait UserRepository: Send + Sync {
    async fn find_by_id(&self, id: Uuid) -> Result<Option<User>, ApiError>;
    async fn find_by_email(&self, email: &str) -> Result<Option<User>, ApiError>;
    async fn list(&self) -> Result<Vec<User>, ApiError>;
    async fn list_by_ids(&self, ids: &[Uuid]) -> Result<Vec<User>, ApiError>;
    async fn create(&self, user: &User) -> Result<(), ApiError>;
    async fn update_profile(&self, id: Uuid, patch: &UserPatch) -> Result<(), ApiError>;
    async fn update_password(&self, id: Uuid, password_hash: &str) -> Result<(), ApiError>;
    async fn update_image(&self, id: Uuid, image_url: &str) -> Result<(), ApiError>;

    /// Delete an account. Returns `true` if a row was deleted.
    async fn delete(&self, id: Uuid) -> Result<bool, ApiError>;
}

/// Repository for listings.
pub trait PropertyRepository: Send + Sync {
    async fn create(&self, property: &Property) -> Result<(), ApiError>;
    async fn find_by_id(&self, id: Uuid) -> Result<Option<Property>, ApiError>;

    /// List listings matching the AND-combined filter (no pagination).
    async fn list(&self, filter: &PropertyFilter) -> Result<Vec<Property>, ApiError>;

    /// Most recently created listings, newest first.
    async fn list_recent(&self, limit: u64) -> Result<Vec<Property>, ApiError>;

    /// Listings within `distance` meters of (`lon`, `lat`), nearest first.
    async fn list_near(&self, lon: f64, lat: f64, distance: f64)
    -> Result<Vec<Property>, ApiError>;

    async fn count(&self) -> Result<u64, ApiError>;

    /// Raw counts for the listing-type share chart.
    async fn count_by_kind(&self) -> Result<KindCounts, ApiError>;

    /// Listings created per month of `year`, keyed `"YYYY-MM"`, sparse.
    async fn monthly_created(&self, year: i32) -> Result<Vec<(String, i64)>, ApiError>;

    async fn update(&self, id: Uuid, patch: &PropertyPatch) -> Result<(), ApiError>;
    async fn set_owner(&self, id: Uuid, user_id: Uuid) -> Result<(), ApiError>;

    /// Delete a listing. Returns `true` if a row was deleted.
    async fn delete(&self, id: Uuid) -> Result<bool, ApiError>;
}

/// Repository for the feature taxonomy.
pub trait FeatureOptionRepository: Send + Sync {
    async fn create(&self, option: &FeatureOption) -> Result<(), ApiError>;
    async fn list(&self) -> Result<Vec<FeatureOption>, ApiError>;
    async fn find_by_id(&self, id: Uuid) -> Result<Option<FeatureOption>, ApiError>;

    /// Exact lookup used by the duplicate guard.
    async fn find_by_pair(
        &self,
        category: &str,
        value: &str,
    ) -> Result<Option<FeatureOption>, ApiError>;

    async fn update(
        &self,
        id: Uuid,
        category: Option<&str>,
        value: Option<&str>,
    ) -> Result<(), ApiError>;

    /// Delete an entry. Returns `true` if a row was deleted.
    async fn delete(&self, id: Uuid) -> Result<bool, ApiError>;
}

/// Repository for contact-form messages.
pub trait MessageRepository: Send + Sync {
    async fn create(&self, message: &Message) -> Result<(), ApiError>;
    async fn list(&self) -> Result<Vec<Message>, ApiError>;
    async fn find_by_id(&self, id: Uuid) -> Result<Option<Message>, ApiError>;
    async fn mark_read(&self, id: Uuid) -> Result<(), ApiError>;

    /// Delete a message. Returns `true` if a row was deleted.
    async fn delete(&self, id: Uuid) -> Result<bool, ApiError>;
}

/// Repository for client leads.
pub trait ClientIntakeRepository: Send + Sync {
    async fn create(&self, intake: &ClientIntake) -> Result<(), ApiError>;
    async fn list(&self) -> Result<Vec<ClientIntake>, ApiError>;
    async fn find_by_id(&self, id: Uuid) -> Result<Option<ClientIntake>, ApiError>;
    async fn update(&self, id: Uuid, patch: &ClientIntakePatch) -> Result<(), ApiError>;

    /// Delete a lead. Returns `true` if a row was deleted.
    async fn delete(&self, id: Uuid) -> Result<bool, ApiError>;
}

/// Repository for the daily view counter.
pub trait TrackViewRepository: Send + Sync {
    /// Atomically bump the counter for `date`, inserting the row with
    /// views=1 when absent. Returns the row after the increment.
    async fn increment(&self, date: NaiveDate) -> Result<TrackView, ApiError>;

    /// Views per month of `year`, keyed `"YYYY-MM"`, sparse.
    async fn monthly_views(&self, year: i32) -> Result<Vec<(String, i64)>, ApiError>;

    /// Total views within the given month.
    async fn month_total(&self, year: i32, month: u32) -> Result<i64, ApiError>;
}

/// Port for uploading images to object storage.
pub trait ImageStorePort: Send + Sync {
    /// Upload one image, optionally watermarked, returning its public URL.
    /// Non-image content types are rejected with `InvalidInput`.
    async fn upload_image(&self, file: &ImageUpload, watermark: bool) -> Result<String, ApiError>;
}

/// Port for outbound notification mail. Failures are the caller's to log;
/// notification mail never fails the triggering request.
pub trait MailerPort: Send + Sync {
    async fn send_contact_mail(&self, message: &Message) -> anyhow::Result<()>;
    async fn send_client_intake_mail(&self, intake: &ClientIntake) -> anyhow::Result<()>;
}
