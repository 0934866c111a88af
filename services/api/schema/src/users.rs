use sea_orm::entity::prelude::*;

/// Staff account. `password` holds the bcrypt hash and is never serialized
/// to API responses; `role` stores the wire value of
/// `emlak_domain::role::Role` (0 = member, 1 = admin).
#[derive(Clone, Debug, PartialEq, Eq, DeriveEntityModel)]
#[sea_orm(table_name = "users")]
pub struct Model {
    #[sea_orm(primary_key, auto_increment = false)]
    pub id: Uuid,
    pub name: String,
    pub surname: String,
    #[sea_orm(unique)]
    pub email: String,
    /// Avatar URL, empty until an image is uploaded.
    pub image: String,
    pub phonenumber: i64,
    pub password: String,
    pub role: i16,
    pub created_at: chrono::DateTime<chrono::Utc>,
    pub updated_at: chrono::DateTime<chrono::Utc>,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {}

impl ActiveModelBehavior for ActiveModel {}
