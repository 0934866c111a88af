use sea_orm_migration::prelude::*;

mod m20260801_000001_create_users;
mod m20260801_000002_create_properties;
mod m20260801_000003_create_feature_options;
mod m20260801_000004_create_messages;
mod m20260801_000005_create_client_intakes;
mod m20260801_000006_create_track_views;
mod m20260801_000007_create_reset_tokens;

pub struct Migrator;

#[async_trait::async_trait]
impl MigratorTrait for Migrator {
    fn migrations() -> Vec<Box<dyn MigrationTrait>> {
        vec![
            Box::new(m20260801_000001_create_users::Migration),
            Box::new(m20260801_000002_create_properties::Migration),
            Box::new(m20260801_000003_create_feature_options::Migration),
            Box::new(m20260801_000004_create_messages::Migration),
            Box::new(m20260801_000005_create_client_intakes::Migration),
            Box::new(m20260801_000006_create_track_views::Migration),
            Box::new(m20260801_000007_create_reset_tokens::Migration),
        ]
    }
}
