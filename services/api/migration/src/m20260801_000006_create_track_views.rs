use sea_orm_migration::prelude::*;

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(TrackViews::Table)
                    .if_not_exists()
                    .col(
                        ColumnDef::new(TrackViews::Id)
                            .uuid()
                            .not_null()
                            .primary_key(),
                    )
                    // One row per calendar day; the unique key is what the
                    // atomic increment upsert conflicts on.
                    .col(ColumnDef::new(TrackViews::Date).date().not_null().unique_key())
                    .col(
                        ColumnDef::new(TrackViews::Views)
                            .big_integer()
                            .not_null()
                            .default(0),
                    )
                    .to_owned(),
            )
            .await
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_table(Table::drop().table(TrackViews::Table).to_owned())
            .await
    }
}

#[derive(Iden)]
enum TrackViews {
    Table,
    Id,
    Date,
    Views,
}
