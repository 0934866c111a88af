use sea_orm_migration::prelude::*;

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(FeatureOptions::Table)
                    .if_not_exists()
                    .col(
                        ColumnDef::new(FeatureOptions::Id)
                            .uuid()
                            .not_null()
                            .primary_key(),
                    )
                    .col(ColumnDef::new(FeatureOptions::Category).string().not_null())
                    .col(ColumnDef::new(FeatureOptions::Value).string().not_null())
                    .col(
                        ColumnDef::new(FeatureOptions::CreatedAt)
                            .timestamp_with_time_zone()
                            .not_null()
                            .default(Expr::current_timestamp()),
                    )
                    .col(
                        ColumnDef::new(FeatureOptions::UpdatedAt)
                            .timestamp_with_time_zone()
                            .not_null()
                            .default(Expr::current_timestamp()),
                    )
                    .to_owned(),
            )
            .await?;

        // Taxonomy entries are unique per (category, value) pair.
        manager
            .create_index(
                Index::create()
                    .name("idx_feature_options_category_value")
                    .table(FeatureOptions::Table)
                    .col(FeatureOptions::Category)
                    .col(FeatureOptions::Value)
                    .unique()
                    .to_owned(),
            )
            .await
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_table(Table::drop().table(FeatureOptions::Table).to_owned())
            .await
    }
}

#[derive(Iden)]
enum FeatureOptions {
    Table,
    Id,
    Category,
    Value,
    CreatedAt,
    UpdatedAt,
}
