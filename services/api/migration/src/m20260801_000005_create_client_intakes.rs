use sea_orm_migration::prelude::*;

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(ClientIntakes::Table)
                    .if_not_exists()
                    .col(
                        ColumnDef::new(ClientIntakes::Id)
                            .uuid()
                            .not_null()
                            .primary_key(),
                    )
                    .col(ColumnDef::new(ClientIntakes::Name).string().not_null())
                    .col(ColumnDef::new(ClientIntakes::Phone).string().not_null())
                    .col(
                        ColumnDef::new(ClientIntakes::Description)
                            .text()
                            .not_null(),
                    )
                    .col(
                        ColumnDef::new(ClientIntakes::CreatedAt)
                            .timestamp_with_time_zone()
                            .not_null()
                            .default(Expr::current_timestamp()),
                    )
                    .to_owned(),
            )
            .await
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_table(Table::drop().table(ClientIntakes::Table).to_owned())
            .await
    }
}

#[derive(Iden)]
enum ClientIntakes {
    Table,
    Id,
    Name,
    Phone,
    Description,
    CreatedAt,
}
