use sea_orm_migration::prelude::*;

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(Properties::Table)
                    .if_not_exists()
                    .col(
                        ColumnDef::new(Properties::Id)
                            .uuid()
                            .not_null()
                            .primary_key(),
                    )
                    .col(ColumnDef::new(Properties::Title).string().not_null())
                    .col(ColumnDef::new(Properties::Description).text().not_null())
                    .col(ColumnDef::new(Properties::Price).big_integer().not_null())
                    .col(ColumnDef::new(Properties::Gross).integer().not_null())
                    .col(ColumnDef::new(Properties::Net).integer().not_null())
                    .col(ColumnDef::new(Properties::NumberOfRoom).string().not_null())
                    .col(ColumnDef::new(Properties::BuildingAge).integer().not_null())
                    .col(ColumnDef::new(Properties::Floor).integer().not_null())
                    .col(
                        ColumnDef::new(Properties::NumberOfFloors)
                            .integer()
                            .not_null(),
                    )
                    .col(ColumnDef::new(Properties::Heating).string().not_null())
                    .col(
                        ColumnDef::new(Properties::NumberOfBathrooms)
                            .integer()
                            .not_null(),
                    )
                    .col(ColumnDef::new(Properties::Kitchen).string().not_null())
                    .col(ColumnDef::new(Properties::Balcony).integer().not_null())
                    .col(ColumnDef::new(Properties::Lift).string().not_null())
                    .col(ColumnDef::new(Properties::Parking).string().not_null())
                    .col(ColumnDef::new(Properties::Furnished).string().not_null())
                    .col(ColumnDef::new(Properties::Availability).string().not_null())
                    .col(ColumnDef::new(Properties::Dues).big_integer().not_null())
                    .col(
                        ColumnDef::new(Properties::EligibleForLoan)
                            .string()
                            .not_null(),
                    )
                    .col(
                        ColumnDef::new(Properties::TitleDeedStatus)
                            .string()
                            .not_null(),
                    )
                    .col(ColumnDef::new(Properties::Images).json_binary().not_null())
                    .col(ColumnDef::new(Properties::City).string().not_null())
                    .col(ColumnDef::new(Properties::District).string().not_null())
                    .col(ColumnDef::new(Properties::Neighborhood).string().not_null())
                    .col(ColumnDef::new(Properties::Lon).double().not_null())
                    .col(ColumnDef::new(Properties::Lat).double().not_null())
                    .col(ColumnDef::new(Properties::PropertyType).string().not_null())
                    .col(ColumnDef::new(Properties::ListingType).string().not_null())
                    .col(ColumnDef::new(Properties::SubType).string().null())
                    .col(
                        ColumnDef::new(Properties::SelectedFeatures)
                            .json_binary()
                            .not_null(),
                    )
                    .col(ColumnDef::new(Properties::UserId).uuid().null())
                    .col(
                        ColumnDef::new(Properties::CreatedAt)
                            .timestamp_with_time_zone()
                            .not_null()
                            .default(Expr::current_timestamp()),
                    )
                    .col(
                        ColumnDef::new(Properties::UpdatedAt)
                            .timestamp_with_time_zone()
                            .not_null()
                            .default(Expr::current_timestamp()),
                    )
                    .to_owned(),
            )
            .await?;

        // Bounding-box prefilter for the proximity query.
        manager
            .create_index(
                Index::create()
                    .name("idx_properties_lat_lon")
                    .table(Properties::Table)
                    .col(Properties::Lat)
                    .col(Properties::Lon)
                    .to_owned(),
            )
            .await?;

        // Year-listings aggregation scans by creation date.
        manager
            .create_index(
                Index::create()
                    .name("idx_properties_created_at")
                    .table(Properties::Table)
                    .col(Properties::CreatedAt)
                    .to_owned(),
            )
            .await
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_table(Table::drop().table(Properties::Table).to_owned())
            .await
    }
}

#[derive(Iden)]
enum Properties {
    Table,
    Id,
    Title,
    Description,
    Price,
    Gross,
    Net,
    NumberOfRoom,
    BuildingAge,
    Floor,
    NumberOfFloors,
    Heating,
    NumberOfBathrooms,
    Kitchen,
    Balcony,
    Lift,
    Parking,
    Furnished,
    Availability,
    Dues,
    EligibleForLoan,
    TitleDeedStatus,
    Images,
    City,
    District,
    Neighborhood,
    Lon,
    Lat,
    PropertyType,
    ListingType,
    SubType,
    SelectedFeatures,
    UserId,
    CreatedAt,
    UpdatedAt,
}
