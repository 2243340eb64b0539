use sea_orm_migration::prelude::*;

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(Collectors::Table)
                    .if_not_exists()
                    .col(
                        ColumnDef::new(Collectors::Id)
                            .integer()
                            .not_null()
                            .auto_increment()
                            .primary_key(),
                    )
                    .col(ColumnDef::new(Collectors::Name).string_len(100).not_null())
                    .col(
                        ColumnDef::new(Collectors::Email)
                            .string_len(254)
                            .not_null()
                            .unique_key(),
                    )
                    .col(ColumnDef::new(Collectors::PasswordHash).string().not_null())
                    .col(ColumnDef::new(Collectors::Phone).string_len(20).null())
                    .col(
                        ColumnDef::new(Collectors::Document)
                            .string_len(18)
                            .not_null()
                            .unique_key(),
                    )
                    .col(ColumnDef::new(Collectors::PostalCode).string_len(9).null())
                    .col(ColumnDef::new(Collectors::City).string_len(50).null())
                    .col(ColumnDef::new(Collectors::State).string_len(2).null())
                    .col(ColumnDef::new(Collectors::Latitude).double().null())
                    .col(ColumnDef::new(Collectors::Longitude).double().null())
                    .col(
                        ColumnDef::new(Collectors::Rating)
                            .double()
                            .not_null()
                            .default(0.0),
                    )
                    .col(
                        ColumnDef::new(Collectors::RatingCount)
                            .integer()
                            .not_null()
                            .default(0),
                    )
                    .to_owned(),
            )
            .await
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_table(Table::drop().table(Collectors::Table).to_owned())
            .await
    }
}

#[derive(Iden)]
enum Collectors {
    Table,
    Id,
    Name,
    Email,
    PasswordHash,
    Phone,
    Document,
    PostalCode,
    City,
    State,
    Latitude,
    Longitude,
    Rating,
    RatingCount,
}
