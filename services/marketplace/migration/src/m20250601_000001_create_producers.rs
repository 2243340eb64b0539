use sea_orm_migration::prelude::*;

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(Producers::Table)
                    .if_not_exists()
                    .col(
                        ColumnDef::new(Producers::Id)
                            .integer()
                            .not_null()
                            .auto_increment()
                            .primary_key(),
                    )
                    .col(ColumnDef::new(Producers::Name).string_len(100).not_null())
                    .col(
                        ColumnDef::new(Producers::Email)
                            .string_len(254)
                            .not_null()
                            .unique_key(),
                    )
                    .col(ColumnDef::new(Producers::PasswordHash).string().not_null())
                    .col(ColumnDef::new(Producers::Phone).string_len(20).null())
                    .col(
                        ColumnDef::new(Producers::Document)
                            .string_len(18)
                            .not_null()
                            .unique_key(),
                    )
                    .col(ColumnDef::new(Producers::PostalCode).string_len(9).null())
                    .col(ColumnDef::new(Producers::Street).string_len(100).null())
                    .col(ColumnDef::new(Producers::Number).string_len(10).null())
                    .col(ColumnDef::new(Producers::Neighborhood).string_len(50).null())
                    .col(ColumnDef::new(Producers::City).string_len(50).null())
                    .col(ColumnDef::new(Producers::State).string_len(2).null())
                    .col(ColumnDef::new(Producers::Latitude).double().null())
                    .col(ColumnDef::new(Producers::Longitude).double().null())
                    .to_owned(),
            )
            .await
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_table(Table::drop().table(Producers::Table).to_owned())
            .await
    }
}

#[derive(Iden)]
enum Producers {
    Table,
    Id,
    Name,
    Email,
    PasswordHash,
    Phone,
    Document,
    PostalCode,
    Street,
    Number,
    Neighborhood,
    City,
    State,
    Latitude,
    Longitude,
}
