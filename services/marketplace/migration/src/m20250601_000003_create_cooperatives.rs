use sea_orm_migration::prelude::*;

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(Cooperatives::Table)
                    .if_not_exists()
                    .col(
                        ColumnDef::new(Cooperatives::Id)
                            .integer()
                            .not_null()
                            .auto_increment()
                            .primary_key(),
                    )
                    .col(
                        ColumnDef::new(Cooperatives::CompanyName)
                            .string_len(100)
                            .not_null(),
                    )
                    .col(
                        ColumnDef::new(Cooperatives::Email)
                            .string_len(254)
                            .not_null()
                            .unique_key(),
                    )
                    .col(ColumnDef::new(Cooperatives::PasswordHash).string().not_null())
                    .col(ColumnDef::new(Cooperatives::Phone).string_len(20).null())
                    .col(
                        ColumnDef::new(Cooperatives::Document)
                            .string_len(18)
                            .not_null()
                            .unique_key(),
                    )
                    .col(ColumnDef::new(Cooperatives::PostalCode).string_len(9).null())
                    .col(ColumnDef::new(Cooperatives::Street).string_len(100).null())
                    .col(ColumnDef::new(Cooperatives::Number).string_len(10).null())
                    .col(ColumnDef::new(Cooperatives::Neighborhood).string_len(50).null())
                    .col(ColumnDef::new(Cooperatives::City).string_len(50).null())
                    .col(ColumnDef::new(Cooperatives::State).string_len(2).null())
                    .col(ColumnDef::new(Cooperatives::Latitude).double().null())
                    .col(ColumnDef::new(Cooperatives::Longitude).double().null())
                    .to_owned(),
            )
            .await
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_table(Table::drop().table(Cooperatives::Table).to_owned())
            .await
    }
}

#[derive(Iden)]
enum Cooperatives {
    Table,
    Id,
    CompanyName,
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
