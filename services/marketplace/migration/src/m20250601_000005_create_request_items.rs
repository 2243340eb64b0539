use sea_orm_migration::prelude::*;

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(RequestItems::Table)
                    .if_not_exists()
                    .col(
                        ColumnDef::new(RequestItems::Id)
                            .integer()
                            .not_null()
                            .auto_increment()
                            .primary_key(),
                    )
                    .col(ColumnDef::new(RequestItems::RequestId).integer().not_null())
                    .col(
                        ColumnDef::new(RequestItems::WasteType)
                            .string_len(50)
                            .not_null(),
                    )
                    .col(ColumnDef::new(RequestItems::Quantity).double().not_null())
                    .col(ColumnDef::new(RequestItems::Unit).string_len(20).not_null())
                    .foreign_key(
                        ForeignKey::create()
                            .from(RequestItems::Table, RequestItems::RequestId)
                            .to(CollectionRequests::Table, CollectionRequests::Id)
                            .on_delete(ForeignKeyAction::Cascade),
                    )
                    .to_owned(),
            )
            .await
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_table(Table::drop().table(RequestItems::Table).to_owned())
            .await
    }
}

#[derive(Iden)]
enum RequestItems {
    Table,
    Id,
    RequestId,
    WasteType,
    Quantity,
    Unit,
}

#[derive(Iden)]
enum CollectionRequests {
    Table,
    Id,
}
