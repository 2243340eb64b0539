use sea_orm_migration::prelude::*;

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(CollectionRequests::Table)
                    .if_not_exists()
                    .col(
                        ColumnDef::new(CollectionRequests::Id)
                            .integer()
                            .not_null()
                            .auto_increment()
                            .primary_key(),
                    )
                    .col(
                        ColumnDef::new(CollectionRequests::ProducerId)
                            .integer()
                            .not_null(),
                    )
                    .col(
                        ColumnDef::new(CollectionRequests::CollectorId)
                            .integer()
                            .null(),
                    )
                    .col(
                        ColumnDef::new(CollectionRequests::CreatedAt)
                            .timestamp_with_time_zone()
                            .not_null()
                            .default(Expr::current_timestamp()),
                    )
                    .col(
                        ColumnDef::new(CollectionRequests::WindowStart)
                            .timestamp_with_time_zone()
                            .not_null(),
                    )
                    .col(
                        ColumnDef::new(CollectionRequests::WindowEnd)
                            .timestamp_with_time_zone()
                            .not_null(),
                    )
                    .col(
                        ColumnDef::new(CollectionRequests::Status)
                            .string_len(20)
                            .not_null()
                            .default("requested"),
                    )
                    .col(ColumnDef::new(CollectionRequests::Notes).text().null())
                    .foreign_key(
                        ForeignKey::create()
                            .from(CollectionRequests::Table, CollectionRequests::ProducerId)
                            .to(Producers::Table, Producers::Id)
                            .on_delete(ForeignKeyAction::Cascade),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .from(CollectionRequests::Table, CollectionRequests::CollectorId)
                            .to(Collectors::Table, Collectors::Id)
                            .on_delete(ForeignKeyAction::SetNull),
                    )
                    .to_owned(),
            )
            .await
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_table(Table::drop().table(CollectionRequests::Table).to_owned())
            .await
    }
}

#[derive(Iden)]
enum CollectionRequests {
    Table,
    Id,
    ProducerId,
    CollectorId,
    CreatedAt,
    WindowStart,
    WindowEnd,
    Status,
    Notes,
}

#[derive(Iden)]
enum Producers {
    Table,
    Id,
}

#[derive(Iden)]
enum Collectors {
    Table,
    Id,
}
