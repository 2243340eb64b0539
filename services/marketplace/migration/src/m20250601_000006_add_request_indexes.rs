use sea_orm_migration::prelude::*;

#[derive(DeriveMigrationName)]
pub struct Migration;

const INDEXES: [&str; 4] = [
    "idx_collection_requests_producer_id",
    "idx_collection_requests_collector_id",
    "idx_collection_requests_status",
    "idx_request_items_request_id",
];

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_index(
                Index::create()
                    .table(CollectionRequests::Table)
                    .col(CollectionRequests::ProducerId)
                    .name(INDEXES[0])
                    .to_owned(),
            )
            .await?;
        manager
            .create_index(
                Index::create()
                    .table(CollectionRequests::Table)
                    .col(CollectionRequests::CollectorId)
                    .name(INDEXES[1])
                    .to_owned(),
            )
            .await?;
        manager
            .create_index(
                Index::create()
                    .table(CollectionRequests::Table)
                    .col(CollectionRequests::Status)
                    .name(INDEXES[2])
                    .to_owned(),
            )
            .await?;
        manager
            .create_index(
                Index::create()
                    .table(RequestItems::Table)
                    .col(RequestItems::RequestId)
                    .name(INDEXES[3])
                    .to_owned(),
            )
            .await
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        for name in INDEXES.into_iter().rev() {
            manager
                .drop_index(Index::drop().name(name).to_owned())
                .await?;
        }
        Ok(())
    }
}

#[derive(Iden)]
enum CollectionRequests {
    Table,
    ProducerId,
    CollectorId,
    Status,
}

#[derive(Iden)]
enum RequestItems {
    Table,
    RequestId,
}
