use sea_orm_migration::prelude::*;

mod m20250601_000001_create_producers;
mod m20250601_000002_create_collectors;
mod m20250601_000003_create_cooperatives;
mod m20250601_000004_create_collection_requests;
mod m20250601_000005_create_request_items;
mod m20250601_000006_add_request_indexes;

pub struct Migrator;

#[async_trait::async_trait]
impl MigratorTrait for Migrator {
    fn migrations() -> Vec<Box<dyn MigrationTrait>> {
        vec![
            Box::new(m20250601_000001_create_producers::Migration),
            Box::new(m20250601_000002_create_collectors::Migration),
            Box::new(m20250601_000003_create_cooperatives::Migration),
            Box::new(m20250601_000004_create_collection_requests::Migration),
            Box::new(m20250601_000005_create_request_items::Migration),
            Box::new(m20250601_000006_add_request_indexes::Migration),
        ]
    }
}
