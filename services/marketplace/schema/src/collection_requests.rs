use sea_orm::entity::prelude::*;

/// A producer's pickup request. `collector_id` stays null until accepted.
#[derive(Clone, Debug, PartialEq, Eq, DeriveEntityModel)]
#[sea_orm(table_name = "collection_requests")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub id: i32,
    pub producer_id: i32,
    pub collector_id: Option<i32>,
    pub created_at: chrono::DateTime<chrono::Utc>,
    pub window_start: chrono::DateTime<chrono::Utc>,
    pub window_end: chrono::DateTime<chrono::Utc>,
    pub status: String,
    #[sea_orm(column_type = "Text", nullable)]
    pub notes: Option<String>,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {
    #[sea_orm(
        belongs_to = "super::producers::Entity",
        from = "Column::ProducerId",
        to = "super::producers::Column::Id",
        on_delete = "Cascade"
    )]
    Producer,
    #[sea_orm(
        belongs_to = "super::collectors::Entity",
        from = "Column::CollectorId",
        to = "super::collectors::Column::Id",
        on_delete = "SetNull"
    )]
    Collector,
    #[sea_orm(has_many = "super::request_items::Entity")]
    RequestItems,
}

impl Related<super::producers::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::Producer.def()
    }
}

impl Related<super::collectors::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::Collector.def()
    }
}

impl Related<super::request_items::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::RequestItems.def()
    }
}

impl ActiveModelBehavior for ActiveModel {}
