use sea_orm::entity::prelude::*;

/// Collector (pickup agent) account.
#[derive(Clone, Debug, PartialEq, DeriveEntityModel)]
#[sea_orm(table_name = "collectors")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub id: i32,
    pub name: String,
    #[sea_orm(unique)]
    pub email: String,
    pub password_hash: String,
    pub phone: Option<String>,
    #[sea_orm(unique)]
    pub document: String,
    pub postal_code: Option<String>,
    pub city: Option<String>,
    pub state: Option<String>,
    pub latitude: Option<f64>,
    pub longitude: Option<f64>,
    pub rating: f64,
    pub rating_count: i32,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {
    #[sea_orm(has_many = "super::collection_requests::Entity")]
    CollectionRequests,
}

impl Related<super::collection_requests::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::CollectionRequests.def()
    }
}

impl ActiveModelBehavior for ActiveModel {}
