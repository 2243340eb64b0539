use sea_orm::entity::prelude::*;

/// One waste line of a collection request.
#[derive(Clone, Debug, PartialEq, DeriveEntityModel)]
#[sea_orm(table_name = "request_items")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub id: i32,
    pub request_id: i32,
    pub waste_type: String,
    pub quantity: f64,
    pub unit: String,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {
    #[sea_orm(
        belongs_to = "super::collection_requests::Entity",
        from = "Column::RequestId",
        to = "super::collection_requests::Column::Id",
        on_delete = "Cascade"
    )]
    CollectionRequest,
}

impl Related<super::collection_requests::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::CollectionRequest.def()
    }
}

impl ActiveModelBehavior for ActiveModel {}
