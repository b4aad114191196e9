use sea_orm::entity::prelude::*;
use serde::{Deserialize, Serialize};

use crate::{owner, pet_type, visit};

#[derive(Clone, Debug, PartialEq, DeriveEntityModel, Serialize, Deserialize)]
#[sea_orm(table_name = "pets")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub id: i32,
    pub name: String,
    pub birth_date: Date,
    pub type_id: i32,
    pub owner_id: i32,
}

#[derive(Copy, Clone, Debug, EnumIter)]
pub enum Relation {
    Owner,
    PetType,
    Visits,
}

impl RelationTrait for Relation {
    fn def(&self) -> RelationDef {
        match self {
            Relation::Owner => Entity::belongs_to(owner::Entity)
                .from(Column::OwnerId)
                .to(owner::Column::Id)
                .into(),
            Relation::PetType => Entity::belongs_to(pet_type::Entity)
                .from(Column::TypeId)
                .to(pet_type::Column::Id)
                .into(),
            Relation::Visits => Entity::has_many(visit::Entity).into(),
        }
    }
}

impl Related<owner::Entity> for Entity {
    fn to() -> RelationDef { Relation::Owner.def() }
}

impl Related<pet_type::Entity> for Entity {
    fn to() -> RelationDef { Relation::PetType.def() }
}

impl Related<visit::Entity> for Entity {
    fn to() -> RelationDef { Relation::Visits.def() }
}

impl ActiveModelBehavior for ActiveModel {}
