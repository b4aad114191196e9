use sea_orm::entity::prelude::*;
use serde::{Deserialize, Serialize};

use crate::pet;

#[derive(Clone, Debug, PartialEq, DeriveEntityModel, Serialize, Deserialize)]
#[sea_orm(table_name = "owners")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub id: i32,
    pub first_name: String,
    pub last_name: String,
    pub address: String,
    pub city: String,
    pub telephone: String,
}

#[derive(Copy, Clone, Debug, EnumIter)]
pub enum Relation {
    Pets,
}

impl RelationTrait for Relation {
    fn def(&self) -> RelationDef {
        match self { Relation::Pets => Entity::has_many(pet::Entity).into() }
    }
}

impl Related<pet::Entity> for Entity {
    fn to() -> RelationDef { Relation::Pets.def() }
}

impl ActiveModelBehavior for ActiveModel {}
