use sea_orm::entity::prelude::*;
use serde::{Deserialize, Serialize};

use crate::{specialty, vet};

#[derive(Clone, Debug, PartialEq, DeriveEntityModel, Serialize, Deserialize)]
#[sea_orm(table_name = "vet_specialties")]
pub struct Model {
    #[sea_orm(primary_key, auto_increment = false)]
    pub vet_id: i32,
    #[sea_orm(primary_key, auto_increment = false)]
    pub specialty_id: i32,
}

#[derive(Copy, Clone, Debug, EnumIter)]
pub enum Relation {
    Vet,
    Specialty,
}

impl RelationTrait for Relation {
    fn def(&self) -> RelationDef {
        match self {
            Relation::Vet => Entity::belongs_to(vet::Entity)
                .from(Column::VetId)
                .to(vet::Column::Id)
                .into(),
            Relation::Specialty => Entity::belongs_to(specialty::Entity)
                .from(Column::SpecialtyId)
                .to(specialty::Column::Id)
                .into(),
        }
    }
}

impl ActiveModelBehavior for ActiveModel {}
