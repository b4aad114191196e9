use sea_orm::entity::prelude::*;
use serde::{Deserialize, Serialize};

use crate::role;

#[derive(Clone, Debug, PartialEq, DeriveEntityModel, Serialize, Deserialize)]
#[sea_orm(table_name = "users")]
pub struct Model {
    #[sea_orm(primary_key, auto_increment = false)]
    pub username: String,
    pub password: String,
    pub enabled: bool,
}

#[derive(Copy, Clone, Debug, EnumIter)]
pub enum Relation {
    Roles,
}

impl RelationTrait for Relation {
    fn def(&self) -> RelationDef {
        match self { Relation::Roles => Entity::has_many(role::Entity).into() }
    }
}

impl Related<role::Entity> for Entity {
    fn to() -> RelationDef { Relation::Roles.def() }
}

impl ActiveModelBehavior for ActiveModel {}
