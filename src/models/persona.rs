use std::fmt;

use sea_orm::entity::prelude::*;
use serde::{Deserialize, Serialize};

#[derive(Clone, Debug, PartialEq, DeriveEntityModel, Serialize, Deserialize)]
#[sea_orm(table_name = "persones")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub persona_id: i32,
    pub dni: String,
    pub nom: String,
    pub telefon: Option<String>,
    pub email: Option<String>,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {
    #[sea_orm(has_many = "super::prestec::Entity")]
    Prestecs,
}

impl Related<super::prestec::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::Prestecs.def()
    }
}

impl ActiveModelBehavior for ActiveModel {}

impl fmt::Display for Model {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "Persona[id={}, dni='{}', nom='{}']",
            self.persona_id, self.dni, self.nom
        )
    }
}
