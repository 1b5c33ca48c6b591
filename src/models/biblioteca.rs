use std::fmt;

use sea_orm::entity::prelude::*;
use serde::{Deserialize, Serialize};

#[derive(Clone, Debug, PartialEq, DeriveEntityModel, Serialize, Deserialize)]
#[sea_orm(table_name = "biblioteques")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub biblioteca_id: i32,
    pub nom: String,
    pub ciutat: String,
    pub adreca: Option<String>,
    pub telefon: Option<String>,
    pub email: Option<String>,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {
    #[sea_orm(has_many = "super::exemplar::Entity")]
    Exemplars,
}

impl Related<super::exemplar::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::Exemplars.def()
    }
}

impl ActiveModelBehavior for ActiveModel {}

impl fmt::Display for Model {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "Biblioteca[id={}, nom='{}', ciutat='{}']",
            self.biblioteca_id, self.nom, self.ciutat
        )
    }
}
