use std::fmt;

use sea_orm::entity::prelude::*;
use serde::{Deserialize, Serialize};

#[derive(Clone, Debug, PartialEq, DeriveEntityModel, Serialize, Deserialize)]
#[sea_orm(table_name = "autors")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub autor_id: i32,
    pub nom: String,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {
    #[sea_orm(has_many = "super::llibre::Entity")]
    Llibre,
}

impl Related<super::llibre::Entity> for Entity {
    fn to() -> RelationDef {
        super::autor_llibre::Relation::Llibre.def()
    }

    fn via() -> Option<RelationDef> {
        Some(super::autor_llibre::Relation::Autor.def().rev())
    }
}

impl ActiveModelBehavior for ActiveModel {}

impl fmt::Display for Model {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Autor[id={}, nom='{}']", self.autor_id, self.nom)
    }
}

/// An author with its books eagerly fetched, so rendering never has to
/// touch the database again.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AutorAmbLlibres {
    pub autor: Model,
    pub llibres: Vec<super::llibre::Model>,
}

impl fmt::Display for AutorAmbLlibres {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Autor[id={}, nom='{}'", self.autor.autor_id, self.autor.nom)?;
        if !self.llibres.is_empty() {
            let titols: Vec<&str> = self.llibres.iter().map(|l| l.titol.as_str()).collect();
            write!(f, ", llibres={{{}}}", titols.join(", "))?;
        }
        write!(f, "]")
    }
}
