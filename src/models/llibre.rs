use std::fmt;

use sea_orm::entity::prelude::*;
use serde::{Deserialize, Serialize};

#[derive(Clone, Debug, PartialEq, DeriveEntityModel, Serialize, Deserialize)]
#[sea_orm(table_name = "llibres")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub llibre_id: i32,
    pub isbn: String,
    pub titol: String,
    pub editorial: String,
    pub any_publicacio: i32,
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

impl Related<super::autor::Entity> for Entity {
    fn to() -> RelationDef {
        super::autor_llibre::Relation::Autor.def()
    }

    fn via() -> Option<RelationDef> {
        Some(super::autor_llibre::Relation::Llibre.def().rev())
    }
}

impl ActiveModelBehavior for ActiveModel {}

impl fmt::Display for Model {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "Llibre[id={}, isbn='{}', titol='{}', editorial='{}', any_publicacio={}]",
            self.llibre_id, self.isbn, self.titol, self.editorial, self.any_publicacio
        )
    }
}

/// A book with its authors eagerly fetched.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LlibreAmbAutors {
    pub llibre: Model,
    pub autors: Vec<super::autor::Model>,
}

impl fmt::Display for LlibreAmbAutors {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let l = &self.llibre;
        write!(
            f,
            "Llibre[id={}, isbn='{}', titol='{}', editorial='{}', any_publicacio={}",
            l.llibre_id, l.isbn, l.titol, l.editorial, l.any_publicacio
        )?;
        if !self.autors.is_empty() {
            let noms: Vec<&str> = self.autors.iter().map(|a| a.nom.as_str()).collect();
            write!(f, ", autors={{{}}}", noms.join(", "))?;
        }
        write!(f, "]")
    }
}
