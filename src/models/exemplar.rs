use std::fmt;

use sea_orm::entity::prelude::*;
use serde::{Deserialize, Serialize};

#[derive(Clone, Debug, PartialEq, DeriveEntityModel, Serialize, Deserialize)]
#[sea_orm(table_name = "exemplars")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub exemplar_id: i32,
    pub codi_barres: String,
    pub llibre_id: i32,
    pub biblioteca_id: i32,
    /// False while an active loan references this copy.
    pub disponible: bool,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {
    #[sea_orm(
        belongs_to = "super::llibre::Entity",
        from = "Column::LlibreId",
        to = "super::llibre::Column::LlibreId",
        on_update = "NoAction",
        on_delete = "Cascade"
    )]
    Llibre,
    #[sea_orm(
        belongs_to = "super::biblioteca::Entity",
        from = "Column::BibliotecaId",
        to = "super::biblioteca::Column::BibliotecaId",
        on_update = "NoAction",
        on_delete = "Cascade"
    )]
    Biblioteca,
    #[sea_orm(has_many = "super::prestec::Entity")]
    Prestecs,
}

impl Related<super::llibre::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::Llibre.def()
    }
}

impl Related<super::biblioteca::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::Biblioteca.def()
    }
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
            "Exemplar[id={}, codi_barres='{}', disponible={}]",
            self.exemplar_id, self.codi_barres, self.disponible
        )
    }
}
