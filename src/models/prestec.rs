use std::fmt;

use sea_orm::entity::prelude::*;
use serde::{Deserialize, Serialize};

#[derive(Clone, Debug, PartialEq, DeriveEntityModel, Serialize, Deserialize)]
#[sea_orm(table_name = "prestecs")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub prestec_id: i32,
    pub exemplar_id: i32,
    pub persona_id: i32,
    pub data_prestec: Date,
    pub data_retorn_prevista: Date,
    pub data_retorn_real: Option<Date>,
    pub actiu: bool,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {
    #[sea_orm(
        belongs_to = "super::exemplar::Entity",
        from = "Column::ExemplarId",
        to = "super::exemplar::Column::ExemplarId",
        on_update = "NoAction",
        on_delete = "Cascade"
    )]
    Exemplar,
    #[sea_orm(
        belongs_to = "super::persona::Entity",
        from = "Column::PersonaId",
        to = "super::persona::Column::PersonaId",
        on_update = "NoAction",
        on_delete = "Cascade"
    )]
    Persona,
}

impl Related<super::exemplar::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::Exemplar.def()
    }
}

impl Related<super::persona::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::Persona.def()
    }
}

impl ActiveModelBehavior for ActiveModel {}

impl Model {
    /// A loan is overdue iff it is still active and its expected return
    /// date is strictly before `avui`. A returned loan is never overdue,
    /// no matter how late it came back.
    pub fn es_retardat(&self, avui: Date) -> bool {
        self.actiu && self.data_retorn_prevista < avui
    }
}

impl fmt::Display for Model {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "Prestec[id={}, exemplar_id={}, persona_id={}, data_prestec='{}', data_retorn_prevista='{}'",
            self.prestec_id,
            self.exemplar_id,
            self.persona_id,
            self.data_prestec,
            self.data_retorn_prevista
        )?;
        if let Some(retorn) = self.data_retorn_real {
            write!(f, ", data_retorn_real='{}'", retorn)?;
        }
        write!(f, ", actiu={}]", self.actiu)
    }
}
