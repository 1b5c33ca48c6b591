use sea_orm::entity::prelude::*;

#[derive(Clone, Debug, PartialEq, DeriveEntityModel)]
#[sea_orm(table_name = "autor_llibre")]
pub struct Model {
    #[sea_orm(primary_key, auto_increment = false)]
    pub llibre_id: i32,
    #[sea_orm(primary_key, auto_increment = false)]
    pub autor_id: i32,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {
    #[sea_orm(
        belongs_to = "super::llibre::Entity",
        from = "Column::LlibreId",
        to = "super::llibre::Column::LlibreId",
        on_update = "Cascade",
        on_delete = "Cascade"
    )]
    Llibre,
    #[sea_orm(
        belongs_to = "super::autor::Entity",
        from = "Column::AutorId",
        to = "super::autor::Column::AutorId",
        on_update = "Cascade",
        on_delete = "Cascade"
    )]
    Autor,
}

impl ActiveModelBehavior for ActiveModel {}
