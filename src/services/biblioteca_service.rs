//! Libraries and the physical copies they hold.

use sea_orm::*;
use tracing::info;

use crate::models::biblioteca::{self, Entity as Biblioteca};
use crate::models::exemplar::{self, Entity as Exemplar};
use crate::models::llibre::Entity as Llibre;

use super::ServiceError;

/// Create and persist a new library.
pub async fn add_biblioteca(
    db: &DatabaseConnection,
    nom: &str,
    ciutat: &str,
    adreca: Option<&str>,
    telefon: Option<&str>,
    email: Option<&str>,
) -> Result<biblioteca::Model, ServiceError> {
    let biblioteca = biblioteca::ActiveModel {
        nom: Set(nom.to_owned()),
        ciutat: Set(ciutat.to_owned()),
        adreca: Set(adreca.map(str::to_owned)),
        telefon: Set(telefon.map(str::to_owned)),
        email: Set(email.map(str::to_owned)),
        ..Default::default()
    };

    let model = biblioteca.insert(db).await?;
    info!(biblioteca_id = model.biblioteca_id, nom, "created library");
    Ok(model)
}

/// Create a copy of a book at a library. New copies start out available.
pub async fn add_exemplar(
    db: &DatabaseConnection,
    codi_barres: &str,
    llibre_id: i32,
    biblioteca_id: i32,
) -> Result<exemplar::Model, ServiceError> {
    Llibre::find_by_id(llibre_id)
        .one(db)
        .await?
        .ok_or(ServiceError::NotFound)?;
    Biblioteca::find_by_id(biblioteca_id)
        .one(db)
        .await?
        .ok_or(ServiceError::NotFound)?;

    let exemplar = exemplar::ActiveModel {
        codi_barres: Set(codi_barres.to_owned()),
        llibre_id: Set(llibre_id),
        biblioteca_id: Set(biblioteca_id),
        disponible: Set(true),
        ..Default::default()
    };

    let model = exemplar.insert(db).await?;
    info!(
        exemplar_id = model.exemplar_id,
        codi_barres, "created copy"
    );
    Ok(model)
}

/// Look up a copy by its unique barcode.
pub async fn find_per_codi_barres(
    db: &DatabaseConnection,
    codi_barres: &str,
) -> Result<Option<exemplar::Model>, ServiceError> {
    Ok(Exemplar::find()
        .filter(exemplar::Column::CodiBarres.eq(codi_barres))
        .one(db)
        .await?)
}
