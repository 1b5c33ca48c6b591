//! People who borrow copies.

use sea_orm::*;
use tracing::info;

use crate::models::persona::{self, Entity as Persona};

use super::ServiceError;

/// Create and persist a new person. DNI and email are unique; a duplicate
/// surfaces as a `Database` error from the failed insert.
pub async fn add_persona(
    db: &DatabaseConnection,
    dni: &str,
    nom: &str,
    telefon: Option<&str>,
    email: Option<&str>,
) -> Result<persona::Model, ServiceError> {
    let persona = persona::ActiveModel {
        dni: Set(dni.to_owned()),
        nom: Set(nom.to_owned()),
        telefon: Set(telefon.map(str::to_owned)),
        email: Set(email.map(str::to_owned)),
        ..Default::default()
    };

    let model = persona.insert(db).await?;
    info!(persona_id = model.persona_id, dni, "created person");
    Ok(model)
}

/// Look up a person by national id.
pub async fn find_per_dni(
    db: &DatabaseConnection,
    dni: &str,
) -> Result<Option<persona::Model>, ServiceError> {
    Ok(Persona::find()
        .filter(persona::Column::Dni.eq(dni))
        .one(db)
        .await?)
}
