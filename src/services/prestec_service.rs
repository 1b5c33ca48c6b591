//! Loans: issuing, returning, and reporting on active loans.

use std::collections::HashMap;

use chrono::NaiveDate;
use sea_orm::*;
use tracing::info;

use crate::models::exemplar::{self, Entity as Exemplar};
use crate::models::llibre::Entity as Llibre;
use crate::models::persona::Entity as Persona;
use crate::models::prestec::{self, Entity as Prestec};

use super::ServiceError;

/// Issue a loan of a copy to a person. In one transaction the copy is
/// marked unavailable and the active loan inserted; if the commit fails,
/// neither is observable. A copy that already has an active loan (its
/// `disponible` flag is false) is rejected with `InvalidState`.
pub async fn add_prestec(
    db: &DatabaseConnection,
    exemplar_id: i32,
    persona_id: i32,
    data_prestec: NaiveDate,
    data_retorn_prevista: NaiveDate,
) -> Result<prestec::Model, ServiceError> {
    let txn = db.begin().await?;

    let exemplar = Exemplar::find_by_id(exemplar_id)
        .one(&txn)
        .await?
        .ok_or(ServiceError::NotFound)?;

    if !exemplar.disponible {
        return Err(ServiceError::InvalidState(format!(
            "copy '{}' already has an active loan",
            exemplar.codi_barres
        )));
    }

    Persona::find_by_id(persona_id)
        .one(&txn)
        .await?
        .ok_or(ServiceError::NotFound)?;

    let mut exemplar: exemplar::ActiveModel = exemplar.into();
    exemplar.disponible = Set(false);
    exemplar.update(&txn).await?;

    let prestec = prestec::ActiveModel {
        exemplar_id: Set(exemplar_id),
        persona_id: Set(persona_id),
        data_prestec: Set(data_prestec),
        data_retorn_prevista: Set(data_retorn_prevista),
        data_retorn_real: Set(None),
        actiu: Set(true),
        ..Default::default()
    }
    .insert(&txn)
    .await?;

    txn.commit().await?;

    info!(
        prestec_id = prestec.prestec_id,
        exemplar_id, persona_id, "created loan"
    );
    Ok(prestec)
}

/// Register the return of a loan: stamp the actual return date, deactivate
/// the loan and free its copy, all in one transaction. Returning a loan
/// twice is `InvalidState`.
pub async fn register_return(
    db: &DatabaseConnection,
    prestec_id: i32,
    data_retorn_real: NaiveDate,
) -> Result<prestec::Model, ServiceError> {
    let txn = db.begin().await?;

    let prestec = Prestec::find_by_id(prestec_id)
        .one(&txn)
        .await?
        .ok_or(ServiceError::NotFound)?;

    if !prestec.actiu {
        return Err(ServiceError::InvalidState(
            "loan is already returned".to_string(),
        ));
    }

    let exemplar = Exemplar::find_by_id(prestec.exemplar_id)
        .one(&txn)
        .await?
        .ok_or(ServiceError::NotFound)?;

    let mut prestec: prestec::ActiveModel = prestec.into();
    prestec.data_retorn_real = Set(Some(data_retorn_real));
    prestec.actiu = Set(false);
    let updated = prestec.update(&txn).await?;

    let mut exemplar: exemplar::ActiveModel = exemplar.into();
    exemplar.disponible = Set(true);
    exemplar.update(&txn).await?;

    txn.commit().await?;

    info!(prestec_id, "registered loan return");
    Ok(updated)
}

/// (book title, person name) for every active loan.
pub async fn find_prestecs_actius(
    db: &DatabaseConnection,
) -> Result<Vec<(String, String)>, ServiceError> {
    let prestecs = Prestec::find()
        .filter(prestec::Column::Actiu.eq(true))
        .find_also_related(Persona)
        .all(db)
        .await?;

    let exemplar_ids: Vec<i32> = prestecs.iter().map(|(p, _)| p.exemplar_id).collect();

    let mut titols: HashMap<i32, String> = HashMap::new();

    if !exemplar_ids.is_empty() {
        let exemplars = Exemplar::find()
            .filter(exemplar::Column::ExemplarId.is_in(exemplar_ids))
            .find_also_related(Llibre)
            .all(db)
            .await?;

        for (exemplar, llibre) in exemplars {
            if let Some(llibre) = llibre {
                titols.insert(exemplar.exemplar_id, llibre.titol);
            }
        }
    }

    let rows = prestecs
        .into_iter()
        .map(|(prestec, persona)| {
            let titol = titols
                .get(&prestec.exemplar_id)
                .cloned()
                .unwrap_or_else(|| "Unknown".to_string());
            let nom = persona
                .map(|p| p.nom)
                .unwrap_or_else(|| "Unknown".to_string());
            (titol, nom)
        })
        .collect();

    Ok(rows)
}

/// Count active loans.
pub async fn count_prestecs_actius(db: &DatabaseConnection) -> Result<i64, ServiceError> {
    let count = Prestec::find()
        .filter(prestec::Column::Actiu.eq(true))
        .count(db)
        .await?;
    Ok(count as i64)
}
