//! Catalog: authors, books and the many-to-many relation between them.

use std::collections::HashMap;

use sea_orm::*;
use tracing::info;

use crate::models::autor::{self, AutorAmbLlibres, Entity as Autor};
use crate::models::autor_llibre::{self, Entity as AutorLlibre};
use crate::models::biblioteca::Entity as Biblioteca;
use crate::models::exemplar::Entity as Exemplar;
use crate::models::llibre::{self, Entity as Llibre, LlibreAmbAutors};

use super::ServiceError;

/// Create and persist a new author.
pub async fn add_autor(db: &DatabaseConnection, nom: &str) -> Result<autor::Model, ServiceError> {
    let autor = autor::ActiveModel {
        nom: Set(nom.to_owned()),
        ..Default::default()
    };

    let model = autor.insert(db).await?;
    info!(autor_id = model.autor_id, "created author");
    Ok(model)
}

/// Rename an author and replace its full set of books. The rename and the
/// join-table rewrite commit together or not at all.
pub async fn update_autor(
    db: &DatabaseConnection,
    autor_id: i32,
    nom: &str,
    llibre_ids: &[i32],
) -> Result<autor::Model, ServiceError> {
    let txn = db.begin().await?;

    let autor = Autor::find_by_id(autor_id)
        .one(&txn)
        .await?
        .ok_or(ServiceError::NotFound)?;

    let mut autor: autor::ActiveModel = autor.into();
    autor.nom = Set(nom.to_owned());
    let model = autor.update(&txn).await?;

    AutorLlibre::delete_many()
        .filter(autor_llibre::Column::AutorId.eq(autor_id))
        .exec(&txn)
        .await?;

    for llibre_id in llibre_ids {
        // exec_without_returning: composite-key rows have no usable
        // last_insert_id to fetch back.
        AutorLlibre::insert(autor_llibre::ActiveModel {
            llibre_id: Set(*llibre_id),
            autor_id: Set(autor_id),
        })
        .exec_without_returning(&txn)
        .await?;
    }

    txn.commit().await?;
    info!(autor_id, books = llibre_ids.len(), "updated author");
    Ok(model)
}

/// Create and persist a new book.
pub async fn add_llibre(
    db: &DatabaseConnection,
    isbn: &str,
    titol: &str,
    editorial: &str,
    any_publicacio: i32,
) -> Result<llibre::Model, ServiceError> {
    let llibre = llibre::ActiveModel {
        isbn: Set(isbn.to_owned()),
        titol: Set(titol.to_owned()),
        editorial: Set(editorial.to_owned()),
        any_publicacio: Set(any_publicacio),
        ..Default::default()
    };

    let model = llibre.insert(db).await?;
    info!(llibre_id = model.llibre_id, isbn, "created book");
    Ok(model)
}

/// Relate an author to a book. Both rows must already exist; linking the
/// same pair twice is a no-op. The relation becomes visible from both
/// sides (`autors_de_llibre` and `llibres_de_autor`).
pub async fn link_autor(
    db: &DatabaseConnection,
    llibre_id: i32,
    autor_id: i32,
) -> Result<(), ServiceError> {
    Llibre::find_by_id(llibre_id)
        .one(db)
        .await?
        .ok_or(ServiceError::NotFound)?;
    Autor::find_by_id(autor_id)
        .one(db)
        .await?
        .ok_or(ServiceError::NotFound)?;

    let existing = AutorLlibre::find_by_id((llibre_id, autor_id)).one(db).await?;
    if existing.is_some() {
        return Ok(());
    }

    AutorLlibre::insert(autor_llibre::ActiveModel {
        llibre_id: Set(llibre_id),
        autor_id: Set(autor_id),
    })
    .exec_without_returning(db)
    .await?;

    Ok(())
}

/// Remove the relation between an author and a book, if any. Undoes
/// `link_autor` from both sides.
pub async fn unlink_autor(
    db: &DatabaseConnection,
    llibre_id: i32,
    autor_id: i32,
) -> Result<(), ServiceError> {
    AutorLlibre::delete_by_id((llibre_id, autor_id))
        .exec(db)
        .await?;
    Ok(())
}

pub async fn autors_de_llibre(
    db: &DatabaseConnection,
    llibre_id: i32,
) -> Result<Vec<autor::Model>, ServiceError> {
    let llibre = Llibre::find_by_id(llibre_id)
        .one(db)
        .await?
        .ok_or(ServiceError::NotFound)?;

    Ok(llibre.find_related(Autor).all(db).await?)
}

pub async fn llibres_de_autor(
    db: &DatabaseConnection,
    autor_id: i32,
) -> Result<Vec<llibre::Model>, ServiceError> {
    let autor = Autor::find_by_id(autor_id)
        .one(db)
        .await?
        .ok_or(ServiceError::NotFound)?;

    Ok(autor.find_related(Llibre).all(db).await?)
}

/// Books with their authors eagerly loaded. Books without any author are
/// excluded, matching an inner join over the relation.
pub async fn find_llibres_amb_autors(
    db: &DatabaseConnection,
) -> Result<Vec<LlibreAmbAutors>, ServiceError> {
    let rows = Llibre::find().find_with_related(Autor).all(db).await?;

    Ok(rows
        .into_iter()
        .filter(|(_, autors)| !autors.is_empty())
        .map(|(llibre, autors)| LlibreAmbAutors { llibre, autors })
        .collect())
}

/// All authors with their books eagerly loaded, including authors that
/// have no books yet.
pub async fn find_autors_amb_llibres(
    db: &DatabaseConnection,
) -> Result<Vec<AutorAmbLlibres>, ServiceError> {
    let rows = Autor::find().find_with_related(Llibre).all(db).await?;

    Ok(rows
        .into_iter()
        .map(|(autor, llibres)| AutorAmbLlibres { autor, llibres })
        .collect())
}

/// (book title, library name) for every copy in every library.
pub async fn find_llibres_amb_biblioteques(
    db: &DatabaseConnection,
) -> Result<Vec<(String, String)>, ServiceError> {
    let exemplars = Exemplar::find().find_also_related(Llibre).all(db).await?;

    let biblioteques: HashMap<i32, String> = Biblioteca::find()
        .all(db)
        .await?
        .into_iter()
        .map(|b| (b.biblioteca_id, b.nom))
        .collect();

    let rows = exemplars
        .into_iter()
        .filter_map(|(exemplar, llibre)| {
            let titol = llibre.map(|l| l.titol)?;
            let nom = biblioteques.get(&exemplar.biblioteca_id).cloned()?;
            Some((titol, nom))
        })
        .collect();

    Ok(rows)
}
