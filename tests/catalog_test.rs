use sea_orm::{DatabaseConnection, EntityTrait};

use bibliodades::db;
use bibliodades::models::{autor, llibre};
use bibliodades::services::{self, biblioteca_service, catalog_service, ServiceError};

// Helper to create a test database
async fn setup_test_db() -> DatabaseConnection {
    // In-memory SQLite for testing
    db::init_db("sqlite::memory:")
        .await
        .expect("Failed to init DB")
}

#[tokio::test]
async fn add_autor_persists_and_reloads_equal() {
    let db = setup_test_db().await;

    let created = catalog_service::add_autor(&db, "A. Camus")
        .await
        .expect("create author");
    assert!(created.autor_id > 0);
    assert_eq!(created.nom, "A. Camus");

    let loaded_once = autor::Entity::find_by_id(created.autor_id)
        .one(&db)
        .await
        .expect("query")
        .expect("author exists");
    let loaded_twice = autor::Entity::find_by_id(created.autor_id)
        .one(&db)
        .await
        .expect("query")
        .expect("author exists");

    // Two loads of the same row are equal; a different row never is.
    assert_eq!(loaded_once, loaded_twice);

    let other = catalog_service::add_autor(&db, "A. Camus")
        .await
        .expect("create author");
    assert_ne!(created.autor_id, other.autor_id);
    assert_ne!(loaded_once, other);
}

#[tokio::test]
async fn link_unlink_round_trip_restores_both_sides() {
    let db = setup_test_db().await;

    let camus = catalog_service::add_autor(&db, "A. Camus").await.unwrap();
    let pesta = catalog_service::add_llibre(&db, "978-1", "La Pesta", "Gallimard", 1947)
        .await
        .unwrap();

    let abans_llibre = catalog_service::autors_de_llibre(&db, pesta.llibre_id)
        .await
        .unwrap();
    let abans_autor = catalog_service::llibres_de_autor(&db, camus.autor_id)
        .await
        .unwrap();
    assert!(abans_llibre.is_empty());
    assert!(abans_autor.is_empty());

    catalog_service::link_autor(&db, pesta.llibre_id, camus.autor_id)
        .await
        .unwrap();

    // Visible from both sides after linking.
    let autors = catalog_service::autors_de_llibre(&db, pesta.llibre_id)
        .await
        .unwrap();
    assert_eq!(autors.len(), 1);
    assert_eq!(autors[0].nom, "A. Camus");
    let llibres = catalog_service::llibres_de_autor(&db, camus.autor_id)
        .await
        .unwrap();
    assert_eq!(llibres.len(), 1);
    assert_eq!(llibres[0].titol, "La Pesta");

    catalog_service::unlink_autor(&db, pesta.llibre_id, camus.autor_id)
        .await
        .unwrap();

    // Both sides are back to the pre-link state.
    assert_eq!(
        catalog_service::autors_de_llibre(&db, pesta.llibre_id)
            .await
            .unwrap(),
        abans_llibre
    );
    assert_eq!(
        catalog_service::llibres_de_autor(&db, camus.autor_id)
            .await
            .unwrap(),
        abans_autor
    );
}

#[tokio::test]
async fn link_autor_is_idempotent() {
    let db = setup_test_db().await;

    let camus = catalog_service::add_autor(&db, "A. Camus").await.unwrap();
    let pesta = catalog_service::add_llibre(&db, "978-1", "La Pesta", "Gallimard", 1947)
        .await
        .unwrap();

    catalog_service::link_autor(&db, pesta.llibre_id, camus.autor_id)
        .await
        .unwrap();
    catalog_service::link_autor(&db, pesta.llibre_id, camus.autor_id)
        .await
        .unwrap();

    let autors = catalog_service::autors_de_llibre(&db, pesta.llibre_id)
        .await
        .unwrap();
    assert_eq!(autors.len(), 1);
}

#[tokio::test]
async fn link_autor_rejects_missing_rows() {
    let db = setup_test_db().await;

    let camus = catalog_service::add_autor(&db, "A. Camus").await.unwrap();

    let err = catalog_service::link_autor(&db, 999, camus.autor_id)
        .await
        .unwrap_err();
    assert!(matches!(err, ServiceError::NotFound));
}

#[tokio::test]
async fn update_autor_replaces_book_set() {
    let db = setup_test_db().await;

    let camus = catalog_service::add_autor(&db, "Camus").await.unwrap();
    let pesta = catalog_service::add_llibre(&db, "978-1", "La Pesta", "Gallimard", 1947)
        .await
        .unwrap();
    let estrany = catalog_service::add_llibre(&db, "978-2", "L'Estrany", "Gallimard", 1942)
        .await
        .unwrap();

    catalog_service::link_autor(&db, pesta.llibre_id, camus.autor_id)
        .await
        .unwrap();

    let updated = catalog_service::update_autor(
        &db,
        camus.autor_id,
        "A. Camus",
        &[estrany.llibre_id],
    )
    .await
    .unwrap();
    assert_eq!(updated.nom, "A. Camus");

    let llibres = catalog_service::llibres_de_autor(&db, camus.autor_id)
        .await
        .unwrap();
    assert_eq!(llibres.len(), 1);
    assert_eq!(llibres[0].titol, "L'Estrany");
}

#[tokio::test]
async fn update_autor_missing_id_is_not_found() {
    let db = setup_test_db().await;

    let err = catalog_service::update_autor(&db, 42, "Nobody", &[])
        .await
        .unwrap_err();
    assert!(matches!(err, ServiceError::NotFound));
}

#[tokio::test]
async fn duplicate_isbn_fails_without_partial_state() {
    let db = setup_test_db().await;

    catalog_service::add_llibre(&db, "978-1", "La Pesta", "Gallimard", 1947)
        .await
        .unwrap();

    let err = catalog_service::add_llibre(&db, "978-1", "Una altra", "Edicions 62", 1999)
        .await
        .unwrap_err();
    assert!(matches!(err, ServiceError::Database(_)));

    let llibres = services::list_all::<llibre::Entity>(&db).await.unwrap();
    assert_eq!(llibres.len(), 1);
    assert_eq!(llibres[0].titol, "La Pesta");
}

#[tokio::test]
async fn find_llibres_amb_autors_excludes_authorless_books() {
    let db = setup_test_db().await;

    let camus = catalog_service::add_autor(&db, "A. Camus").await.unwrap();
    let pesta = catalog_service::add_llibre(&db, "978-1", "La Pesta", "Gallimard", 1947)
        .await
        .unwrap();
    catalog_service::add_llibre(&db, "978-2", "Anònim", "Desconeguda", 1900)
        .await
        .unwrap();
    catalog_service::link_autor(&db, pesta.llibre_id, camus.autor_id)
        .await
        .unwrap();

    let rows = catalog_service::find_llibres_amb_autors(&db).await.unwrap();
    assert_eq!(rows.len(), 1);
    assert_eq!(rows[0].llibre.titol, "La Pesta");
    assert_eq!(rows[0].autors.len(), 1);
    assert_eq!(rows[0].autors[0].nom, "A. Camus");
}

#[tokio::test]
async fn find_autors_amb_llibres_includes_bookless_authors() {
    let db = setup_test_db().await;

    catalog_service::add_autor(&db, "M. Rodoreda").await.unwrap();

    let rows = catalog_service::find_autors_amb_llibres(&db).await.unwrap();
    assert_eq!(rows.len(), 1);
    assert_eq!(rows[0].autor.nom, "M. Rodoreda");
    assert!(rows[0].llibres.is_empty());
}

#[tokio::test]
async fn find_llibres_amb_biblioteques_pairs_title_with_library() {
    let db = setup_test_db().await;

    let pesta = catalog_service::add_llibre(&db, "978-1", "La Pesta", "Gallimard", 1947)
        .await
        .unwrap();
    let central = biblioteca_service::add_biblioteca(&db, "Central", "Girona", None, None, None)
        .await
        .unwrap();
    let nord = biblioteca_service::add_biblioteca(&db, "Nord", "Figueres", None, None, None)
        .await
        .unwrap();
    biblioteca_service::add_exemplar(&db, "EX-001", pesta.llibre_id, central.biblioteca_id)
        .await
        .unwrap();
    biblioteca_service::add_exemplar(&db, "EX-002", pesta.llibre_id, nord.biblioteca_id)
        .await
        .unwrap();

    let mut rows = catalog_service::find_llibres_amb_biblioteques(&db)
        .await
        .unwrap();
    rows.sort();
    assert_eq!(
        rows,
        vec![
            ("La Pesta".to_string(), "Central".to_string()),
            ("La Pesta".to_string(), "Nord".to_string()),
        ]
    );
}

#[tokio::test]
async fn list_all_returns_every_row() {
    let db = setup_test_db().await;

    catalog_service::add_autor(&db, "A. Camus").await.unwrap();
    catalog_service::add_autor(&db, "M. Rodoreda").await.unwrap();

    let autors = services::list_all::<autor::Entity>(&db).await.unwrap();
    assert_eq!(autors.len(), 2);
}
