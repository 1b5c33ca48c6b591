use sea_orm::{ConnectionTrait, Database, DatabaseConnection, DbErr, Statement};

/// Connect to the store and bring the schema up to date. Any failure here
/// is fatal to the caller: no operation may run without a live connection.
pub async fn init_db(database_url: &str) -> Result<DatabaseConnection, DbErr> {
    let db = Database::connect(database_url).await?;

    run_migrations(&db).await?;

    Ok(db)
}

/// Close the connection pool. Ownership moves into the call, so a handle
/// cannot be closed twice or used after teardown.
pub async fn close_db(db: DatabaseConnection) -> Result<(), DbErr> {
    db.close().await
}

async fn run_migrations(db: &DatabaseConnection) -> Result<(), DbErr> {
    db.execute(Statement::from_string(
        db.get_database_backend(),
        "PRAGMA foreign_keys = ON".to_owned(),
    ))
    .await?;

    db.execute(Statement::from_string(
        db.get_database_backend(),
        r#"
        CREATE TABLE IF NOT EXISTS autors (
            autor_id INTEGER PRIMARY KEY AUTOINCREMENT,
            nom TEXT NOT NULL
        )
        "#
        .to_owned(),
    ))
    .await?;

    db.execute(Statement::from_string(
        db.get_database_backend(),
        r#"
        CREATE TABLE IF NOT EXISTS llibres (
            llibre_id INTEGER PRIMARY KEY AUTOINCREMENT,
            isbn TEXT NOT NULL UNIQUE,
            titol TEXT NOT NULL,
            editorial TEXT NOT NULL,
            any_publicacio INTEGER NOT NULL
        )
        "#
        .to_owned(),
    ))
    .await?;

    db.execute(Statement::from_string(
        db.get_database_backend(),
        r#"
        CREATE TABLE IF NOT EXISTS autor_llibre (
            llibre_id INTEGER NOT NULL,
            autor_id INTEGER NOT NULL,
            PRIMARY KEY (llibre_id, autor_id),
            FOREIGN KEY (llibre_id) REFERENCES llibres(llibre_id) ON DELETE CASCADE,
            FOREIGN KEY (autor_id) REFERENCES autors(autor_id) ON DELETE CASCADE
        )
        "#
        .to_owned(),
    ))
    .await?;

    db.execute(Statement::from_string(
        db.get_database_backend(),
        r#"
        CREATE TABLE IF NOT EXISTS biblioteques (
            biblioteca_id INTEGER PRIMARY KEY AUTOINCREMENT,
            nom TEXT NOT NULL,
            ciutat TEXT NOT NULL,
            adreca TEXT,
            telefon TEXT,
            email TEXT
        )
        "#
        .to_owned(),
    ))
    .await?;

    db.execute(Statement::from_string(
        db.get_database_backend(),
        r#"
        CREATE TABLE IF NOT EXISTS exemplars (
            exemplar_id INTEGER PRIMARY KEY AUTOINCREMENT,
            codi_barres TEXT NOT NULL UNIQUE,
            llibre_id INTEGER NOT NULL,
            biblioteca_id INTEGER NOT NULL,
            disponible BOOLEAN NOT NULL DEFAULT 1,
            FOREIGN KEY (llibre_id) REFERENCES llibres(llibre_id) ON DELETE CASCADE,
            FOREIGN KEY (biblioteca_id) REFERENCES biblioteques(biblioteca_id) ON DELETE CASCADE
        )
        "#
        .to_owned(),
    ))
    .await?;

    db.execute(Statement::from_string(
        db.get_database_backend(),
        "CREATE INDEX IF NOT EXISTS idx_exemplars_llibre_id ON exemplars(llibre_id)".to_owned(),
    ))
    .await?;

    db.execute(Statement::from_string(
        db.get_database_backend(),
        r#"
        CREATE TABLE IF NOT EXISTS persones (
            persona_id INTEGER PRIMARY KEY AUTOINCREMENT,
            dni TEXT NOT NULL UNIQUE,
            nom TEXT NOT NULL,
            telefon TEXT,
            email TEXT UNIQUE
        )
        "#
        .to_owned(),
    ))
    .await?;

    db.execute(Statement::from_string(
        db.get_database_backend(),
        r#"
        CREATE TABLE IF NOT EXISTS prestecs (
            prestec_id INTEGER PRIMARY KEY AUTOINCREMENT,
            exemplar_id INTEGER NOT NULL,
            persona_id INTEGER NOT NULL,
            data_prestec TEXT NOT NULL,
            data_retorn_prevista TEXT NOT NULL,
            data_retorn_real TEXT,
            actiu BOOLEAN NOT NULL DEFAULT 1,
            FOREIGN KEY (exemplar_id) REFERENCES exemplars(exemplar_id) ON DELETE CASCADE,
            FOREIGN KEY (persona_id) REFERENCES persones(persona_id) ON DELETE CASCADE
        )
        "#
        .to_owned(),
    ))
    .await?;

    db.execute(Statement::from_string(
        db.get_database_backend(),
        "CREATE INDEX IF NOT EXISTS idx_prestecs_exemplar_id ON prestecs(exemplar_id)".to_owned(),
    ))
    .await?;

    db.execute(Statement::from_string(
        db.get_database_backend(),
        "CREATE INDEX IF NOT EXISTS idx_prestecs_actiu ON prestecs(actiu)".to_owned(),
    ))
    .await?;

    Ok(())
}
