use chrono::{Duration, Local};
use sea_orm::DatabaseConnection;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use bibliodades::config::Config;
use bibliodades::services::{
    biblioteca_service, catalog_service, persona_service, prestec_service, ServiceError,
};
use bibliodades::{db, format, models, services};

#[tokio::main]
async fn main() {
    dotenvy::dotenv().ok();

    // Initialize tracing
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "info".into()),
        )
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .init();

    let config = Config::from_env();

    let db = match db::init_db(&config.database_url).await {
        Ok(db) => db,
        Err(e) => {
            tracing::error!("Failed to initialize database: {}", e);
            std::process::exit(1);
        }
    };

    if let Err(e) = run_demo(&db).await {
        tracing::error!("Demo run failed: {}", e);
        std::process::exit(1);
    }

    if let Err(e) = db::close_db(db).await {
        tracing::error!("Failed to close database: {}", e);
    }
}

/// Seed the classic lending scenario (first run only) and print the
/// catalog reports.
async fn run_demo(db: &DatabaseConnection) -> Result<(), ServiceError> {
    if persona_service::find_per_dni(db, "12345678A").await?.is_none() {
        tracing::info!("Seeding demo data...");

        let camus = catalog_service::add_autor(db, "A. Camus").await?;
        let pesta = catalog_service::add_llibre(db, "978-1", "La Pesta", "Gallimard", 1947).await?;
        catalog_service::link_autor(db, pesta.llibre_id, camus.autor_id).await?;

        let central = biblioteca_service::add_biblioteca(
            db,
            "Central",
            "Girona",
            Some("Plaça del Vi 1"),
            Some("972000000"),
            Some("central@biblioteques.cat"),
        )
        .await?;
        let exemplar =
            biblioteca_service::add_exemplar(db, "EX-001", pesta.llibre_id, central.biblioteca_id)
                .await?;

        let joan = persona_service::add_persona(
            db,
            "12345678A",
            "Joan",
            Some("600000000"),
            Some("joan@example.com"),
        )
        .await?;

        let avui = Local::now().date_naive();
        let prestec = prestec_service::add_prestec(
            db,
            exemplar.exemplar_id,
            joan.persona_id,
            avui,
            avui + Duration::days(14),
        )
        .await?;

        println!("-- Active loans --");
        print!(
            "{}",
            format::format_pairs(&prestec_service::find_prestecs_actius(db).await?)
        );

        prestec_service::register_return(db, prestec.prestec_id, avui + Duration::days(10)).await?;
    }

    println!("-- Books with authors --");
    print!(
        "{}",
        format::format_llibres(&catalog_service::find_llibres_amb_autors(db).await?)
    );

    println!("-- Authors with books --");
    print!(
        "{}",
        format::format_autors(&catalog_service::find_autors_amb_llibres(db).await?)
    );

    println!("-- Books with libraries --");
    print!(
        "{}",
        format::format_pairs(&catalog_service::find_llibres_amb_biblioteques(db).await?)
    );

    let persones = services::list_all::<models::persona::Entity>(db).await?;
    println!("-- People --");
    println!(
        "{}",
        serde_json::to_string_pretty(&persones).unwrap_or_default()
    );

    tracing::info!(
        active_loans = prestec_service::count_prestecs_actius(db).await?,
        "demo finished"
    );

    Ok(())
}
