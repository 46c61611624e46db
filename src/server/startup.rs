use axum::http::{header, HeaderValue, Method};
use tower_http::cors::CorsLayer;

use crate::server::{
    config::Config,
    data::dice::DiceRepository,
    error::{config::ConfigError, AppError},
};

/// Connects to the Sqlite database and runs pending migrations.
///
/// Establishes a connection pool using the connection string from configuration, then
/// runs all pending SeaORM migrations so the schema is up-to-date before the server
/// accepts requests.
///
/// # Arguments
/// - `config` - Application configuration containing the database URL
///
/// # Returns
/// - `Ok(DatabaseConnection)` - Connected database with migrations applied
/// - `Err(AppError::DbErr)` - Failed to connect to database or run migrations
pub async fn connect_to_database(config: &Config) -> Result<sea_orm::DatabaseConnection, AppError> {
    use migration::{Migrator, MigratorTrait};
    use sea_orm::{ConnectOptions, Database};

    let mut opt = ConnectOptions::new(&config.database_url);
    opt.sqlx_logging(false);

    let db = Database::connect(opt).await?;

    Migrator::up(&db, None).await?;

    Ok(db)
}

/// Inserts any missing members of the standard dice catalog.
///
/// Safe to run on every boot; an already complete catalog is left untouched.
pub async fn seed_dice_catalog(db: &sea_orm::DatabaseConnection) -> Result<(), AppError> {
    let inserted = DiceRepository::new(db).seed_catalog().await?;

    if inserted > 0 {
        tracing::info!("Seeded {} dice into the catalog", inserted);
    }

    Ok(())
}

/// Builds the CORS layer from the configured allow-list.
///
/// An empty list yields a layer that adds no CORS headers, so browsers fall back to
/// same-origin behaviour.
pub fn cors_layer(config: &Config) -> Result<CorsLayer, AppError> {
    let origins = config
        .cors_allowed_origins
        .iter()
        .map(|origin| {
            HeaderValue::from_str(origin).map_err(|_| ConfigError::InvalidValue {
                var: "CORS_ALLOWED_ORIGINS".to_string(),
                value: origin.clone(),
                reason: "not a valid header value".to_string(),
            })
        })
        .collect::<Result<Vec<_>, _>>()?;

    Ok(CorsLayer::new()
        .allow_origin(origins)
        .allow_methods([Method::GET, Method::POST, Method::PATCH, Method::DELETE])
        .allow_headers([header::AUTHORIZATION, header::CONTENT_TYPE])
        .allow_credentials(true))
}
