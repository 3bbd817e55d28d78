use sqlx::{Pool, Postgres};
use tracing::info;

/// Apply pending migrations from the embedded migrations directory.
///
/// Safe to run on every startup; sqlx tracks what has already been
/// applied.
pub async fn run_migrations(pool: &Pool<Postgres>) -> Result<(), sqlx::migrate::MigrateError> {
    info!("Running database migrations");

    sqlx::migrate!("./migrations").run(pool).await?;

    info!("Database migrations up to date");
    Ok(())
}
