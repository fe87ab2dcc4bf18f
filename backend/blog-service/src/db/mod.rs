/// Database access layer
///
/// Repository functions live in `post_repo`; migrations are embedded in the
/// crate and applied at startup.
pub mod post_repo;

use sqlx::PgPool;

/// Apply embedded migrations.
pub async fn run_migrations(pool: &PgPool) -> Result<(), sqlx::migrate::MigrateError> {
    tracing::info!("running database migrations");
    sqlx::migrate!("./migrations").run(pool).await?;
    tracing::info!("database migrations completed");
    Ok(())
}
