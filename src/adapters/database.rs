use crate::config::DatabaseConfig;
use sqlx::postgres::PgPoolOptions;
use sqlx::{Pool, Postgres};
use std::time::Duration;

pub type DbPool = Pool<Postgres>;

/// Initializes the database connection pool.
///
/// Connections are established lazily so the server can boot and serve
/// traffic while the database is unreachable; the detailed health check
/// reports the degraded state.
///
/// # Errors
/// Returns `sqlx::Error` if the connection URL cannot be parsed.
pub fn init_pool(config: &DatabaseConfig) -> Result<DbPool, sqlx::Error> {
    PgPoolOptions::new()
        .max_connections(config.max_connections)
        .acquire_timeout(Duration::from_secs(config.acquire_timeout_secs))
        .connect_lazy(&config.database_url)
}

/// Applies the embedded schema migrations.
///
/// # Errors
/// Returns an error if the database is unreachable or a migration fails.
pub async fn run_migrations(pool: &DbPool) -> Result<(), sqlx::migrate::MigrateError> {
    sqlx::migrate!().run(pool).await
}
