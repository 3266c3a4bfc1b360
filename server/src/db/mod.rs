//! Database pool construction and schema migrations.
//!
//! The documents, prompt template, and contact submission tables are all
//! created here via embedded migrations, so a fresh database is usable the
//! moment startup completes.

use sqlx::PgPool;
use sqlx::postgres::PgPoolOptions;

/// Connect the shared pool and bring the schema up to date.
///
/// Pool sizing is the caller's decision; startup derives it from the
/// environment so tests and tools can pick their own.
///
/// # Errors
///
/// Returns an error if the connection or a migration fails.
pub async fn init_pool(database_url: &str, max_connections: u32) -> Result<PgPool, sqlx::Error> {
    let pool = PgPoolOptions::new()
        .max_connections(max_connections)
        .connect(database_url)
        .await?;

    sqlx::migrate!("src/db/migrations").run(&pool).await?;
    tracing::info!(max_connections, "database ready, migrations up to date");

    Ok(pool)
}
