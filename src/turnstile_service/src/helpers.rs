use secrecy::ExposeSecret;
use sqlx::{PgPool, postgres::PgPoolOptions};
use turnstile_adapters::{config::settings::PostgresSetting, persistence::MIGRATOR};

/// Configure and return a PostgreSQL connection pool
///
/// Connects with the configured URL and pool size, then runs all pending migrations.
pub async fn configure_postgresql(setting: &PostgresSetting) -> Result<PgPool, sqlx::Error> {
    let pg_pool = get_postgres_pool(setting.url.expose_secret(), setting.max_connections).await?;

    MIGRATOR.run(&pg_pool).await?;

    Ok(pg_pool)
}

/// Create a PostgreSQL connection pool
pub async fn get_postgres_pool(url: &str, max_connections: u32) -> Result<PgPool, sqlx::Error> {
    PgPoolOptions::new()
        .max_connections(max_connections)
        .connect(url)
        .await
}
