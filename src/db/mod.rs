use sqlx::sqlite::{SqliteConnectOptions, SqlitePool, SqlitePoolOptions};
use std::str::FromStr;

pub mod transaction;

/// Initialize the SQLite connection pool and create tables
pub async fn init_db(database_url: &str) -> Result<SqlitePool, sqlx::Error> {
    let options = SqliteConnectOptions::from_str(database_url)?.create_if_missing(true);

    let pool = SqlitePoolOptions::new().connect_with(options).await?;

    create_tables(&pool).await?;

    Ok(pool)
}

/// Read and execute the schema file. An unreadable schema is a startup
/// failure, not something to limp past.
pub async fn create_tables(pool: &SqlitePool) -> Result<(), sqlx::Error> {
    let sql = std::fs::read_to_string("migrations/create_tables.sql").map_err(|e| {
        sqlx::Error::Configuration(
            format!("Failed to read migrations/create_tables.sql: {}", e).into(),
        )
    })?;

    sqlx::raw_sql(&sql).execute(pool).await?;

    Ok(())
}
