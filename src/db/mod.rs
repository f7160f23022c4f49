// The league database.
mod game;
mod manager;
mod names;
mod player;
mod schedule;
mod team;

use sqlx::{Sqlite, migrate::MigrateDatabase, sqlite::SqlitePoolOptions};

use crate::logic::{error::Result, types::Db};

// Open (and create if needed) the database at the given URL and bring its schema up to date.
pub async fn setup(url: &str) -> Result<Db> {
    if !Sqlite::database_exists(url).await? {
        Sqlite::create_database(url).await?;
    }

    let db = SqlitePoolOptions::new().connect(url).await?;
    sqlx::migrate!("sql/migrations").run(&db).await?;
    return Ok(db);
}

// Database in memory. A single connection that never expires, or the data would vanish with it.
pub async fn setup_in_memory() -> Result<Db> {
    let db = SqlitePoolOptions::new()
        .max_connections(1)
        .idle_timeout(None)
        .max_lifetime(None)
        .connect("sqlite::memory:").await?;

    sqlx::migrate!("sql/migrations").run(&db).await?;
    return Ok(db);
}
