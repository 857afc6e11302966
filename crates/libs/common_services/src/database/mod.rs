mod error;
mod stores;
mod tables;

pub use error::*;
pub use stores::*;
pub use tables::*;

use app_state::{AppSettings, constants};
use sqlx::postgres::PgPoolOptions;
use sqlx::{Pool, Postgres};
use std::time::Duration;
use tracing::info;

/// Connect to the database, run pending migrations and return the pool.
pub async fn get_db_pool(settings: &AppSettings) -> color_eyre::Result<Pool<Postgres>> {
    let db_constants = &constants().database;
    info!("Connecting to database.");
    let pool = PgPoolOptions::new()
        .max_connections(db_constants.max_connections)
        .min_connections(db_constants.min_connections)
        .max_lifetime(Duration::from_secs(db_constants.max_lifetime))
        .idle_timeout(Duration::from_secs(db_constants.idle_timeout))
        .acquire_timeout(Duration::from_secs(db_constants.acquire_timeout))
        .test_before_acquire(true)
        .connect(&settings.secrets.database_url)
        .await?;
    sqlx::migrate!("../../../migrations").run(&pool).await?;
    Ok(pool)
}
