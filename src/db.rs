use sqlx::{Pool, Postgres};

pub type DbPool = Pool<Postgres>;

/// Connects to Postgres and runs the embedded migrations. A failure here is
/// fatal to the process: the caller propagates it out of `main`.
pub async fn init_db(database_url: &str) -> anyhow::Result<DbPool> {
    let pool = sqlx::postgres::PgPoolOptions::new()
        .max_connections(5)
        .connect(database_url)
        .await?;

    sqlx::migrate!().run(&pool).await?;

    tracing::info!("successfully connected to the database");
    Ok(pool)
}
