use crate::db::DbPool;
use crate::plugins::cuentos::models::{Story, StoryId, DEFAULT_IMAGE_URL};

pub async fn insert_story(
    pool: &DbPool,
    title: &str,
    content: Option<&str>,
    image: Option<&str>,
) -> Result<Story, sqlx::Error> {
    sqlx::query_as::<_, Story>(
        "INSERT INTO cuentos (title, content, image) VALUES ($1, $2, $3) \
         RETURNING id, title, content, image",
    )
    .bind(title)
    .bind(content)
    .bind(image.unwrap_or(DEFAULT_IMAGE_URL))
    .fetch_one(pool)
    .await
}

/// All stories in insertion order.
pub async fn list_stories(pool: &DbPool) -> Result<Vec<Story>, sqlx::Error> {
    sqlx::query_as::<_, Story>(
        "SELECT id, title, content, image FROM cuentos ORDER BY created_at, id",
    )
    .fetch_all(pool)
    .await
}

/// Full-field replacement; yields `RowNotFound` when the id has no row.
pub async fn update_story(
    pool: &DbPool,
    id: StoryId,
    title: &str,
    content: Option<&str>,
    image: Option<&str>,
) -> Result<Story, sqlx::Error> {
    sqlx::query_as::<_, Story>(
        "UPDATE cuentos SET title = $1, content = $2, image = $3 WHERE id = $4 \
         RETURNING id, title, content, image",
    )
    .bind(title)
    .bind(content)
    .bind(image.unwrap_or(DEFAULT_IMAGE_URL))
    .bind(id)
    .fetch_one(pool)
    .await
}

/// Hard delete. Returns `false` when no row matched the id.
pub async fn delete_story(pool: &DbPool, id: StoryId) -> Result<bool, sqlx::Error> {
    let result = sqlx::query("DELETE FROM cuentos WHERE id = $1")
        .bind(id)
        .execute(pool)
        .await?;
    Ok(result.rows_affected() > 0)
}
