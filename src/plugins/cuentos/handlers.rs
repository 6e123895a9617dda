use axum::extract::Path;
use axum::http::StatusCode;
use axum::{Extension, Json};
use serde::Serialize;

use crate::db::DbPool;
use crate::http_error::AppError;
use crate::plugins::cuentos::models::{Story, StoryCreate, StoryId, StoryUpdate};
use crate::plugins::cuentos::repo;

#[derive(Serialize)]
pub struct DeleteResponse {
    pub message: &'static str,
}

/// Non-empty after trimming, or a 400 carrying the handler's context message.
fn require_title<'a>(title: Option<&'a str>, context: &str) -> Result<&'a str, AppError> {
    match title.map(str::trim) {
        Some(t) if !t.is_empty() => Ok(t),
        _ => Err(AppError::new(StatusCode::BAD_REQUEST, context).with_detail("Title is required")),
    }
}

fn parse_id(raw: &str) -> Result<StoryId, AppError> {
    StoryId::parse(raw).ok_or_else(AppError::invalid_id)
}

pub async fn create_story(
    Extension(pool): Extension<DbPool>,
    Json(payload): Json<StoryCreate>,
) -> Result<(StatusCode, Json<Story>), AppError> {
    let title = require_title(payload.title.as_deref(), "Error al crear el cuento")?;

    let story = repo::insert_story(&pool, title, payload.content.as_deref(), payload.image.as_deref())
        .await
        .map_err(|e| AppError::from(e).context("Error al crear el cuento"))?;

    Ok((StatusCode::CREATED, Json(story)))
}

pub async fn list_stories(
    Extension(pool): Extension<DbPool>,
) -> Result<Json<Vec<Story>>, AppError> {
    let stories = repo::list_stories(&pool)
        .await
        .map_err(|e| AppError::from(e).context("Error al obtener los cuentos"))?;

    Ok(Json(stories))
}

pub async fn update_story(
    Extension(pool): Extension<DbPool>,
    Path(id): Path<String>,
    Json(payload): Json<StoryUpdate>,
) -> Result<Json<Story>, AppError> {
    let id = parse_id(&id)?;
    let title = require_title(payload.title.as_deref(), "Error al actualizar el cuento")?;

    let story = repo::update_story(&pool, id, title, payload.content.as_deref(), payload.image.as_deref())
        .await
        .map_err(|e| AppError::from(e).context("Error al actualizar el cuento"))?;

    Ok(Json(story))
}

pub async fn delete_story(
    Extension(pool): Extension<DbPool>,
    Path(id): Path<String>,
) -> Result<Json<DeleteResponse>, AppError> {
    let id = parse_id(&id)?;

    let deleted = repo::delete_story(&pool, id)
        .await
        .map_err(|e| AppError::from(e).context("Error al eliminar el cuento"))?;

    if !deleted {
        return Err(AppError::not_found());
    }

    Ok(Json(DeleteResponse { message: "Cuento eliminado correctamente" }))
}
