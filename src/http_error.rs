use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::Json;
use serde::Serialize;
use sqlx::Error as SqlxError;

#[derive(Serialize)]
struct ErrorBody {
    message: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    error: Option<String>,
}

/// Uniform HTTP error rendered as `{message, error?}`.
#[derive(Debug)]
pub struct AppError {
    pub status: StatusCode,
    pub message: String,
    pub detail: Option<String>,
}

impl AppError {
    pub fn new(status: StatusCode, message: impl Into<String>) -> Self {
        Self { status, message: message.into(), detail: None }
    }

    pub fn with_detail(mut self, detail: impl Into<String>) -> Self {
        self.detail = Some(detail.into());
        self
    }

    pub fn invalid_id() -> Self {
        AppError::new(StatusCode::BAD_REQUEST, "ID inválido")
    }

    pub fn not_found() -> Self {
        AppError::new(StatusCode::NOT_FOUND, "Cuento no encontrado")
    }

    /// Replaces the message on storage-side (5xx) failures so each handler
    /// reports its own context; the 4xx taxonomy is left untouched.
    pub fn context(mut self, message: impl Into<String>) -> Self {
        if self.status.is_server_error() {
            self.message = message.into();
        }
        self
    }
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let body = ErrorBody { message: self.message, error: self.detail };
        (self.status, Json(body)).into_response()
    }
}

impl From<SqlxError> for AppError {
    fn from(e: SqlxError) -> Self {
        match e {
            SqlxError::RowNotFound => AppError::not_found(),
            other => AppError::new(StatusCode::INTERNAL_SERVER_ERROR, "Something went wrong!")
                .with_detail(other.to_string()),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn row_not_found_maps_to_404() {
        let err = AppError::from(SqlxError::RowNotFound);
        assert_eq!(err.status, StatusCode::NOT_FOUND);
        assert_eq!(err.message, "Cuento no encontrado");
        assert!(err.detail.is_none());
    }

    #[test]
    fn context_only_rewrites_server_errors() {
        let err = AppError::from(SqlxError::PoolTimedOut).context("Error al crear el cuento");
        assert_eq!(err.status, StatusCode::INTERNAL_SERVER_ERROR);
        assert_eq!(err.message, "Error al crear el cuento");
        assert!(err.detail.is_some());

        let err = AppError::invalid_id().context("Error al crear el cuento");
        assert_eq!(err.status, StatusCode::BAD_REQUEST);
        assert_eq!(err.message, "ID inválido");
    }
}
