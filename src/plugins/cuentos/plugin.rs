use axum::{routing::delete, routing::get, routing::post, routing::put, Extension, Router};

use crate::db::DbPool;
use crate::kernel::Plugin;
use crate::plugins::cuentos::handlers::*;

pub struct CuentosPlugin {
    pub pool: DbPool,
}

impl CuentosPlugin {
    pub fn new(pool: DbPool) -> Self {
        Self { pool }
    }
}

#[async_trait::async_trait]
impl Plugin for CuentosPlugin {
    async fn router(&self) -> Router {
        Router::new()
            .route("/crear", post(create_story))
            .route("/obtener", get(list_stories))
            .route("/actualizar/:id", put(update_story))
            .route("/eliminar/:id", delete(delete_story))
            .layer(Extension(self.pool.clone()))
    }

    fn name(&self) -> &'static str {
        "api/cuentos"
    }

    async fn on_shutdown(&self) {
        self.pool.close().await;
        tracing::info!("database pool closed");
    }
}
