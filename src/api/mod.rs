mod handlers;

use axum::{
    routing::{get, post},
    Router,
};
use tower_http::{cors::CorsLayer, trace::TraceLayer};

use crate::db::Database;
use crate::export::Exporter;

/// Shared handler state: the project store and the artifact exporter.
#[derive(Clone)]
pub struct AppState {
    pub db: Database,
    pub exporter: Exporter,
}

pub fn create_router(db: Database, exporter: Exporter) -> Router {
    let api = Router::new()
        // Saved projects
        .route("/projects", get(handlers::list_projects))
        .route("/projects", post(handlers::save_project))
        .route("/projects/{id}", get(handlers::get_project))
        // Artifact generation
        .route("/export", post(handlers::export_spec))
        .route("/download/{name}", get(handlers::download))
        // Health
        .route("/health", get(handlers::health));

    Router::new()
        .nest("/api/v1", api)
        .layer(TraceLayer::new_for_http())
        .layer(CorsLayer::permissive())
        .with_state(AppState { db, exporter })
}
