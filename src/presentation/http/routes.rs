// src/presentation/http/routes.rs
use crate::presentation::http::controllers::{languages, slugs};
use crate::presentation::http::state::HttpState;
use axum::{
    Extension, Json, Router,
    routing::{get, post},
};
use serde_json::{Value, json};
use tower_http::trace::TraceLayer;

pub fn build_router(state: HttpState) -> Router {
    Router::new()
        .route("/health", get(health))
        .route("/api/v1/slugs", get(slugs::preview_slug))
        .route("/api/v1/language-redirect", get(languages::plan_redirect))
        .route("/i18n/setlang", post(languages::set_language))
        .layer(TraceLayer::new_for_http())
        .layer(Extension(state))
}

pub async fn health() -> Json<Value> {
    Json(json!({ "status": "ok" }))
}
