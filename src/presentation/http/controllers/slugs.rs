// src/presentation/http/controllers/slugs.rs
use crate::application::dto::SlugDto;
use crate::presentation::http::state::HttpState;
use axum::{Extension, Json, extract::Query};
use serde::Deserialize;

#[derive(Debug, Deserialize)]
pub struct SlugParams {
    #[serde(default)]
    pub text: Option<String>,
}

pub async fn preview_slug(
    Extension(state): Extension<HttpState>,
    Query(params): Query<SlugParams>,
) -> Json<SlugDto> {
    Json(state.services.slugs.preview(params.text.as_deref()))
}
