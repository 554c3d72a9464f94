// src/presentation/http/controllers/languages.rs
use crate::application::{
    dto::LanguageRedirectDto,
    error::ApplicationError,
    services::{LanguageRedirectQuery, SwitchLanguageCommand},
};
use crate::presentation::http::error::{HttpError, HttpResult, IntoHttpResult};
use crate::presentation::http::state::HttpState;
use axum::{
    Extension, Form, Json,
    extract::Query,
    http::{HeaderName, HeaderValue, StatusCode, header},
};
use serde::Deserialize;

#[derive(Debug, Deserialize)]
pub struct RedirectParams {
    pub path: String,
    pub language: String,
}

#[derive(Debug, Deserialize)]
pub struct SetLanguageForm {
    pub language: String,
    #[serde(default)]
    pub next: Option<String>,
}

pub async fn plan_redirect(
    Extension(state): Extension<HttpState>,
    Query(params): Query<RedirectParams>,
) -> HttpResult<Json<LanguageRedirectDto>> {
    let dto = state
        .services
        .languages
        .plan(LanguageRedirectQuery {
            path: params.path,
            language: params.language,
        })
        .into_http()?;
    Ok(Json(dto))
}

/// Form target for the storefront language selector when scripts are off.
pub async fn set_language(
    Extension(state): Extension<HttpState>,
    Form(form): Form<SetLanguageForm>,
) -> HttpResult<(StatusCode, [(HeaderName, HeaderValue); 1])> {
    let dto = state
        .services
        .languages
        .switch(SwitchLanguageCommand {
            language: form.language,
            next: form.next,
        })
        .into_http()?;

    let location = HeaderValue::try_from(encode_location(&dto.location)).map_err(|_| {
        HttpError::from_error(ApplicationError::validation(
            "redirect target is not a valid header value",
        ))
    })?;
    tracing::info!(language = %dto.language, location = %dto.location, "language switched");
    Ok((StatusCode::SEE_OTHER, [(header::LOCATION, location)]))
}

/// Percent-encode non-ASCII characters so localized slugs fit in a header.
fn encode_location(location: &str) -> String {
    let mut encoded = String::with_capacity(location.len());
    for ch in location.chars() {
        if ch.is_ascii() {
            encoded.push(ch);
        } else {
            encoded.push_str(&urlencoding::encode(ch.encode_utf8(&mut [0; 4])));
        }
    }
    encoded
}

#[cfg(test)]
mod tests {
    use super::encode_location;

    #[test]
    fn ascii_locations_are_untouched() {
        assert_eq!(encode_location("/en/category-name/"), "/en/category-name/");
    }

    #[test]
    fn cyrillic_segments_are_percent_encoded() {
        assert_eq!(
            encode_location("/en/обувь/").to_ascii_uppercase(),
            "/EN/%D0%BE%D0%B1%D1%83%D0%B2%D1%8C/".to_ascii_uppercase()
        );
    }
}
