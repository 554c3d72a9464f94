// src/application/services/languages.rs
use crate::application::{ApplicationResult, dto::LanguageRedirectDto, error::ApplicationError};
use crate::domain::language::{LanguageCode, LanguageRedirectPlan};

#[derive(Debug, Clone)]
pub struct LanguageRedirectQuery {
    pub path: String,
    pub language: String,
}

#[derive(Debug, Clone)]
pub struct SwitchLanguageCommand {
    pub language: String,
    pub next: Option<String>,
}

/// Server-side counterpart of the storefront language selector.
pub struct LanguageSwitchService {
    supported: Vec<LanguageCode>,
    default: LanguageCode,
}

impl LanguageSwitchService {
    pub fn new(supported: Vec<LanguageCode>, default: LanguageCode) -> Self {
        Self { supported, default }
    }

    pub fn supported(&self) -> &[LanguageCode] {
        &self.supported
    }

    pub fn default_language(&self) -> &LanguageCode {
        &self.default
    }

    pub fn plan(&self, query: LanguageRedirectQuery) -> ApplicationResult<LanguageRedirectDto> {
        let language = self.resolve(&query.language)?;
        let plan = LanguageRedirectPlan::for_path(&query.path, language.as_str());
        tracing::debug!(path = %query.path, page = %plan.shape, target = %plan.target, "planned language redirect");
        Ok(LanguageRedirectDto::new(language, plan))
    }

    pub fn switch(&self, command: SwitchLanguageCommand) -> ApplicationResult<LanguageRedirectDto> {
        let next = match command.next.filter(|n| !n.trim().is_empty()) {
            Some(next) => ensure_local_path(next)?,
            None => format!("/{}/", self.default),
        };
        self.plan(LanguageRedirectQuery {
            path: next,
            language: command.language,
        })
    }

    fn resolve(&self, raw: &str) -> ApplicationResult<LanguageCode> {
        let language = LanguageCode::new(raw)?;
        if !self.supported.contains(&language) {
            return Err(ApplicationError::validation(format!(
                "unsupported language: {language}"
            )));
        }
        Ok(language)
    }
}

fn ensure_local_path(next: String) -> ApplicationResult<String> {
    if !next.starts_with('/') || next.starts_with("//") || next.contains('\\') {
        return Err(ApplicationError::validation(
            "next must be a local absolute path",
        ));
    }
    if next.chars().any(char::is_control) {
        return Err(ApplicationError::validation(
            "next must not contain control characters",
        ));
    }
    let path = next.split(['?', '#']).next().unwrap_or_default();
    Ok(path.to_string())
}
