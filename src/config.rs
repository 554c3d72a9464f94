// src/config.rs
use std::env;
use thiserror::Error;

use crate::domain::language::LanguageCode;

#[derive(Clone, Debug)]
pub struct AppConfig {
    listen_addr: String,
    supported_languages: Vec<LanguageCode>,
    default_language: LanguageCode,
    slug_strategy: SlugStrategy,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum SlugStrategy {
    /// Cyrillic transliteration table, same output as the admin autofill.
    #[default]
    Translit,
    /// `slug` crate (deunicode based).
    Deunicode,
}

impl SlugStrategy {
    fn parse(value: &str) -> Result<Self, ConfigError> {
        match value.trim().to_ascii_lowercase().as_str() {
            "translit" => Ok(Self::Translit),
            "deunicode" => Ok(Self::Deunicode),
            other => Err(ConfigError::Invalid(format!(
                "SLUG_STRATEGY must be `translit` or `deunicode`, got `{other}`"
            ))),
        }
    }
}

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("invalid configuration: {0}")]
    Invalid(String),
}

fn default_listen_addr() -> String {
    "127.0.0.1:8080".into()
}

fn default_supported_languages() -> String {
    "en,ru,es".into()
}

fn default_language() -> String {
    "ru".into()
}

impl AppConfig {
    /// Build configuration from environment variables, falling back to
    /// defaults for anything unset.
    pub fn from_env() -> Result<Self, ConfigError> {
        dotenvy::dotenv().ok();
        Self::from_lookup(|key| env::var(key).ok())
    }

    /// Same as [`AppConfig::from_env`] but reading values through `lookup`.
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Result<Self, ConfigError> {
        let listen_addr = lookup("LISTEN_ADDR").unwrap_or_else(default_listen_addr);

        let supported_languages = lookup("SUPPORTED_LANGUAGES")
            .unwrap_or_else(default_supported_languages)
            .split(',')
            .map(str::trim)
            .filter(|code| !code.is_empty())
            .map(|code| {
                LanguageCode::new(code).map_err(|err| {
                    ConfigError::Invalid(format!("SUPPORTED_LANGUAGES: {err}"))
                })
            })
            .collect::<Result<Vec<_>, _>>()?;

        if supported_languages.is_empty() {
            return Err(ConfigError::Invalid(
                "SUPPORTED_LANGUAGES must list at least one language".into(),
            ));
        }

        let default_language = LanguageCode::new(
            lookup("DEFAULT_LANGUAGE").unwrap_or_else(default_language),
        )
        .map_err(|err| ConfigError::Invalid(format!("DEFAULT_LANGUAGE: {err}")))?;

        if !supported_languages.contains(&default_language) {
            return Err(ConfigError::Invalid(format!(
                "DEFAULT_LANGUAGE `{default_language}` is not in SUPPORTED_LANGUAGES"
            )));
        }

        let slug_strategy = lookup("SLUG_STRATEGY")
            .map(|v| SlugStrategy::parse(&v))
            .transpose()?
            .unwrap_or_default();

        Ok(Self {
            listen_addr,
            supported_languages,
            default_language,
            slug_strategy,
        })
    }

    pub fn listen_addr(&self) -> &str {
        &self.listen_addr
    }

    pub fn supported_languages(&self) -> &[LanguageCode] {
        &self.supported_languages
    }

    pub fn default_language(&self) -> &LanguageCode {
        &self.default_language
    }

    pub fn slug_strategy(&self) -> SlugStrategy {
        self.slug_strategy
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    fn config_from(pairs: &[(&str, &str)]) -> Result<AppConfig, ConfigError> {
        let vars: HashMap<String, String> = pairs
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        AppConfig::from_lookup(|key| vars.get(key).cloned())
    }

    #[test]
    fn defaults_match_storefront_settings() {
        let config = config_from(&[]).unwrap();
        assert_eq!(config.listen_addr(), "127.0.0.1:8080");
        let codes: Vec<&str> = config
            .supported_languages()
            .iter()
            .map(LanguageCode::as_str)
            .collect();
        assert_eq!(codes, ["en", "ru", "es"]);
        assert_eq!(config.default_language().as_str(), "ru");
        assert_eq!(config.slug_strategy(), SlugStrategy::Translit);
    }

    #[test]
    fn reads_overrides() {
        let config = config_from(&[
            ("LISTEN_ADDR", "0.0.0.0:9000"),
            ("SUPPORTED_LANGUAGES", " de , fr "),
            ("DEFAULT_LANGUAGE", "fr"),
            ("SLUG_STRATEGY", "Deunicode"),
        ])
        .unwrap();
        assert_eq!(config.listen_addr(), "0.0.0.0:9000");
        assert_eq!(config.supported_languages().len(), 2);
        assert_eq!(config.default_language().as_str(), "fr");
        assert_eq!(config.slug_strategy(), SlugStrategy::Deunicode);
    }

    #[test]
    fn default_language_must_be_supported() {
        let err = config_from(&[("SUPPORTED_LANGUAGES", "en,es")]).unwrap_err();
        assert!(err.to_string().contains("DEFAULT_LANGUAGE"));
    }

    #[test]
    fn rejects_unknown_slug_strategy() {
        assert!(config_from(&[("SLUG_STRATEGY", "emoji")]).is_err());
    }

    #[test]
    fn rejects_empty_language_list() {
        assert!(config_from(&[("SUPPORTED_LANGUAGES", " , ")]).is_err());
    }
}
