use crate::domain::errors::{DomainError, DomainResult};
use std::fmt;

const MAX_LANGUAGE_CODE_LEN: usize = 16;

/// A language prefix as it appears in storefront URLs (`en`, `ru`, `pt-br`).
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct LanguageCode(String);

impl LanguageCode {
    pub fn new(value: impl Into<String>) -> DomainResult<Self> {
        let value = value.into();
        let value = value.trim();
        if value.is_empty() {
            return Err(DomainError::Validation(
                "language code cannot be empty".into(),
            ));
        }
        if value.len() > MAX_LANGUAGE_CODE_LEN {
            return Err(DomainError::Validation(format!(
                "language code must be at most {MAX_LANGUAGE_CODE_LEN} characters"
            )));
        }
        if !value
            .chars()
            .all(|c| c.is_ascii_alphanumeric() || c == '-' || c == '_')
        {
            return Err(DomainError::Validation(format!(
                "language code contains invalid characters: {value}"
            )));
        }
        Ok(Self(value.to_ascii_lowercase()))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for LanguageCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl From<LanguageCode> for String {
    fn from(value: LanguageCode) -> Self {
        value.0
    }
}
