// src/application/dto.rs
use crate::domain::language::{LanguageCode, LanguageRedirectPlan};
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SlugDto {
    pub source: String,
    pub slug: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct LanguageRedirectDto {
    pub language: String,
    pub page: String,
    pub location: String,
}

impl LanguageRedirectDto {
    pub fn new(language: LanguageCode, plan: LanguageRedirectPlan) -> Self {
        Self {
            language: language.into(),
            page: plan.shape.name().to_string(),
            location: plan.target,
        }
    }
}
