// src/application/services/mod.rs
pub mod languages;
pub mod slugs;

use std::sync::Arc;

use crate::application::ports::SlugGeneratorPort;
use crate::domain::language::LanguageCode;

pub use languages::{LanguageRedirectQuery, LanguageSwitchService, SwitchLanguageCommand};
pub use slugs::SlugService;

pub struct ApplicationServices {
    pub slugs: Arc<SlugService>,
    pub languages: Arc<LanguageSwitchService>,
}

impl ApplicationServices {
    pub fn new(
        slugger: Arc<SlugGeneratorPort>,
        supported_languages: Vec<LanguageCode>,
        default_language: LanguageCode,
    ) -> Self {
        let slugs = Arc::new(SlugService::new(slugger));
        let languages = Arc::new(LanguageSwitchService::new(
            supported_languages,
            default_language,
        ));

        Self { slugs, languages }
    }
}
