use crate::application::ports::util::SlugGenerator;
use crate::domain::slug::create_slug;

/// Cyrillic-aware slugs matching the admin form's autofill.
#[derive(Default, Clone)]
pub struct TransliteratingSlugGenerator;

impl SlugGenerator for TransliteratingSlugGenerator {
    fn slugify(&self, input: &str) -> String {
        create_slug(Some(input))
    }
}

/// Generic Unicode slugs from the `slug` crate.
#[derive(Default, Clone)]
pub struct DeunicodeSlugGenerator;

impl SlugGenerator for DeunicodeSlugGenerator {
    fn slugify(&self, input: &str) -> String {
        slug::slugify(input)
    }
}
