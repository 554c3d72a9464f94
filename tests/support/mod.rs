// tests/support/mod.rs
// Shared fixtures for the integration test binaries. Not every binary uses
// every helper, so dead_code is allowed here.
#![allow(dead_code)]

use std::rc::Rc;
use std::sync::Arc;

use storefront_glue::application::ports::util::SlugGenerator;
use storefront_glue::application::services::ApplicationServices;
use storefront_glue::domain::language::LanguageCode;
use storefront_glue::infrastructure::dom::{InMemoryDocument, InMemoryLocation};
use storefront_glue::infrastructure::util::TransliteratingSlugGenerator;

pub fn translit() -> Arc<dyn SlugGenerator> {
    Arc::new(TransliteratingSlugGenerator)
}

/// Admin product form with `name` and `slug` inputs.
pub fn admin_form(name: &str, slug: &str) -> InMemoryDocument {
    InMemoryDocument::new()
        .with_input("name", name)
        .with_input("slug", slug)
}

/// Storefront page with a language selector, opened at `path`.
pub fn storefront_page(path: &str, selected: &str) -> (InMemoryDocument, Rc<InMemoryLocation>) {
    let document = InMemoryDocument::new().with_select("language", selected);
    (document, Rc::new(InMemoryLocation::new(path)))
}

pub fn services() -> Arc<ApplicationServices> {
    let supported = ["en", "ru", "es"]
        .into_iter()
        .map(|code| LanguageCode::new(code).expect("valid language code"))
        .collect();
    let default = LanguageCode::new("ru").expect("valid language code");
    Arc::new(ApplicationServices::new(translit(), supported, default))
}

/// Counts calls so tests can tell whether the generator ran at all.
#[derive(Default)]
pub struct CountingSlug {
    pub calls: std::sync::atomic::AtomicUsize,
}

impl SlugGenerator for CountingSlug {
    fn slugify(&self, input: &str) -> String {
        self.calls
            .fetch_add(1, std::sync::atomic::Ordering::SeqCst);
        input.to_lowercase()
    }
}
