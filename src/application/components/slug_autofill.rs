// src/application/components/slug_autofill.rs
use std::rc::Rc;
use std::sync::Arc;

use crate::application::ports::{
    dom::{Document, DomEvent, ElementQuery, FormControl},
    util::SlugGenerator,
};

pub const NAME_FIELD: &str = "name";
pub const SLUG_FIELD: &str = "slug";

/// Fills the admin form's `slug` input from its `name` input.
///
/// The slug is only written while the slug field is empty. As soon as it
/// holds anything, typed or generated, the field belongs to the user.
#[derive(Clone)]
pub struct SlugAutofill {
    fields: Option<Fields>,
}

#[derive(Clone)]
struct Fields {
    name: Rc<dyn FormControl>,
    slug: Rc<dyn FormControl>,
    slugger: Arc<dyn SlugGenerator>,
}

impl SlugAutofill {
    /// Bind to `input[name="name"]` and `input[name="slug"]`.
    ///
    /// Returns a disabled handle when either field is missing.
    pub fn install(document: &dyn Document, slugger: Arc<dyn SlugGenerator>) -> Self {
        let name_query = ElementQuery::input(NAME_FIELD);
        let slug_query = ElementQuery::input(SLUG_FIELD);

        let (Some(name), Some(slug)) = (
            document.query_selector(&name_query),
            document.query_selector(&slug_query),
        ) else {
            tracing::debug!("slug autofill disabled: {name_query} or {slug_query} not found");
            return Self::disabled();
        };

        tracing::info!("slug autofill fields found, setting up autofill");

        let listener_slug = Rc::clone(&slug);
        let listener_slugger = Arc::clone(&slugger);
        name.add_event_listener(
            DomEvent::Input,
            Box::new(move |name_field: &dyn FormControl| {
                autofill(name_field, listener_slug.as_ref(), listener_slugger.as_ref());
            }),
        );

        if !name.value().is_empty() {
            autofill(name.as_ref(), slug.as_ref(), slugger.as_ref());
        }

        Self {
            fields: Some(Fields {
                name,
                slug,
                slugger,
            }),
        }
    }

    pub fn disabled() -> Self {
        Self { fields: None }
    }

    pub fn is_enabled(&self) -> bool {
        self.fields.is_some()
    }

    /// Run the `input` handler directly. Returns the slug that was written.
    pub fn handle_input(&self) -> Option<String> {
        let fields = self.fields.as_ref()?;
        autofill(
            fields.name.as_ref(),
            fields.slug.as_ref(),
            fields.slugger.as_ref(),
        )
    }
}

fn autofill(
    name: &dyn FormControl,
    slug: &dyn FormControl,
    slugger: &dyn SlugGenerator,
) -> Option<String> {
    if !slug.value().is_empty() {
        return None;
    }
    let generated = slugger.slugify(&name.value());
    slug.set_value(&generated);
    tracing::info!(slug = %generated, "auto-filled slug");
    Some(generated)
}
