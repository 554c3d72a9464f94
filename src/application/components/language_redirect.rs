// src/application/components/language_redirect.rs
use std::rc::Rc;

use crate::application::ports::dom::{Document, DomEvent, ElementQuery, FormControl, Location};
use crate::domain::language::LanguageRedirectPlan;

pub const LANGUAGE_FIELD: &str = "language";

/// Sends the visitor to the same kind of page in the language picked from
/// `select[name="language"]`.
#[derive(Clone)]
pub struct LanguageRedirect {
    binding: Option<Binding>,
}

#[derive(Clone)]
struct Binding {
    select: Rc<dyn FormControl>,
    location: Rc<dyn Location>,
}

impl LanguageRedirect {
    pub fn install(document: &dyn Document, location: Rc<dyn Location>) -> Self {
        let query = ElementQuery::select(LANGUAGE_FIELD);
        let Some(select) = document.query_selector(&query) else {
            tracing::debug!("language redirect disabled: {query} not found");
            return Self::disabled();
        };

        let listener_location = Rc::clone(&location);
        select.add_event_listener(
            DomEvent::Change,
            Box::new(move |control: &dyn FormControl| {
                redirect(control, listener_location.as_ref());
            }),
        );

        Self {
            binding: Some(Binding { select, location }),
        }
    }

    pub fn disabled() -> Self {
        Self { binding: None }
    }

    pub fn is_enabled(&self) -> bool {
        self.binding.is_some()
    }

    /// Run the `change` handler directly. Returns the navigation target.
    pub fn handle_change(&self) -> Option<String> {
        let binding = self.binding.as_ref()?;
        Some(redirect(binding.select.as_ref(), binding.location.as_ref()))
    }
}

fn redirect(select: &dyn FormControl, location: &dyn Location) -> String {
    let language = select.value();
    let current_path = location.pathname();
    let plan = LanguageRedirectPlan::for_path(&current_path, &language);

    tracing::info!(
        from = %current_path,
        to = %plan.target,
        page = %plan.shape,
        "switching language"
    );
    location.assign(&plan.target);
    plan.target
}
