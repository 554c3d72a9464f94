#![forbid(unsafe_code)]

//! Browser adapter: the DOM ports over `web-sys`, plus the `wasm-bindgen`
//! entry points a page calls once `DOMContentLoaded` has fired.
//!
//! Only compiled on `wasm32` targets.

use std::rc::Rc;
use std::sync::Arc;

use js_sys::Reflect;
use wasm_bindgen::JsCast;
use wasm_bindgen::prelude::*;
use web_sys::{HtmlInputElement, HtmlSelectElement};

use crate::application::components::{LanguageRedirect, SlugAutofill};
use crate::application::ports::dom::{
    Document, DomEvent, ElementKind, ElementQuery, FormControl, Listener, Location,
};
use crate::infrastructure::console;
use crate::infrastructure::util::TransliteratingSlugGenerator;

fn console_log(msg: &str) {
    let global = js_sys::global();
    let Ok(console) = Reflect::get(&global, &"console".into()) else {
        return;
    };
    let Ok(log) = Reflect::get(&console, &"log".into()) else {
        return;
    };
    let Ok(log_fn) = log.dyn_into::<js_sys::Function>() else {
        return;
    };
    let _ = log_fn.call1(&console, &JsValue::from_str(msg));
}

fn init_console_tracing() {
    use std::sync::Once;

    static ONCE: Once = Once::new();
    ONCE.call_once(|| {
        let _ = tracing::subscriber::set_global_default(console::subscriber(console_log));
    });
}

#[derive(Clone)]
enum WebControl {
    Input(HtmlInputElement),
    Select(HtmlSelectElement),
}

impl WebControl {
    fn target(&self) -> &web_sys::EventTarget {
        match self {
            Self::Input(el) => el.as_ref(),
            Self::Select(el) => el.as_ref(),
        }
    }
}

impl FormControl for WebControl {
    fn value(&self) -> String {
        match self {
            Self::Input(el) => el.value(),
            Self::Select(el) => el.value(),
        }
    }

    fn set_value(&self, value: &str) {
        match self {
            Self::Input(el) => el.set_value(value),
            Self::Select(el) => el.set_value(value),
        }
    }

    fn add_event_listener(&self, event: DomEvent, listener: Listener) {
        let this = self.clone();
        let closure = Closure::<dyn Fn()>::new(move || listener(&this as &dyn FormControl));
        if self
            .target()
            .add_event_listener_with_callback(event.as_str(), closure.as_ref().unchecked_ref())
            .is_err()
        {
            console_log(&format!("failed to attach {} listener", event.as_str()));
            return;
        }
        // The page owns the listener for the rest of its lifetime.
        closure.forget();
    }
}

struct WebDocument(web_sys::Document);

impl Document for WebDocument {
    fn query_selector(&self, query: &ElementQuery) -> Option<Rc<dyn FormControl>> {
        let element = self.0.query_selector(&query.to_string()).ok().flatten()?;
        let control = match query.kind() {
            ElementKind::Input => WebControl::Input(element.dyn_into().ok()?),
            ElementKind::Select => WebControl::Select(element.dyn_into().ok()?),
        };
        Some(Rc::new(control))
    }
}

struct WebLocation(web_sys::Location);

impl Location for WebLocation {
    fn pathname(&self) -> String {
        self.0.pathname().unwrap_or_default()
    }

    fn assign(&self, href: &str) {
        let _ = self.0.set_href(href);
    }
}

fn document() -> Option<web_sys::Document> {
    web_sys::window()?.document()
}

/// Bind slug autofill on the current admin page.
#[wasm_bindgen(js_name = installSlugAutofill)]
pub fn install_slug_autofill() -> bool {
    let Some(document) = document() else {
        return false;
    };
    init_console_tracing();
    console_log("=== SLUG AUTOFILL WITH TRANSLIT ===");
    let autofill = SlugAutofill::install(
        &WebDocument(document),
        Arc::new(TransliteratingSlugGenerator),
    );
    if autofill.is_enabled() {
        console_log("Fields found, setting up autofill...");
    }
    autofill.is_enabled()
}

/// Bind the storefront language selector on the current page.
#[wasm_bindgen(js_name = installLanguageRedirect)]
pub fn install_language_redirect() -> bool {
    let Some(window) = web_sys::window() else {
        return false;
    };
    let Some(document) = window.document() else {
        return false;
    };
    init_console_tracing();
    let location: Rc<dyn Location> = Rc::new(WebLocation(window.location()));
    LanguageRedirect::install(&WebDocument(document), location).is_enabled()
}

/// Create a slug with the same rules the autofill uses.
#[wasm_bindgen(js_name = createSlug)]
pub fn create_slug(text: Option<String>) -> String {
    crate::domain::slug::create_slug(text.as_deref())
}
