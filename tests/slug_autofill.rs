use std::sync::Arc;
use std::sync::atomic::Ordering;

use storefront_glue::application::components::SlugAutofill;
use storefront_glue::application::ports::dom::{DomEvent, FormControl};
use storefront_glue::infrastructure::dom::InMemoryDocument;

mod support;

#[test]
fn typing_a_name_fills_an_empty_slug() {
    let document = support::admin_form("", "");
    let autofill = SlugAutofill::install(&document, support::translit());
    assert!(autofill.is_enabled());

    let name = document.input("name").unwrap();
    let slug = document.input("slug").unwrap();

    name.type_text("Привет Мир");
    assert_eq!(slug.value(), "privet-mir");
}

#[test]
fn populated_slug_is_never_overwritten() {
    let document = support::admin_form("", "my-custom-slug");
    let autofill = SlugAutofill::install(&document, support::translit());

    let name = document.input("name").unwrap();
    let slug = document.input("slug").unwrap();

    name.type_text("Новый товар");
    assert_eq!(slug.value(), "my-custom-slug");
    assert_eq!(autofill.handle_input(), None);
}

#[test]
fn autofilled_slug_is_owned_after_first_write() {
    let document = support::admin_form("", "");
    SlugAutofill::install(&document, support::translit());

    let name = document.input("name").unwrap();
    let slug = document.input("slug").unwrap();

    name.type_text("Чай");
    assert_eq!(slug.value(), "chay");
    name.type_text("Чайник");
    assert_eq!(slug.value(), "chay");
}

#[test]
fn slug_left_empty_keeps_tracking_the_name() {
    let document = support::admin_form("", "");
    SlugAutofill::install(&document, support::translit());

    let name = document.input("name").unwrap();
    let slug = document.input("slug").unwrap();

    name.type_text("!!!");
    assert_eq!(slug.value(), "");
    name.type_text("!!! ok");
    assert_eq!(slug.value(), "ok");
}

#[test]
fn existing_name_prefills_empty_slug_on_install() {
    let document = support::admin_form("Зелёный чай", "");
    SlugAutofill::install(&document, support::translit());

    assert_eq!(document.input("slug").unwrap().value(), "zelyonyy-chay");
}

#[test]
fn existing_slug_is_kept_on_install() {
    let document = support::admin_form("Зелёный чай", "green-tea");
    SlugAutofill::install(&document, support::translit());

    assert_eq!(document.input("slug").unwrap().value(), "green-tea");
}

#[test]
fn empty_name_does_not_call_generator_on_install() {
    let document = support::admin_form("", "");
    let counter = Arc::new(support::CountingSlug::default());
    SlugAutofill::install(&document, counter.clone());

    assert_eq!(counter.calls.load(Ordering::SeqCst), 0);
}

#[test]
fn missing_slug_field_disables_the_feature() {
    let document = InMemoryDocument::new().with_input("name", "");
    let autofill = SlugAutofill::install(&document, support::translit());

    assert!(!autofill.is_enabled());
    assert_eq!(autofill.handle_input(), None);
    let name = document.input("name").unwrap();
    assert_eq!(name.listener_count(DomEvent::Input), 0);
    name.type_text("Товар");
}

#[test]
fn missing_name_field_disables_the_feature() {
    let document = InMemoryDocument::new().with_input("slug", "");
    let autofill = SlugAutofill::install(&document, support::translit());

    assert!(!autofill.is_enabled());
    assert_eq!(document.input("slug").unwrap().value(), "");
}

#[test]
fn handle_input_drives_the_same_logic() {
    let document = support::admin_form("", "");
    let autofill = SlugAutofill::install(&document, support::translit());

    document.input("name").unwrap().set_value("Кофе");
    assert_eq!(autofill.handle_input().as_deref(), Some("kofe"));
    assert_eq!(document.input("slug").unwrap().value(), "kofe");
}
