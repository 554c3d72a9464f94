//! Page components bound once per page view.
pub mod language_redirect;
pub mod slug_autofill;

pub use language_redirect::LanguageRedirect;
pub use slug_autofill::SlugAutofill;
