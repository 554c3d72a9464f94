//! Slug autofill and language-switch redirects for a multilingual storefront.
//!
//! The page components in [`application::components`] run against the DOM
//! ports in [`application::ports::dom`]; [`infrastructure`] provides a
//! headless DOM and, on `wasm32`, a browser adapter. The same rules are
//! served over HTTP by [`presentation::http`].

pub mod application;
pub mod config;
pub mod domain;
pub mod infrastructure;
#[cfg(not(target_arch = "wasm32"))]
pub mod presentation;
