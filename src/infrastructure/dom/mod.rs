//! Headless DOM used when the components run outside a browser.
mod document;
mod location;

pub use document::{InMemoryControl, InMemoryDocument};
pub use location::InMemoryLocation;
