pub mod languages;
pub mod slugs;
