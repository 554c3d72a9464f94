// src/application/ports/mod.rs
pub mod dom;
pub mod util;

pub type SlugGeneratorPort = dyn util::SlugGenerator;
