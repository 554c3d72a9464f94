pub mod console;
pub mod dom;
pub mod util;

#[cfg(target_arch = "wasm32")]
pub mod web;
