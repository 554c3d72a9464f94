pub mod errors;
pub mod language;
pub mod slug;
