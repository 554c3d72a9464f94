// src/domain/slug/mod.rs
pub mod transliteration;

pub use transliteration::{TRANSLITERATION_TABLE, is_slug_char, transliterate};

/// Turn a human-entered name into a URL slug.
///
/// The text is lower-cased and trimmed, then each character is either
/// transliterated, kept when it is already slug-safe (`[a-z0-9_-]`), or
/// dropped. Runs of hyphens collapse to one and the result never starts or
/// ends with a hyphen. `None` and empty input give an empty slug.
pub fn create_slug(text: Option<&str>) -> String {
    let Some(text) = text.filter(|t| !t.is_empty()) else {
        return String::new();
    };

    let lowered = text.to_lowercase();
    let mut slug = String::with_capacity(lowered.len());

    for ch in lowered.trim().chars() {
        match transliterate(ch) {
            Some(latin) => latin.chars().for_each(|c| push_collapsing(&mut slug, c)),
            None if is_slug_char(ch) => push_collapsing(&mut slug, ch),
            None => {}
        }
    }

    slug.trim_matches('-').to_string()
}

fn push_collapsing(slug: &mut String, ch: char) {
    if ch == '-' && slug.ends_with('-') {
        return;
    }
    slug.push(ch);
}
