//! Property-based invariants for slug creation.
//!
//! 1. Output only contains `[a-z0-9_-]`
//! 2. Output never starts or ends with `-` and never contains `--`
//! 3. Slugs are stable under a second pass
//! 4. Arbitrary text never panics and still yields slug-safe output

use proptest::prelude::*;
use storefront_glue::domain::slug::{TRANSLITERATION_TABLE, create_slug, is_slug_char};

fn table_or_slug_chars() -> impl Strategy<Value = String> {
    let mut alphabet: Vec<char> = TRANSLITERATION_TABLE.iter().map(|(c, _)| *c).collect();
    alphabet.extend('a'..='z');
    alphabet.extend('0'..='9');
    prop::collection::vec(prop::sample::select(alphabet), 0..40)
        .prop_map(|chars| chars.into_iter().collect())
}

fn assert_well_formed(slug: &str) -> Result<(), TestCaseError> {
    prop_assert!(slug.chars().all(is_slug_char), "bad char in {slug:?}");
    prop_assert!(!slug.starts_with('-'), "leading hyphen in {slug:?}");
    prop_assert!(!slug.ends_with('-'), "trailing hyphen in {slug:?}");
    prop_assert!(!slug.contains("--"), "double hyphen in {slug:?}");
    Ok(())
}

proptest! {
    #[test]
    fn mapped_input_gives_well_formed_slug(text in table_or_slug_chars()) {
        assert_well_formed(&create_slug(Some(&text)))?;
    }

    #[test]
    fn slugs_are_idempotent(text in table_or_slug_chars()) {
        let once = create_slug(Some(&text));
        prop_assert_eq!(create_slug(Some(&once)), once);
    }

    #[test]
    fn arbitrary_text_is_handled(text in any::<String>()) {
        let slug = create_slug(Some(&text));
        assert_well_formed(&slug)?;
        prop_assert_eq!(create_slug(Some(&slug)), slug);
    }
}
