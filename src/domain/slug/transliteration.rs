// src/domain/slug/transliteration.rs

/// Cyrillic (and separator) characters with their Latin replacement.
///
/// Only lowercase letters are listed; input is lower-cased before lookup.
/// `ъ` and `ь` map to the empty string and therefore vanish from slugs.
pub const TRANSLITERATION_TABLE: &[(char, &str)] = &[
    ('а', "a"),
    ('б', "b"),
    ('в', "v"),
    ('г', "g"),
    ('д', "d"),
    ('е', "e"),
    ('ё', "yo"),
    ('ж', "zh"),
    ('з', "z"),
    ('и', "i"),
    ('й', "y"),
    ('к', "k"),
    ('л', "l"),
    ('м', "m"),
    ('н', "n"),
    ('о', "o"),
    ('п', "p"),
    ('р', "r"),
    ('с', "s"),
    ('т', "t"),
    ('у', "u"),
    ('ф', "f"),
    ('х', "h"),
    ('ц', "ts"),
    ('ч', "ch"),
    ('ш', "sh"),
    ('щ', "sch"),
    ('ъ', ""),
    ('ы', "y"),
    ('ь', ""),
    ('э', "e"),
    ('ю', "yu"),
    ('я', "ya"),
    (' ', "-"),
    ('_', "_"),
    ('-', "-"),
];

/// Look up the Latin replacement for a single character.
pub fn transliterate(ch: char) -> Option<&'static str> {
    TRANSLITERATION_TABLE
        .iter()
        .find(|(from, _)| *from == ch)
        .map(|(_, to)| *to)
}

/// Characters that survive slugification untouched.
pub fn is_slug_char(ch: char) -> bool {
    ch.is_ascii_lowercase() || ch.is_ascii_digit() || ch == '_' || ch == '-'
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn maps_multi_letter_sounds() {
        assert_eq!(transliterate('щ'), Some("sch"));
        assert_eq!(transliterate('ж'), Some("zh"));
        assert_eq!(transliterate('ё'), Some("yo"));
    }

    #[test]
    fn hard_and_soft_signs_map_to_nothing() {
        assert_eq!(transliterate('ъ'), Some(""));
        assert_eq!(transliterate('ь'), Some(""));
    }

    #[test]
    fn uppercase_and_latin_are_not_in_table() {
        assert_eq!(transliterate('Я'), None);
        assert_eq!(transliterate('a'), None);
    }

    #[test]
    fn table_replacements_are_slug_safe() {
        for (from, to) in TRANSLITERATION_TABLE {
            assert!(
                to.chars().all(is_slug_char),
                "replacement for {from:?} contains non-slug characters: {to:?}"
            );
        }
    }
}
