// src/domain/slug/mod.rs
//! Slug derivation shared by every entity that exposes a human-readable URL.
//!
//! [`derive_slug`] is pure: it knows nothing about existing slugs, so
//! uniqueness is left to whoever persists the result.

pub mod translit;

/// Upper bound used for group slugs.
pub const DEFAULT_SLUG_MAX_LENGTH: usize = 50;

/// Turn arbitrary text into a lowercase ASCII slug of at most `max_length`
/// characters.
///
/// Characters from the transliteration table are replaced first. Whatever is
/// left goes through [`::slug::slugify`], which romanises other scripts,
/// lowercases, and collapses every run of non-alphanumerics into a single
/// hyphen with none at either end. Underscores are word characters in a slug,
/// so each underscore-separated piece is slugified on its own and the pieces
/// are joined back with `_`; empty pieces are dropped. The limit applies to
/// the Latin form, so a letter that expands to a digraph costs two characters.
///
/// An input with nothing sluggable in it yields an empty string.
pub fn derive_slug(raw: &str, max_length: usize) -> String {
    let latin = translit::transliterate(raw);
    let mut slug = latin
        .split('_')
        .map(::slug::slugify)
        .filter(|piece| !piece.is_empty())
        .collect::<Vec<_>>()
        .join("_");
    // slugify only emits ASCII, so byte truncation lands on a char boundary
    slug.truncate(max_length);
    slug
}

/// Whether `value` looks like something [`derive_slug`] could have produced.
pub fn is_valid_slug(value: &str, max_length: usize) -> bool {
    !value.is_empty()
        && value.len() <= max_length
        && value
            .chars()
            .all(|ch| ch.is_ascii_lowercase() || ch.is_ascii_digit() || ch == '-' || ch == '_')
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn ascii_text_is_lowercased_and_normalised() {
        assert_eq!(derive_slug("Hello World", 50), "hello-world");
        assert_eq!(derive_slug("  Rust,   Tokio & Axum!! ", 50), "rust-tokio-and-axum");
        assert_eq!(derive_slug("--already-a-slug--", 50), "already-a-slug");
    }

    #[test]
    fn ascii_text_is_truncated_after_normalising() {
        assert_eq!(derive_slug("Hello World", 7), "hello-w");
        assert_eq!(derive_slug("ABCDEFGHIJ", 3), "abc");
    }

    #[test]
    fn cyrillic_is_transliterated() {
        assert_eq!(derive_slug("Привет, мир", 50), "privet-mir");
        assert_eq!(derive_slug("Щука и ёж", 50), "schuka-i-yozh");
        assert_eq!(derive_slug("Объявления", 50), "obyavleniya");
    }

    #[test]
    fn mixed_scripts_are_joined_into_one_slug() {
        assert_eq!(derive_slug("Rust для всех", 50), "rust-dlya-vseh");
    }

    #[test]
    fn other_scripts_fall_back_to_generic_romanisation() {
        assert_eq!(derive_slug("Straße", 50), "strasse");
        assert_eq!(derive_slug("Café", 50), "cafe");
    }

    #[test]
    fn digraphs_count_in_expanded_form() {
        let raw: String = std::iter::repeat_n('ж', 100).collect();
        let slug = derive_slug(&raw, 50);
        assert_eq!(slug.len(), 50);
        assert_eq!(slug, "zh".repeat(25));
    }

    #[test]
    fn trigraph_truncation_may_split_a_letter() {
        let raw: String = std::iter::repeat_n('щ', 20).collect();
        let slug = derive_slug(&raw, 50);
        assert_eq!(slug.len(), 50);
        assert!(slug.starts_with("schsch"));
        assert!(slug.ends_with("sc"));
    }

    #[test]
    fn output_is_ascii_and_bounded_for_any_input() {
        let inputs = [
            "Группа любителей котов",
            "Ελληνικά κείμενα",
            "日本語のタイトル",
            "emoji 🚀 launch",
            "Ўзбек і ґанок",
        ];
        for raw in inputs {
            for max in [1, 5, 50] {
                let slug = derive_slug(raw, max);
                assert!(slug.len() <= max, "{raw} -> {slug}");
                assert!(slug.is_ascii(), "{raw} -> {slug}");
                assert!(
                    slug.chars()
                        .all(|c| c.is_ascii_lowercase() || c.is_ascii_digit() || c == '-' || c == '_'),
                    "{raw} -> {slug}"
                );
            }
        }
    }

    #[test]
    fn underscores_are_kept() {
        assert_eq!(derive_slug("snake_case", 50), "snake_case");
        assert_eq!(derive_slug("my_group 2024", 50), "my_group-2024");
        assert_eq!(derive_slug("Котики_и собачки", 50), "kotiki_i-sobachki");
        assert_eq!(derive_slug("__a__b__", 50), "a_b");
        assert_eq!(derive_slug("_ _", 50), "");
    }

    #[test]
    fn derivation_is_deterministic() {
        let raw = "Котики & собачки 2024";
        assert_eq!(derive_slug(raw, 50), derive_slug(raw, 50));
    }

    #[test]
    fn nothing_sluggable_gives_empty() {
        assert_eq!(derive_slug("", 50), "");
        assert_eq!(derive_slug("   ", 50), "");
        assert_eq!(derive_slug("!!! ???", 50), "");
        assert_eq!(derive_slug("ъь", 50), "");
    }

    #[test]
    fn slug_validation() {
        assert!(is_valid_slug("hello-world", 50));
        assert!(is_valid_slug("snake_case", 50));
        assert!(!is_valid_slug("", 50));
        assert!(!is_valid_slug("Hello", 50));
        assert!(!is_valid_slug("abc", 2));
        assert!(!is_valid_slug("привет", 50));
    }
}
