// src/infrastructure/util.rs
use crate::application::ports::util::SlugGenerator;
use crate::domain::slug::derive_slug;

/// Slug generator used in production: Russian transliteration first, then
/// generic romanisation for everything else.
#[derive(Default, Clone)]
pub struct TransliteratingSlugGenerator;

impl SlugGenerator for TransliteratingSlugGenerator {
    fn slugify(&self, input: &str, max_length: usize) -> String {
        derive_slug(input, max_length)
    }
}
