// src/application/ports/util.rs
pub trait SlugGenerator: Send + Sync {
    /// Produce a slug of at most `max_length` characters, or an empty string
    /// when `input` holds nothing usable.
    fn slugify(&self, input: &str, max_length: usize) -> String;
}
