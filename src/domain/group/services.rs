// src/domain/group/services.rs
use std::sync::Arc;

use crate::application::ports::util::SlugGenerator;
use crate::domain::errors::{DomainError, DomainResult};
use crate::domain::group::value_objects::{GroupSlug, GroupTitle};

/// Save hook that turns whatever was typed into the slug field into the
/// slug a group is stored under.
///
/// The generator is collision-unaware; a duplicate is only detected when the
/// repository refuses to store it.
pub struct GroupSlugService {
    generator: Arc<dyn SlugGenerator>,
}

impl GroupSlugService {
    pub fn new(generator: Arc<dyn SlugGenerator>) -> Self {
        Self { generator }
    }

    /// Derive from `requested` first and fall back to the title when that
    /// leaves nothing.
    pub fn resolve(&self, requested: Option<&str>, title: &GroupTitle) -> DomainResult<GroupSlug> {
        let primary = self
            .generator
            .slugify(requested.unwrap_or_default(), GroupSlug::MAX_LENGTH);
        let derived = if primary.is_empty() {
            self.generator.slugify(title.as_str(), GroupSlug::MAX_LENGTH)
        } else {
            primary
        };

        if derived.is_empty() {
            return Err(DomainError::InvalidInput(
                "neither the slug nor the title contain anything usable for a group address"
                    .into(),
            ));
        }

        GroupSlug::new(derived)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::slug::derive_slug;

    struct Deriving;

    impl SlugGenerator for Deriving {
        fn slugify(&self, input: &str, max_length: usize) -> String {
            derive_slug(input, max_length)
        }
    }

    fn service() -> GroupSlugService {
        GroupSlugService::new(Arc::new(Deriving))
    }

    #[test]
    fn requested_slug_wins_over_title() {
        let title = GroupTitle::new("Котики").unwrap();
        let slug = service().resolve(Some("My Cats"), &title).unwrap();
        assert_eq!(slug.as_str(), "my-cats");
    }

    #[test]
    fn empty_request_falls_back_to_title() {
        let title = GroupTitle::new("Hello World").unwrap();
        assert_eq!(service().resolve(Some(""), &title).unwrap().as_str(), "hello-world");
        assert_eq!(service().resolve(None, &title).unwrap().as_str(), "hello-world");
        assert_eq!(service().resolve(Some("?!"), &title).unwrap().as_str(), "hello-world");
    }

    #[test]
    fn long_titles_are_cut_to_fifty() {
        let title = GroupTitle::new("Ж".repeat(100)).unwrap();
        let slug = service().resolve(None, &title).unwrap();
        assert_eq!(slug.as_str().len(), 50);
    }

    #[test]
    fn nothing_usable_is_invalid_input() {
        let title = GroupTitle::new("!!!").unwrap();
        let err = service().resolve(Some("   "), &title).unwrap_err();
        assert!(matches!(err, DomainError::InvalidInput(_)));
    }
}
