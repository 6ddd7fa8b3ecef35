// src/infrastructure/repositories/memory/groups.rs
use std::sync::Arc;

use super::InMemoryStore;
use crate::domain::errors::{DomainError, DomainResult};
use crate::domain::group::{Group, GroupId, GroupRepository, GroupSlug, NewGroup};
use crate::infrastructure::repositories::error::{CNT_GROUP_SLUG, unique_violation};
use async_trait::async_trait;

#[derive(Clone)]
pub struct InMemoryGroupRepository {
    store: Arc<InMemoryStore>,
}

impl InMemoryGroupRepository {
    pub fn new(store: Arc<InMemoryStore>) -> Self {
        Self { store }
    }
}

#[async_trait]
impl GroupRepository for InMemoryGroupRepository {
    async fn insert(&self, group: NewGroup) -> DomainResult<Group> {
        let mut tables = self.store.write()?;
        if tables.groups.values().any(|stored| stored.slug == group.slug) {
            return Err(unique_violation(CNT_GROUP_SLUG));
        }

        let NewGroup {
            title,
            slug,
            description,
        } = group;
        let group = Group {
            id: tables.next_group_id(),
            title,
            slug,
            description,
        };
        tables.groups.insert(group.id, group.clone());
        Ok(group)
    }

    async fn update(&self, group: Group) -> DomainResult<Group> {
        let mut tables = self.store.write()?;
        if !tables.groups.contains_key(&group.id) {
            return Err(DomainError::NotFound("group not found".into()));
        }
        if tables
            .groups
            .values()
            .any(|stored| stored.id != group.id && stored.slug == group.slug)
        {
            return Err(unique_violation(CNT_GROUP_SLUG));
        }

        tables.groups.insert(group.id, group.clone());
        Ok(group)
    }

    async fn find_by_id(&self, id: GroupId) -> DomainResult<Option<Group>> {
        Ok(self.store.read()?.groups.get(&id).cloned())
    }

    async fn find_by_slug(&self, slug: &GroupSlug) -> DomainResult<Option<Group>> {
        let tables = self.store.read()?;
        Ok(tables
            .groups
            .values()
            .find(|group| &group.slug == slug)
            .cloned())
    }

    async fn list(&self) -> DomainResult<Vec<Group>> {
        let tables = self.store.read()?;
        let mut groups: Vec<Group> = tables.groups.values().cloned().collect();
        groups.sort_by(|a, b| a.title.as_str().cmp(b.title.as_str()).then(a.id.cmp(&b.id)));
        Ok(groups)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::group::{GroupDescription, GroupTitle};

    fn new_group(title: &str, slug: &str) -> NewGroup {
        NewGroup {
            title: GroupTitle::new(title).unwrap(),
            slug: GroupSlug::new(slug).unwrap(),
            description: GroupDescription::new("about").unwrap(),
        }
    }

    fn repo() -> InMemoryGroupRepository {
        InMemoryGroupRepository::new(Arc::new(InMemoryStore::new()))
    }

    #[tokio::test]
    async fn slug_is_unique_on_insert() {
        let repo = repo();
        repo.insert(new_group("Cats", "cats")).await.unwrap();
        let err = repo.insert(new_group("Cats again", "cats")).await.unwrap_err();
        assert!(matches!(err, DomainError::Conflict(_)));
    }

    #[tokio::test]
    async fn slug_is_unique_on_update_but_a_group_keeps_its_own() {
        let repo = repo();
        let cats = repo.insert(new_group("Cats", "cats")).await.unwrap();
        let mut dogs = repo.insert(new_group("Dogs", "dogs")).await.unwrap();

        let same = repo.update(cats.clone()).await.unwrap();
        assert_eq!(same.slug.as_str(), "cats");

        dogs.set_slug(GroupSlug::new("cats").unwrap());
        let err = repo.update(dogs).await.unwrap_err();
        assert!(matches!(err, DomainError::Conflict(_)));
    }

    #[tokio::test]
    async fn list_is_ordered_by_title() {
        let repo = repo();
        repo.insert(new_group("Zebras", "zebras")).await.unwrap();
        repo.insert(new_group("Ants", "ants")).await.unwrap();
        let titles: Vec<String> = repo
            .list()
            .await
            .unwrap()
            .into_iter()
            .map(|group| group.title.into_inner())
            .collect();
        assert_eq!(titles, vec!["Ants", "Zebras"]);
    }
}
