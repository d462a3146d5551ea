use domainkit_categories::{CATEGORY_KIND, Category};
use domainkit_core::{EntityKind, Repository, RepositoryResult, Uuid};

use super::in_memory::InMemoryRepository;

/// In-memory category store, bound to the `Category` kind.
#[derive(Debug, Clone)]
pub struct InMemoryCategoryRepository {
    inner: InMemoryRepository<Category>,
}

impl InMemoryCategoryRepository {
    pub fn new() -> Self {
        Self {
            inner: InMemoryRepository::new(CATEGORY_KIND),
        }
    }

    pub fn items(&self) -> &[Category] {
        self.inner.items()
    }
}

impl Default for InMemoryCategoryRepository {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait::async_trait]
impl Repository<Category> for InMemoryCategoryRepository {
    async fn insert(&mut self, entity: Category) {
        self.inner.insert(entity).await
    }

    async fn bulk_insert(&mut self, entities: Vec<Category>) {
        self.inner.bulk_insert(entities).await
    }

    async fn update(&mut self, entity: Category) -> RepositoryResult<()> {
        self.inner.update(entity).await
    }

    async fn delete(&mut self, entity_id: &Uuid) -> RepositoryResult<()> {
        self.inner.delete(entity_id).await
    }

    async fn find_by_id(&self, entity_id: &Uuid) -> Option<Category> {
        self.inner.find_by_id(entity_id).await
    }

    async fn find_all(&self) -> Vec<Category> {
        self.inner.find_all().await
    }

    fn entity_kind(&self) -> EntityKind {
        self.inner.entity_kind()
    }
}
