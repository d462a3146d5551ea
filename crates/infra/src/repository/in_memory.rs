use domainkit_core::{Entity, EntityKind, NotFoundError, Repository, RepositoryResult, ValueObject};

/// In-memory repository holding entities in insertion order.
///
/// Intended for tests/dev. Lookups are a linear scan by identity equality.
///
/// Reads hand out clones, so nothing a caller does to a returned entity can
/// reach the stored one. Use [`InMemoryRepository::items`] to inspect the
/// collection without copying.
#[derive(Debug, Clone)]
pub struct InMemoryRepository<E> {
    kind: EntityKind,
    items: Vec<E>,
}

impl<E: Entity> InMemoryRepository<E> {
    pub fn new(kind: EntityKind) -> Self {
        Self {
            kind,
            items: Vec::new(),
        }
    }

    /// Stored entities in collection order.
    pub fn items(&self) -> &[E] {
        &self.items
    }

    pub fn len(&self) -> usize {
        self.items.len()
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    fn position(&self, entity_id: &E::Id) -> Option<usize> {
        self.items
            .iter()
            .position(|item| item.entity_id().equals(Some(entity_id)))
    }
}

#[async_trait::async_trait]
impl<E> Repository<E> for InMemoryRepository<E>
where
    E: Entity + Clone + Send + Sync,
{
    async fn insert(&mut self, entity: E) {
        tracing::debug!(entity = %self.kind, id = %entity.entity_id(), "insert");
        self.items.push(entity);
    }

    async fn bulk_insert(&mut self, entities: Vec<E>) {
        tracing::debug!(entity = %self.kind, count = entities.len(), "bulk insert");
        self.items.extend(entities);
    }

    async fn update(&mut self, entity: E) -> RepositoryResult<()> {
        let idx = self
            .position(entity.entity_id())
            .ok_or_else(|| NotFoundError::new(entity.entity_id(), self.kind))?;

        tracing::debug!(entity = %self.kind, id = %entity.entity_id(), position = idx, "update");
        self.items[idx] = entity;
        Ok(())
    }

    async fn delete(&mut self, entity_id: &E::Id) -> RepositoryResult<()> {
        let idx = self
            .position(entity_id)
            .ok_or_else(|| NotFoundError::new(entity_id, self.kind))?;

        tracing::debug!(entity = %self.kind, id = %entity_id, position = idx, "delete");
        self.items.remove(idx);
        Ok(())
    }

    async fn find_by_id(&self, entity_id: &E::Id) -> Option<E> {
        self.position(entity_id).map(|idx| self.items[idx].clone())
    }

    async fn find_all(&self) -> Vec<E> {
        self.items.clone()
    }

    fn entity_kind(&self) -> EntityKind {
        self.kind
    }
}
