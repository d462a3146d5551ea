//! Repository boundary: storage and retrieval of entities by identity.
//!
//! The contract makes no storage assumptions. The in-memory reference store
//! lives in the infra crate; any other backend must implement exactly these
//! operations to be substitutable.

use crate::entity::{Entity, EntityKind};
use crate::error::NotFoundError;

/// Result of the fallible repository operations.
pub type RepositoryResult<T> = Result<T, NotFoundError>;

/// Persistence contract for one entity kind `E`, keyed by `E::Id`.
///
/// ## Identity Lookup
///
/// Entities are located by value equality of their identity, never by
/// reference. Lookups over an unordered backend are a linear scan.
///
/// ## Ordering
///
/// The collection is kept in insertion order. `update` replaces in place and
/// `delete` shifts the survivors, so relative order is always preserved.
///
/// ## Writers
///
/// Mutating operations take `&mut self`: at most one writer at a time. Callers
/// that share a repository across tasks wrap it in their own lock.
///
/// ## Uniqueness
///
/// `insert` does not check for an existing identity. Keeping identities unique
/// is the caller's job.
#[async_trait::async_trait]
pub trait Repository<E>: Send + Sync
where
    E: Entity + Clone + Send + Sync,
{
    /// Append one entity.
    async fn insert(&mut self, entity: E);

    /// Append all entities, preserving their relative order.
    async fn bulk_insert(&mut self, entities: Vec<E>);

    /// Replace the stored entity sharing `entity`'s identity, keeping its position.
    ///
    /// Fails with [`NotFoundError`] and leaves the store unchanged when no such
    /// entity exists.
    async fn update(&mut self, entity: E) -> RepositoryResult<()>;

    /// Remove the entity with identity `entity_id`.
    ///
    /// Fails with [`NotFoundError`] and leaves the store unchanged when no such
    /// entity exists.
    async fn delete(&mut self, entity_id: &E::Id) -> RepositoryResult<()>;

    /// Look up an entity by identity. Absence is `None`, not an error.
    async fn find_by_id(&self, entity_id: &E::Id) -> Option<E>;

    /// Every stored entity in collection order.
    async fn find_all(&self) -> Vec<E>;

    /// Kind of entity this repository is bound to.
    fn entity_kind(&self) -> EntityKind;
}

#[async_trait::async_trait]
impl<E, R> Repository<E> for Box<R>
where
    E: Entity + Clone + Send + Sync,
    R: Repository<E> + ?Sized,
{
    async fn insert(&mut self, entity: E) {
        (**self).insert(entity).await
    }

    async fn bulk_insert(&mut self, entities: Vec<E>) {
        (**self).bulk_insert(entities).await
    }

    async fn update(&mut self, entity: E) -> RepositoryResult<()> {
        (**self).update(entity).await
    }

    async fn delete(&mut self, entity_id: &E::Id) -> RepositoryResult<()> {
        (**self).delete(entity_id).await
    }

    async fn find_by_id(&self, entity_id: &E::Id) -> Option<E> {
        (**self).find_by_id(entity_id).await
    }

    async fn find_all(&self) -> Vec<E> {
        (**self).find_all().await
    }

    fn entity_kind(&self) -> EntityKind {
        (**self).entity_kind()
    }
}
