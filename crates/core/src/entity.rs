//! Entity trait: identity + continuity across state changes.

use core::any::Any;

use crate::value_object::ValueObject;

/// Entity capability.
///
/// Every entity exposes exactly one identity value object. Two entities are the
/// same entity when they are of the same concrete type and their identities are
/// equal; every other field is ignored.
pub trait Entity: 'static {
    /// Identity value object.
    type Id: ValueObject + core::fmt::Display + Send + Sync;

    /// Returns the entity identity.
    fn entity_id(&self) -> &Self::Id;

    /// Identity equality.
    ///
    /// `false` when `other` is absent or is a different concrete entity type,
    /// even if the identities happen to hold the same value.
    fn equals<O: Entity>(&self, other: Option<&O>) -> bool
    where
        Self: Sized,
    {
        other
            .and_then(|other| (other as &dyn Any).downcast_ref::<Self>())
            .is_some_and(|other| self.entity_id() == other.entity_id())
    }
}

/// Statically declared descriptor of an entity kind.
///
/// Repositories carry one so that lookup failures can name what was sought.
#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash)]
pub struct EntityKind(&'static str);

impl EntityKind {
    pub const fn new(name: &'static str) -> Self {
        Self(name)
    }

    pub const fn name(&self) -> &'static str {
        self.0
    }
}

impl core::fmt::Display for EntityKind {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.write_str(self.0)
    }
}
