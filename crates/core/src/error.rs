//! Domain error model.

use thiserror::Error;

use crate::entity::EntityKind;
use crate::validation::EntityValidationError;

/// Result type used across the domain layer.
pub type DomainResult<T> = Result<T, DomainError>;

/// Domain-level error.
///
/// Keep this focused on deterministic, business/domain failures. Each variant
/// wraps the concrete error raised at its origin so callers can match on either.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum DomainError {
    /// An identifier was malformed.
    #[error(transparent)]
    InvalidId(#[from] InvalidUuidError),

    /// One or more entity fields failed validation.
    #[error(transparent)]
    EntityValidation(#[from] EntityValidationError),

    /// No entity with the requested identity exists in the store.
    #[error(transparent)]
    NotFound(#[from] NotFoundError),
}

/// A raw identifier string is not a canonical UUID.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
#[error("ID must be a valid UUID (got {value:?})")]
pub struct InvalidUuidError {
    value: String,
}

impl InvalidUuidError {
    pub fn new(value: impl Into<String>) -> Self {
        Self {
            value: value.into(),
        }
    }

    /// The rejected input.
    pub fn value(&self) -> &str {
        &self.value
    }
}

/// Identity lookup failed.
///
/// Carries the rendered identity (or identities) that were sought and the kind
/// of entity the store holds.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
#[error("Entity {entity} not found using ID {}", .ids.join(", "))]
pub struct NotFoundError {
    ids: Vec<String>,
    entity: EntityKind,
}

impl NotFoundError {
    pub fn new(id: &impl core::fmt::Display, entity: EntityKind) -> Self {
        Self {
            ids: vec![id.to_string()],
            entity,
        }
    }

    pub fn many<I, T>(ids: I, entity: EntityKind) -> Self
    where
        I: IntoIterator<Item = T>,
        T: core::fmt::Display,
    {
        Self {
            ids: ids.into_iter().map(|id| id.to_string()).collect(),
            entity,
        }
    }

    pub fn ids(&self) -> &[String] {
        &self.ids
    }

    pub fn entity(&self) -> EntityKind {
        self.entity
    }
}
