//! `domainkit-core` — domain modeling building blocks.
//!
//! This crate contains **pure domain** primitives (no infrastructure concerns):
//! value objects, entities, the repository contract and the errors they raise.

pub mod entity;
pub mod error;
pub mod id;
pub mod repository;
pub mod validation;
pub mod value_object;

pub use entity::{Entity, EntityKind};
pub use error::{DomainError, DomainResult, InvalidUuidError, NotFoundError};
pub use id::Uuid;
pub use repository::{Repository, RepositoryResult};
pub use validation::{EntityValidationError, FieldErrors, Validator};
pub use value_object::{ValueObject, value_objects_equal};
