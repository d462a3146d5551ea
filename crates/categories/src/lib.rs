//! Categories domain module.
//!
//! Example entity built on the core contracts: identity, validation on every
//! state change, and a repository contract bound to the entity.

pub mod category;
pub mod repository;

pub use category::{CATEGORY_KIND, Category, CategoryProps, CategoryRules, CreateCategory};
pub use repository::CategoryRepository;
