//! Infrastructure layer: storage adapters for the domain contracts.

pub mod repository;

pub use repository::{InMemoryCategoryRepository, InMemoryRepository};
