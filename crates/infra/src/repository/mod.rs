//! Repository implementations.
//!
//! The contract lives in `domainkit-core`; this module provides the in-memory
//! reference store and the stores bound to concrete entity kinds.

pub mod category;
pub mod in_memory;

pub use category::InMemoryCategoryRepository;
pub use in_memory::InMemoryRepository;
