use domainkit_core::Repository;

use crate::category::Category;

/// Storage contract for categories.
///
/// Any `Repository<Category>` is a `CategoryRepository`.
pub trait CategoryRepository: Repository<Category> {}

impl<T> CategoryRepository for T where T: Repository<Category> {}
