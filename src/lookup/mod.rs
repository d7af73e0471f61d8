//! Path-based extraction from params into repository lookups.

pub mod find_many;
pub mod find_one;
pub mod shared;

pub use find_many::{FindMany, FindManyBuilder};
pub use find_one::{FindOne, FindOneBuilder};
pub use shared::{ByColumns, RepositorySource};
