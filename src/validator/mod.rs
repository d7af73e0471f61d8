//! Thin validator adapters over the external schema-checking collaborators.

pub mod context_validator;
pub mod params;

pub use context_validator::{ContextSchemaEntry, ContextValidator};
pub use params::ParamsValidator;
