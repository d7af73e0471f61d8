//! External collaborator interfaces: everything the core depends on but does not
//! implement — the repository, the DB transaction manager, the background job queue, the
//! validation-schema DSL, and context type-checking — plus the `Component` ingress trait.

pub mod async_job;
pub mod component;
pub mod db;
pub mod repository;
pub mod schema;
pub mod type_check;

pub use async_job::{AsyncJobQueue, JobId};
pub use component::{Component, ComponentRef};
pub use db::{DbTransactionManager, NoopTransactionManager, TransactionScope};
pub use repository::{PolymorphicRepository, Repository, RepositoryMap};
pub use schema::ParamsSchema;
pub use type_check::{ContextTypeCheck, OptionalTyped, Required};
