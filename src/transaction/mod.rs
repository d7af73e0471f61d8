//! Database transaction wrapping and async callback dispatch.

pub mod mode;
pub mod pool;
#[allow(clippy::module_inception)]
pub mod transaction;

pub use mode::with_sync_callbacks;
pub use pool::{CallbackHandle, WorkerPool};
pub use transaction::{Transaction, TransactionBuilder};
