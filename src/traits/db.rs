//! The database transaction interface (egress): `Transaction`'s collaborator.

/// A nested-transaction-capable database handle.
///
/// `transaction::Transaction` calls [`DbTransactionManager::begin`] once per invocation with
/// `requires_new = true` always: every nested transaction opens a genuinely new scope, so an
/// inner rollback never undoes the outer scope's already-committed work. The manager owns
/// whatever connection/driver state is needed to make that true; the core only ever sees a
/// [`TransactionScope`].
pub trait DbTransactionManager: Send + Sync {
    /// Opens a new, `requires_new` transaction scope.
    fn begin(&self) -> Box<dyn TransactionScope>;
}

/// A single open transaction scope.
///
/// Rollback is an explicit `rollback()` call rather than an exception caught at the scope
/// boundary, with the scope responsible for suppressing the rollback "signal" at its own
/// boundary so it never escapes as a panic.
pub trait TransactionScope: Send {
    /// Registers a callback to run after the scope commits (used for sync-mode on_success
    /// dispatch, though the core additionally defers to the worker pool for async mode).
    fn after_commit(&mut self, callback: Box<dyn FnOnce() + Send>);

    /// Commits the scope, running any `after_commit` callbacks in registration order.
    fn commit(self: Box<Self>);

    /// Rolls back the scope. `after_commit` callbacks never run.
    fn rollback(self: Box<Self>);
}

/// An in-memory [`DbTransactionManager`] for tests and embedders with no real database —
/// every scope's `after_commit` callbacks simply run inline on `commit()`.
#[derive(Default)]
pub struct NoopTransactionManager;

impl DbTransactionManager for NoopTransactionManager {
    fn begin(&self) -> Box<dyn TransactionScope> {
        Box::new(NoopScope { after_commit: Vec::new() })
    }
}

struct NoopScope {
    after_commit: Vec<Box<dyn FnOnce() + Send>>,
}

impl TransactionScope for NoopScope {
    fn after_commit(&mut self, callback: Box<dyn FnOnce() + Send>) {
        self.after_commit.push(callback);
    }

    fn commit(self: Box<Self>) {
        for cb in self.after_commit {
            cb();
        }
    }

    fn rollback(self: Box<Self>) {}
}
