//! Thread-local sync/async mode for `on_success` callback dispatch.
//!
//! Defaults to synchronous (callbacks run inline, on the thread that called
//! [`crate::transaction::transaction::Transaction::call`]) unless a caller opts into async
//! dispatch with [`with_sync_callbacks(false, ...)`](with_sync_callbacks). The flag is restored
//! on every exit path — including unwinding — via a drop guard, and an async worker thread
//! re-establishes the captured mode before running its callback body so a nested `Transaction`
//! invoked from inside an async callback inherits it.

use std::cell::Cell;

thread_local! {
    static SYNC_CALLBACKS: Cell<bool> = const { Cell::new(true) };
}

/// Returns `true` if `on_success` callbacks should run synchronously on the calling thread.
#[must_use]
pub fn sync_callbacks() -> bool {
    SYNC_CALLBACKS.with(Cell::get)
}

struct Restore(bool);

impl Drop for Restore {
    fn drop(&mut self) {
        SYNC_CALLBACKS.with(|cell| cell.set(self.0));
    }
}

/// Runs `thunk` with the sync/async callback mode set to `sync`, restoring the previous value
/// afterward (even if `thunk` panics).
pub fn with_sync_callbacks<R>(sync: bool, thunk: impl FnOnce() -> R) -> R {
    let previous = SYNC_CALLBACKS.with(Cell::get);
    let _restore = Restore(previous);
    SYNC_CALLBACKS.with(|cell| cell.set(sync));
    thunk()
}
