//! `AsyncPending`: an awaitable wrapper around a [`CallbackHandle`], letting an async caller
//! `.await` a transaction's async-mode `on_success` callback instead of blocking on
//! [`CallbackOutcome::join`](crate::types::CallbackOutcome::join).
//!
//! No self-referential state lives inside the future, so no `pin-project-lite` projection is
//! needed here — this wrapper only ever holds an `Arc` and is `Unpin` for free.

use crate::transaction::pool::CallbackHandle;
use crate::types::result::OperationResult;
use core::future::Future;
use core::pin::Pin;
use core::task::{Context, Poll};
use futures_core::future::FusedFuture;
use std::sync::Arc;

/// Awaits a [`CallbackOutcome`](crate::types::CallbackOutcome)'s pending handle.
///
/// Constructed via [`crate::types::CallbackOutcome::into_future`].
#[must_use = "futures do nothing unless polled"]
pub struct AsyncPending {
    handle: Arc<CallbackHandle>,
    done: bool,
}

impl AsyncPending {
    pub(crate) fn new(handle: Arc<CallbackHandle>) -> Self {
        Self { handle, done: false }
    }
}

impl Future for AsyncPending {
    type Output = OperationResult;

    fn poll(mut self: Pin<&mut Self>, cx: &mut Context<'_>) -> Poll<Self::Output> {
        match self.handle.poll() {
            Some(result) => {
                self.done = true;
                Poll::Ready(result)
            }
            None => {
                self.handle.register_waker(cx.waker().clone());
                Poll::Pending
            }
        }
    }
}

impl FusedFuture for AsyncPending {
    fn is_terminated(&self) -> bool {
        self.done
    }
}
