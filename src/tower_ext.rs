//! A `tower::Service` bridge for any [`crate::traits::Component`].
//!
//! A pipeline [`Component`](crate::traits::Component) never suspends — it runs to completion
//! synchronously — so [`ComponentService::call`] runs the component immediately and hands
//! back an already-resolved [`Ready`] future instead of polling anything.

use crate::context::Context;
use crate::traits::component::ComponentRef;
use crate::types::result::OperationResult;
use crate::types::value::Value;
use core::convert::Infallible;
use core::future::Future;
use core::pin::Pin;
use core::task::{Context as TaskContext, Poll};
use tower::Service;

/// Wraps a [`ComponentRef`] as a `tower::Service<(Vec<Value>, Context)>`.
///
/// `poll_ready` is always `Ready` — components carry no connection or backpressure state —
/// and the service never produces `Self::Error`; a failing invocation is visible as a
/// failing [`OperationResult`] in `Self::Response`, not as the Tower-level error channel.
#[derive(Clone)]
pub struct ComponentService {
    component: ComponentRef,
}

impl ComponentService {
    #[must_use]
    pub fn new(component: ComponentRef) -> Self {
        Self { component }
    }

    #[must_use]
    pub fn into_inner(self) -> ComponentRef {
        self.component
    }
}

impl Service<(Vec<Value>, Context)> for ComponentService {
    type Response = OperationResult;
    type Error = Infallible;
    type Future = Ready;

    fn poll_ready(&mut self, _cx: &mut TaskContext<'_>) -> Poll<Result<(), Self::Error>> {
        Poll::Ready(Ok(()))
    }

    fn call(&mut self, req: (Vec<Value>, Context)) -> Self::Future {
        let (params, context) = req;
        Ready(Some(self.component.call(&params, &context)))
    }
}

/// An already-resolved future returned by [`ComponentService::call`].
///
/// No self-referential state, so no `pin-project-lite` projection is needed — this future
/// only ever needs one poll.
#[must_use = "futures do nothing unless polled"]
pub struct Ready(Option<OperationResult>);

impl Future for Ready {
    type Output = Result<OperationResult, Infallible>;

    fn poll(mut self: Pin<&mut Self>, _cx: &mut TaskContext<'_>) -> Poll<Self::Output> {
        Poll::Ready(Ok(self.0.take().expect("ComponentService future polled after completion")))
    }
}

/// Extension trait for wrapping any [`ComponentRef`] as a `tower::Service` inline.
pub trait IntoService {
    fn into_service(self) -> ComponentService;
}

impl IntoService for ComponentRef {
    fn into_service(self) -> ComponentService {
        ComponentService::new(self)
    }
}
