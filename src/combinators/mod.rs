//! The combinator set: components that compose other components.
//!
//! Every combinator here implements [`crate::traits::Component`] directly rather than
//! being built from [`crate::component::Callable`] — combinators are themselves
//! components" — and is constructed via `Arc::new_cyclic` so it can hand out a stable
//! `ComponentRef` to itself wherever the algebra calls for "self" (seeding an accumulator's
//! `operation`, [`either::Either`] rewriting the winning child's `operation`).

mod distribute;

pub mod chain;
pub mod collection;
pub mod either;
pub mod fanout;
pub mod namespace;
pub mod optional;
pub mod parallel;
pub mod shortcut;
pub mod split;

pub use chain::Chain;
pub use collection::Collection;
pub use either::Either;
pub use fanout::Fanout;
pub use namespace::{Namespace, NamespaceBuilder};
pub use optional::Optional;
pub use parallel::Parallel;
pub use shortcut::Shortcut;
pub use split::Split;
