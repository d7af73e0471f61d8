//! Component arity: how many positional params a component consumes, and whether it
//! wants the context too.

use core::fmt;

/// How many positional params a [`crate::traits::Component`] consumes.
///
/// `Unbounded` means "consumes all remaining positional params". Everything else is a
/// concrete count fixed at wiring time (see [`crate::component::Callable`]), replacing a
/// dynamic language's runtime arity inspection with a value decided once when the component
/// is built.
#[derive(Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Arity {
    Fixed(usize),
    Unbounded,
}

impl Arity {
    /// Returns the fixed count, or `None` for `Unbounded`.
    #[must_use]
    pub fn fixed(self) -> Option<usize> {
        match self {
            Arity::Fixed(n) => Some(n),
            Arity::Unbounded => None,
        }
    }

    /// Sums two arities per Parallel's signature law: `Unbounded` is absorbing.
    #[must_use]
    pub fn add(self, other: Arity) -> Arity {
        match (self, other) {
            (Arity::Unbounded, _) | (_, Arity::Unbounded) => Arity::Unbounded,
            (Arity::Fixed(a), Arity::Fixed(b)) => Arity::Fixed(a + b),
        }
    }

    /// Maximum of two arities per Fanout/Either's signature law: `Unbounded` wins only
    /// if both sides are `Unbounded` (Fanout ignores `Unbounded` children when a fixed
    /// sibling exists); callers fold with [`Arity::max_ignoring_unbounded`] for that case.
    #[must_use]
    pub fn max(self, other: Arity) -> Arity {
        match (self, other) {
            (Arity::Unbounded, Arity::Unbounded) => Arity::Unbounded,
            (Arity::Unbounded, Arity::Fixed(n)) | (Arity::Fixed(n), Arity::Unbounded) => {
                Arity::Fixed(n)
            }
            (Arity::Fixed(a), Arity::Fixed(b)) => Arity::Fixed(a.max(b)),
        }
    }
}

/// Folds an iterator of arities per Fanout/Either's signature law: the max of the *fixed*
/// arities present, ignoring `Unbounded` children unless every child is `Unbounded`.
/// Empty input yields `Fixed(0)`.
#[must_use]
pub fn fanout_arity(arities: impl IntoIterator<Item = Arity>) -> Arity {
    let mut acc: Option<Arity> = None;
    for a in arities {
        acc = Some(match acc {
            None => a,
            Some(prev) => prev.max(a),
        });
    }
    acc.unwrap_or(Arity::Fixed(0))
}

/// Folds an iterator of arities per Either's signature law: the max of the fixed arities,
/// but `Unbounded` dominates if *any* child is `Unbounded` — unlike [`fanout_arity`], which
/// ignores a lone `Unbounded` child.
#[must_use]
pub fn either_arity(arities: impl IntoIterator<Item = Arity>) -> Arity {
    let mut any_unbounded = false;
    let mut max_fixed = 0usize;
    for a in arities {
        match a {
            Arity::Unbounded => any_unbounded = true,
            Arity::Fixed(n) => max_fixed = max_fixed.max(n),
        }
    }
    if any_unbounded {
        Arity::Unbounded
    } else {
        Arity::Fixed(max_fixed)
    }
}

impl fmt::Debug for Arity {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Arity::Fixed(n) => write!(f, "Fixed({n})"),
            Arity::Unbounded => write!(f, "Unbounded"),
        }
    }
}

/// A component's calling convention: how many positional params it wants, and whether
/// it also wants the context.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Signature {
    pub arity: Arity,
    pub accepts_context: bool,
}

impl Signature {
    #[must_use]
    pub const fn new(arity: Arity, accepts_context: bool) -> Self {
        Self { arity, accepts_context }
    }

    /// `(Fixed(0), true)` — the context validator's signature, normalized away from the
    /// historically-observed `(-1, true)`.
    #[must_use]
    pub const fn context_only() -> Self {
        Self { arity: Arity::Fixed(0), accepts_context: true }
    }
}
