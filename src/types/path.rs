//! Pointers: ordered sequences of atoms addressing a value inside nested params.

use crate::types::value::Key;
use core::fmt;
use smallvec::SmallVec;

/// One step of a [`Path`]: either a symbolic key (map lookup) or a non-negative index
/// (list lookup).
#[derive(Clone, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum PathAtom {
    Key(Key),
    Index(usize),
}

impl fmt::Debug for PathAtom {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            PathAtom::Key(k) => fmt::Debug::fmt(k, f),
            PathAtom::Index(i) => write!(f, "{i}"),
        }
    }
}

impl From<Key> for PathAtom {
    fn from(k: Key) -> Self {
        PathAtom::Key(k)
    }
}

impl From<&'static str> for PathAtom {
    fn from(s: &'static str) -> Self {
        PathAtom::Key(Key::new(s))
    }
}

impl From<usize> for PathAtom {
    fn from(i: usize) -> Self {
        PathAtom::Index(i)
    }
}

/// An ordered sequence of [`PathAtom`]s denoting the location of a value (or an error) inside
/// nested params.
///
/// Inline-stored up to four atoms — namespace/collection nesting rarely runs deeper than that
/// in practice.
#[derive(Clone, Default, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Path(SmallVec<[PathAtom; 4]>);

impl Path {
    /// The empty path — "pass through full params" in Namespace's `from` option.
    #[must_use]
    pub fn root() -> Self {
        Self(SmallVec::new())
    }

    /// Builds a path from an iterator of atoms.
    pub fn from_atoms<I, A>(atoms: I) -> Self
    where
        I: IntoIterator<Item = A>,
        A: Into<PathAtom>,
    {
        Self(atoms.into_iter().map(Into::into).collect())
    }

    /// A single-atom path.
    pub fn single(atom: impl Into<PathAtom>) -> Self {
        let mut v = SmallVec::new();
        v.push(atom.into());
        Self(v)
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn iter(&self) -> impl Iterator<Item = &PathAtom> {
        self.0.iter()
    }

    pub fn as_slice(&self) -> &[PathAtom] {
        &self.0
    }

    /// Returns a new path with `prefix`'s atoms followed by `self`'s.
    ///
    /// This is the operation behind error-path prefixing: Namespace computes
    /// `ns_path.prepended_to(error.path)`, Collection computes `[K, k].prepended_to(...)`.
    #[must_use]
    pub fn prepended_to(&self, suffix: &Path) -> Path {
        let mut out = SmallVec::with_capacity(self.0.len() + suffix.0.len());
        out.extend(self.0.iter().cloned());
        out.extend(suffix.0.iter().cloned());
        Path(out)
    }

    /// Appends a single atom, returning a new path.
    #[must_use]
    pub fn pushed(&self, atom: impl Into<PathAtom>) -> Path {
        let mut out = self.0.clone();
        out.push(atom.into());
        Path(out)
    }
}

impl fmt::Debug for Path {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_list().entries(self.0.iter()).finish()
    }
}

impl FromIterator<PathAtom> for Path {
    fn from_iter<T: IntoIterator<Item = PathAtom>>(iter: T) -> Self {
        Self(iter.into_iter().collect())
    }
}
