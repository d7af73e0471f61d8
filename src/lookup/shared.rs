//! Shared configuration types for [`crate::lookup::find_one`] and
//! [`crate::lookup::find_many`].

use crate::traits::repository::{PolymorphicRepository, Repository};
use crate::types::path::Path;
use crate::types::value::Key;
use std::sync::Arc;

/// The `by` configuration: which column(s) the repository is queried on, and where each
/// column's value comes from in params.
///
/// `Default` is "no `by` given at all": a single `id` column read from the `with` path.
/// Every other variant names its column(s) directly, and the column name doubles as the
/// param pointer unless [`ByColumns::Mapping`] gives an explicit path.
pub enum ByColumns {
    Default,
    Single(Key),
    List(Vec<Key>),
    Mapping(Vec<(Key, Path)>),
}

impl ByColumns {
    /// Resolves to a `(column, pointer)` list, given the default `with` path used only by
    /// [`ByColumns::Default`].
    pub(crate) fn pointers(&self, with: &Path) -> Vec<(Key, Path)> {
        match self {
            ByColumns::Default => vec![(Key::new("id"), with.clone())],
            ByColumns::Single(col) => vec![(col.clone(), Path::single(col.clone()))],
            ByColumns::List(cols) => cols.iter().map(|c| (c.clone(), Path::single(c.clone()))).collect(),
            ByColumns::Mapping(pairs) => pairs.clone(),
        }
    }
}

/// Where FindOne/FindMany resolve entities from: a single repository, or a type-tag-keyed
/// polymorphic map.
#[derive(Clone)]
pub enum RepositorySource {
    Single(Arc<dyn Repository>),
    Polymorphic(Arc<dyn PolymorphicRepository>),
}
