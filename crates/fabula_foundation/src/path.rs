//! Symbolic divert-target addresses.

use std::fmt;
use std::sync::Arc;

/// A symbolic address into the story graph, as carried by a
/// divert-target value.
///
/// The operator engine only ever compares paths structurally; the
/// components are kept as a single interned dotted string.
#[derive(Clone, PartialEq, Eq, Hash)]
pub struct Path(Arc<str>);

impl Path {
    /// Creates a path from its dotted string form.
    #[must_use]
    pub fn new(components: &str) -> Self {
        Self(components.into())
    }

    /// The dotted string form of this path.
    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Iterates over the dot-separated components.
    pub fn components(&self) -> impl Iterator<Item = &str> {
        self.0.split('.')
    }
}

impl fmt::Debug for Path {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Path({})", self.0)
    }
}

impl fmt::Display for Path {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}
