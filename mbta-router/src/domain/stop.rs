//! Stop entity.

use std::fmt;

/// A station or platform served by one or more routes.
///
/// Like [`Route`](super::Route), equality covers both ID and name.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Stop {
    /// Server-assigned opaque ID (e.g. `place-pktrm`).
    pub id: String,
    /// Human-readable name (e.g. `Park Street`).
    pub name: String,
}

impl Stop {
    /// Create a new stop.
    pub fn new(id: impl Into<String>, name: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            name: name.into(),
        }
    }
}

impl fmt::Display for Stop {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.name)
    }
}
