//! Line identifier type.

use std::fmt;

use serde::{Deserialize, Serialize};

/// An opaque metro line identifier.
///
/// The dataset identifies lines by small integers (Tehran uses 1 through 7);
/// nothing beyond identity is modelled here. A station belonging to more than
/// one line is an interchange.
#[derive(Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct LineId(u32);

impl LineId {
    /// Create a line identifier from its numeric tag.
    pub fn new(n: u32) -> Self {
        LineId(n)
    }

    /// Returns the numeric tag.
    pub fn value(&self) -> u32 {
        self.0
    }
}

impl fmt::Debug for LineId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "LineId({})", self.0)
    }
}

impl fmt::Display for LineId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}
