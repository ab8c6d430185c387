use std::fmt;

use serde::{Deserialize, Serialize};

/// 1-based ordinal assigned to a book at load time.
///
/// Ids follow input order and are never reused within a run. They anchor the
/// final ranking tie-break, so they must stay stable across re-runs on the
/// same input.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct BookId(u32);

impl BookId {
    pub fn from_ordinal(ordinal: u32) -> Self {
        BookId(ordinal)
    }

    pub fn get(&self) -> u32 {
        self.0
    }
}

impl fmt::Display for BookId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        self.0.fmt(f)
    }
}
