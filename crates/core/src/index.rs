//! Positions into the displayed record list.
//!
//! Users address records by their 1-based position in the currently
//! displayed list. [`Index`] keeps both views of that position so callers
//! never do the off-by-one conversion by hand.

use std::fmt::{Display, Formatter};

use indexmap::IndexSet;

/// A position in the displayed list, always at least 1 in its user-facing form.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct Index {
    zero_based: usize,
}

/// Unique indices in the order the user wrote them.
pub type IndexList = IndexSet<Index>;

impl Index {
    /// Builds an index from a 1-based position. Returns `None` for 0.
    #[must_use]
    pub fn from_one_based(one_based: usize) -> Option<Self> {
        one_based.checked_sub(1).map(Self::from_zero_based)
    }

    #[must_use]
    pub fn from_zero_based(zero_based: usize) -> Self {
        Self { zero_based }
    }

    #[must_use]
    pub fn zero_based(self) -> usize {
        self.zero_based
    }

    #[must_use]
    pub fn one_based(self) -> usize {
        self.zero_based + 1
    }
}

impl Display for Index {
    fn fmt(&self, formatter: &mut Formatter<'_>) -> std::fmt::Result {
        write!(formatter, "{}", self.one_based())
    }
}

/// Returns the 1-based values of every index that does not fit a list of
/// `size` entries, ascending.
#[must_use]
pub fn out_of_bounds(indices: &IndexList, size: usize) -> Vec<usize> {
    let mut invalid: Vec<usize> = indices
        .iter()
        .filter(|index| index.zero_based() >= size)
        .map(|index| index.one_based())
        .collect();
    invalid.sort_unstable();
    invalid
}
