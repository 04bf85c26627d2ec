//! Construction states as field bit sets.

use std::cmp::Ordering;
use std::fmt;

/// The set of fields supplied so far, as a bit set over declaration indices.
///
/// Bit `i` is set when the field at declaration index `i` has been supplied.
/// Identity is the set itself, so any supply order reaching the same fields
/// yields an equal state.
#[derive(Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct ConstructionState(u64);

impl ConstructionState {
    /// The state with no field supplied.
    pub const EMPTY: Self = Self(0);

    /// The state with all of the first `len` fields supplied.
    #[must_use]
    pub const fn full(len: usize) -> Self {
        if len >= 64 {
            Self(u64::MAX)
        } else {
            Self((1u64 << len) - 1)
        }
    }

    /// Creates a state from raw bits.
    #[must_use]
    pub const fn from_bits(bits: u64) -> Self {
        Self(bits)
    }

    /// Creates a state containing the given field indices.
    pub fn from_indices(indices: impl IntoIterator<Item = usize>) -> Self {
        indices.into_iter().fold(Self::EMPTY, Self::with)
    }

    /// Returns the raw bits.
    #[must_use]
    pub const fn bits(self) -> u64 {
        self.0
    }

    /// Returns true if the field at `index` is supplied.
    #[must_use]
    pub const fn contains(self, index: usize) -> bool {
        (self.0 >> index) & 1 != 0
    }

    /// Returns this state with the field at `index` added.
    #[must_use]
    pub const fn with(self, index: usize) -> Self {
        Self(self.0 | (1 << index))
    }

    /// Returns this state with the field at `index` removed.
    #[must_use]
    pub const fn without(self, index: usize) -> Self {
        Self(self.0 & !(1 << index))
    }

    /// Returns the union of two states.
    #[must_use]
    pub const fn union(self, other: Self) -> Self {
        Self(self.0 | other.0)
    }

    /// Returns true if every field of `other` is also in `self`.
    #[must_use]
    pub const fn is_superset_of(self, other: Self) -> bool {
        self.0 & other.0 == other.0
    }

    /// Number of supplied fields.
    #[must_use]
    pub const fn len(self) -> usize {
        self.0.count_ones() as usize
    }

    /// Returns true if no field is supplied.
    #[must_use]
    pub const fn is_empty(self) -> bool {
        self.0 == 0
    }

    /// Iterates over the supplied field indices in declaration order.
    pub fn indices(self) -> impl Iterator<Item = usize> {
        let mut bits = self.0;
        std::iter::from_fn(move || {
            if bits == 0 {
                return None;
            }
            let index = bits.trailing_zeros() as usize;
            bits &= bits - 1;
            Some(index)
        })
    }

    /// Compares two states in canonical order.
    ///
    /// Smaller states come first; states of equal size are ordered
    /// lexicographically by their member indices, so `{0, 2}` precedes
    /// `{1, 2}`.
    #[must_use]
    pub fn canonical_cmp(&self, other: &Self) -> Ordering {
        self.len()
            .cmp(&other.len())
            .then_with(|| self.indices().cmp(other.indices()))
    }
}

impl fmt::Debug for ConstructionState {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_set().entries(self.indices()).finish()
    }
}
