use core::fmt;
use serde::{Deserialize, Serialize};

/// Number of categories across the board, one column each.
pub const CATEGORY_COUNT: usize = 6;

/// Number of clues shown per category, one row each.
pub const CLUES_PER_CATEGORY: usize = 2;

/// Length of the flattened clue sequence.
pub const CLUE_COUNT: usize = CATEGORY_COUNT * CLUES_PER_CATEGORY;

/// Sampled categories reporting fewer clues than this are discarded.
pub const MIN_CLUES_PER_CATEGORY: usize = 2;

/// Opaque category identifier handed out by the data provider.
#[derive(Copy, Clone, Debug, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct CategoryId(pub u64);

impl fmt::Display for CategoryId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "#{}", self.0)
    }
}

impl From<u64> for CategoryId {
    fn from(id: u64) -> Self {
        Self(id)
    }
}

/// Position of a clue on the board, `(category, slot)`.
pub type Slot2 = (usize, usize);

pub trait ToFlatIndex {
    fn to_flat_index(self) -> usize;
}

impl ToFlatIndex for Slot2 {
    fn to_flat_index(self) -> usize {
        self.0 * CLUES_PER_CATEGORY + self.1
    }
}

pub const fn to_slot(index: usize) -> Slot2 {
    (index / CLUES_PER_CATEGORY, index % CLUES_PER_CATEGORY)
}

pub const fn category_position(index: usize) -> usize {
    index / CLUES_PER_CATEGORY
}

/// Whether this clue closes its category, which is when the header changes.
pub const fn is_last_in_category(index: usize) -> bool {
    index % CLUES_PER_CATEGORY == CLUES_PER_CATEGORY - 1
}

pub const fn is_last_clue(index: usize) -> bool {
    index + 1 == CLUE_COUNT
}
