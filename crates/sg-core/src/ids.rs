use core::fmt;
use core::num::{NonZeroU32, NonZeroU64};
use core::sync::atomic::{AtomicU64, Ordering};

use crate::error::{SgError, SgResult};

/// Compact slot identifier used inside a graph's storage arenas.
///
/// - `u32` keeps handles small
/// - `NonZero` lets `Option<Id>` (free-list links) stay the size of `Id`
#[derive(Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Id(NonZeroU32);

impl Id {
    /// Largest 0-based index representable by an `Id`.
    pub const MAX_INDEX: u32 = u32::MAX - 1;

    /// Create an Id from a 0-based index by storing index+1.
    ///
    /// # Panics
    /// Panics if `index` is `u32::MAX`.
    pub fn from_index(index: u32) -> Self {
        assert!(index <= Self::MAX_INDEX, "slot index {index} out of range");
        match NonZeroU32::new(index + 1) {
            Some(raw) => Self(raw),
            None => unreachable!("index+1 is nonzero"),
        }
    }

    /// Checked conversion from a `usize` arena position.
    pub fn try_from_usize(index: usize) -> SgResult<Self> {
        u32::try_from(index)
            .ok()
            .filter(|&i| i <= Self::MAX_INDEX)
            .map(Self::from_index)
            .ok_or_else(|| SgError::invalid_arg(format!("slot index {index} exceeds u32 range")))
    }

    /// Recover the 0-based index.
    pub fn index(self) -> u32 {
        self.0.get() - 1
    }

    /// The 0-based index as a `usize`, for indexing into storage.
    pub fn as_usize(self) -> usize {
        self.index() as usize
    }
}

impl fmt::Debug for Id {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Id({})", self.index())
    }
}

impl fmt::Display for Id {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.index())
    }
}

static NEXT_GRAPH_ID: AtomicU64 = AtomicU64::new(1);

/// Identity of one graph container instance.
///
/// Every container draws a fresh value at construction, so two containers never
/// share an id even when their contents are identical. Handles carry the id of
/// the container that minted them.
#[derive(Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct GraphId(NonZeroU64);

impl GraphId {
    /// Allocate a process-unique id.
    pub fn next() -> Self {
        let raw = NEXT_GRAPH_ID.fetch_add(1, Ordering::Relaxed);
        // A u64 counter starting at 1 does not wrap in practice.
        match NonZeroU64::new(raw) {
            Some(raw) => Self(raw),
            None => unreachable!("graph id counter wrapped"),
        }
    }

    pub fn get(self) -> u64 {
        self.0.get()
    }
}

impl fmt::Debug for GraphId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "GraphId({})", self.0)
    }
}

impl fmt::Display for GraphId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "g{}", self.0)
    }
}
