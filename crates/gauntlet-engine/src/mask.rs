//! Selection mask - per-run bit set over a catalog's test indices
//!
//! A mask is allocated lazily by the selection resolver, owned by a
//! single run plan, and dropped with it. Absence of a mask means "all
//! tests selected"; that case is represented by `Option<SelectionMask>`
//! at the call sites, never by an all-ones mask.

const WORD_BITS: usize = u64::BITS as usize;

/// Fixed-capacity bit set with one bit per 0-based test index.
///
/// The backing storage is exactly `ceil(capacity / 64)` words. Indices
/// are range-checked by the selection resolver before any mutation;
/// `set` on an out-of-range index is a caller bug and debug-asserts.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SelectionMask {
    words: Vec<u64>,
    capacity: usize,
}

impl SelectionMask {
    /// Create an empty mask covering `capacity` test indices.
    pub fn new(capacity: usize) -> Self {
        Self {
            words: vec![0; (capacity + WORD_BITS - 1) / WORD_BITS],
            capacity,
        }
    }

    /// Number of indices this mask covers.
    pub fn capacity(&self) -> usize {
        self.capacity
    }

    /// Mark index `index` as selected. Idempotent.
    pub fn set(&mut self, index: usize) {
        debug_assert!(
            index < self.capacity,
            "selection index {index} out of range for mask of {}",
            self.capacity
        );
        if index < self.capacity {
            self.words[index / WORD_BITS] |= 1 << (index % WORD_BITS);
        }
    }

    /// Whether index `index` is selected. Out-of-range indices are
    /// never selected.
    pub fn contains(&self, index: usize) -> bool {
        if index >= self.capacity {
            return false;
        }
        self.words[index / WORD_BITS] & (1 << (index % WORD_BITS)) != 0
    }

    /// Number of selected indices.
    pub fn count(&self) -> usize {
        self.words.iter().map(|w| w.count_ones() as usize).sum()
    }

    /// True when no index is selected.
    pub fn is_empty(&self) -> bool {
        self.words.iter().all(|w| *w == 0)
    }

    /// Iterate selected indices in ascending order.
    pub fn ones(&self) -> impl Iterator<Item = usize> + '_ {
        (0..self.capacity).filter(|i| self.contains(*i))
    }
}
