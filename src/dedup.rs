//! Numeric deduplication
//!
//! Membership is by numeric value, not by source text: `5` and `5.0` parse
//! to the same `f64` and collapse into one entry. Keys are the bit patterns
//! of normalized finite floats, so the set can live in a plain `HashSet`
//! without an `Eq` impl for `f64`.

use ahash::RandomState;
use hashbrown::HashSet;

/// Set of accepted numbers for a single file.
///
/// Built fresh per file; insertion order is irrelevant. NaN is rejected by
/// the range filter before it ever reaches the set, so every stored value
/// is finite.
pub struct NumericSet {
    seen: HashSet<u64, RandomState>,
    values: Vec<f64>,
}

impl NumericSet {
    pub fn new() -> Self {
        Self {
            seen: HashSet::with_hasher(RandomState::new()),
            values: Vec::new(),
        }
    }

    pub fn with_capacity(capacity: usize) -> Self {
        Self {
            seen: HashSet::with_capacity_and_hasher(capacity, RandomState::new()),
            values: Vec::with_capacity(capacity),
        }
    }

    /// Key for numeric equality: -0.0 and 0.0 share a key, matching the
    /// SameValueZero semantics of the original set.
    #[inline]
    fn key(value: f64) -> u64 {
        let normalized = if value == 0.0 { 0.0 } else { value };
        normalized.to_bits()
    }

    /// Insert a value, returning true if it was not seen before.
    pub fn insert(&mut self, value: f64) -> bool {
        if self.seen.insert(Self::key(value)) {
            self.values.push(value);
            true
        } else {
            false
        }
    }

    pub fn contains(&self, value: f64) -> bool {
        self.seen.contains(&Self::key(value))
    }

    pub fn len(&self) -> usize {
        self.values.len()
    }

    pub fn is_empty(&self) -> bool {
        self.values.is_empty()
    }

    /// Consume the set, returning its members sorted ascending by value.
    pub fn into_sorted(mut self) -> Vec<f64> {
        self.values.sort_by(f64::total_cmp);
        self.values
    }
}

impl Default for NumericSet {
    fn default() -> Self {
        Self::new()
    }
}
