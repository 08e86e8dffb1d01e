//! Block (product run) model.
//!
//! A block is a maximal contiguous run of plan entries sharing one
//! product. Blocks are the unit the optimizer permutes: a run is never
//! split, and two runs of the same product are never merged.

use serde::{Deserialize, Serialize};

use super::PlanEntry;

/// A contiguous run of one product.
///
/// # Invariants
/// - `timestamps` is non-empty.
/// - `timestamps` keeps the order of the source plan.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Block<T> {
    /// Product identifier (original, non-normalized).
    pub product: String,
    /// Timestamps of the run, in plan order.
    pub timestamps: Vec<T>,
}

impl<T> Block<T> {
    /// Creates a block from its first slot.
    pub fn new(product: impl Into<String>, first: T) -> Self {
        Self {
            product: product.into(),
            timestamps: vec![first],
        }
    }

    /// Appends a slot to the run.
    pub fn push(&mut self, timestamp: T) {
        self.timestamps.push(timestamp);
    }

    /// Builder: appends a slot and returns self.
    pub fn with_timestamp(mut self, timestamp: T) -> Self {
        self.push(timestamp);
        self
    }

    /// Number of slots in the run.
    #[inline]
    pub fn len(&self) -> usize {
        self.timestamps.len()
    }

    /// Always `false` for blocks built through [`Block::new`].
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.timestamps.is_empty()
    }
}

impl<T: Clone> Block<T> {
    /// Expands the run back into plan entries.
    pub fn entries(&self) -> impl Iterator<Item = PlanEntry<T>> + '_ {
        self.timestamps
            .iter()
            .map(move |ts| PlanEntry::new(ts.clone(), self.product.clone()))
    }
}
