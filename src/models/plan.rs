//! Production plan model.
//!
//! A plan is an ordered sequence of entries, each naming the product made
//! in one time slot. The order is chronological and authoritative: the
//! crate never re-sorts a plan.

use serde::{Deserialize, Serialize};

/// One time slot of a production plan.
///
/// The timestamp is opaque to the sequencing core; any `Clone` type works
/// (slot labels, epoch milliseconds, calendar types).
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct PlanEntry<T> {
    /// Slot timestamp.
    pub timestamp: T,
    /// Product identifier, as written by the plan source.
    pub product: String,
}

impl<T> PlanEntry<T> {
    /// Creates a new plan entry.
    pub fn new(timestamp: T, product: impl Into<String>) -> Self {
        Self {
            timestamp,
            product: product.into(),
        }
    }
}

/// A plan row as delivered by a plan source, before validation.
///
/// Spreadsheet-like sources may leave cells blank; such rows are rejected
/// by [`crate::validation::validate_rows`].
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PlanRow<T> {
    /// Slot timestamp, if present.
    pub timestamp: Option<T>,
    /// Product identifier, if present.
    pub product: Option<String>,
}

impl<T> PlanRow<T> {
    /// Creates a fully populated row.
    pub fn new(timestamp: T, product: impl Into<String>) -> Self {
        Self {
            timestamp: Some(timestamp),
            product: Some(product.into()),
        }
    }

    /// Creates a row with no cells filled in.
    pub fn blank() -> Self {
        Self {
            timestamp: None,
            product: None,
        }
    }

    /// Sets the timestamp cell.
    pub fn with_timestamp(mut self, timestamp: T) -> Self {
        self.timestamp = Some(timestamp);
        self
    }

    /// Sets the product cell.
    pub fn with_product(mut self, product: impl Into<String>) -> Self {
        self.product = Some(product.into());
        self
    }
}

impl<T> From<PlanEntry<T>> for PlanRow<T> {
    fn from(entry: PlanEntry<T>) -> Self {
        Self::new(entry.timestamp, entry.product)
    }
}
