//! Sequence evaluation.
//!
//! The cost of a sequence is the sum of changeover costs over consecutive
//! pairs. Sums saturate at `u64::MAX` instead of overflowing.

use crate::models::{Block, ChangeoverCost, PlanEntry};

/// Total changeover cost of a product sequence.
///
/// Returns 0 for sequences of length 0 or 1.
pub fn total_cost<C, I, S>(costs: &C, sequence: I) -> u64
where
    C: ChangeoverCost + ?Sized,
    I: IntoIterator<Item = S>,
    S: AsRef<str>,
{
    let mut iter = sequence.into_iter();
    let Some(mut prev) = iter.next() else {
        return 0;
    };

    let mut total: u64 = 0;
    for next in iter {
        total = total.saturating_add(costs.cost(prev.as_ref(), next.as_ref()));
        prev = next;
    }
    total
}

/// Total changeover cost of a plan, slot by slot.
pub fn plan_cost<C, T>(costs: &C, entries: &[PlanEntry<T>]) -> u64
where
    C: ChangeoverCost + ?Sized,
{
    total_cost(costs, entries.iter().map(|e| e.product.as_str()))
}

/// Total changeover cost of a block ordering.
pub fn blocks_cost<'a, C, T, I>(costs: &C, blocks: I) -> u64
where
    C: ChangeoverCost + ?Sized,
    T: 'a,
    I: IntoIterator<Item = &'a Block<T>>,
{
    total_cost(costs, blocks.into_iter().map(|b| b.product.as_str()))
}
