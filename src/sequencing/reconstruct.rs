//! Plan reconstruction.
//!
//! Expands an ordering of blocks back into a full timestamped plan. Each
//! block contributes one entry per timestamp, so the rebuilt plan has the
//! same length as the plan the blocks were grouped from.
//!
//! # Timestamp Policies
//!
//! | Policy | Timestamps of the rebuilt plan |
//! |--------|--------------------------------|
//! | `KeepWithBlock` | travel with their block (default) |
//! | `Positional` | reassigned row by row from the original chronology |
//!
//! `Positional` keeps the slot grid of the original plan (first row keeps
//! the first slot, and so on) while the products follow the optimized
//! order. Timestamps then describe slots, not the runs they came from.

use serde::{Deserialize, Serialize};

use crate::error::{SequencingError, SequencingResult};
use crate::models::{Block, PlanEntry};

/// How timestamps are attached to a rebuilt plan.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum TimestampPolicy {
    /// Each block keeps its own timestamps.
    #[default]
    KeepWithBlock,
    /// Rows take the timestamps of the original plan, position by position.
    Positional,
}

impl TimestampPolicy {
    /// Applies the policy to a plan rebuilt with [`rebuild_plan`].
    ///
    /// # Errors
    /// `PlanLengthMismatch` under `Positional` if the plans differ in length.
    pub fn apply<T: Clone>(
        self,
        rebuilt: Vec<PlanEntry<T>>,
        original: &[PlanEntry<T>],
    ) -> SequencingResult<Vec<PlanEntry<T>>> {
        match self {
            TimestampPolicy::KeepWithBlock => Ok(rebuilt),
            TimestampPolicy::Positional => reassign_timestamps(rebuilt, original),
        }
    }
}

/// Rebuilds a full plan from blocks in the given order.
///
/// Block order is preserved, and so is the timestamp order inside each block.
pub fn rebuild_plan<'a, T, I>(blocks: I) -> Vec<PlanEntry<T>>
where
    T: Clone + 'a,
    I: IntoIterator<Item = &'a Block<T>>,
{
    blocks.into_iter().flat_map(|b| b.entries()).collect()
}

/// Replaces the timestamps of `rebuilt` with those of `original`, row by row.
///
/// # Errors
/// `PlanLengthMismatch` if the plans differ in length.
pub fn reassign_timestamps<T: Clone>(
    rebuilt: Vec<PlanEntry<T>>,
    original: &[PlanEntry<T>],
) -> SequencingResult<Vec<PlanEntry<T>>> {
    if rebuilt.len() != original.len() {
        return Err(SequencingError::PlanLengthMismatch {
            expected: original.len(),
            actual: rebuilt.len(),
        });
    }

    Ok(rebuilt
        .into_iter()
        .zip(original)
        .map(|(entry, slot)| PlanEntry::new(slot.timestamp.clone(), entry.product))
        .collect())
}
