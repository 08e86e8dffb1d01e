//! Block grouping.
//!
//! Collapses a time-ordered plan into maximal contiguous runs. Products are
//! compared verbatim: `"Coca Cola"` and `"CocaCola"` form separate runs even
//! though they share cost-table entries, and two runs of the same product
//! separated by another product stay separate blocks.

use log::debug;

use crate::error::{SequencingError, SequencingResult};
use crate::models::{Block, PlanEntry};
use crate::validation::{ValidationError, ValidationErrorKind};

/// Groups a plan into blocks, in order of first appearance of each run.
///
/// # Errors
/// `InvalidInput` if the plan is empty.
///
/// # Complexity
/// O(n) in the number of entries.
pub fn group_blocks<T: Clone>(entries: &[PlanEntry<T>]) -> SequencingResult<Vec<Block<T>>> {
    let Some((first, rest)) = entries.split_first() else {
        return Err(SequencingError::InvalidInput(vec![ValidationError::new(
            ValidationErrorKind::EmptyPlan,
            "Cannot group an empty plan",
        )]));
    };

    let mut blocks = vec![Block::new(first.product.clone(), first.timestamp.clone())];
    for entry in rest {
        match blocks.last_mut() {
            Some(current) if current.product == entry.product => {
                current.push(entry.timestamp.clone());
            }
            _ => blocks.push(Block::new(entry.product.clone(), entry.timestamp.clone())),
        }
    }

    debug!(
        "Grouped {} plan entries into {} blocks",
        entries.len(),
        blocks.len()
    );
    Ok(blocks)
}
