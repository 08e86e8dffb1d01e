//! Optimization result.
//!
//! The single artifact handed to the presentation layer: the chosen block
//! ordering, the rebuilt plan, and the before/after changeover costs.
//!
//! # Costs
//!
//! | Field | Sequence costed |
//! |-------|-----------------|
//! | `original_cost` | input plan, slot by slot |
//! | `order_cost` | chosen block ordering, block by block |
//! | `optimized_cost` | rebuilt plan, slot by slot |

use serde::{Deserialize, Serialize};

use super::{Block, PlanEntry};
use crate::sequencing::SearchStatistics;

/// Result of optimizing one production plan.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct OptimizedPlan<T> {
    /// Chosen ordering as positions into the grouped input blocks.
    pub order: Vec<usize>,
    /// Blocks in chosen order.
    pub blocks: Vec<Block<T>>,
    /// Changeover cost of the chosen block ordering.
    pub order_cost: u64,
    /// Changeover cost of the input plan.
    pub original_cost: u64,
    /// Changeover cost of the rebuilt plan.
    pub optimized_cost: u64,
    /// Distinct products in first-occurrence order of the chosen ordering.
    pub product_order: Vec<String>,
    /// Rebuilt plan.
    pub plan: Vec<PlanEntry<T>>,
    /// Search statistics.
    pub statistics: SearchStatistics,
}

impl<T> OptimizedPlan<T> {
    /// Cost saved relative to the input plan.
    pub fn savings(&self) -> u64 {
        self.original_cost.saturating_sub(self.optimized_cost)
    }

    /// Fraction of the original cost saved (0.0..=1.0).
    ///
    /// Returns 0.0 when the original plan had no changeover cost.
    pub fn savings_ratio(&self) -> f64 {
        if self.original_cost == 0 {
            0.0
        } else {
            self.savings() as f64 / self.original_cost as f64
        }
    }

    /// Whether the rebuilt plan is strictly cheaper than the input.
    pub fn is_improvement(&self) -> bool {
        self.optimized_cost < self.original_cost
    }

    /// Product display order joined for a one-line summary.
    pub fn product_order_label(&self) -> String {
        self.product_order.join(", ")
    }

    /// Number of blocks the plan was grouped into.
    pub fn block_count(&self) -> usize {
        self.blocks.len()
    }
}
