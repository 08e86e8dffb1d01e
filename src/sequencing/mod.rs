//! Changeover sequencing.
//!
//! Turns a chronological plan into the block ordering with the lowest
//! total changeover cost, and back into a full plan.
//!
//! # Pipeline
//!
//! 1. [`group_blocks`]: plan → maximal same-product runs
//! 2. [`PermutationOptimizer`]: exhaustive search over block orderings,
//!    scored by [`total_cost`]
//! 3. [`dedupe_products`]: distinct products of the winner, for display
//! 4. [`rebuild_plan`]: winner → full timestamped plan
//!
//! [`ChangeoverOptimizer`] runs the whole pipeline and reports the result
//! as an [`OptimizedPlan`](crate::models::OptimizedPlan).
//!
//! # References
//!
//! - Allahverdi et al. (2008), "A survey of scheduling problems with setup
//!   times or costs"
//! - Knuth (2011), "The Art of Computer Programming", Vol. 4A, 7.2.1.2

mod dedupe;
mod engine;
mod evaluate;
mod group;
mod optimizer;
mod permutation;
mod reconstruct;
mod stats;

pub use dedupe::dedupe_products;
pub use engine::ChangeoverOptimizer;
pub use evaluate::{blocks_cost, plan_cost, total_cost};
pub use group::group_blocks;
pub use optimizer::{OptimalOrder, PermutationOptimizer, DEFAULT_MAX_BLOCKS};
pub use permutation::next_permutation;
pub use reconstruct::{rebuild_plan, reassign_timestamps, TimestampPolicy};
pub use stats::SearchStatistics;
