//! Exhaustive permutation search over block orderings.
//!
//! # Algorithm
//!
//! 1. Start from the identity ordering (the plan as given).
//! 2. Visit every permutation of block positions in lexicographic order,
//!    one at a time, in place.
//! 3. Score each candidate by summing consecutive changeovers, exactly as
//!    [`total_cost`](crate::sequencing::total_cost) does. Pair costs are
//!    looked up once per search (n^2 lookups) and reused for every candidate.
//! 4. Replace the incumbent only on a strictly lower cost.
//!
//! Step 4 makes the result deterministic: among equal-cost optima the
//! first one in enumeration order wins. Because the identity ordering is
//! visited first, the result never costs more than the original plan.
//!
//! # Complexity
//! O(n! * n) time, O(n^2) space, n = number of blocks. There is no pruning;
//! the block-count guard ([`DEFAULT_MAX_BLOCKS`]) keeps the search from
//! running unbounded, and monitors allow cooperative cancellation.

use log::{debug, warn};
use serde::{Deserialize, Serialize};
use std::time::Instant;

use super::permutation::next_permutation;
use super::stats::SearchStatistics;
use crate::error::{SequencingError, SequencingResult};
use crate::models::{Block, ChangeoverCost};
use crate::monitor::{NoOpMonitor, SearchCommand, SearchMonitor};
use crate::validation::{ValidationError, ValidationErrorKind};

/// Default block-count limit for exhaustive search (10! = 3,628,800 candidates).
pub const DEFAULT_MAX_BLOCKS: usize = 10;

/// The cheapest block ordering found by the search.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct OptimalOrder {
    /// Block positions in optimized order (indices into the searched blocks).
    pub order: Vec<usize>,
    /// Total changeover cost of the ordering.
    pub cost: u64,
    /// Search statistics.
    pub statistics: SearchStatistics,
}

impl OptimalOrder {
    /// Borrows the searched blocks in optimized order.
    pub fn blocks<'b, T>(&self, blocks: &'b [Block<T>]) -> Vec<&'b Block<T>> {
        self.order.iter().map(|&i| &blocks[i]).collect()
    }

    /// Clones the searched blocks into optimized order.
    pub fn apply<T: Clone>(&self, blocks: &[Block<T>]) -> Vec<Block<T>> {
        self.order.iter().map(|&i| blocks[i].clone()).collect()
    }
}

/// Exhaustive block-ordering optimizer.
///
/// # Example
///
/// ```
/// use u_changeover::models::{Block, CostTable};
/// use u_changeover::sequencing::PermutationOptimizer;
///
/// let costs = CostTable::new().with_cost("X", "Y", 10).with_cost("Y", "X", 1);
/// let blocks = vec![Block::new("X", 1), Block::new("Y", 2)];
///
/// let best = PermutationOptimizer::new(&costs).optimal_order(&blocks).unwrap();
/// assert_eq!(best.order, vec![1, 0]);
/// assert_eq!(best.cost, 1);
/// ```
#[derive(Debug, Clone)]
pub struct PermutationOptimizer<C> {
    costs: C,
    max_blocks: Option<usize>,
}

impl<C: ChangeoverCost> PermutationOptimizer<C> {
    /// Creates an optimizer with the default block limit.
    pub fn new(costs: C) -> Self {
        Self {
            costs,
            max_blocks: Some(DEFAULT_MAX_BLOCKS),
        }
    }

    /// Sets the block limit.
    pub fn with_max_blocks(mut self, max_blocks: usize) -> Self {
        self.max_blocks = Some(max_blocks);
        self
    }

    /// Sets or clears the block limit.
    pub fn with_block_limit(mut self, max_blocks: Option<usize>) -> Self {
        self.max_blocks = max_blocks;
        self
    }

    /// Removes the block limit. The search then runs n! candidates however
    /// large n is; pair it with a monitor.
    pub fn without_block_limit(mut self) -> Self {
        self.max_blocks = None;
        self
    }

    /// The configured block limit.
    pub fn max_blocks(&self) -> Option<usize> {
        self.max_blocks
    }

    /// Finds the cheapest ordering of `blocks`.
    ///
    /// # Errors
    /// - `InvalidInput` if `blocks` is empty.
    /// - `TooManyBlocks` if `blocks` exceeds the block limit.
    pub fn optimal_order<T>(&self, blocks: &[Block<T>]) -> SequencingResult<OptimalOrder> {
        self.optimal_order_with_monitor(blocks, &mut NoOpMonitor)
    }

    /// Finds the cheapest ordering of `blocks`, polling `monitor` once per
    /// candidate.
    ///
    /// # Errors
    /// As [`Self::optimal_order`], plus `SearchTerminated` if the monitor
    /// stops the search. No partial result is returned.
    pub fn optimal_order_with_monitor<T, M>(
        &self,
        blocks: &[Block<T>],
        monitor: &mut M,
    ) -> SequencingResult<OptimalOrder>
    where
        M: SearchMonitor + ?Sized,
    {
        if blocks.is_empty() {
            return Err(SequencingError::InvalidInput(vec![ValidationError::new(
                ValidationErrorKind::EmptyPlan,
                "No blocks to order",
            )]));
        }
        if let Some(limit) = self.max_blocks {
            if blocks.len() > limit {
                warn!(
                    "Refusing exhaustive search over {} blocks (limit {})",
                    blocks.len(),
                    limit
                );
                return Err(SequencingError::TooManyBlocks {
                    blocks: blocks.len(),
                    limit,
                });
            }
        }

        let start = Instant::now();
        let products: Vec<&str> = blocks.iter().map(|b| b.product.as_str()).collect();
        let pairs = PairCosts::new(&self.costs, &products);
        let mut candidate: Vec<usize> = (0..blocks.len()).collect();
        let mut best = candidate.clone();
        let mut best_cost = u64::MAX;
        let mut stats = SearchStatistics::default();

        monitor.on_enter_search(blocks.len());
        let outcome = loop {
            monitor.on_step();
            if let SearchCommand::Terminate(reason) = monitor.search_command() {
                break Err(reason);
            }

            let cost = pairs.sequence_cost(&candidate);
            stats.permutations_evaluated += 1;

            // Strict improvement only: the first optimum in enumeration order is kept.
            if stats.improvements == 0 || cost < best_cost {
                best_cost = cost;
                best.copy_from_slice(&candidate);
                stats.improvements += 1;
                debug!("New incumbent {:?} with cost {}", best, cost);
                monitor.on_improvement(&best, cost);
            }

            if !next_permutation(&mut candidate) {
                break Ok(());
            }
        };
        monitor.on_exit_search();
        stats.duration = start.elapsed();

        match outcome {
            Ok(()) => Ok(OptimalOrder {
                order: best,
                cost: best_cost,
                statistics: stats,
            }),
            Err(reason) => {
                warn!(
                    "Search terminated after {} permutations: {}",
                    stats.permutations_evaluated, reason
                );
                Err(SequencingError::SearchTerminated {
                    reason,
                    evaluated: stats.permutations_evaluated,
                })
            }
        }
    }
}

/// Changeover costs between every ordered pair of blocks, row-major.
struct PairCosts {
    n: usize,
    costs: Vec<u64>,
}

impl PairCosts {
    fn new<C: ChangeoverCost + ?Sized>(source: &C, products: &[&str]) -> Self {
        let n = products.len();
        let mut costs = Vec::with_capacity(n * n);
        for from in products {
            for to in products {
                costs.push(source.cost(from, to));
            }
        }
        Self { n, costs }
    }

    #[inline]
    fn sequence_cost(&self, order: &[usize]) -> u64 {
        order.windows(2).fold(0u64, |total, w| {
            total.saturating_add(self.costs[w[0] * self.n + w[1]])
        })
    }
}
