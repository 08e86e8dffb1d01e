//! End-to-end plan optimization.
//!
//! # Algorithm
//!
//! 1. Validate the plan and cost it as given.
//! 2. Group it into blocks.
//! 3. Search all block orderings for the cheapest (first one on ties).
//! 4. Dedupe the winner's products for display.
//! 5. Rebuild the full plan under the configured timestamp policy and cost it.
//!
//! # Complexity
//! Dominated by step 3: O(n! * n) for n blocks.

use log::info;

use super::dedupe::dedupe_products;
use super::evaluate::plan_cost;
use super::group::group_blocks;
use super::optimizer::PermutationOptimizer;
use super::reconstruct::rebuild_plan;
use crate::config::OptimizerConfig;
use crate::error::SequencingResult;
use crate::models::{ChangeoverCost, CostTable, OptimizedPlan, PlanEntry, PlanRow};
use crate::monitor::{CompositeMonitor, NoOpMonitor, SearchMonitor, TimeLimitMonitor};
use crate::validation::{validate_plan, validate_rows};

/// Changeover optimizer for whole production plans.
///
/// # Example
///
/// ```
/// use u_changeover::config::OptimizerConfig;
/// use u_changeover::models::{CostTable, PlanEntry};
/// use u_changeover::sequencing::ChangeoverOptimizer;
///
/// let costs = CostTable::from_json_str(r#"{"XY": 10, "YX": 1}"#).unwrap();
/// let plan = vec![
///     PlanEntry::new(1, "X"),
///     PlanEntry::new(2, "Y"),
///     PlanEntry::new(3, "X"),
///     PlanEntry::new(4, "Y"),
/// ];
///
/// let optimizer = ChangeoverOptimizer::new(costs).with_config(OptimizerConfig::new());
/// let result = optimizer.optimize(&plan).unwrap();
/// assert_eq!(result.original_cost, 21);
/// assert_eq!(result.optimized_cost, 1);
/// assert_eq!(result.product_order_label(), "Y, X");
/// ```
#[derive(Debug, Clone)]
pub struct ChangeoverOptimizer<C = CostTable> {
    costs: C,
    config: OptimizerConfig,
}

impl<C: ChangeoverCost> ChangeoverOptimizer<C> {
    /// Creates an optimizer with the default configuration.
    pub fn new(costs: C) -> Self {
        Self {
            costs,
            config: OptimizerConfig::default(),
        }
    }

    /// Sets the configuration.
    pub fn with_config(mut self, config: OptimizerConfig) -> Self {
        self.config = config;
        self
    }

    /// The cost source.
    pub fn costs(&self) -> &C {
        &self.costs
    }

    /// The configuration.
    pub fn config(&self) -> &OptimizerConfig {
        &self.config
    }

    /// Optimizes a validated, time-ordered plan.
    ///
    /// # Errors
    /// - `InvalidInput` for an empty plan or blank products.
    /// - `TooManyBlocks` if the plan exceeds the configured block limit.
    /// - `SearchTerminated` if the configured time limit runs out.
    pub fn optimize<T: Clone>(
        &self,
        plan: &[PlanEntry<T>],
    ) -> SequencingResult<OptimizedPlan<T>> {
        self.optimize_with_monitor(plan, &mut NoOpMonitor)
    }

    /// Validates raw plan rows, then optimizes them.
    pub fn optimize_rows<T: Clone>(
        &self,
        rows: &[PlanRow<T>],
    ) -> SequencingResult<OptimizedPlan<T>> {
        let plan = validate_rows(rows)?;
        self.optimize(&plan)
    }

    /// Optimizes a plan, polling `monitor` during the search.
    ///
    /// The monitor runs alongside the configured time limit, if any.
    pub fn optimize_with_monitor<T, M>(
        &self,
        plan: &[PlanEntry<T>],
        monitor: &mut M,
    ) -> SequencingResult<OptimizedPlan<T>>
    where
        T: Clone,
        M: SearchMonitor + ?Sized,
    {
        validate_plan(plan)?;
        let original_cost = plan_cost(&self.costs, plan);
        let blocks = group_blocks(plan)?;

        let optimizer =
            PermutationOptimizer::new(&self.costs).with_block_limit(self.config.max_blocks);
        let best = match self.config.time_limit() {
            Some(limit) => {
                let mut monitors = CompositeMonitor::new()
                    .with_monitor(TimeLimitMonitor::new(limit))
                    .with_monitor(&mut *monitor);
                optimizer.optimal_order_with_monitor(&blocks, &mut monitors)?
            }
            None => optimizer.optimal_order_with_monitor(&blocks, monitor)?,
        };

        let ordered = best.blocks(&blocks);
        let product_order = dedupe_products(ordered.iter().copied());
        let rebuilt = rebuild_plan(ordered.iter().copied());
        let optimized_plan = self.config.timestamp_policy.apply(rebuilt, plan)?;
        let optimized_cost = plan_cost(&self.costs, &optimized_plan);

        info!(
            "Optimized {} entries in {} blocks: cost {} -> {} ({} permutations, {:.3}s)",
            plan.len(),
            blocks.len(),
            original_cost,
            optimized_cost,
            best.statistics.permutations_evaluated,
            best.statistics.duration.as_secs_f64()
        );

        Ok(OptimizedPlan {
            blocks: best.apply(&blocks),
            order: best.order,
            order_cost: best.cost,
            original_cost,
            optimized_cost,
            product_order,
            plan: optimized_plan,
            statistics: best.statistics,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::SequencingError;
    use crate::models::Block;
    use crate::monitor::InterruptMonitor;
    use crate::sequencing::{total_cost, TimestampPolicy};
    use crate::validation::ValidationErrorKind;
    use proptest::prelude::*;
    use std::collections::HashMap;
    use std::sync::atomic::AtomicBool;
    use std::time::Duration;

    /// Rinse water (liters) between flavors on a bottling line.
    fn beverage_costs() -> CostTable {
        CostTable::from_json_str(
            r#"{
                "CocaColaSprite": 10, "SpriteCocaCola": 5,
                "CocaColaFanta": 12, "FantaCocaCola": 8,
                "CocaColaGuarana": 15, "GuaranaCocaCola": 9,
                "SpriteFanta": 13, "FantaSprite": 9,
                "SpriteGuarana": 14, "GuaranaSprite": 10,
                "FantaGuarana": 16, "GuaranaFanta": 10
            }"#,
        )
        .unwrap()
    }

    fn day_plan() -> Vec<PlanEntry<&'static str>> {
        vec![
            PlanEntry::new("06:00", "Coca Cola"),
            PlanEntry::new("07:00", "Coca Cola"),
            PlanEntry::new("08:00", "Fanta"),
            PlanEntry::new("09:00", "Sprite"),
            PlanEntry::new("10:00", "Coca-Cola"),
            PlanEntry::new("11:00", "Guarana"),
            PlanEntry::new("12:00", "Sprite"),
        ]
    }

    fn alternating_plan() -> Vec<PlanEntry<&'static str>> {
        vec![
            PlanEntry::new("t1", "X"),
            PlanEntry::new("t2", "Y"),
            PlanEntry::new("t3", "X"),
            PlanEntry::new("t4", "Y"),
        ]
    }

    #[test]
    fn test_alternating_plan() {
        let costs: CostTable = [("XY", 10), ("YX", 1)].into_iter().collect();
        let result = ChangeoverOptimizer::new(costs)
            .optimize(&alternating_plan())
            .unwrap();

        assert_eq!(result.original_cost, 21);
        assert_eq!(result.order, vec![1, 3, 0, 2]);
        assert_eq!(result.order_cost, 1);
        assert_eq!(result.optimized_cost, 1);
        assert_eq!(result.product_order, vec!["Y", "X"]);
        assert_eq!(
            result.plan,
            vec![
                PlanEntry::new("t2", "Y"),
                PlanEntry::new("t4", "Y"),
                PlanEntry::new("t1", "X"),
                PlanEntry::new("t3", "X"),
            ]
        );
        assert_eq!(result.savings(), 20);
    }

    #[test]
    fn test_beverage_day_plan() {
        let costs = beverage_costs();
        let plan = day_plan();
        let result = ChangeoverOptimizer::new(&costs).optimize(&plan).unwrap();

        assert_eq!(result.block_count(), 6);
        assert_eq!(result.plan.len(), plan.len());
        assert!(result.optimized_cost <= result.original_cost);
        assert_eq!(result.order_cost, result.optimized_cost);
        // "Coca Cola" and "Coca-Cola" share costs but stay distinct products.
        assert_eq!(result.product_order.len(), 5);
        assert_eq!(
            result.optimized_cost,
            total_cost(&costs, result.plan.iter().map(|e| e.product.as_str()))
        );
    }

    #[test]
    fn test_single_entry_plan() {
        let result = ChangeoverOptimizer::new(beverage_costs())
            .optimize(&[PlanEntry::new(0, "Fanta")])
            .unwrap();
        assert_eq!(result.order, vec![0]);
        assert_eq!(result.original_cost, 0);
        assert_eq!(result.optimized_cost, 0);
        assert_eq!(result.plan, vec![PlanEntry::new(0, "Fanta")]);
    }

    #[test]
    fn test_empty_plan_rejected() {
        let err = ChangeoverOptimizer::new(CostTable::new())
            .optimize::<i64>(&[])
            .unwrap_err();
        assert_eq!(
            err.validation_errors()[0].kind,
            ValidationErrorKind::EmptyPlan
        );
    }

    #[test]
    fn test_blank_product_rejected() {
        let plan = vec![PlanEntry::new(0, "Fanta"), PlanEntry::new(1, " ")];
        let err = ChangeoverOptimizer::new(CostTable::new())
            .optimize(&plan)
            .unwrap_err();
        assert_eq!(
            err.validation_errors()[0].kind,
            ValidationErrorKind::MissingProduct
        );
    }

    #[test]
    fn test_optimize_rows() {
        let costs: CostTable = [("XY", 10), ("YX", 1)].into_iter().collect();
        let optimizer = ChangeoverOptimizer::new(costs);

        let rows: Vec<PlanRow<&str>> = alternating_plan().into_iter().map(Into::into).collect();
        assert_eq!(optimizer.optimize_rows(&rows).unwrap().optimized_cost, 1);

        let broken = vec![PlanRow::new("t1", "X"), PlanRow::blank().with_product("Y")];
        let err = optimizer.optimize_rows(&broken).unwrap_err();
        assert_eq!(
            err.validation_errors()[0].kind,
            ValidationErrorKind::MissingTimestamp
        );
    }

    #[test]
    fn test_block_limit_from_config() {
        let optimizer = ChangeoverOptimizer::new(beverage_costs())
            .with_config(OptimizerConfig::new().with_max_blocks(5));
        let err = optimizer.optimize(&day_plan()).unwrap_err();
        assert!(matches!(
            err,
            SequencingError::TooManyBlocks {
                blocks: 6,
                limit: 5
            }
        ));
    }

    #[test]
    fn test_positional_policy() {
        let costs: CostTable = [("XY", 10), ("YX", 1)].into_iter().collect();
        let optimizer = ChangeoverOptimizer::new(costs).with_config(
            OptimizerConfig::new().with_timestamp_policy(TimestampPolicy::Positional),
        );
        let result = optimizer.optimize(&alternating_plan()).unwrap();

        assert_eq!(
            result.plan,
            vec![
                PlanEntry::new("t1", "Y"),
                PlanEntry::new("t2", "Y"),
                PlanEntry::new("t3", "X"),
                PlanEntry::new("t4", "X"),
            ]
        );
        assert_eq!(result.optimized_cost, 1);
        // Blocks keep their own timestamps regardless of the policy.
        assert_eq!(result.blocks[0], Block::new("Y", "t2"));
    }

    #[test]
    fn test_interrupted_search_returns_no_result() {
        let flag = AtomicBool::new(true);
        let mut monitor = InterruptMonitor::new(&flag);
        let err = ChangeoverOptimizer::new(beverage_costs())
            .with_config(OptimizerConfig::new().with_time_limit(Duration::from_secs(60)))
            .optimize_with_monitor(&day_plan(), &mut monitor)
            .unwrap_err();
        assert!(matches!(err, SequencingError::SearchTerminated { .. }));
    }

    #[test]
    fn test_generous_time_limit_completes() {
        let result = ChangeoverOptimizer::new(beverage_costs())
            .with_config(OptimizerConfig::new().with_time_limit(Duration::from_secs(60)))
            .optimize(&day_plan())
            .unwrap();
        assert_eq!(result.statistics.permutations_evaluated, 720);
    }

    fn multiset<T: Clone + std::hash::Hash + Eq>(
        plan: &[PlanEntry<T>],
    ) -> HashMap<(T, String), usize> {
        let mut counts = HashMap::new();
        for e in plan {
            *counts
                .entry((e.timestamp.clone(), e.product.clone()))
                .or_insert(0) += 1;
        }
        counts
    }

    proptest! {
        #[test]
        fn prop_rebuilt_plan_is_blockwise_permutation(
            picks in prop::collection::vec(0usize..4, 1..7),
            weights in prop::collection::vec(0u64..25, 16),
        ) {
            let names = ["Coca Cola", "Sprite", "Fanta", "Guarana"];
            let mut costs = CostTable::new();
            for (k, w) in weights.iter().enumerate() {
                costs.set_cost(names[k / 4], names[k % 4], *w);
            }
            let plan: Vec<_> = picks
                .iter()
                .enumerate()
                .map(|(i, &p)| PlanEntry::new(i, names[p]))
                .collect();

            let result = ChangeoverOptimizer::new(&costs)
                .with_config(OptimizerConfig::new().without_block_limit())
                .optimize(&plan)
                .unwrap();

            prop_assert_eq!(result.plan.len(), plan.len());
            prop_assert_eq!(multiset(&result.plan), multiset(&plan));
            prop_assert!(result.optimized_cost <= result.original_cost);

            let grouped = group_blocks(&plan).unwrap();
            let mut sorted_blocks = result.blocks.clone();
            sorted_blocks.sort_by_key(|b| b.timestamps[0]);
            prop_assert_eq!(sorted_blocks, grouped);

            let mut seen = std::collections::HashSet::new();
            prop_assert!(result.product_order.iter().all(|p| seen.insert(p.clone())));
            let first_seen: Vec<String> = {
                let mut s = std::collections::HashSet::new();
                result
                    .blocks
                    .iter()
                    .filter(|b| s.insert(b.product.clone()))
                    .map(|b| b.product.clone())
                    .collect()
            };
            prop_assert_eq!(&result.product_order, &first_seen);
        }
    }
}
