//! Changeover sequencing domain models.
//!
//! Provides the data types for describing a production plan, its
//! contiguous product runs, the changeover cost table, and the
//! optimization result handed to the presentation layer.
//!
//! # Domain Mappings
//!
//! | u-changeover | Beverage Filling | Paint Shop | Extrusion |
//! |--------------|------------------|------------|-----------|
//! | PlanEntry | Hourly filling slot | Car body | Coil |
//! | Block | Flavor run | Color batch | Alloy run |
//! | CostTable | Rinse water (liters) | Purge solvent | Scrap length |
//! | OptimizedPlan | Resequenced day plan | Booth sequence | Mill schedule |

mod block;
mod cost;
mod plan;
mod result;

pub use block::Block;
pub use cost::{normalize_identifier, ChangeoverCost, CostTable};
pub use plan::{PlanEntry, PlanRow};
pub use result::OptimizedPlan;
