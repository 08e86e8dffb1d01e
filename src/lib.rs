//! Changeover sequencing for the U-Engine ecosystem.
//!
//! Reorders a chronological production plan so that the cumulative
//! changeover (cleaning) cost between consecutive product runs is minimal.
//!
//! # Modules
//!
//! - **`models`**: Domain types: `PlanEntry`, `PlanRow`, `Block`, `CostTable`,
//!   `OptimizedPlan`
//! - **`sequencing`**: Block grouping, sequence evaluation, exhaustive
//!   permutation search, deduplication, and plan reconstruction
//! - **`monitor`**: Cooperative cancellation and time limits for the search
//! - **`validation`**: Input integrity checks (empty plans, blank cells, cost keys)
//! - **`config`**: Serializable optimizer settings
//! - **`error`**: Error type shared by all fallible operations
//!
//! # Example
//!
//! ```
//! use u_changeover::models::{CostTable, PlanEntry};
//! use u_changeover::sequencing::ChangeoverOptimizer;
//!
//! let costs = CostTable::new()
//!     .with_cost("Coca Cola", "Sprite", 10)
//!     .with_cost("Sprite", "Coca Cola", 5);
//! let plan = vec![
//!     PlanEntry::new("06:00", "Coca Cola"),
//!     PlanEntry::new("07:00", "Sprite"),
//!     PlanEntry::new("08:00", "Coca Cola"),
//! ];
//!
//! let result = ChangeoverOptimizer::new(costs).optimize(&plan).unwrap();
//! assert_eq!(result.original_cost, 15);
//! assert_eq!(result.optimized_cost, 5);
//! assert_eq!(result.product_order, vec!["Sprite", "Coca Cola"]);
//! ```
//!
//! # References
//!
//! - Allahverdi et al. (2008), "A survey of scheduling problems with setup
//!   times or costs"
//! - Knuth (2011), "The Art of Computer Programming", Vol. 4A, 7.2.1.2

pub mod config;
pub mod error;
pub mod models;
pub mod monitor;
pub mod sequencing;
pub mod validation;
