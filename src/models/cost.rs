//! Changeover cost table.
//!
//! Maps an ordered product pair to the cost of switching the line from the
//! first product to the second (rinse water, purge material, lost time).
//! Costs are directional and sparse: pairs that are not listed cost 0.
//!
//! # Key Format
//!
//! Entries are keyed by the concatenation of both normalized identifiers,
//! `normalize(from) + normalize(to)`. Normalization strips whitespace and
//! hyphens, so `"Coca Cola"`, `"Coca-Cola"` and `"CocaCola"` share entries.
//!
//! # Reference
//! Allahverdi et al. (2008), "A survey of scheduling problems with
//! setup times or costs"

use serde::{Deserialize, Serialize};
use std::collections::HashMap;

use crate::error::{SequencingError, SequencingResult};

/// Normalizes a product identifier for cost-table lookups.
///
/// Removes every whitespace character and every `-`. The result is only a
/// lookup key; products are still grouped and displayed by their original
/// identifier.
pub fn normalize_identifier(identifier: &str) -> String {
    identifier
        .chars()
        .filter(|c| !c.is_whitespace() && *c != '-')
        .collect()
}

/// Source of changeover costs between two products.
///
/// Implementations must be pure: the same pair always yields the same cost.
pub trait ChangeoverCost {
    /// Cost of switching from `from` to `to`.
    fn cost(&self, from: &str, to: &str) -> u64;
}

impl<C: ChangeoverCost + ?Sized> ChangeoverCost for &C {
    #[inline]
    fn cost(&self, from: &str, to: &str) -> u64 {
        (**self).cost(from, to)
    }
}

/// Sequence-dependent changeover cost table.
///
/// Serializes as a flat JSON object of pre-concatenated normalized keys:
///
/// ```json
/// { "CocaColaSprite": 10, "SpriteCocaCola": 5 }
/// ```
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct CostTable {
    costs: HashMap<String, u64>,
}

impl CostTable {
    /// Creates an empty table (every changeover costs 0).
    pub fn new() -> Self {
        Self::default()
    }

    /// Builder: defines the cost of switching from `from` to `to`.
    pub fn with_cost(mut self, from: &str, to: &str, cost: u64) -> Self {
        self.set_cost(from, to, cost);
        self
    }

    /// Defines the cost of switching from `from` to `to`.
    ///
    /// Both identifiers are normalized before the key is built.
    pub fn set_cost(&mut self, from: &str, to: &str, cost: u64) {
        self.costs.insert(Self::key(from, to), cost);
    }

    /// Inserts a cost under a pre-concatenated key, as stored by external
    /// cost sources. The key is used verbatim.
    pub fn insert_key(&mut self, key: impl Into<String>, cost: u64) {
        self.costs.insert(key.into(), cost);
    }

    /// Builds the lookup key for an ordered pair.
    pub fn key(from: &str, to: &str) -> String {
        let mut key = normalize_identifier(from);
        key.push_str(&normalize_identifier(to));
        key
    }

    /// Gets the stored cost for a raw key, if any.
    pub fn get_key(&self, key: &str) -> Option<u64> {
        self.costs.get(key).copied()
    }

    /// Iterates over the stored keys.
    pub fn keys(&self) -> impl Iterator<Item = &str> {
        self.costs.keys().map(String::as_str)
    }

    /// Number of explicitly defined changeovers.
    pub fn len(&self) -> usize {
        self.costs.len()
    }

    /// Whether no changeover is defined.
    pub fn is_empty(&self) -> bool {
        self.costs.is_empty()
    }

    /// Parses a table from a JSON object of key → cost.
    pub fn from_json_str(json: &str) -> SequencingResult<Self> {
        serde_json::from_str(json).map_err(|source| SequencingError::Parse {
            what: "cost table",
            source,
        })
    }
}

impl ChangeoverCost for CostTable {
    /// Returns the stored cost, or 0 when the pair is not listed.
    fn cost(&self, from: &str, to: &str) -> u64 {
        self.get_key(&Self::key(from, to)).unwrap_or(0)
    }
}

impl<K: Into<String>> FromIterator<(K, u64)> for CostTable {
    fn from_iter<I: IntoIterator<Item = (K, u64)>>(iter: I) -> Self {
        Self {
            costs: iter.into_iter().map(|(k, v)| (k.into(), v)).collect(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_normalize_identifier() {
        assert_eq!(normalize_identifier("Coca Cola"), "CocaCola");
        assert_eq!(normalize_identifier("Coca-Cola"), "CocaCola");
        assert_eq!(normalize_identifier(" Coca\t- Cola "), "CocaCola");
        assert_eq!(normalize_identifier("Fanta"), "Fanta");
        assert_eq!(normalize_identifier(""), "");
    }

    #[test]
    fn test_cost_lookup() {
        let table = CostTable::new()
            .with_cost("A", "B", 5)
            .with_cost("B", "A", 2);

        assert_eq!(table.cost("A", "B"), 5);
        assert_eq!(table.cost("B", "A"), 2);
        assert_eq!(table.len(), 2);
    }

    #[test]
    fn test_missing_pair_costs_zero() {
        let table = CostTable::new().with_cost("A", "B", 5);
        assert_eq!(table.cost("A", "C"), 0);
        assert_eq!(table.cost("A", "A"), 0);
        assert_eq!(CostTable::new().cost("X", "Y"), 0);
    }

    #[test]
    fn test_normalization_equivalence() {
        let table = CostTable::new().with_cost("Coca Cola", "Sprite", 10);
        assert_eq!(table.cost("CocaCola", "Sprite"), 10);
        assert_eq!(table.cost("Coca-Cola", "Sprite"), 10);
        assert_eq!(table.cost("Coca Cola", "Sprite"), 10);
        assert_eq!(table.get_key("CocaColaSprite"), Some(10));
    }

    #[test]
    fn test_insert_key_verbatim() {
        let mut table = CostTable::new();
        table.insert_key("FantaGuarana", 16);
        assert_eq!(table.cost("Fanta", "Guarana"), 16);
        assert_eq!(table.cost("Guarana", "Fanta"), 0);
    }

    #[test]
    fn test_from_iterator() {
        let table: CostTable = [("XY", 10), ("YX", 1)].into_iter().collect();
        assert_eq!(table.cost("X", "Y"), 10);
        assert_eq!(table.cost("Y", "X"), 1);
    }

    #[test]
    fn test_from_json_str() {
        let table =
            CostTable::from_json_str(r#"{"CocaColaSprite": 10, "SpriteCocaCola": 5}"#).unwrap();
        assert_eq!(table.cost("Coca Cola", "Sprite"), 10);
        assert_eq!(table.cost("Sprite", "Coca Cola"), 5);
    }

    #[test]
    fn test_from_json_str_rejects_negative_cost() {
        let err = CostTable::from_json_str(r#"{"AB": -3}"#).unwrap_err();
        assert!(matches!(err, SequencingError::Parse { what: "cost table", .. }));
    }

    #[test]
    fn test_serde_roundtrip_is_flat_object() {
        let table = CostTable::new().with_cost("A", "B", 7);
        let json = serde_json::to_string(&table).unwrap();
        assert_eq!(json, r#"{"AB":7}"#);
    }
}
