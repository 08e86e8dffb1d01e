//! Display order of distinct products.

use std::collections::HashSet;

use crate::models::Block;

/// Distinct products of a block ordering, in first-occurrence order.
///
/// Used for the human-readable summary only; it plays no part in costing
/// or reconstruction.
pub fn dedupe_products<'a, T, I>(blocks: I) -> Vec<String>
where
    T: 'a,
    I: IntoIterator<Item = &'a Block<T>>,
{
    let mut seen = HashSet::new();
    let mut products = Vec::new();
    for block in blocks {
        if seen.insert(block.product.as_str()) {
            products.push(block.product.clone());
        }
    }
    products
}
