use serde::{Deserialize, Serialize};
use std::fmt;
use std::time::Duration;

/// Statistics collected during a permutation search.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct SearchStatistics {
    /// Number of block orderings whose cost was evaluated.
    pub permutations_evaluated: u64,
    /// Number of times the incumbent was replaced by a strictly cheaper ordering.
    pub improvements: u64,
    /// Wall-clock duration of the search.
    pub duration: Duration,
}

impl fmt::Display for SearchStatistics {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "Search Statistics:")?;
        writeln!(f, "  Permutations Evaluated: {}", self.permutations_evaluated)?;
        writeln!(f, "  Improvements: {}", self.improvements)?;
        writeln!(
            f,
            "  Search Duration (secs): {:.3}",
            self.duration.as_secs_f64()
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_display_formats_all_fields() {
        let stats = SearchStatistics {
            permutations_evaluated: 24,
            improvements: 3,
            duration: Duration::from_millis(1500),
        };
        let s = stats.to_string();
        assert!(s.contains("Permutations Evaluated: 24"));
        assert!(s.contains("Improvements: 3"));
        assert!(s.contains("Search Duration (secs): 1.500"));
    }
}
