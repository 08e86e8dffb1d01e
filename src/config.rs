//! Optimizer configuration.
//!
//! Settings are plain data so they can be stored next to the cost table
//! and loaded from JSON:
//!
//! ```json
//! { "max_blocks": 8, "time_limit_ms": 2000, "timestamp_policy": "keep_with_block" }
//! ```
//!
//! Omitted fields take their defaults; `"max_blocks": null` disables the
//! block-count guard.

use serde::{Deserialize, Serialize};
use std::time::Duration;

use crate::error::{SequencingError, SequencingResult};
use crate::sequencing::{TimestampPolicy, DEFAULT_MAX_BLOCKS};

/// Settings for [`ChangeoverOptimizer`](crate::sequencing::ChangeoverOptimizer).
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct OptimizerConfig {
    /// Largest block count searched exhaustively. `None` = unlimited.
    pub max_blocks: Option<usize>,
    /// Wall-clock search budget (ms). `None` = no limit.
    pub time_limit_ms: Option<u64>,
    /// How timestamps are attached to the rebuilt plan.
    pub timestamp_policy: TimestampPolicy,
}

impl Default for OptimizerConfig {
    fn default() -> Self {
        Self {
            max_blocks: Some(DEFAULT_MAX_BLOCKS),
            time_limit_ms: None,
            timestamp_policy: TimestampPolicy::default(),
        }
    }
}

impl OptimizerConfig {
    /// Creates the default configuration.
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets the block limit.
    pub fn with_max_blocks(mut self, max_blocks: usize) -> Self {
        self.max_blocks = Some(max_blocks);
        self
    }

    /// Removes the block limit.
    pub fn without_block_limit(mut self) -> Self {
        self.max_blocks = None;
        self
    }

    /// Sets the search time limit (truncated to whole milliseconds).
    pub fn with_time_limit(mut self, limit: Duration) -> Self {
        self.time_limit_ms = Some(u64::try_from(limit.as_millis()).unwrap_or(u64::MAX));
        self
    }

    /// Sets the timestamp policy for the rebuilt plan.
    pub fn with_timestamp_policy(mut self, policy: TimestampPolicy) -> Self {
        self.timestamp_policy = policy;
        self
    }

    /// The search time limit, if any.
    pub fn time_limit(&self) -> Option<Duration> {
        self.time_limit_ms.map(Duration::from_millis)
    }

    /// Parses a configuration from JSON.
    pub fn from_json_str(json: &str) -> SequencingResult<Self> {
        serde_json::from_str(json).map_err(|source| SequencingError::Parse {
            what: "optimizer config",
            source,
        })
    }
}
