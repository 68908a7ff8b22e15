//! Color cache configuration types.

use serde::{Deserialize, Serialize};
use swatch_common::EvictionPolicy;

/// Default upper bound on memoized color strings.
pub const DEFAULT_MAX_ENTRIES: usize = 1024;

/// Memoizing cache configuration.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct CacheConfig {
    /// Maximum number of cached strings (1-1048576).
    pub max_entries: usize,
    pub eviction: EvictionPolicy,
}

impl Default for CacheConfig {
    fn default() -> Self {
        Self {
            max_entries: DEFAULT_MAX_ENTRIES,
            eviction: EvictionPolicy::ApproxQuarter,
        }
    }
}
