use serde::{Deserialize, Serialize};
use std::fmt;

/// How a full color cache makes room for a new entry.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum EvictionPolicy {
    /// Drop every 4th entry in iteration order, about a quarter of the
    /// cache, in one pass. No recency is tracked, so the dropped entries
    /// are not necessarily the least recently used ones.
    #[default]
    ApproxQuarter,
    /// Drop the single least recently used entry.
    StrictLru,
}

impl fmt::Display for EvictionPolicy {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::ApproxQuarter => write!(f, "approx_quarter"),
            Self::StrictLru => write!(f, "strict_lru"),
        }
    }
}
