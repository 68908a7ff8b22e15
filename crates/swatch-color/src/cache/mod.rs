//! Bounded memoization of parsed color strings.
//!
//! A [`ColorCache`] maps verbatim input strings to parsed [`Rgba`] values.
//! When a miss finds the cache full, room is made according to the
//! configured [`EvictionPolicy`] before the new entry goes in, so the
//! entry count never exceeds `max_entries` once a lookup returns.
//!
//! Parse failures are never cached.

mod eviction;

#[cfg(test)]
mod tests;

use std::collections::HashMap;
use std::sync::{Mutex, MutexGuard, PoisonError};
use swatch_common::{ColorError, EvictionPolicy, Rgba};
use swatch_config::schema::{CacheConfig, DEFAULT_MAX_ENTRIES};
use tracing::{debug, trace};

use crate::parse::ColorParser;
use crate::resolver::NamedColorResolver;

/// Running totals for a cache.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct CacheStats {
    pub hits: u64,
    pub misses: u64,
    pub evictions: u64,
}

#[derive(Debug, Clone, Copy)]
pub(crate) struct CacheEntry {
    pub(crate) color: Rgba,
    /// Access tick; only refreshed on hits under `StrictLru`.
    pub(crate) last_used: u64,
}

#[derive(Debug, Default)]
struct CacheState {
    entries: HashMap<String, CacheEntry>,
    tick: u64,
    stats: CacheStats,
}

/// A parser wrapped in a bounded string-to-color memo table.
///
/// All methods take `&self`; the table sits behind a single lock, so a
/// cache can be shared between threads. Two threads missing on the same
/// string may both parse it, but only one entry is stored.
#[derive(Debug)]
pub struct ColorCache {
    parser: ColorParser,
    max_entries: usize,
    policy: EvictionPolicy,
    state: Mutex<CacheState>,
}

impl ColorCache {
    /// Create an empty cache. `max_entries` is raised to at least 1.
    pub fn new(parser: ColorParser, max_entries: usize, policy: EvictionPolicy) -> Self {
        Self {
            parser,
            max_entries: max_entries.max(1),
            policy,
            state: Mutex::new(CacheState::default()),
        }
    }

    pub fn from_config(config: &CacheConfig, resolver: impl NamedColorResolver + 'static) -> Self {
        Self::new(ColorParser::new(resolver), config.max_entries, config.eviction)
    }

    /// Parse `s`, serving repeated strings from the cache.
    pub fn lookup(&self, s: &str) -> Result<Rgba, ColorError> {
        let cached = self.state().hit(s, self.policy);
        if let Some(color) = cached {
            return Ok(color);
        }

        trace!(input = s, "color cache miss");
        let color = self.parser.parse(s).inspect_err(|e| {
            debug!(input = s, "color parse failed: {e}");
        })?;

        self.state().insert(s, color, self.max_entries, self.policy);
        Ok(color)
    }

    pub fn len(&self) -> usize {
        self.state().entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    pub fn max_entries(&self) -> usize {
        self.max_entries
    }

    pub fn policy(&self) -> EvictionPolicy {
        self.policy
    }

    pub fn stats(&self) -> CacheStats {
        self.state().stats
    }

    pub fn parser(&self) -> &ColorParser {
        &self.parser
    }

    fn state(&self) -> MutexGuard<'_, CacheState> {
        // Every mutation leaves the table consistent, so a poisoned lock is safe to reuse.
        self.state.lock().unwrap_or_else(PoisonError::into_inner)
    }
}

impl Default for ColorCache {
    fn default() -> Self {
        Self::new(ColorParser::default(), DEFAULT_MAX_ENTRIES, EvictionPolicy::default())
    }
}

impl CacheState {
    fn hit(&mut self, key: &str, policy: EvictionPolicy) -> Option<Rgba> {
        self.tick += 1;
        let tick = self.tick;
        match self.entries.get_mut(key) {
            Some(entry) => {
                if policy == EvictionPolicy::StrictLru {
                    entry.last_used = tick;
                }
                self.stats.hits += 1;
                Some(entry.color)
            }
            None => {
                self.stats.misses += 1;
                None
            }
        }
    }

    fn insert(&mut self, key: &str, color: Rgba, max_entries: usize, policy: EvictionPolicy) {
        self.tick += 1;
        if let Some(entry) = self.entries.get_mut(key) {
            // Another thread stored it while we were parsing.
            entry.last_used = self.tick;
            return;
        }

        if self.entries.len() >= max_entries {
            let before = self.entries.len();
            let removed = eviction::evict(&mut self.entries, policy);
            self.stats.evictions += removed as u64;
            debug!(
                %policy,
                before,
                removed,
                after = self.entries.len(),
                "color cache eviction pass"
            );
        }

        self.entries.insert(
            key.to_owned(),
            CacheEntry {
                color,
                last_used: self.tick,
            },
        );
    }
}
