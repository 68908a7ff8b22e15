//! Room-making strategies for a full cache.

use std::collections::HashMap;
use swatch_common::EvictionPolicy;

use super::CacheEntry;

/// Remove entries according to `policy`, returning how many were removed.
pub(super) fn evict(entries: &mut HashMap<String, CacheEntry>, policy: EvictionPolicy) -> usize {
    match policy {
        EvictionPolicy::ApproxQuarter => evict_every_fourth(entries),
        EvictionPolicy::StrictLru => evict_least_recent(entries),
    }
}

/// Drop the entries at iteration positions 0, 4, 8, ...
///
/// Recency plays no part: this is an arbitrary quarter of the table, not
/// the least recently used quarter.
pub(super) fn evict_every_fourth(entries: &mut HashMap<String, CacheEntry>) -> usize {
    let before = entries.len();
    let mut position = 0usize;
    entries.retain(|_, _| {
        let keep = position % 4 != 0;
        position += 1;
        keep
    });
    before - entries.len()
}

/// Drop the single entry with the oldest access tick.
pub(super) fn evict_least_recent(entries: &mut HashMap<String, CacheEntry>) -> usize {
    let oldest = entries
        .iter()
        .min_by_key(|(_, entry)| entry.last_used)
        .map(|(key, _)| key.clone());

    match oldest {
        Some(key) => {
            entries.remove(&key);
            1
        }
        None => 0,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use swatch_common::Rgba;

    fn table(n: usize) -> HashMap<String, CacheEntry> {
        (0..n)
            .map(|i| {
                (
                    format!("key{i}"),
                    CacheEntry {
                        color: Rgba::rgb(i as f64, 0.0, 0.0),
                        last_used: i as u64,
                    },
                )
            })
            .collect()
    }

    #[test]
    fn every_fourth_removes_a_quarter_rounded_up() {
        for (n, expected) in [(0, 0), (1, 1), (4, 1), (5, 2), (8, 2), (1024, 256)] {
            let mut entries = table(n);
            assert_eq!(evict_every_fourth(&mut entries), expected, "n = {n}");
            assert_eq!(entries.len(), n - expected);
        }
    }

    #[test]
    fn least_recent_removes_oldest() {
        let mut entries = table(5);
        entries.get_mut("key0").unwrap().last_used = 100;
        assert_eq!(evict_least_recent(&mut entries), 1);
        assert!(entries.contains_key("key0"));
        assert!(!entries.contains_key("key1"));
    }

    #[test]
    fn least_recent_on_empty_table() {
        let mut entries = table(0);
        assert_eq!(evict_least_recent(&mut entries), 0);
    }

    #[test]
    fn evict_dispatches_on_policy() {
        let mut entries = table(8);
        assert_eq!(evict(&mut entries, EvictionPolicy::ApproxQuarter), 2);
        assert_eq!(evict(&mut entries, EvictionPolicy::StrictLru), 1);
        assert_eq!(entries.len(), 5);
    }
}
