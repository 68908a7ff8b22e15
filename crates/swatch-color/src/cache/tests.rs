//! Tests for the memoizing color cache.

use super::*;
use crate::parse::parse_color;
use crate::resolver::{CssNamedColors, NamedColorResolver};
use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::Arc;

fn cache(max_entries: usize, policy: EvictionPolicy) -> ColorCache {
    ColorCache::new(ColorParser::default(), max_entries, policy)
}

/// A CSS-name resolver that counts how often it is asked.
fn counting_parser() -> (ColorParser, Arc<AtomicUsize>) {
    let calls = Arc::new(AtomicUsize::new(0));
    let counter = Arc::clone(&calls);
    let parser = ColorParser::new(move |name: &str| {
        counter.fetch_add(1, Ordering::SeqCst);
        CssNamedColors.resolve(name)
    });
    (parser, calls)
}

#[test]
fn new_cache_is_empty() {
    let cache = ColorCache::default();
    assert!(cache.is_empty());
    assert_eq!(cache.max_entries(), 1024);
    assert_eq!(cache.policy(), EvictionPolicy::ApproxQuarter);
    assert_eq!(cache.stats(), CacheStats::default());
}

#[test]
fn lookup_matches_fresh_parse() {
    let cache = ColorCache::default();
    for s in ["#f00", "#ff000080", "rgba(300,-10,128,2)", "rgb(1,2,3)", "navy"] {
        let first = cache.lookup(s).unwrap();
        let second = cache.lookup(s).unwrap();
        assert_eq!(first, parse_color(s).unwrap());
        assert_eq!(first, second);
    }
    assert_eq!(cache.len(), 5);
    assert_eq!(cache.stats().hits, 5);
    assert_eq!(cache.stats().misses, 5);
}

#[test]
fn repeated_lookup_parses_once() {
    let (parser, calls) = counting_parser();
    let cache = ColorCache::new(parser, 16, EvictionPolicy::ApproxQuarter);

    for _ in 0..10 {
        assert_eq!(cache.lookup("red").unwrap(), Rgba::rgb(255.0, 0.0, 0.0));
    }
    assert_eq!(calls.load(Ordering::SeqCst), 1);
}

#[test]
fn keys_are_verbatim() {
    let cache = ColorCache::default();
    cache.lookup("red").unwrap();
    cache.lookup("RED").unwrap();
    cache.lookup("#F00").unwrap();
    cache.lookup("#f00").unwrap();
    assert_eq!(cache.len(), 4);
}

#[test]
fn failures_are_not_cached() {
    let (parser, calls) = counting_parser();
    let cache = ColorCache::new(parser, 16, EvictionPolicy::ApproxQuarter);

    assert!(cache.lookup("blurple").is_err());
    assert!(cache.lookup("blurple").is_err());
    assert!(cache.lookup("#12345").is_err());
    assert!(cache.is_empty());
    assert_eq!(calls.load(Ordering::SeqCst), 2);
    assert_eq!(cache.stats().misses, 3);
}

#[test]
fn approx_quarter_evicts_before_insert() {
    let cache = cache(8, EvictionPolicy::ApproxQuarter);
    for i in 0..8 {
        cache.lookup(&format!("rgb({i},0,0)")).unwrap();
    }
    assert_eq!(cache.len(), 8);

    cache.lookup("rgb(8,0,0)").unwrap();
    assert_eq!(cache.len(), 7);
    assert_eq!(cache.stats().evictions, 2);
}

#[test]
fn hits_do_not_evict() {
    let cache = cache(4, EvictionPolicy::ApproxQuarter);
    for i in 0..4 {
        cache.lookup(&format!("rgb({i},0,0)")).unwrap();
    }
    for i in 0..4 {
        cache.lookup(&format!("rgb({i},0,0)")).unwrap();
    }
    assert_eq!(cache.len(), 4);
    assert_eq!(cache.stats().evictions, 0);
}

#[test]
fn size_never_exceeds_max() {
    for policy in [EvictionPolicy::ApproxQuarter, EvictionPolicy::StrictLru] {
        let cache = cache(16, policy);
        for i in 0..200 {
            cache.lookup(&format!("rgba({i},{},0,0.5)", i % 7)).unwrap();
            assert!(cache.len() <= 16, "{policy}: {} entries", cache.len());
        }
    }
}

#[test]
fn results_stay_correct_across_evictions() {
    let cache = cache(10, EvictionPolicy::ApproxQuarter);
    for round in 0..3 {
        for i in 0..40 {
            let s = format!("rgb({i},{round},{})", 255 - i);
            assert_eq!(cache.lookup(&s).unwrap(), parse_color(&s).unwrap());
        }
    }
}

#[test]
fn strict_lru_evicts_least_recently_used() {
    let cache = cache(3, EvictionPolicy::StrictLru);
    cache.lookup("#100").unwrap();
    cache.lookup("#200").unwrap();
    cache.lookup("#300").unwrap();

    // Touch #100 so #200 becomes the oldest.
    cache.lookup("#100").unwrap();
    cache.lookup("#400").unwrap();
    assert_eq!(cache.len(), 3);
    assert_eq!(cache.stats().evictions, 1);

    let misses = cache.stats().misses;
    cache.lookup("#100").unwrap();
    assert_eq!(cache.stats().misses, misses);
    cache.lookup("#200").unwrap();
    assert_eq!(cache.stats().misses, misses + 1);
}

#[test]
fn zero_max_entries_is_raised_to_one() {
    let cache = cache(0, EvictionPolicy::ApproxQuarter);
    assert_eq!(cache.max_entries(), 1);
    cache.lookup("#000").unwrap();
    cache.lookup("#fff").unwrap();
    assert_eq!(cache.len(), 1);
}

#[test]
fn from_config_uses_settings() {
    let config = CacheConfig {
        max_entries: 32,
        eviction: EvictionPolicy::StrictLru,
    };
    let cache = ColorCache::from_config(&config, CssNamedColors);
    assert_eq!(cache.max_entries(), 32);
    assert_eq!(cache.policy(), EvictionPolicy::StrictLru);
    assert_eq!(cache.lookup("lime").unwrap(), Rgba::rgb(0.0, 255.0, 0.0));
}

#[test]
fn concurrent_lookups_respect_bound() {
    let cache = cache(64, EvictionPolicy::ApproxQuarter);
    std::thread::scope(|scope| {
        for t in 0..4 {
            let cache = &cache;
            scope.spawn(move || {
                for i in 0..500 {
                    let s = format!("rgb({},{t},0)", i % 300);
                    assert_eq!(cache.lookup(&s).unwrap(), parse_color(&s).unwrap());
                }
            });
        }
    });
    assert!(cache.len() <= 64);
    let stats = cache.stats();
    assert_eq!(stats.hits + stats.misses, 2000);
}
