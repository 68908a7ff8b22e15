//! Cache configuration validation.

use crate::schema::SwatchConfig;

use super::helpers::validate_range;

pub(crate) const MAX_CACHE_ENTRIES: usize = 1 << 20;

pub(crate) fn validate_cache(errors: &mut Vec<String>, config: &SwatchConfig) {
    validate_range(
        errors,
        "cache.max_entries",
        config.cache.max_entries,
        1,
        MAX_CACHE_ENTRIES,
    );
}
