//! Pattern mask caching.

use lru::LruCache;
use std::num::NonZeroUsize;
use std::sync::Mutex;

use crate::error::PatternError;
use crate::mask::PatternMask;
use crate::options::Style;

const CACHE_SIZE: usize = 64;

/// Key for one compiled mask: the style pair plus the date-time separator
/// spliced into the combined pattern. The owning formatter is fixed per
/// ranger, so it is not part of the key.
pub(crate) type MaskKey = (Style, Style, String);

/// Per-ranger cache of compiled pattern masks.
pub(crate) struct MaskCache {
    inner: Mutex<LruCache<MaskKey, PatternMask>>,
}

impl MaskCache {
    pub(crate) fn new() -> Self {
        MaskCache {
            inner: Mutex::new(LruCache::new(NonZeroUsize::new(CACHE_SIZE).unwrap())),
        }
    }

    /// Get a cached mask, or build and cache it.
    pub(crate) fn get_or_build(
        &self,
        key: MaskKey,
        build: impl FnOnce() -> Result<PatternMask, PatternError>,
    ) -> Result<PatternMask, PatternError> {
        let mut cache = self.inner.lock().unwrap();

        if let Some(mask) = cache.get(&key) {
            return Ok(mask.clone());
        }

        let mask = build()?;
        cache.put(key, mask.clone());
        Ok(mask)
    }
}
