//! Memo of recent highlight results
//!
//! Editors with several open prompts re-highlight the same buffers when
//! switching tabs. Results are keyed by content hash and the stored text is
//! compared on lookup, so a hash collision falls through to a fresh highlight.

use lru::LruCache;
use std::hash::{Hash, Hasher};
use std::num::NonZeroUsize;
use std::sync::{Arc, RwLock};
use tracing::trace;

use crate::{config::HighlighterConfig, engine::HighlightEngine, span::Span};

/// Default number of cached buffers
pub const DEFAULT_CACHE_CAPACITY: usize = 64;

/// Content-based hash for caching
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct ContentHash(u64);

impl ContentHash {
    /// Create hash from content
    pub fn from_content(content: &str) -> Self {
        use std::collections::hash_map::DefaultHasher;
        let mut hasher = DefaultHasher::new();
        content.hash(&mut hasher);
        Self(hasher.finish())
    }
}

#[derive(Debug)]
struct CachedHighlight {
    text: String,
    spans: Arc<Vec<Span>>,
}

/// LRU cache in front of a [`HighlightEngine`]
pub struct HighlightCache {
    cache: RwLock<LruCache<ContentHash, CachedHighlight>>,
}

impl HighlightCache {
    /// Capacity is clamped to at least one entry
    pub fn new(capacity: usize) -> Self {
        let capacity = NonZeroUsize::new(capacity).unwrap_or(NonZeroUsize::MIN);
        Self {
            cache: RwLock::new(LruCache::new(capacity)),
        }
    }

    /// Cache sized by the configured capacity
    pub fn from_config(config: &HighlighterConfig) -> Self {
        Self::new(config.cache_capacity)
    }

    /// Cached spans for `text`, if present
    pub fn get(&self, text: &str) -> Option<Arc<Vec<Span>>> {
        let hash = ContentHash::from_content(text);
        let mut cache = self.cache.write().ok()?;
        cache
            .get(&hash)
            .filter(|cached| cached.text == text)
            .map(|cached| Arc::clone(&cached.spans))
    }

    /// Spans for `text`, highlighting with `engine` on a miss
    pub fn get_or_highlight(&self, engine: &HighlightEngine, text: &str) -> Arc<Vec<Span>> {
        if let Some(spans) = self.get(text) {
            trace!("Highlight cache hit for {} bytes", text.len());
            return spans;
        }

        let spans = Arc::new(engine.highlight(text));
        if let Ok(mut cache) = self.cache.write() {
            cache.put(
                ContentHash::from_content(text),
                CachedHighlight {
                    text: text.to_string(),
                    spans: Arc::clone(&spans),
                },
            );
        }
        spans
    }

    /// Clear the cache
    pub fn clear(&self) {
        if let Ok(mut cache) = self.cache.write() {
            cache.clear();
        }
    }

    /// Get cache statistics
    pub fn stats(&self) -> CacheStats {
        if let Ok(cache) = self.cache.read() {
            CacheStats {
                size: cache.len(),
                capacity: cache.cap().get(),
            }
        } else {
            CacheStats {
                size: 0,
                capacity: 0,
            }
        }
    }
}

impl Default for HighlightCache {
    fn default() -> Self {
        Self::new(DEFAULT_CACHE_CAPACITY)
    }
}

/// Cache statistics
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CacheStats {
    /// Current number of entries
    pub size: usize,

    /// Maximum capacity
    pub capacity: usize,
}

impl CacheStats {
    pub fn utilization(&self) -> f32 {
        if self.capacity == 0 {
            0.0
        } else {
            self.size as f32 / self.capacity as f32
        }
    }
}
