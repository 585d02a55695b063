// Positive-result cache for resolved live videos
//
// Only successful lookups are stored: a channel that is not live right now
// should be re-checked on the next request, not suppressed for a full TTL.
// Entries expire lazily at read time; nothing is evicted proactively.

use dashmap::DashMap;
use std::time::{Duration, Instant};

/// Default time-to-live for a cached live video ID
const DEFAULT_TTL: Duration = Duration::from_secs(60 * 60);

#[derive(Debug, Clone)]
struct CacheEntry {
    video_id: String,
    stored_at: Instant,
}

/// TTL cache mapping candidate cache keys to live video IDs
#[derive(Debug)]
pub struct LiveCache {
    entries: DashMap<String, CacheEntry>,
    ttl: Duration,
}

impl LiveCache {
    pub fn new() -> Self {
        Self::with_ttl(DEFAULT_TTL)
    }

    pub fn with_ttl(ttl: Duration) -> Self {
        Self {
            entries: DashMap::new(),
            ttl,
        }
    }

    /// Fresh positive entry for the key, if any. Stale entries are removed
    /// on the way out.
    pub fn get(&self, key: &str) -> Option<String> {
        if let Some(entry) = self.entries.get(key) {
            if entry.stored_at.elapsed() < self.ttl {
                return Some(entry.video_id.clone());
            }
            // Stale; drop the read guard before removing
            drop(entry);
            self.entries.remove(key);
        }
        None
    }

    /// Store a found video ID, overwriting any prior entry for the key
    pub fn insert(&self, key: &str, video_id: &str) {
        self.entries.insert(
            key.to_string(),
            CacheEntry {
                video_id: video_id.to_string(),
                stored_at: Instant::now(),
            },
        );
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

impl Default for LiveCache {
    fn default() -> Self {
        Self::new()
    }
}
