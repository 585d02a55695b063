// Live-lookup orchestration - cache-wrapped resolution pipeline
//
// Per request:
//   normalize → extract → (direct video ID short-circuit)
//             → cache probe → strategy chain → live search → cache store
//
// Only positive results are cached. Upstream failures collapse to a null
// video ID at this boundary; the HTTP caller cannot tell an outage from
// a channel that simply is not live.

use crate::resolver::api::YouTubeApi;
use crate::resolver::cache::LiveCache;
use crate::resolver::extract::extract;
use crate::resolver::models::{Candidate, LiveLookupResponse};
use crate::resolver::strategies::{self, ResolveStrategy};

pub struct LiveResolver {
    api: YouTubeApi,
    cache: LiveCache,
    chain: Vec<Box<dyn ResolveStrategy>>,
}

impl LiveResolver {
    pub fn new(api: YouTubeApi) -> Self {
        Self {
            api,
            cache: LiveCache::new(),
            chain: strategies::default_chain(),
        }
    }

    pub fn with_cache(mut self, cache: LiveCache) -> Self {
        self.cache = cache;
        self
    }

    /// Trim whitespace and strip the stray `@` chat clients prepend to
    /// pasted URLs
    fn normalize(input: &str) -> &str {
        let trimmed = input.trim();
        if trimmed.starts_with("@https://") || trimmed.starts_with("@http://") {
            &trimmed[1..]
        } else {
            trimmed
        }
    }

    /// Resolve a raw identifier to the channel's current live video ID
    pub async fn resolve(&self, raw_input: &str) -> LiveLookupResponse {
        let input = Self::normalize(raw_input);
        if input.is_empty() {
            return LiveLookupResponse::rejected("Missing input");
        }
        tracing::info!("live lookup input: {}", input);

        let Some(candidate) = extract(input) else {
            tracing::debug!("no candidate recognized in '{}'", input);
            return LiveLookupResponse::not_found();
        };

        // A pasted video URL needs no resolution and is never cached
        if let Candidate::VideoId(video_id) = candidate {
            return LiveLookupResponse::found(video_id);
        }

        let cache_key = candidate.cache_key();
        if let Some(key) = cache_key.as_deref() {
            if let Some(video_id) = self.cache.get(key) {
                tracing::debug!("cache hit for {}", key);
                return LiveLookupResponse::found(video_id);
            }
        }

        let Some(channel_id) =
            strategies::resolve_channel_id(&self.api, &self.chain, &candidate).await
        else {
            tracing::debug!("no channel resolved for {} '{}'", candidate.kind(), input);
            return LiveLookupResponse::not_found();
        };

        let video_id = match self.api.search_live_video(&channel_id).await {
            Ok(video_id) => video_id,
            Err(e) => {
                tracing::warn!("live search failed for channel {}: {}", channel_id, e);
                None
            }
        };

        match video_id {
            Some(video_id) => {
                if let Some(key) = cache_key.as_deref() {
                    self.cache.insert(key, &video_id);
                }
                LiveLookupResponse::found(video_id)
            }
            None => LiveLookupResponse::not_found(),
        }
    }
}
