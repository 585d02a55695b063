// Channel resolution strategies - ordered fallback chain
//
// Each strategy turns one kind of candidate into a canonical channel ID.
// The chain tries them in priority order and stops at the first hit:
// 1. Direct channel ID (no network)
// 2. Legacy username lookup
// 3. Handle lookup with vanity-URL disambiguation
// 4. Generic channel search (vanity names and free text)
//
// An upstream failure inside a strategy counts as "not resolved" for that
// step; it never aborts the whole resolution.

use async_trait::async_trait;

use crate::resolver::api::YouTubeApi;
use crate::resolver::errors::ApiError;
use crate::resolver::models::Candidate;

/// How many search hits the handle fallback inspects before giving up
const HANDLE_SEARCH_LIMIT: u8 = 5;

/// One attempt at turning a candidate into a channel ID
#[async_trait]
pub trait ResolveStrategy: Send + Sync {
    /// Name of the strategy (for logging)
    fn name(&self) -> &'static str;

    /// Whether this strategy knows how to handle the candidate
    fn applies(&self, candidate: &Candidate) -> bool;

    /// Attempt resolution. Ok(None) means "not resolved, try the next one".
    async fn resolve(
        &self,
        api: &YouTubeApi,
        candidate: &Candidate,
    ) -> Result<Option<String>, ApiError>;
}

/// A raw channel ID resolves to itself, zero network calls
pub struct DirectChannelId;

#[async_trait]
impl ResolveStrategy for DirectChannelId {
    fn name(&self) -> &'static str {
        "direct-channel-id"
    }

    fn applies(&self, candidate: &Candidate) -> bool {
        matches!(candidate, Candidate::ChannelId(_))
    }

    async fn resolve(
        &self,
        _api: &YouTubeApi,
        candidate: &Candidate,
    ) -> Result<Option<String>, ApiError> {
        match candidate {
            Candidate::ChannelId(id) => Ok(Some(id.clone())),
            _ => Ok(None),
        }
    }
}

/// Legacy `/user/<name>` usernames go through the forUsername endpoint
pub struct LegacyUsername;

#[async_trait]
impl ResolveStrategy for LegacyUsername {
    fn name(&self) -> &'static str {
        "legacy-username"
    }

    fn applies(&self, candidate: &Candidate) -> bool {
        matches!(candidate, Candidate::Username(_))
    }

    async fn resolve(
        &self,
        api: &YouTubeApi,
        candidate: &Candidate,
    ) -> Result<Option<String>, ApiError> {
        match candidate {
            Candidate::Username(username) => api.channel_for_username(username).await,
            _ => Ok(None),
        }
    }
}

/// Handles try the precise forHandle endpoint first, then fall back to a
/// channel search disambiguated by each hit's declared vanity URL.
///
/// Only a case-insensitive exact match on the vanity URL is accepted. A
/// similarly named channel is worse than none, so a failed disambiguation
/// resolves to nothing instead of falling through to a generic search.
pub struct HandleLookup;

#[async_trait]
impl ResolveStrategy for HandleLookup {
    fn name(&self) -> &'static str {
        "handle-lookup"
    }

    fn applies(&self, candidate: &Candidate) -> bool {
        matches!(candidate, Candidate::Handle(_))
    }

    async fn resolve(
        &self,
        api: &YouTubeApi,
        candidate: &Candidate,
    ) -> Result<Option<String>, ApiError> {
        let Candidate::Handle(handle) = candidate else {
            return Ok(None);
        };

        if let Some(id) = api.channel_for_handle(handle).await? {
            return Ok(Some(id));
        }

        let wanted = format!("@{}", handle);
        let hits = api.search_channels(&wanted, HANDLE_SEARCH_LIMIT).await?;
        if hits.is_empty() {
            return Ok(None);
        }

        let snippets = api.channel_snippets(&hits).await?;
        for snippet in snippets {
            if let Some(custom_url) = &snippet.custom_url {
                if custom_url.eq_ignore_ascii_case(&wanted) {
                    return Ok(Some(snippet.channel_id));
                }
            }
        }

        Ok(None)
    }
}

/// Vanity names and free text take the first hit of a channel search
pub struct ChannelSearch;

#[async_trait]
impl ResolveStrategy for ChannelSearch {
    fn name(&self) -> &'static str {
        "channel-search"
    }

    fn applies(&self, candidate: &Candidate) -> bool {
        matches!(candidate, Candidate::Vanity(_) | Candidate::Query(_))
    }

    async fn resolve(
        &self,
        api: &YouTubeApi,
        candidate: &Candidate,
    ) -> Result<Option<String>, ApiError> {
        let query = match candidate {
            Candidate::Vanity(vanity) => vanity,
            Candidate::Query(query) => query,
            _ => return Ok(None),
        };

        let hits = api.search_channels(query, 1).await?;
        Ok(hits.into_iter().next())
    }
}

/// Default strategy chain, in priority order
pub fn default_chain() -> Vec<Box<dyn ResolveStrategy>> {
    vec![
        Box::new(DirectChannelId),
        Box::new(LegacyUsername),
        Box::new(HandleLookup),
        Box::new(ChannelSearch),
    ]
}

/// Run the chain against a candidate. Upstream failures are logged and
/// treated as "no result" for the failing step.
pub async fn resolve_channel_id(
    api: &YouTubeApi,
    chain: &[Box<dyn ResolveStrategy>],
    candidate: &Candidate,
) -> Option<String> {
    for strategy in chain {
        if !strategy.applies(candidate) {
            continue;
        }
        match strategy.resolve(api, candidate).await {
            Ok(Some(channel_id)) => {
                tracing::debug!("strategy '{}' resolved channel {}", strategy.name(), channel_id);
                return Some(channel_id);
            }
            Ok(None) => {
                tracing::debug!("strategy '{}' found nothing", strategy.name());
            }
            Err(e) => {
                tracing::warn!("strategy '{}' failed: {}", strategy.name(), e);
            }
        }
    }
    None
}
