// Common data models for the resolver

use serde::{Deserialize, Serialize};

/// One typed interpretation of the raw input
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Candidate {
    /// Video ID taken directly from a URL; needs no resolution
    VideoId(String),
    /// Raw `UC…` channel ID
    ChannelId(String),
    /// `@handle`, stored without the `@`
    Handle(String),
    /// `/c/<name>` custom vanity name
    Vanity(String),
    /// `/user/<name>` legacy username
    Username(String),
    /// Free text treated as a channel search query
    Query(String),
}

impl Candidate {
    /// Name of the candidate kind (for logging and cache keys)
    pub fn kind(&self) -> &'static str {
        match self {
            Self::VideoId(_) => "video",
            Self::ChannelId(_) => "channel",
            Self::Handle(_) => "handle",
            Self::Vanity(_) => "vanity",
            Self::Username(_) => "username",
            Self::Query(_) => "query",
        }
    }

    /// Cache key tagged with the candidate kind, so the same text under
    /// different kinds never shares an entry. Video IDs bypass resolution
    /// and have no key.
    pub fn cache_key(&self) -> Option<String> {
        match self {
            Self::VideoId(_) => None,
            Self::ChannelId(id) => Some(format!("channel:{}", id)),
            Self::Handle(handle) => Some(format!("handle:{}", handle)),
            Self::Vanity(vanity) => Some(format!("vanity:{}", vanity)),
            Self::Username(username) => Some(format!("username:{}", username)),
            Self::Query(query) => Some(format!("query:{}", query)),
        }
    }
}

/// Response body for the live-lookup endpoint
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LiveLookupResponse {
    #[serde(rename = "videoId")]
    pub video_id: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub reason: Option<String>,
}

impl LiveLookupResponse {
    pub fn found(video_id: String) -> Self {
        Self {
            video_id: Some(video_id),
            reason: None,
        }
    }

    pub fn not_found() -> Self {
        Self {
            video_id: None,
            reason: None,
        }
    }

    pub fn rejected(reason: &str) -> Self {
        Self {
            video_id: None,
            reason: Some(reason.to_string()),
        }
    }
}
