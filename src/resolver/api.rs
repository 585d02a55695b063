// YouTube Data API v3 client
//
// Thin wrapper over the four read-only endpoints the resolver needs:
// - channels?forUsername  (legacy username lookup)
// - channels?forHandle    (precise handle lookup)
// - channels?id=…         (snippets for handle disambiguation)
// - search?type=channel / search?eventType=live
//
// Every method returns Ok(None) / an empty Vec when the API answered but
// had no matching item; transport and payload problems surface as ApiError.

use serde::Deserialize;
use std::time::Duration;

use crate::resolver::errors::ApiError;

const DEFAULT_BASE_URL: &str = "https://www.googleapis.com/youtube/v3";
const REQUEST_TIMEOUT: Duration = Duration::from_secs(30);

/// Channel snippet fields used for handle disambiguation
#[derive(Debug, Clone)]
pub struct ChannelSnippet {
    pub channel_id: String,
    /// Declared vanity URL, e.g. "@SomeCreator"
    pub custom_url: Option<String>,
}

pub struct YouTubeApi {
    client: reqwest::Client,
    base_url: String,
    api_key: String,
}

impl YouTubeApi {
    pub fn new(api_key: impl Into<String>) -> Self {
        let client = reqwest::Client::builder()
            .timeout(REQUEST_TIMEOUT)
            .build()
            .expect("failed to build HTTP client");
        Self {
            client,
            base_url: DEFAULT_BASE_URL.to_string(),
            api_key: api_key.into(),
        }
    }

    /// Point the client at a different API host (used by tests)
    pub fn with_base_url(mut self, base_url: impl Into<String>) -> Self {
        self.base_url = base_url.into();
        self
    }

    /// Resolve a legacy `/user/<name>` username to a channel ID
    pub async fn channel_for_username(&self, username: &str) -> Result<Option<String>, ApiError> {
        let data: ChannelListResponse = self
            .get_json("/channels", &[("part", "id"), ("forUsername", username)])
            .await?;
        Ok(data.items.into_iter().next().map(|item| item.id))
    }

    /// Resolve an `@handle` to a channel ID via the precise lookup endpoint
    pub async fn channel_for_handle(&self, handle: &str) -> Result<Option<String>, ApiError> {
        let for_handle = format!("@{}", handle);
        let data: ChannelListResponse = self
            .get_json("/channels", &[("part", "id"), ("forHandle", &for_handle)])
            .await?;
        Ok(data.items.into_iter().next().map(|item| item.id))
    }

    /// Search for channels matching a text query, up to `max_results` hits
    pub async fn search_channels(
        &self,
        query: &str,
        max_results: u8,
    ) -> Result<Vec<String>, ApiError> {
        let max_results = max_results.to_string();
        let data: SearchListResponse = self
            .get_json(
                "/search",
                &[
                    ("part", "snippet"),
                    ("q", query),
                    ("type", "channel"),
                    ("maxResults", &max_results),
                ],
            )
            .await?;
        Ok(data
            .items
            .into_iter()
            .filter_map(|item| item.channel_id())
            .collect())
    }

    /// Fetch snippets for a batch of channel IDs
    pub async fn channel_snippets(&self, ids: &[String]) -> Result<Vec<ChannelSnippet>, ApiError> {
        let joined = ids.join(",");
        let data: ChannelListResponse = self
            .get_json("/channels", &[("part", "snippet"), ("id", &joined)])
            .await?;
        Ok(data
            .items
            .into_iter()
            .map(|item| ChannelSnippet {
                channel_id: item.id,
                custom_url: item.snippet.and_then(|s| s.custom_url),
            })
            .collect())
    }

    /// Find the channel's currently live video, if any. Single call, no retry.
    pub async fn search_live_video(&self, channel_id: &str) -> Result<Option<String>, ApiError> {
        let data: SearchListResponse = self
            .get_json(
                "/search",
                &[
                    ("part", "id"),
                    ("channelId", channel_id),
                    ("eventType", "live"),
                    ("type", "video"),
                    ("maxResults", "1"),
                ],
            )
            .await?;
        Ok(data
            .items
            .into_iter()
            .next()
            .and_then(|item| item.id)
            .and_then(|id| id.video_id))
    }

    async fn get_json<T: serde::de::DeserializeOwned>(
        &self,
        path: &str,
        params: &[(&str, &str)],
    ) -> Result<T, ApiError> {
        let url = format!("{}{}", self.base_url, path);
        let response = self
            .client
            .get(&url)
            .query(params)
            .query(&[("key", self.api_key.as_str())])
            .send()
            .await?;

        let status = response.status();
        if !status.is_success() {
            return Err(ApiError::Status(status.as_u16()));
        }

        Ok(response.json::<T>().await?)
    }
}

#[derive(Debug, Deserialize)]
struct ChannelListResponse {
    #[serde(default)]
    items: Vec<ChannelResource>,
}

#[derive(Debug, Deserialize)]
struct ChannelResource {
    id: String,
    snippet: Option<ChannelSnippetResource>,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
struct ChannelSnippetResource {
    custom_url: Option<String>,
}

#[derive(Debug, Deserialize)]
struct SearchListResponse {
    #[serde(default)]
    items: Vec<SearchResult>,
}

#[derive(Debug, Deserialize)]
struct SearchResult {
    id: Option<SearchResultId>,
    snippet: Option<SearchResultSnippet>,
}

impl SearchResult {
    /// Channel ID from the snippet, falling back to the id object
    fn channel_id(self) -> Option<String> {
        self.snippet
            .and_then(|s| s.channel_id)
            .or_else(|| self.id.and_then(|id| id.channel_id))
    }
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
struct SearchResultId {
    video_id: Option<String>,
    channel_id: Option<String>,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
struct SearchResultSnippet {
    channel_id: Option<String>,
}
