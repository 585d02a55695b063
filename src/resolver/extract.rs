// Identifier extraction - classifies raw input into a typed candidate
//
// Accepts anything a viewer might paste into the channel field:
// - @handle or a bare UC… channel ID
// - full watch/live/channel/user/c URLs, with or without a scheme
// - youtu.be shortlinks
// - plain text, which becomes a channel search query
//
// Pure and deterministic; no network access.

use lazy_static::lazy_static;
use regex::Regex;
use url::Url;

use crate::resolver::models::Candidate;

lazy_static! {
    static ref CHANNEL_ID_RE: Regex = Regex::new(r"^UC[a-zA-Z0-9_-]{20,}$").unwrap();
    static ref URL_SCHEME_RE: Regex = Regex::new(r"(?i)^https?://").unwrap();
    static ref YOUTUBE_PREFIX_RE: Regex = Regex::new(r"(?i)^(www\.)?youtube\.com/").unwrap();
    static ref SHORTLINK_PREFIX_RE: Regex = Regex::new(r"(?i)^youtu\.be/").unwrap();
    static ref LIVE_PATH_RE: Regex = Regex::new(r"^/live/([a-zA-Z0-9_-]{8,})").unwrap();
    static ref CHANNEL_PATH_RE: Regex = Regex::new(r"^/channel/([a-zA-Z0-9_-]{8,})").unwrap();
    static ref HANDLE_PATH_RE: Regex = Regex::new(r"^/@([a-zA-Z0-9._-]{2,})").unwrap();
    static ref USER_PATH_RE: Regex = Regex::new(r"^/user/([a-zA-Z0-9._-]{2,})").unwrap();
    static ref VANITY_PATH_RE: Regex = Regex::new(r"^/c/([a-zA-Z0-9._-]{2,})").unwrap();
}

/// Known YouTube hostnames: apex plus the mobile/music/studio subdomains
fn is_youtube_host(host: &str) -> bool {
    matches!(
        host,
        "youtube.com" | "m.youtube.com" | "music.youtube.com" | "studio.youtube.com"
    )
}

/// Classify a trimmed input string into at most one candidate.
///
/// First match wins: raw handle, raw channel ID, plain-text query,
/// then URL path rules in priority order.
pub fn extract(input: &str) -> Option<Candidate> {
    // Raw handle, unless the @ is escaping a pasted URL
    if let Some(handle) = input.strip_prefix('@') {
        if !input.starts_with("@http://") && !input.starts_with("@https://") {
            return Some(Candidate::Handle(handle.to_string()));
        }
    }

    // Raw channel ID
    if CHANNEL_ID_RE.is_match(input) {
        return Some(Candidate::ChannelId(input.to_string()));
    }

    // No URL-like prefix: treat the whole string as a channel search query
    if !URL_SCHEME_RE.is_match(input)
        && !YOUTUBE_PREFIX_RE.is_match(input)
        && !SHORTLINK_PREFIX_RE.is_match(input)
    {
        return Some(Candidate::Query(input.to_string()));
    }

    let url = parse_url(input)?;
    let host = url.host_str()?;
    let host = host.strip_prefix("www.").unwrap_or(host);

    // youtu.be/<id>
    if host == "youtu.be" {
        let id = url.path().trim_start_matches('/');
        if !id.is_empty() {
            return Some(Candidate::VideoId(id.to_string()));
        }
        return None;
    }

    if !is_youtube_host(host) {
        return None;
    }

    let path = url.path();

    // /watch?v=<id>
    if path == "/watch" {
        if let Some((_, v)) = url.query_pairs().find(|(k, _)| k == "v") {
            if !v.is_empty() {
                return Some(Candidate::VideoId(v.into_owned()));
            }
        }
    }

    // /live/<id>
    if let Some(caps) = LIVE_PATH_RE.captures(path) {
        return Some(Candidate::VideoId(caps[1].to_string()));
    }

    // /channel/<channelId>
    if let Some(caps) = CHANNEL_PATH_RE.captures(path) {
        return Some(Candidate::ChannelId(caps[1].to_string()));
    }

    // /@handle or /@handle/live
    if let Some(caps) = HANDLE_PATH_RE.captures(path) {
        return Some(Candidate::Handle(caps[1].to_string()));
    }

    // /user/<username>
    if let Some(caps) = USER_PATH_RE.captures(path) {
        return Some(Candidate::Username(caps[1].to_string()));
    }

    // /c/<vanity>
    if let Some(caps) = VANITY_PATH_RE.captures(path) {
        return Some(Candidate::Vanity(caps[1].to_string()));
    }

    None
}

/// Parse as a URL, prepending https:// when the scheme is missing but the
/// host looks like YouTube
fn parse_url(input: &str) -> Option<Url> {
    if let Ok(url) = Url::parse(input) {
        return Some(url);
    }
    if YOUTUBE_PREFIX_RE.is_match(input) || SHORTLINK_PREFIX_RE.is_match(input) {
        return Url::parse(&format!("https://{}", input)).ok();
    }
    None
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_raw_handle() {
        assert_eq!(
            extract("@somecreator"),
            Some(Candidate::Handle("somecreator".to_string()))
        );
    }

    #[test]
    fn test_escaped_url_is_not_a_handle() {
        // Normalization upstream strips the stray @; the guard keeps an
        // escaped URL from being read as a handle either way
        assert!(!matches!(
            extract("@https://youtube.com/watch?v=dQw4w9WgXcQ"),
            Some(Candidate::Handle(_))
        ));
    }

    #[test]
    fn test_handle_starting_with_http_is_still_a_handle() {
        assert_eq!(
            extract("@httpster"),
            Some(Candidate::Handle("httpster".to_string()))
        );
    }

    #[test]
    fn test_raw_channel_id() {
        let id = "UCabcdefghijklmnopqrst";
        assert_eq!(extract(id), Some(Candidate::ChannelId(id.to_string())));
    }

    #[test]
    fn test_short_uc_prefix_is_a_query() {
        // Too short for a channel ID, so it falls through to free text
        assert_eq!(
            extract("UCshort"),
            Some(Candidate::Query("UCshort".to_string()))
        );
    }

    #[test]
    fn test_plain_text_is_a_query() {
        assert_eq!(
            extract("lofi girl"),
            Some(Candidate::Query("lofi girl".to_string()))
        );
    }

    #[test]
    fn test_watch_url() {
        assert_eq!(
            extract("https://youtube.com/watch?v=abc123XYZ_-"),
            Some(Candidate::VideoId("abc123XYZ_-".to_string()))
        );
    }

    #[test]
    fn test_watch_url_with_www() {
        assert_eq!(
            extract("https://www.youtube.com/watch?v=dQw4w9WgXcQ"),
            Some(Candidate::VideoId("dQw4w9WgXcQ".to_string()))
        );
    }

    #[test]
    fn test_watch_url_without_scheme() {
        assert_eq!(
            extract("www.youtube.com/watch?v=dQw4w9WgXcQ"),
            Some(Candidate::VideoId("dQw4w9WgXcQ".to_string()))
        );
    }

    #[test]
    fn test_shortlink() {
        assert_eq!(
            extract("https://youtu.be/dQw4w9WgXcQ"),
            Some(Candidate::VideoId("dQw4w9WgXcQ".to_string()))
        );
    }

    #[test]
    fn test_shortlink_without_scheme() {
        assert_eq!(
            extract("youtu.be/dQw4w9WgXcQ"),
            Some(Candidate::VideoId("dQw4w9WgXcQ".to_string()))
        );
    }

    #[test]
    fn test_live_path() {
        assert_eq!(
            extract("https://youtube.com/live/abcdefgh123"),
            Some(Candidate::VideoId("abcdefgh123".to_string()))
        );
    }

    #[test]
    fn test_live_path_too_short() {
        assert_eq!(extract("https://youtube.com/live/abc"), None);
    }

    #[test]
    fn test_channel_path() {
        assert_eq!(
            extract("https://youtube.com/channel/UCabcdefghijklmnopqrst"),
            Some(Candidate::ChannelId("UCabcdefghijklmnopqrst".to_string()))
        );
    }

    #[test]
    fn test_handle_path() {
        assert_eq!(
            extract("https://youtube.com/@somecreator"),
            Some(Candidate::Handle("somecreator".to_string()))
        );
    }

    #[test]
    fn test_handle_path_with_live_suffix() {
        assert_eq!(
            extract("https://www.youtube.com/@somecreator/live"),
            Some(Candidate::Handle("somecreator".to_string()))
        );
    }

    #[test]
    fn test_user_path() {
        assert_eq!(
            extract("https://youtube.com/user/oldschool"),
            Some(Candidate::Username("oldschool".to_string()))
        );
    }

    #[test]
    fn test_vanity_path() {
        assert_eq!(
            extract("https://youtube.com/c/SomeVanity"),
            Some(Candidate::Vanity("SomeVanity".to_string()))
        );
    }

    #[test]
    fn test_music_subdomain() {
        assert_eq!(
            extract("https://music.youtube.com/watch?v=dQw4w9WgXcQ"),
            Some(Candidate::VideoId("dQw4w9WgXcQ".to_string()))
        );
    }

    #[test]
    fn test_foreign_host_is_rejected() {
        assert_eq!(extract("https://example.com/watch?v=dQw4w9WgXcQ"), None);
    }

    #[test]
    fn test_unmatched_path_is_rejected() {
        assert_eq!(extract("https://youtube.com/feed/subscriptions"), None);
    }

    #[test]
    fn test_empty_shortlink_path_is_rejected() {
        assert_eq!(extract("https://youtu.be/"), None);
    }
}
