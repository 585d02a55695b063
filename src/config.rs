// Service configuration from environment variables

const DEFAULT_PORT: u16 = 3000;

#[derive(Debug, Clone)]
pub struct AppConfig {
    /// YouTube Data API key (YT_API_KEY). The service still starts without
    /// one and rejects every lookup with a reason instead.
    pub youtube_api_key: Option<String>,

    /// HTTP listen port (PORT)
    pub port: u16,
}

impl AppConfig {
    pub fn from_env() -> Self {
        let youtube_api_key = std::env::var("YT_API_KEY")
            .ok()
            .filter(|key| !key.is_empty());
        let port = std::env::var("PORT")
            .ok()
            .and_then(|value| value.parse().ok())
            .unwrap_or(DEFAULT_PORT);
        Self {
            youtube_api_key,
            port,
        }
    }
}
