use once_cell::sync::Lazy;

pub const DEFAULT_API_URL: &str = "http://127.0.0.1:8000";
pub const STREAM_PATH: &str = "/ws/generate-story-stream";

/// Endpoints baked into the browser bundle at build time.
#[derive(Debug, Clone, PartialEq)]
pub struct ClientConfig {
    pub api_url: String,
    pub stream_url: String,
}

static CLIENT_CONFIG: Lazy<ClientConfig> = Lazy::new(|| {
    ClientConfig::resolve(option_env!("STORY_API_URL"), option_env!("STORY_STREAM_URL"))
});

impl ClientConfig {
    pub fn get() -> &'static ClientConfig {
        &CLIENT_CONFIG
    }

    pub fn resolve(api_url: Option<&str>, stream_url: Option<&str>) -> Self {
        let api_url = normalize_base(api_url.unwrap_or(DEFAULT_API_URL));
        let stream_url = match stream_url {
            Some(url) if !url.trim().is_empty() => url.trim().to_string(),
            _ => stream_url_for(&api_url),
        };
        ClientConfig { api_url, stream_url }
    }
}

/// Server-side settings, read once at startup after `.env` is loaded.
#[cfg(feature = "ssr")]
#[derive(Debug, Clone)]
pub struct ServerConfig {
    pub api_url: String,
}

#[cfg(feature = "ssr")]
impl ServerConfig {
    pub fn from_env() -> Self {
        let api_url = std::env::var("STORY_API_URL")
            .ok()
            .filter(|url| !url.trim().is_empty())
            .map(|url| normalize_base(&url))
            .unwrap_or_else(|| ClientConfig::get().api_url.clone());
        ServerConfig { api_url }
    }
}

pub fn normalize_base(url: &str) -> String {
    url.trim().trim_end_matches('/').to_string()
}

/// Maps an http(s) base onto the backend's WebSocket endpoint.
pub fn stream_url_for(api_url: &str) -> String {
    let base = normalize_base(api_url);
    let ws_base = if let Some(rest) = base.strip_prefix("https://") {
        format!("wss://{rest}")
    } else if let Some(rest) = base.strip_prefix("http://") {
        format!("ws://{rest}")
    } else {
        base
    };
    format!("{ws_base}{STREAM_PATH}")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_stream_url_for_http() {
        assert_eq!(
            stream_url_for("http://127.0.0.1:8000/"),
            "ws://127.0.0.1:8000/ws/generate-story-stream"
        );
    }

    #[test]
    fn test_stream_url_for_https() {
        assert_eq!(
            stream_url_for("https://stories.example.com"),
            "wss://stories.example.com/ws/generate-story-stream"
        );
    }

    #[test]
    fn test_resolve_defaults() {
        let config = ClientConfig::resolve(None, None);
        assert_eq!(config.api_url, DEFAULT_API_URL);
        assert_eq!(config.stream_url, "ws://127.0.0.1:8000/ws/generate-story-stream");
    }

    #[test]
    fn test_explicit_stream_url_wins() {
        let config = ClientConfig::resolve(
            Some("https://api.example.com/"),
            Some("wss://stream.example.com/live"),
        );
        assert_eq!(config.api_url, "https://api.example.com");
        assert_eq!(config.stream_url, "wss://stream.example.com/live");
    }
}
