//! HTTP gateway to GBFS feeds.

use std::collections::HashMap;

use serde::de::DeserializeOwned;

use super::error::GbfsError;
use super::types::DiscoveryDocument;

/// Mapping from feed name (e.g. "station_status") to its fetch URL.
pub type FeedUrls = HashMap<String, String>;

/// Configuration for the GBFS client.
#[derive(Debug, Clone)]
pub struct GbfsClientConfig {
    /// Request timeout in seconds
    pub timeout_secs: u64,
}

impl GbfsClientConfig {
    pub fn new() -> Self {
        Self { timeout_secs: 30 }
    }

    /// Set the request timeout.
    pub fn with_timeout(mut self, secs: u64) -> Self {
        self.timeout_secs = secs;
        self
    }
}

impl Default for GbfsClientConfig {
    fn default() -> Self {
        Self::new()
    }
}

/// Client for public GBFS feeds.
///
/// Wraps one `reqwest::Client` so connections are reused across requests
/// and operators. Cloning is cheap and shares the underlying pool.
/// Feeds are unauthenticated; every fetch is a plain GET with no retries.
#[derive(Debug, Clone)]
pub struct GbfsClient {
    http: reqwest::Client,
}

impl GbfsClient {
    /// Create a new client.
    pub fn new(config: GbfsClientConfig) -> Result<Self, GbfsError> {
        let http = reqwest::Client::builder()
            .timeout(std::time::Duration::from_secs(config.timeout_secs))
            .build()?;

        Ok(Self { http })
    }

    /// Fetch a URL and deserialize the JSON body.
    ///
    /// A non-success status fails with [`GbfsError::Api`]; a body that is
    /// not valid JSON of the expected shape fails with [`GbfsError::Json`].
    pub async fn fetch<T: DeserializeOwned>(&self, url: &str) -> Result<T, GbfsError> {
        tracing::debug!(url, "fetching feed");

        let response = self.http.get(url).send().await?;
        let status = response.status();

        if !status.is_success() {
            let body = response.text().await.unwrap_or_default();
            return Err(GbfsError::Api {
                status: status.as_u16(),
                message: body,
            });
        }

        let body = response.text().await?;

        serde_json::from_str(&body).map_err(|e| GbfsError::Json {
            message: e.to_string(),
        })
    }

    /// Fetch `{base_url}/gbfs.json` and return the feed name → URL map.
    ///
    /// A feed name listed twice keeps its last occurrence.
    pub async fn discover_feeds(&self, base_url: &str) -> Result<FeedUrls, GbfsError> {
        let url = format!("{base_url}/gbfs.json");
        let discovery: DiscoveryDocument = self.fetch(&url).await?;

        let mut urls = FeedUrls::new();
        for feed in discovery.data.en.feeds {
            urls.insert(feed.name, feed.url);
        }

        Ok(urls)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use axum::{Json, Router, routing::get};

    #[test]
    fn config_defaults() {
        let config = GbfsClientConfig::new();
        assert_eq!(config.timeout_secs, 30);
        assert_eq!(config.with_timeout(5).timeout_secs, 5);
    }

    /// Serve a router on an ephemeral local port, returning its base URL.
    async fn serve(app: Router) -> String {
        let listener = tokio::net::TcpListener::bind("127.0.0.1:0").await.unwrap();
        let addr = listener.local_addr().unwrap();
        tokio::spawn(async move {
            axum::serve(listener, app).await.unwrap();
        });
        format!("http://{addr}")
    }

    fn client() -> GbfsClient {
        GbfsClient::new(GbfsClientConfig::new()).unwrap()
    }

    #[tokio::test]
    async fn discover_feeds_builds_name_to_url_map() {
        let app = Router::new().route(
            "/gbfs.json",
            get(|| async {
                Json(serde_json::json!({
                    "data": {"en": {"feeds": [
                        {"name": "station_information", "url": "http://example/info.json"},
                        {"name": "station_status", "url": "http://example/status.json"}
                    ]}}
                }))
            }),
        );
        let base = serve(app).await;

        let feeds = client().discover_feeds(&base).await.unwrap();
        assert_eq!(
            feeds.get("station_information").map(String::as_str),
            Some("http://example/info.json")
        );
        assert_eq!(
            feeds.get("station_status").map(String::as_str),
            Some("http://example/status.json")
        );
    }

    #[tokio::test]
    async fn duplicate_feed_names_keep_last_occurrence() {
        let app = Router::new().route(
            "/gbfs.json",
            get(|| async {
                Json(serde_json::json!({
                    "data": {"en": {"feeds": [
                        {"name": "station_status", "url": "http://example/old.json"},
                        {"name": "station_status", "url": "http://example/new.json"}
                    ]}}
                }))
            }),
        );
        let base = serve(app).await;

        let feeds = client().discover_feeds(&base).await.unwrap();
        assert_eq!(
            feeds.get("station_status").map(String::as_str),
            Some("http://example/new.json")
        );
    }

    #[tokio::test]
    async fn missing_discovery_shape_is_an_error() {
        let app = Router::new().route(
            "/gbfs.json",
            get(|| async { Json(serde_json::json!({"data": {}})) }),
        );
        let base = serve(app).await;

        let err = client().discover_feeds(&base).await.unwrap_err();
        assert!(matches!(err, GbfsError::Json { .. }), "got {err:?}");
    }

    #[tokio::test]
    async fn non_success_status_is_an_api_error() {
        let app = Router::new().route(
            "/gbfs.json",
            get(|| async { (axum::http::StatusCode::SERVICE_UNAVAILABLE, "down") }),
        );
        let base = serve(app).await;

        let err = client().discover_feeds(&base).await.unwrap_err();
        match err {
            GbfsError::Api { status, message } => {
                assert_eq!(status, 503);
                assert_eq!(message, "down");
            }
            other => panic!("expected Api error, got {other:?}"),
        }
    }

    #[tokio::test]
    async fn malformed_json_is_a_parse_error() {
        let app = Router::new().route("/gbfs.json", get(|| async { "not json at all" }));
        let base = serve(app).await;

        let err = client().discover_feeds(&base).await.unwrap_err();
        assert!(matches!(err, GbfsError::Json { .. }), "got {err:?}");
    }

    #[tokio::test]
    async fn network_failure_is_an_http_error() {
        // Bind then drop the listener so the port refuses connections.
        let listener = tokio::net::TcpListener::bind("127.0.0.1:0").await.unwrap();
        let addr = listener.local_addr().unwrap();
        drop(listener);

        let err = client()
            .discover_feeds(&format!("http://{addr}"))
            .await
            .unwrap_err();
        assert!(matches!(err, GbfsError::Http(_)), "got {err:?}");
    }
}
