use crate::config::FetchConfig;
use crate::error::ExtractError;
use crate::fetchers::PageFetcher;
use async_trait::async_trait;
use reqwest::header::{ACCEPT, ACCEPT_LANGUAGE, HeaderMap, HeaderValue};
use std::time::{Duration, Instant};

/// Fetches product pages over HTTP(S) with `reqwest`
///
/// One GET per call, no retries. Requests are bounded by the configured
/// timeout; a timeout is reported like any other fetch failure.
#[derive(Debug, Clone)]
pub struct HttpFetcher {
    client: reqwest::Client,
    timeout: Duration,
}

impl HttpFetcher {
    /// Builds the underlying client from configuration
    pub fn new(config: &FetchConfig) -> Result<Self, reqwest::Error> {
        let mut headers = HeaderMap::new();
        headers.insert(
            ACCEPT,
            HeaderValue::from_static(
                "text/html,application/xhtml+xml,application/xml;q=0.9,image/webp,*/*;q=0.8",
            ),
        );
        headers.insert(ACCEPT_LANGUAGE, HeaderValue::from_static("en-US,en;q=0.5"));

        let mut builder = reqwest::Client::builder()
            .timeout(config.timeout())
            .user_agent(config.user_agent.as_str())
            .default_headers(headers)
            .redirect(reqwest::redirect::Policy::limited(5));
        if !config.system_proxy {
            builder = builder.no_proxy();
        }
        let client = builder.build()?;

        Ok(Self {
            client,
            timeout: config.timeout(),
        })
    }

    fn describe(&self, error: &reqwest::Error) -> String {
        if error.is_timeout() {
            format!("request timed out after {}s", self.timeout.as_secs())
        } else if error.is_connect() {
            format!("connection failed: {}", error)
        } else {
            error.to_string()
        }
    }
}

#[async_trait]
impl PageFetcher for HttpFetcher {
    async fn fetch(&self, url: &str) -> Result<String, ExtractError> {
        let started = Instant::now();
        ::log::debug!("GET {}", url);

        let response = self.client.get(url).send().await.map_err(|e| {
            ::log::debug!("Request to {} failed: {}", url, e);
            ExtractError::Fetch(self.describe(&e))
        })?;

        let status = response.status();
        if !status.is_success() {
            ::log::debug!("HTTP {} for {}", status, url);
            return Err(ExtractError::Fetch(format!("HTTP {} for {}", status, url)));
        }

        let body = response.text().await.map_err(|e| {
            ::log::debug!("Failed to read body from {}: {}", url, e);
            ExtractError::Fetch(format!("failed to read response body: {}", self.describe(&e)))
        })?;

        ::log::debug!(
            "Fetched {} bytes from {} in {:.2} seconds",
            body.len(),
            url,
            started.elapsed().as_secs_f64()
        );

        Ok(body)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use axum::Router;
    use axum::http::StatusCode;
    use axum::routing::get;

    fn local_config() -> FetchConfig {
        FetchConfig {
            system_proxy: false,
            ..FetchConfig::default()
        }
    }

    /// Serves `router` on an ephemeral local port and returns its base URL
    async fn serve(router: Router) -> String {
        let listener = tokio::net::TcpListener::bind("127.0.0.1:0").await.unwrap();
        let addr = listener.local_addr().unwrap();
        tokio::spawn(async move {
            axum::serve(listener, router).await.unwrap();
        });
        format!("http://{}", addr)
    }

    #[tokio::test]
    async fn test_fetch_success() {
        let base = serve(Router::new().route(
            "/dp/B000FAKE",
            get(|| async { "<html><body>ok</body></html>" }),
        ))
        .await;

        let fetcher = HttpFetcher::new(&local_config()).unwrap();
        let body = fetcher.fetch(&format!("{}/dp/B000FAKE", base)).await.unwrap();
        assert_eq!(body, "<html><body>ok</body></html>");
    }

    #[tokio::test]
    async fn test_fetch_server_error() {
        let base = serve(Router::new().route(
            "/dp/B000FAKE",
            get(|| async { (StatusCode::INTERNAL_SERVER_ERROR, "boom") }),
        ))
        .await;

        let fetcher = HttpFetcher::new(&local_config()).unwrap();
        let err = fetcher
            .fetch(&format!("{}/dp/B000FAKE", base))
            .await
            .unwrap_err();
        match err {
            ExtractError::Fetch(msg) => assert!(msg.contains("500"), "unexpected message: {}", msg),
            other => panic!("expected fetch error, got {:?}", other),
        }
    }

    #[tokio::test]
    async fn test_fetch_not_found() {
        let base = serve(Router::new()).await;

        let fetcher = HttpFetcher::new(&local_config()).unwrap();
        let err = fetcher.fetch(&format!("{}/dp/nothing", base)).await.unwrap_err();
        assert!(err.is_retryable());
    }

    #[tokio::test]
    async fn test_fetch_connection_refused() {
        // Bind then drop to get a port nothing listens on
        let listener = tokio::net::TcpListener::bind("127.0.0.1:0").await.unwrap();
        let addr = listener.local_addr().unwrap();
        drop(listener);

        let fetcher = HttpFetcher::new(&local_config()).unwrap();
        let err = fetcher.fetch(&format!("http://{}/dp/x", addr)).await.unwrap_err();
        assert!(matches!(err, ExtractError::Fetch(_)));
    }

    #[tokio::test]
    async fn test_fetch_timeout() {
        let base = serve(Router::new().route(
            "/slow",
            get(|| async {
                tokio::time::sleep(Duration::from_secs(5)).await;
                "late"
            }),
        ))
        .await;

        let config = FetchConfig {
            timeout_secs: 1,
            ..local_config()
        };
        let fetcher = HttpFetcher::new(&config).unwrap();
        let err = fetcher.fetch(&format!("{}/slow", base)).await.unwrap_err();
        assert_eq!(
            err,
            ExtractError::Fetch("request timed out after 1s".to_string())
        );
    }
}
