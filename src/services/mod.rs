//! HTTP clients for the upstream services
//!
//! Each client wraps one public API and returns classified errors. None of
//! them retries.

mod geocoding;
mod search;
mod weather;

pub use geocoding::{Coordinates, GeocodingClient};
pub use search::{SearchClient, SearchHit};
pub use weather::WeatherClient;

use log::debug;
use reqwest::Client;
use serde::de::DeserializeOwned;

use crate::config::HttpConfig;
use crate::error::{CalltoolsError, Result};

/// Build the shared HTTP client
pub fn build_http_client(config: &HttpConfig) -> Result<Client> {
    let mut builder = Client::builder().user_agent(config.user_agent.clone());
    if let Some(timeout) = config.timeout() {
        builder = builder.timeout(timeout);
    }
    builder
        .build()
        .map_err(|e| CalltoolsError::Config(format!("Failed to build HTTP client: {}", e)))
}

/// Join a base URL and an absolute path
fn endpoint(base_url: &str, path: &str) -> String {
    format!("{}{}", base_url.trim_end_matches('/'), path)
}

/// GET `url` with `query` and decode the JSON body
async fn get_json<T: DeserializeOwned>(client: &Client, url: &str, query: &[(&str, &str)]) -> Result<T> {
    debug!("GET {} {:?}", url, query);

    let response = client.get(url).query(query).send().await?;

    if !response.status().is_success() {
        let status = response.status();
        let error_text = response.text().await.unwrap_or_default();
        return Err(CalltoolsError::Transport(format!("{} returned {}: {}", url, status, error_text)));
    }

    Ok(response.json::<T>().await?)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_endpoint_joins_once() {
        assert_eq!(endpoint("http://localhost:8080", "/search"), "http://localhost:8080/search");
        assert_eq!(endpoint("http://localhost:8080/", "/search"), "http://localhost:8080/search");
    }

    #[test]
    fn test_build_http_client() {
        let config = HttpConfig {
            timeout_ms: Some(1000),
            ..HttpConfig::default()
        };
        assert!(build_http_client(&config).is_ok());
        assert!(build_http_client(&HttpConfig::default()).is_ok());
    }

    #[tokio::test]
    async fn test_get_json_non_success_is_transport() {
        use wiremock::matchers::{method, path};
        use wiremock::{Mock, MockServer, ResponseTemplate};

        let server = MockServer::start().await;
        Mock::given(method("GET"))
            .and(path("/down"))
            .respond_with(ResponseTemplate::new(503).set_body_string("maintenance"))
            .mount(&server)
            .await;

        let client = build_http_client(&HttpConfig::default()).unwrap();
        let url = endpoint(&server.uri(), "/down");
        let err = get_json::<serde_json::Value>(&client, &url, &[]).await.unwrap_err();

        assert!(matches!(err, CalltoolsError::Transport(_)));
        assert!(err.to_string().contains("503"));
    }

    #[tokio::test]
    async fn test_get_json_bad_body_is_decode() {
        use wiremock::matchers::{method, path};
        use wiremock::{Mock, MockServer, ResponseTemplate};

        let server = MockServer::start().await;
        Mock::given(method("GET"))
            .and(path("/garbage"))
            .respond_with(ResponseTemplate::new(200).set_body_string("<html>nope</html>"))
            .mount(&server)
            .await;

        let client = build_http_client(&HttpConfig::default()).unwrap();
        let url = endpoint(&server.uri(), "/garbage");
        let err = get_json::<serde_json::Value>(&client, &url, &[]).await.unwrap_err();

        assert!(matches!(err, CalltoolsError::Decode(_)));
    }
}
