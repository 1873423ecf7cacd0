//! Nominatim forward and reverse geocoding

use log::{debug, error, warn};
use reqwest::Client;
use serde::{Deserialize, Serialize};

use crate::error::Result;

use super::{endpoint, get_json};

/// Latitude/longitude pair, kept as the strings the service returned
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Coordinates {
    pub latitude: String,
    pub longitude: String,
}

#[derive(Debug, Deserialize)]
struct Place {
    #[serde(default)]
    lat: Option<String>,
    #[serde(default)]
    lon: Option<String>,
}

#[derive(Debug, Deserialize)]
struct ReversePlace {
    display_name: String,
}

/// Client for a Nominatim-compatible geocoder
#[derive(Debug, Clone)]
pub struct GeocodingClient {
    http: Client,
    base_url: String,
}

impl GeocodingClient {
    pub fn new(http: Client, base_url: impl Into<String>) -> Self {
        Self {
            http,
            base_url: base_url.into(),
        }
    }

    /// Forward-geocode `city`; `Ok(None)` when nothing usable came back
    pub async fn search(&self, city: &str) -> Result<Option<Coordinates>> {
        let url = endpoint(&self.base_url, "/search");
        let places: Vec<Place> = get_json(&self.http, &url, &[("q", city), ("format", "json")]).await?;

        let coordinates = places.into_iter().next().and_then(|place| match (place.lat, place.lon) {
            (Some(latitude), Some(longitude)) if !latitude.is_empty() && !longitude.is_empty() => {
                Some(Coordinates { latitude, longitude })
            }
            _ => None,
        });

        if coordinates.is_none() {
            debug!("Geocoder has no coordinates for {:?}", city);
        }
        Ok(coordinates)
    }

    /// Forward-geocode `city`, collapsing every failure into `None`
    pub async fn city_to_lat_lon(&self, city: &str) -> Option<Coordinates> {
        match self.search(city).await {
            Ok(Some(coordinates)) => Some(coordinates),
            Ok(None) => {
                warn!("Location data is not available in the response for {:?}", city);
                None
            }
            Err(e) => {
                error!("Error fetching location data for {:?}: {}", city, e);
                None
            }
        }
    }

    /// Reverse-geocode to the place's display name
    pub async fn reverse(&self, latitude: &str, longitude: &str) -> Result<String> {
        let url = endpoint(&self.base_url, "/reverse");
        let place: ReversePlace = get_json(
            &self.http,
            &url,
            &[("lat", latitude), ("lon", longitude), ("format", "json")],
        )
        .await?;
        Ok(place.display_name)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::HttpConfig;
    use crate::error::CalltoolsError;
    use crate::services::build_http_client;
    use wiremock::matchers::{method, path, query_param};
    use wiremock::{Mock, MockServer, ResponseTemplate};

    fn client(server: &MockServer) -> GeocodingClient {
        GeocodingClient::new(build_http_client(&HttpConfig::default()).unwrap(), server.uri())
    }

    #[tokio::test]
    async fn test_search_returns_first_place() {
        let server = MockServer::start().await;
        Mock::given(method("GET"))
            .and(path("/search"))
            .and(query_param("q", "Berlin"))
            .and(query_param("format", "json"))
            .respond_with(ResponseTemplate::new(200).set_body_json(serde_json::json!([
                {"lat": "52.5170365", "lon": "13.3888599", "display_name": "Berlin"},
                {"lat": "0", "lon": "0"}
            ])))
            .expect(1)
            .mount(&server)
            .await;

        let coordinates = client(&server).search("Berlin").await.unwrap().unwrap();
        assert_eq!(coordinates.latitude, "52.5170365");
        assert_eq!(coordinates.longitude, "13.3888599");
    }

    #[tokio::test]
    async fn test_city_to_lat_lon_empty_response_is_none() {
        let server = MockServer::start().await;
        Mock::given(method("GET"))
            .and(path("/search"))
            .respond_with(ResponseTemplate::new(200).set_body_json(serde_json::json!([])))
            .expect(1)
            .mount(&server)
            .await;

        assert!(client(&server).city_to_lat_lon("Atlantis").await.is_none());
    }

    #[tokio::test]
    async fn test_city_to_lat_lon_missing_field_is_none() {
        let server = MockServer::start().await;
        Mock::given(method("GET"))
            .and(path("/search"))
            .respond_with(ResponseTemplate::new(200).set_body_json(serde_json::json!([{"lat": "1.0"}])))
            .mount(&server)
            .await;

        assert!(client(&server).city_to_lat_lon("Halfway").await.is_none());
    }

    #[tokio::test]
    async fn test_city_to_lat_lon_upstream_failure_is_none() {
        let server = MockServer::start().await;
        Mock::given(method("GET"))
            .and(path("/search"))
            .respond_with(ResponseTemplate::new(500))
            .mount(&server)
            .await;

        assert!(client(&server).city_to_lat_lon("Berlin").await.is_none());
    }

    #[tokio::test]
    async fn test_city_to_lat_lon_unreachable_is_none() {
        let http = build_http_client(&HttpConfig::default()).unwrap();
        let geocoder = GeocodingClient::new(http, "http://127.0.0.1:1");
        assert!(geocoder.city_to_lat_lon("Berlin").await.is_none());
    }

    #[tokio::test]
    async fn test_search_error_is_classified() {
        let server = MockServer::start().await;
        Mock::given(method("GET"))
            .and(path("/search"))
            .respond_with(ResponseTemplate::new(200).set_body_json(serde_json::json!({"error": "bad"})))
            .mount(&server)
            .await;

        let err = client(&server).search("Berlin").await.unwrap_err();
        assert!(matches!(err, CalltoolsError::Decode(_)));
    }

    #[tokio::test]
    async fn test_reverse() {
        let server = MockServer::start().await;
        Mock::given(method("GET"))
            .and(path("/reverse"))
            .and(query_param("lat", "52.52"))
            .and(query_param("lon", "13.405"))
            .and(query_param("format", "json"))
            .respond_with(ResponseTemplate::new(200).set_body_json(serde_json::json!({
                "display_name": "Mitte, Berlin, Deutschland"
            })))
            .expect(1)
            .mount(&server)
            .await;

        let name = client(&server).reverse("52.52", "13.405").await.unwrap();
        assert_eq!(name, "Mitte, Berlin, Deutschland");
    }

    #[tokio::test]
    async fn test_reverse_without_display_name_fails() {
        let server = MockServer::start().await;
        Mock::given(method("GET"))
            .and(path("/reverse"))
            .respond_with(ResponseTemplate::new(200).set_body_json(serde_json::json!({"error": "Unable to geocode"})))
            .mount(&server)
            .await;

        let err = client(&server).reverse("0", "0").await.unwrap_err();
        assert!(matches!(err, CalltoolsError::Decode(ref msg) if !msg.starts_with("reverse geocoding")));
    }
}
