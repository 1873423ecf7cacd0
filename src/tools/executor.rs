//! Tool executor - name-to-handler dispatch over the published tools

use std::fmt;
use std::sync::Arc;

use log::{debug, info, warn};

use super::catalog::{CITY_TO_LAT_LON, LAT_LON_TO_CITY, WEATHER_FROM_LAT_LON, WEATHER_FROM_LOCATION, WEB_SEARCH};
use super::params::{ParameterBinding, ToolCall, lookup};
use crate::config::Config;
use crate::error::{CalltoolsError, Result};
use crate::events::{EventSink, LogSink, ToolEvent, ToolOutput};
use crate::services::{Coordinates, GeocodingClient, SearchClient, WeatherClient, build_http_client};

/// The closed set of dispatchable tools
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ToolName {
    WeatherFromLocation,
    WeatherFromLatLon,
    WebSearch,
    LatLonToCity,
}

impl ToolName {
    pub const ALL: [ToolName; 4] = [
        Self::WeatherFromLocation,
        Self::WeatherFromLatLon,
        Self::WebSearch,
        Self::LatLonToCity,
    ];

    /// Exact, case-sensitive match
    pub fn parse(name: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|tool| tool.as_str() == name)
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            Self::WeatherFromLocation => WEATHER_FROM_LOCATION.name,
            Self::WeatherFromLatLon => WEATHER_FROM_LAT_LON.name,
            Self::WebSearch => WEB_SEARCH.name,
            Self::LatLonToCity => LAT_LON_TO_CITY.name,
        }
    }
}

impl fmt::Display for ToolName {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Runs tools against the upstream services
pub struct ToolExecutor {
    geocoder: GeocodingClient,
    weather: WeatherClient,
    search: SearchClient,
    sink: Arc<dyn EventSink>,
}

impl ToolExecutor {
    /// Executor reporting through the `log` facade
    pub fn new(config: &Config) -> Result<Self> {
        let http = build_http_client(&config.http)?;
        Ok(Self {
            geocoder: GeocodingClient::new(http.clone(), config.endpoints.geocoding.clone()),
            weather: WeatherClient::new(http.clone(), config.endpoints.weather.clone()),
            search: SearchClient::new(http, config.endpoints.search.clone()),
            sink: Arc::new(LogSink),
        })
    }

    /// Replace the event sink
    pub fn with_sink(mut self, sink: Arc<dyn EventSink>) -> Self {
        self.sink = sink;
        self
    }

    /// Execute a tool by name with flat parameter bindings
    pub async fn execute(&self, name: &str, bindings: &[ParameterBinding]) -> Result<ToolOutput> {
        let Some(tool) = ToolName::parse(name) else {
            warn!("Unknown tool requested: {}", name);
            return Err(CalltoolsError::UnknownTool(name.to_string()));
        };
        debug!("Executing {} with {} binding(s)", tool, bindings.len());

        match tool {
            ToolName::WeatherFromLocation => {
                let location = lookup("location", bindings)?;
                self.weather_from_location(location).await
            }
            ToolName::WeatherFromLatLon => {
                let latitude = lookup("latitude", bindings)?;
                let longitude = lookup("longitude", bindings)?;
                self.weather_from_lat_lon(latitude, longitude).await
            }
            ToolName::WebSearch => {
                let query = lookup("query", bindings)?;
                self.web_search(query).await
            }
            ToolName::LatLonToCity => {
                let latitude = lookup("latitude", bindings)?;
                let longitude = lookup("longitude", bindings)?;
                self.lat_lon_to_city(latitude, longitude).await
            }
        }
    }

    /// Execute a model-style call whose input is a JSON object
    pub async fn execute_call(&self, call: &ToolCall) -> Result<ToolOutput> {
        debug!("Tool call {} -> {}", call.id, call.name);
        self.execute(&call.name, &call.bindings()).await
    }

    /// Geocode a city; `None` on a miss or any failure
    pub async fn city_to_lat_lon(&self, city: &str) -> Option<Coordinates> {
        debug!("{}: {:?}", CITY_TO_LAT_LON.name, city);
        self.geocoder.city_to_lat_lon(city).await
    }

    pub async fn lat_lon_to_city(&self, latitude: &str, longitude: &str) -> Result<ToolOutput> {
        let display_name = self.geocoder.reverse(latitude, longitude).await?;
        Ok(self.emit(ToolName::LatLonToCity, ToolOutput::Place { display_name }))
    }

    pub async fn weather_from_lat_lon(&self, latitude: &str, longitude: &str) -> Result<ToolOutput> {
        let celsius = self.weather.current_temperature(latitude, longitude).await?;
        Ok(self.emit(ToolName::WeatherFromLatLon, ToolOutput::Temperature { celsius }))
    }

    /// Geocode, then fetch the weather; stops after geocoding when it yields nothing
    pub async fn weather_from_location(&self, location: &str) -> Result<ToolOutput> {
        match self.city_to_lat_lon(location).await {
            Some(Coordinates { latitude, longitude }) => {
                info!("{} resolved to {}, {}", location, latitude, longitude);
                let celsius = self.weather.current_temperature(&latitude, &longitude).await?;
                Ok(self.emit(ToolName::WeatherFromLocation, ToolOutput::Temperature { celsius }))
            }
            None => Ok(self.emit(
                ToolName::WeatherFromLocation,
                ToolOutput::LocationUnavailable {
                    location: location.to_string(),
                },
            )),
        }
    }

    pub async fn web_search(&self, query: &str) -> Result<ToolOutput> {
        let hit = self.search.first_result(query).await?;
        Ok(self.emit(
            ToolName::WebSearch,
            ToolOutput::SearchHit {
                title: hit.title,
                content: hit.content,
            },
        ))
    }

    fn emit(&self, tool: ToolName, output: ToolOutput) -> ToolOutput {
        self.sink.emit(&ToolEvent::new(tool.as_str(), output.clone()));
        output
    }
}
