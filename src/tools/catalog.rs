//! The fixed tool catalog
//!
//! Five tools are defined. Four are published to the model layer; CityToLatLon
//! is kept as an internal helper of WeatherFromLocation.

use serde::Serialize;

use crate::error::Result;

use super::definition::{ParamType, ParameterDescriptor, ToolDefinition, ToolDescriptor};

const LAT_LON_PARAMS: &[ParameterDescriptor] = &[
    ParameterDescriptor::required("latitude", "The latitude of the location", ParamType::Number),
    ParameterDescriptor::required("longitude", "The longitude of the location", ParamType::Number),
];

pub const CITY_TO_LAT_LON: ToolDescriptor = ToolDescriptor {
    name: "CityToLatLon",
    description: "Get the latitude and longitude for a given city",
    parameters: &[ParameterDescriptor::required(
        "city",
        "The city to get the latitude and longitude for",
        ParamType::String,
    )],
};

pub const WEATHER_FROM_LAT_LON: ToolDescriptor = ToolDescriptor {
    name: "WeatherFromLatLon",
    description: "Get the weather for a location",
    parameters: LAT_LON_PARAMS,
};

pub const LAT_LON_TO_CITY: ToolDescriptor = ToolDescriptor {
    name: "LatLonToCity",
    description: "Get the city name for a given latitude and longitude",
    parameters: LAT_LON_PARAMS,
};

pub const WEB_SEARCH: ToolDescriptor = ToolDescriptor {
    name: "WebSearch",
    description: "Search the web for a query",
    parameters: &[ParameterDescriptor::required(
        "query",
        "The query to search for",
        ParamType::String,
    )],
};

pub const WEATHER_FROM_LOCATION: ToolDescriptor = ToolDescriptor {
    name: "WeatherFromLocation",
    description: "Get the weather for a location",
    parameters: &[ParameterDescriptor::required(
        "location",
        "The location to get the weather for",
        ParamType::String,
    )],
};

/// Every defined tool, in declaration order
const DEFINED: &[ToolDescriptor] = &[
    CITY_TO_LAT_LON,
    WEATHER_FROM_LAT_LON,
    LAT_LON_TO_CITY,
    WEB_SEARCH,
    WEATHER_FROM_LOCATION,
];

/// The tools exposed to the model layer, in publication order
const PUBLISHED: &[ToolDescriptor] = &[WEATHER_FROM_LOCATION, WEATHER_FROM_LAT_LON, WEB_SEARCH, LAT_LON_TO_CITY];

#[derive(Serialize)]
struct CatalogDocument<'a> {
    tools: &'a [ToolDescriptor],
}

/// Read-only view over a set of tool descriptors
#[derive(Debug, Clone, Copy)]
pub struct ToolCatalog {
    tools: &'static [ToolDescriptor],
}

impl ToolCatalog {
    /// The catalog handed to the model layer
    pub fn published() -> Self {
        Self { tools: PUBLISHED }
    }

    /// Every defined tool, including internal helpers
    pub fn all() -> Self {
        Self { tools: DEFINED }
    }

    /// Find a tool by exact name
    pub fn get(&self, name: &str) -> Option<&'static ToolDescriptor> {
        self.tools.iter().find(|t| t.name == name)
    }

    /// Check if a tool exists
    pub fn has_tool(&self, name: &str) -> bool {
        self.get(name).is_some()
    }

    pub fn tools(&self) -> &'static [ToolDescriptor] {
        self.tools
    }

    pub fn tool_names(&self) -> Vec<&'static str> {
        self.tools.iter().map(|t| t.name).collect()
    }

    pub fn len(&self) -> usize {
        self.tools.len()
    }

    pub fn is_empty(&self) -> bool {
        self.tools.is_empty()
    }

    /// Render `{ "tools": [...] }`, pretty-printed with 2-space indentation
    pub fn to_json(&self) -> Result<String> {
        Ok(serde_json::to_string_pretty(&CatalogDocument { tools: self.tools })?)
    }

    /// Model-API definitions (name, description, input_schema)
    pub fn definitions(&self) -> Vec<ToolDefinition> {
        self.tools.iter().map(ToolDescriptor::to_definition).collect()
    }
}

impl Default for ToolCatalog {
    fn default() -> Self {
        Self::published()
    }
}
