//! Tool System - descriptors, the published catalog, parameter bindings and dispatch

mod catalog;
mod definition;
mod executor;
mod params;

pub use catalog::{
    CITY_TO_LAT_LON, LAT_LON_TO_CITY, ToolCatalog, WEATHER_FROM_LAT_LON, WEATHER_FROM_LOCATION, WEB_SEARCH,
};
pub use definition::{ParamType, ParameterDescriptor, ToolDefinition, ToolDescriptor};
pub use executor::{ToolExecutor, ToolName};
pub use params::{ParameterBinding, ToolCall, bindings_from_input, lookup};
