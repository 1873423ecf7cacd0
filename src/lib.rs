//! calltools - model-callable tools for weather, geocoding and web search
//!
//! A fixed catalog of tool descriptors is published as JSON for a
//! function-calling model. The executor maps a chosen tool name and its
//! parameter bindings onto one HTTP call (two for the composed weather lookup).

pub mod config;
pub mod error;
pub mod events;
pub mod services;
pub mod tools;

pub use error::{CalltoolsError, Result};
