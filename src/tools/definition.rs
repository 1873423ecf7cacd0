//! Tool and parameter descriptors
//!
//! Descriptors are compile-time constants; the catalog only ever borrows them.

use serde::Serialize;
use serde_json::{Map, Value};

/// Declared type of a tool parameter
///
/// Informational only: bound values are always passed through as strings.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum ParamType {
    String,
    Number,
}

impl ParamType {
    /// JSON-Schema type name
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::String => "string",
            Self::Number => "number",
        }
    }
}

/// A single declared parameter of a tool
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct ParameterDescriptor {
    pub name: &'static str,
    pub description: &'static str,
    #[serde(rename = "type")]
    pub param_type: ParamType,
    pub required: bool,
}

impl ParameterDescriptor {
    pub const fn required(name: &'static str, description: &'static str, param_type: ParamType) -> Self {
        Self {
            name,
            description,
            param_type,
            required: true,
        }
    }
}

/// A named, schema-described callable action
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct ToolDescriptor {
    pub name: &'static str,
    pub description: &'static str,
    pub parameters: &'static [ParameterDescriptor],
}

impl ToolDescriptor {
    /// Look up a declared parameter by name
    pub fn parameter(&self, name: &str) -> Option<&ParameterDescriptor> {
        self.parameters.iter().find(|p| p.name == name)
    }

    /// Names of parameters flagged as required, in declaration order
    pub fn required_parameters(&self) -> Vec<&'static str> {
        self.parameters.iter().filter(|p| p.required).map(|p| p.name).collect()
    }

    /// JSON Schema for the tool's input, as model APIs expect it
    ///
    /// `properties` follows declaration order (serde_json `preserve_order`).
    pub fn input_schema(&self) -> Value {
        let mut properties = Map::new();
        for param in self.parameters {
            properties.insert(
                param.name.to_string(),
                serde_json::json!({
                    "type": param.param_type.as_str(),
                    "description": param.description,
                }),
            );
        }

        serde_json::json!({
            "type": "object",
            "properties": properties,
            "required": self.required_parameters(),
        })
    }

    /// Convert to a model-API tool definition
    pub fn to_definition(&self) -> ToolDefinition {
        ToolDefinition {
            name: self.name.to_string(),
            description: self.description.to_string(),
            input_schema: self.input_schema(),
        }
    }
}

/// Tool definition for model APIs (Anthropic-style `input_schema`)
#[derive(Debug, Clone, Serialize)]
pub struct ToolDefinition {
    pub name: String,
    pub description: String,
    pub input_schema: Value,
}
