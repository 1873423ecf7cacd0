//! Parameter bindings and lookup
//!
//! Bound values are always strings. Nothing is coerced or checked against the
//! declared parameter types.

use serde::{Deserialize, Serialize};
use serde_json::Value;

use crate::error::{CalltoolsError, Result};

/// A name/value pair supplied at invocation time
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ParameterBinding {
    pub parameter_name: String,
    pub parameter_value: String,
}

impl ParameterBinding {
    pub fn new(name: impl Into<String>, value: impl Into<String>) -> Self {
        Self {
            parameter_name: name.into(),
            parameter_value: value.into(),
        }
    }

    /// Parse `name=value`; the value may itself contain `=`
    pub fn parse(pair: &str) -> Option<Self> {
        let (name, value) = pair.split_once('=')?;
        if name.is_empty() {
            return None;
        }
        Some(Self::new(name, value))
    }
}

/// Value of the first binding named `name`
pub fn lookup<'a>(name: &str, bindings: &'a [ParameterBinding]) -> Result<&'a str> {
    bindings
        .iter()
        .find(|b| b.parameter_name == name)
        .map(|b| b.parameter_value.as_str())
        .ok_or_else(|| CalltoolsError::MissingParameter(name.to_string()))
}

/// A tool call as emitted by a model: the input is a JSON object
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ToolCall {
    pub id: String,
    pub name: String,
    pub input: Value,
}

impl ToolCall {
    pub fn new(id: impl Into<String>, name: impl Into<String>, input: Value) -> Self {
        Self {
            id: id.into(),
            name: name.into(),
            input,
        }
    }

    pub fn bindings(&self) -> Vec<ParameterBinding> {
        bindings_from_input(&self.input)
    }
}

/// Flatten a JSON input object into bindings
///
/// Strings pass through untouched, numbers and booleans use their JSON text.
/// Nulls, arrays and nested objects are skipped.
pub fn bindings_from_input(input: &Value) -> Vec<ParameterBinding> {
    let Some(fields) = input.as_object() else {
        return Vec::new();
    };

    fields
        .iter()
        .filter_map(|(name, value)| {
            let text = match value {
                Value::String(s) => s.clone(),
                Value::Number(n) => n.to_string(),
                Value::Bool(b) => b.to_string(),
                _ => return None,
            };
            Some(ParameterBinding::new(name, text))
        })
        .collect()
}
