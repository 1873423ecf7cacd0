//! Structured tool events and the sinks that receive them
//!
//! Handlers never print. They build a `ToolEvent` and hand it to whatever
//! `EventSink` the executor was constructed with.

use std::fmt;
use std::sync::Mutex;

use chrono::{DateTime, Utc};
use serde::Serialize;

/// What a tool produced; also the payload of its event
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum ToolOutput {
    /// Current temperature in degrees Celsius
    Temperature { celsius: f64 },
    /// Reverse-geocoded place name
    Place { display_name: String },
    /// First web search hit
    SearchHit { title: String, content: String },
    /// Composed weather lookup stopped because geocoding came back empty
    LocationUnavailable { location: String },
}

impl fmt::Display for ToolOutput {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Temperature { celsius } => write!(f, "{} degrees C", celsius),
            Self::Place { display_name } => write!(f, "{}", display_name),
            Self::SearchHit { title, content } => write!(f, "{}\n{}\n", title, content),
            Self::LocationUnavailable { .. } => {
                write!(f, "Could not fetch weather data because location data is unavailable.")
            }
        }
    }
}

/// A timestamped event emitted by one tool
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ToolEvent {
    pub tool: &'static str,
    #[serde(flatten)]
    pub output: ToolOutput,
    pub at: DateTime<Utc>,
}

impl ToolEvent {
    pub fn new(tool: &'static str, output: ToolOutput) -> Self {
        Self {
            tool,
            output,
            at: Utc::now(),
        }
    }

    /// Human-readable line for this event
    pub fn message(&self) -> String {
        self.output.to_string()
    }
}

/// Receiver for tool events
pub trait EventSink: Send + Sync {
    fn emit(&self, event: &ToolEvent);
}

/// Forwards events to the `log` facade
#[derive(Debug, Default, Clone, Copy)]
pub struct LogSink;

impl EventSink for LogSink {
    fn emit(&self, event: &ToolEvent) {
        log::info!("[{}] {}", event.tool, event.message());
    }
}

/// Keeps every event in memory
#[derive(Debug, Default)]
pub struct MemorySink {
    events: Mutex<Vec<ToolEvent>>,
}

impl MemorySink {
    pub fn new() -> Self {
        Self::default()
    }

    /// Snapshot of the events received so far
    pub fn events(&self) -> Vec<ToolEvent> {
        match self.events.lock() {
            Ok(events) => events.clone(),
            Err(poisoned) => poisoned.into_inner().clone(),
        }
    }

    pub fn messages(&self) -> Vec<String> {
        self.events().iter().map(ToolEvent::message).collect()
    }
}

impl EventSink for MemorySink {
    fn emit(&self, event: &ToolEvent) {
        match self.events.lock() {
            Ok(mut events) => events.push(event.clone()),
            Err(poisoned) => poisoned.into_inner().push(event.clone()),
        }
    }
}
