//! Terminal event sink

use colored::*;

use calltools::events::{EventSink, ToolEvent, ToolOutput};

/// Prints tool events to stdout
pub struct ConsoleSink {
    pub verbose: bool,
}

impl EventSink for ConsoleSink {
    fn emit(&self, event: &ToolEvent) {
        if self.verbose {
            println!("{} {}", format!("[{}]", event.tool).dimmed(), event.at.to_rfc3339().dimmed());
        }
        match &event.output {
            ToolOutput::LocationUnavailable { .. } => println!("{}", event.message().yellow()),
            _ => println!("{}", event.message()),
        }
    }
}
