//! Calendar Provider
//!
//! Simulates consolidating and writing to connected calendar sources.

use super::{unhandled, Provider, ProviderKind};
use crate::dispatcher::request::{render_mapping, Operation, Request};
use crate::error::{DispatchError, DispatchResult};
use async_trait::async_trait;
use serde_json::{Map, Value};

pub const DEFAULT_SOURCES: [&str; 3] = ["Gmail", "Outlook", "iCloud"];

/// Calendar integration over a fixed set of sources
#[derive(Debug, Clone)]
pub struct CalendarProvider {
    sources: Vec<String>,
}

impl CalendarProvider {
    pub fn new(sources: Vec<String>) -> Self {
        Self { sources }
    }

    pub fn sources(&self) -> &[String] {
        &self.sources
    }

    /// One line per connected source
    pub fn sync_calendars(&self) -> String {
        self.sources
            .iter()
            .map(|source| format!("Events fetched from {}.", source))
            .collect::<Vec<_>>()
            .join("\n")
    }

    pub fn create_event(
        &self,
        source: &str,
        event_details: &Map<String, Value>,
    ) -> DispatchResult<String> {
        if !self.sources.iter().any(|s| s == source) {
            return Err(DispatchError::UnsupportedCalendarSource(source.to_string()));
        }

        Ok(format!(
            "Event created in {}: {}",
            source,
            render_mapping(event_details)
        ))
    }
}

impl Default for CalendarProvider {
    fn default() -> Self {
        Self::new(DEFAULT_SOURCES.iter().map(|s| s.to_string()).collect())
    }
}

#[async_trait]
impl Provider for CalendarProvider {
    fn kind(&self) -> ProviderKind {
        ProviderKind::Calendar
    }

    fn description(&self) -> &'static str {
        "Handles calendar integrations."
    }

    fn operations(&self) -> &'static [Operation] {
        &[Operation::SyncCalendars, Operation::CreateEvent]
    }

    async fn handle(&self, request: Request) -> DispatchResult<String> {
        match request {
            Request::SyncCalendars => Ok(self.sync_calendars()),
            Request::CreateEvent {
                source,
                event_details,
            } => self.create_event(&source, &event_details),
            other => Err(unhandled(self.kind(), &other)),
        }
    }
}
