//! Typed task requests
//!
//! Operation names resolve against a closed set of variants. Named arguments
//! are checked against the operation's declared parameters before a provider
//! ever sees them.

use crate::error::{DispatchError, DispatchResult};
use crate::providers::OperationMetadata;
use crate::{operation_metadata, required_object, required_string};
use serde_json::{Map, Value};
use std::fmt;
use std::str::FromStr;

/// Every operation any provider can perform
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum Operation {
    FetchLatestUpdates,
    PostUpdate,
    SyncCalendars,
    CreateEvent,
    ResolveIssue,
    CreateCampaign,
}

impl Operation {
    pub const ALL: [Operation; 6] = [
        Operation::FetchLatestUpdates,
        Operation::PostUpdate,
        Operation::SyncCalendars,
        Operation::CreateEvent,
        Operation::ResolveIssue,
        Operation::CreateCampaign,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            Operation::FetchLatestUpdates => "fetch_latest_updates",
            Operation::PostUpdate => "post_update",
            Operation::SyncCalendars => "sync_calendars",
            Operation::CreateEvent => "create_event",
            Operation::ResolveIssue => "resolve_issue",
            Operation::CreateCampaign => "create_campaign",
        }
    }

    /// Name, description and parameters of the operation
    pub fn metadata(&self) -> OperationMetadata {
        match self {
            Operation::FetchLatestUpdates => operation_metadata! {
                name: self.as_str(),
                description: "Fetch recent posts, mentions and messages from all connected platforms.",
                parameters: []
            },
            Operation::PostUpdate => operation_metadata! {
                name: self.as_str(),
                description: "Post an update to a specific platform.",
                parameters: [
                    {
                        name: "platform",
                        type: "string",
                        description: "Target platform, e.g. Twitter",
                        required: true
                    },
                    {
                        name: "content",
                        type: "string",
                        description: "Text of the update",
                        required: true
                    }
                ]
            },
            Operation::SyncCalendars => operation_metadata! {
                name: self.as_str(),
                description: "Consolidate calendars from all connected sources.",
                parameters: []
            },
            Operation::CreateEvent => operation_metadata! {
                name: self.as_str(),
                description: "Create a new event in a specific calendar.",
                parameters: [
                    {
                        name: "source",
                        type: "string",
                        description: "Calendar source, e.g. Gmail",
                        required: true
                    },
                    {
                        name: "event_details",
                        type: "object",
                        description: "Event fields such as title, date and time",
                        required: true
                    }
                ]
            },
            Operation::ResolveIssue => operation_metadata! {
                name: self.as_str(),
                description: "Resolve a maintenance issue by contacting a service provider.",
                parameters: [
                    {
                        name: "issue",
                        type: "string",
                        description: "Short description of the issue",
                        required: true
                    }
                ]
            },
            Operation::CreateCampaign => operation_metadata! {
                name: self.as_str(),
                description: "Schedule a marketing campaign.",
                parameters: [
                    {
                        name: "details",
                        type: "object",
                        description: "Campaign fields such as platform, budget and audience",
                        required: true
                    }
                ]
            },
        }
    }
}

impl fmt::Display for Operation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Operation {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Operation::ALL
            .into_iter()
            .find(|operation| operation.as_str() == s)
            .ok_or_else(|| format!("unknown operation '{}'", s))
    }
}

/// A fully parsed request, ready for a provider
#[derive(Debug, Clone, PartialEq)]
pub enum Request {
    FetchLatestUpdates,
    PostUpdate {
        platform: String,
        content: String,
    },
    SyncCalendars,
    CreateEvent {
        source: String,
        event_details: Map<String, Value>,
    },
    ResolveIssue {
        issue: String,
    },
    CreateCampaign {
        details: Map<String, Value>,
    },
}

impl Request {
    pub fn operation(&self) -> Operation {
        match self {
            Request::FetchLatestUpdates => Operation::FetchLatestUpdates,
            Request::PostUpdate { .. } => Operation::PostUpdate,
            Request::SyncCalendars => Operation::SyncCalendars,
            Request::CreateEvent { .. } => Operation::CreateEvent,
            Request::ResolveIssue { .. } => Operation::ResolveIssue,
            Request::CreateCampaign { .. } => Operation::CreateCampaign,
        }
    }

    /// Build a request from named arguments
    ///
    /// `Value::Null` is treated as "no arguments". Anything other than a JSON
    /// object, an unknown parameter name or a missing/ill-typed required
    /// parameter is rejected with `InvalidArguments`.
    pub fn from_args(operation: Operation, args: &Value) -> DispatchResult<Self> {
        let empty = Map::new();
        let args = match args {
            Value::Null => &empty,
            Value::Object(map) => map,
            _ => {
                return Err(DispatchError::invalid_arguments(
                    operation.as_str(),
                    "arguments must be a JSON object",
                ))
            }
        };

        let metadata = operation.metadata();
        if let Some(unexpected) = args
            .keys()
            .find(|key| !metadata.parameters.iter().any(|p| &p.name == *key))
        {
            return Err(DispatchError::invalid_arguments(
                operation.as_str(),
                format!("unexpected parameter '{}'", unexpected),
            ));
        }

        let request = match operation {
            Operation::FetchLatestUpdates => Request::FetchLatestUpdates,
            Operation::PostUpdate => Request::PostUpdate {
                platform: required_string!(args, operation, "platform"),
                content: required_string!(args, operation, "content"),
            },
            Operation::SyncCalendars => Request::SyncCalendars,
            Operation::CreateEvent => Request::CreateEvent {
                source: required_string!(args, operation, "source"),
                event_details: required_object!(args, operation, "event_details"),
            },
            Operation::ResolveIssue => Request::ResolveIssue {
                issue: required_string!(args, operation, "issue"),
            },
            Operation::CreateCampaign => Request::CreateCampaign {
                details: required_object!(args, operation, "details"),
            },
        };

        Ok(request)
    }
}

/// Render a mapping argument as compact JSON, keys in insertion order
pub fn render_mapping(map: &Map<String, Value>) -> String {
    Value::Object(map.clone()).to_string()
}
