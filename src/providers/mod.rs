//! Capability Providers - simulated third-party integrations
//!
//! Information Hiding:
//! - Each provider hides its supported platforms/sources behind the trait
//! - Operation handling is a match over a closed request type
//! - Unsupported identifiers surface as typed errors, never panics

pub mod calendar;
pub mod macros;
pub mod maintenance;
pub mod marketing;
pub mod social_media;

use crate::dispatcher::request::{Operation, Request};
use crate::error::DispatchResult;
use async_trait::async_trait;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

pub use calendar::CalendarProvider;
pub use maintenance::MaintenanceProvider;
pub use marketing::MarketingProvider;
pub use social_media::SocialMediaProvider;

/// Identifier of a registered provider
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ProviderKind {
    SocialMedia,
    Calendar,
    Maintenance,
    Marketing,
}

impl ProviderKind {
    pub const ALL: [ProviderKind; 4] = [
        ProviderKind::SocialMedia,
        ProviderKind::Calendar,
        ProviderKind::Maintenance,
        ProviderKind::Marketing,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            ProviderKind::SocialMedia => "social_media",
            ProviderKind::Calendar => "calendar",
            ProviderKind::Maintenance => "maintenance",
            ProviderKind::Marketing => "marketing",
        }
    }
}

impl fmt::Display for ProviderKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for ProviderKind {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        ProviderKind::ALL
            .into_iter()
            .find(|kind| kind.as_str() == s)
            .ok_or_else(|| format!("unknown provider '{}'", s))
    }
}

/// Operation parameter schema definition
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct OperationParameter {
    pub name: String,
    pub param_type: String,
    pub description: String,
    pub required: bool,
}

/// Operation metadata - describes what an operation does and what it takes
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct OperationMetadata {
    pub name: String,
    pub description: String,
    pub parameters: Vec<OperationParameter>,
}

impl fmt::Display for OperationMetadata {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}: {}", self.name, self.description)
    }
}

/// Provider metadata - name, purpose and the operations it declares
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ProviderMetadata {
    pub kind: ProviderKind,
    pub description: String,
    pub operations: Vec<OperationMetadata>,
}

/// Provider trait - all simulated integrations implement this
///
/// The set of operations is declared statically; the dispatcher only hands
/// a provider requests whose operation appears in `operations()`.
#[async_trait]
pub trait Provider: Send + Sync {
    fn kind(&self) -> ProviderKind;

    fn description(&self) -> &'static str;

    /// Operations this provider implements
    fn operations(&self) -> &'static [Operation];

    fn supports(&self, operation: Operation) -> bool {
        self.operations().contains(&operation)
    }

    fn metadata(&self) -> ProviderMetadata {
        ProviderMetadata {
            kind: self.kind(),
            description: self.description().to_string(),
            operations: self.operations().iter().map(Operation::metadata).collect(),
        }
    }

    /// Run a request against this provider
    async fn handle(&self, request: Request) -> DispatchResult<String>;
}

/// Error for a request routed to a provider that does not declare it
pub(crate) fn unhandled(kind: ProviderKind, request: &Request) -> crate::error::DispatchError {
    crate::error::DispatchError::OperationNotFound {
        provider: kind.as_str().to_string(),
        operation: request.operation().as_str().to_string(),
    }
}
