//! Maintenance Provider - household issue resolution (sink repair and the like)

use super::{unhandled, Provider, ProviderKind};
use crate::dispatcher::request::{Operation, Request};
use crate::error::DispatchResult;
use async_trait::async_trait;

#[derive(Debug, Clone, Default)]
pub struct MaintenanceProvider;

impl MaintenanceProvider {
    pub fn new() -> Self {
        Self
    }

    pub fn resolve_issue(&self, issue: &str) -> String {
        format!(
            "Issue '{}' resolved by connecting with service provider.",
            issue
        )
    }
}

#[async_trait]
impl Provider for MaintenanceProvider {
    fn kind(&self) -> ProviderKind {
        ProviderKind::Maintenance
    }

    fn description(&self) -> &'static str {
        "Handles maintenance-related issue resolution like sink repair."
    }

    fn operations(&self) -> &'static [Operation] {
        &[Operation::ResolveIssue]
    }

    async fn handle(&self, request: Request) -> DispatchResult<String> {
        match request {
            Request::ResolveIssue { issue } => Ok(self.resolve_issue(&issue)),
            other => Err(unhandled(self.kind(), &other)),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_resolve_issue() {
        let provider = MaintenanceProvider::new();
        assert_eq!(
            provider.resolve_issue("Sink Repair"),
            "Issue 'Sink Repair' resolved by connecting with service provider."
        );
    }

    #[tokio::test]
    async fn test_handle_resolve_issue() {
        let provider = MaintenanceProvider::new();
        let result = provider
            .handle(Request::ResolveIssue {
                issue: "Leaky faucet".to_string(),
            })
            .await
            .unwrap();
        assert!(result.contains("'Leaky faucet'"));
    }
}
