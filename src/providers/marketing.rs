//! Marketing Provider - schedules posts and ad campaigns

use super::{unhandled, Provider, ProviderKind};
use crate::dispatcher::request::{render_mapping, Operation, Request};
use crate::error::DispatchResult;
use async_trait::async_trait;
use serde_json::{Map, Value};

#[derive(Debug, Clone, Default)]
pub struct MarketingProvider;

impl MarketingProvider {
    pub fn new() -> Self {
        Self
    }

    pub fn create_campaign(&self, details: &Map<String, Value>) -> String {
        format!("Scheduled marketing campaign: {}.", render_mapping(details))
    }
}

#[async_trait]
impl Provider for MarketingProvider {
    fn kind(&self) -> ProviderKind {
        ProviderKind::Marketing
    }

    fn description(&self) -> &'static str {
        "Handles marketing-related tasks like scheduling posts or ads."
    }

    fn operations(&self) -> &'static [Operation] {
        &[Operation::CreateCampaign]
    }

    async fn handle(&self, request: Request) -> DispatchResult<String> {
        match request {
            Request::CreateCampaign { details } => Ok(self.create_campaign(&details)),
            other => Err(unhandled(self.kind(), &other)),
        }
    }
}
