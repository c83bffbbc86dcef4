//! Social Media Provider
//!
//! Simulates fetching activity from and posting to connected platforms.

use super::{unhandled, Provider, ProviderKind};
use crate::dispatcher::request::{Operation, Request};
use crate::error::{DispatchError, DispatchResult};
use async_trait::async_trait;

pub const DEFAULT_PLATFORMS: [&str; 3] = ["Facebook", "Twitter", "Instagram"];

/// Social media integration over a fixed set of platforms
#[derive(Debug, Clone)]
pub struct SocialMediaProvider {
    platforms: Vec<String>,
}

impl SocialMediaProvider {
    pub fn new(platforms: Vec<String>) -> Self {
        Self { platforms }
    }

    pub fn platforms(&self) -> &[String] {
        &self.platforms
    }

    fn is_supported(&self, platform: &str) -> bool {
        self.platforms.iter().any(|p| p == platform)
    }

    /// One line per connected platform
    pub fn fetch_latest_updates(&self) -> String {
        self.platforms
            .iter()
            .map(|platform| format!("Fetched updates from {}.", platform))
            .collect::<Vec<_>>()
            .join("\n")
    }

    pub fn post_update(&self, platform: &str, content: &str) -> DispatchResult<String> {
        if !self.is_supported(platform) {
            return Err(DispatchError::UnsupportedPlatform(platform.to_string()));
        }

        tracing::debug!("Posting {} bytes to {}", content.len(), platform);
        Ok(format!("Posted to {}: {}", platform, content))
    }
}

impl Default for SocialMediaProvider {
    fn default() -> Self {
        Self::new(DEFAULT_PLATFORMS.iter().map(|p| p.to_string()).collect())
    }
}

#[async_trait]
impl Provider for SocialMediaProvider {
    fn kind(&self) -> ProviderKind {
        ProviderKind::SocialMedia
    }

    fn description(&self) -> &'static str {
        "Handles integration with social media platforms."
    }

    fn operations(&self) -> &'static [Operation] {
        &[Operation::FetchLatestUpdates, Operation::PostUpdate]
    }

    async fn handle(&self, request: Request) -> DispatchResult<String> {
        match request {
            Request::FetchLatestUpdates => Ok(self.fetch_latest_updates()),
            Request::PostUpdate { platform, content } => self.post_update(&platform, &content),
            other => Err(unhandled(self.kind(), &other)),
        }
    }
}
