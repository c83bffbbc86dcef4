//! Provider Registry
//!
//! Information Hiding:
//! - Provider storage and lookup implementation hidden
//! - Name parsing into `ProviderKind` kept internal
//! - Registration happens before the dispatcher is built, never after

use crate::config::Settings;
use crate::providers::{
    CalendarProvider, MaintenanceProvider, MarketingProvider, Provider, ProviderKind,
    ProviderMetadata, SocialMediaProvider,
};
use std::collections::BTreeMap;
use std::sync::Arc;

/// Registry of available providers, keyed by kind
pub struct ProviderRegistry {
    providers: BTreeMap<ProviderKind, Arc<dyn Provider>>,
}

impl ProviderRegistry {
    pub fn new() -> Self {
        Self {
            providers: BTreeMap::new(),
        }
    }

    /// Register a provider, replacing any previous one of the same kind
    pub fn register(&mut self, provider: Arc<dyn Provider>) {
        let kind = provider.kind();
        tracing::info!("Registering provider: {}", kind);
        self.providers.insert(kind, provider);
    }

    /// Get a provider by its registered name
    pub fn get(&self, name: &str) -> Option<Arc<dyn Provider>> {
        let kind = name.parse::<ProviderKind>().ok()?;
        self.providers.get(&kind).cloned()
    }

    pub fn has_provider(&self, name: &str) -> bool {
        self.get(name).is_some()
    }

    pub fn provider_names(&self) -> Vec<String> {
        self.providers.keys().map(|kind| kind.to_string()).collect()
    }

    pub fn list_providers(&self) -> Vec<ProviderMetadata> {
        self.providers.values().map(|provider| provider.metadata()).collect()
    }

    pub fn len(&self) -> usize {
        self.providers.len()
    }

    pub fn is_empty(&self) -> bool {
        self.providers.is_empty()
    }

    /// Human-readable catalogue of providers and their operations
    pub fn providers_description(&self) -> String {
        let mut descriptions = Vec::new();
        for metadata in self.list_providers() {
            let operations = metadata
                .operations
                .iter()
                .map(|op| {
                    let params = if op.parameters.is_empty() {
                        "    (no parameters)".to_string()
                    } else {
                        op.parameters
                            .iter()
                            .map(|p| {
                                let required = if p.required { "required" } else { "optional" };
                                format!(
                                    "    - {} ({}): {} [{}]",
                                    p.name, p.param_type, p.description, required
                                )
                            })
                            .collect::<Vec<_>>()
                            .join("\n")
                    };
                    format!("  Task: {}\n", op) + &params
                })
                .collect::<Vec<_>>()
                .join("\n");

            descriptions.push(format!(
                "Agent: {}\nDescription: {}\nTasks:\n{}",
                metadata.kind, metadata.description, operations
            ));
        }
        descriptions.join("\n\n")
    }

    /// One instance of every provider, configured from settings
    pub fn from_settings(settings: &Settings) -> Self {
        let mut registry = Self::new();

        registry.register(Arc::new(SocialMediaProvider::new(
            settings.social_media.platforms.clone(),
        )));
        registry.register(Arc::new(CalendarProvider::new(
            settings.calendar.sources.clone(),
        )));
        registry.register(Arc::new(MaintenanceProvider::new()));
        registry.register(Arc::new(MarketingProvider::new()));

        registry
    }

    /// One instance of every provider with built-in configuration
    pub fn with_defaults() -> Self {
        Self::from_settings(&Settings::default())
    }
}

impl Default for ProviderRegistry {
    fn default() -> Self {
        Self::new()
    }
}
