//! Task Dispatcher
//!
//! Resolves a (provider, operation) pair by name and runs it. Resolution
//! goes provider first, then operation, then arguments; the first failure
//! is returned as a `DispatchError`.

pub mod registry;
pub mod request;

use crate::config::Settings;
use crate::error::{DispatchError, DispatchResult};
use futures::stream::{self, StreamExt};
use registry::ProviderRegistry;
use request::{Operation, Request};
use serde::{Deserialize, Serialize};
use serde_json::Value;

/// One unit of work for the dispatcher
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TaskRequest {
    pub provider: String,
    pub operation: String,
    #[serde(default)]
    pub arguments: Value,
}

impl TaskRequest {
    pub fn new(provider: impl Into<String>, operation: impl Into<String>, arguments: Value) -> Self {
        Self {
            provider: provider.into(),
            operation: operation.into(),
            arguments,
        }
    }
}

/// Routes task requests to registered providers
pub struct TaskDispatcher {
    registry: ProviderRegistry,
}

impl TaskDispatcher {
    pub fn new(registry: ProviderRegistry) -> Self {
        Self { registry }
    }

    pub fn from_settings(settings: &Settings) -> Self {
        Self::new(ProviderRegistry::from_settings(settings))
    }

    pub fn registry(&self) -> &ProviderRegistry {
        &self.registry
    }

    /// Resolve and run one task
    pub async fn execute(
        &self,
        provider_name: &str,
        operation_name: &str,
        arguments: Value,
    ) -> DispatchResult<String> {
        tracing::debug!("Dispatching {}::{}", provider_name, operation_name);

        let result = self.resolve_and_run(provider_name, operation_name, &arguments).await;
        if let Err(ref e) = result {
            tracing::warn!(
                code = e.code(),
                "Task {}::{} rejected: {}",
                provider_name,
                operation_name,
                e
            );
        }
        result
    }

    async fn resolve_and_run(
        &self,
        provider_name: &str,
        operation_name: &str,
        arguments: &Value,
    ) -> DispatchResult<String> {
        let provider = self
            .registry
            .get(provider_name)
            .ok_or_else(|| DispatchError::ProviderNotFound(provider_name.to_string()))?;

        let operation = operation_name
            .parse::<Operation>()
            .ok()
            .filter(|op| provider.supports(*op))
            .ok_or_else(|| DispatchError::OperationNotFound {
                provider: provider_name.to_string(),
                operation: operation_name.to_string(),
            })?;

        let request = Request::from_args(operation, arguments)?;
        provider.handle(request).await
    }

    /// Run a task and fold any failure into its message
    pub async fn execute_task(
        &self,
        provider_name: &str,
        operation_name: &str,
        arguments: Value,
    ) -> String {
        match self.execute(provider_name, operation_name, arguments).await {
            Ok(output) => output,
            Err(e) => e.to_string(),
        }
    }

    /// Run several tasks with bounded concurrency; results keep request order
    pub async fn execute_batch(
        &self,
        requests: Vec<TaskRequest>,
        concurrency: usize,
    ) -> Vec<DispatchResult<String>> {
        stream::iter(requests)
            .map(|task| async move {
                self.execute(&task.provider, &task.operation, task.arguments)
                    .await
            })
            .buffered(concurrency.max(1))
            .collect()
            .await
    }
}

impl Default for TaskDispatcher {
    fn default() -> Self {
        Self::new(ProviderRegistry::with_defaults())
    }
}
