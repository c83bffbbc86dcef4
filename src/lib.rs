//! Agenthub - unified dispatcher for simulated service agents
//!
//! A handful of mock providers (social media, calendar, maintenance,
//! marketing) sit behind a single dispatcher that resolves a provider and
//! an operation by name and runs it.

pub mod config;
pub mod dispatcher;
pub mod error;
pub mod providers;
pub mod utils;

pub mod api;
pub mod cli;

pub use api::*;
pub use config::Settings;

pub use dispatcher::registry::ProviderRegistry;
pub use dispatcher::request::{Operation, Request};
pub use dispatcher::{TaskDispatcher, TaskRequest};
pub use error::{DispatchError, DispatchResult};
pub use providers::{Provider, ProviderKind};
